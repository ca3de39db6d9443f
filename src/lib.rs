//! Reconstruction half of Shamir's Secret Sharing over a prime field.
//!
//! A secret split k-of-n lives as the constant term of a degree-(k-1)
//! polynomial f over GF(P); each share is a point (x, f(x)). Any k shares
//! determine f(0) by Lagrange interpolation at x = 0, all arithmetic done
//! modulo the prime P. This crate covers the recovery side only: decoding
//! base-encoded shares, modular field arithmetic, interpolation, and a small
//! CLI that reads the JSON share files produced at split time.
//!
//! # Example
//!
//! ```
//! use num_bigint::BigInt;
//! use shamir_recover::{field, recover_secret, Share};
//!
//! // Three shares of a 3-of-4 split: points on f(x) = x^2 + 3.
//! let shares = vec![
//!     Share::new(1, BigInt::from(4)),
//!     Share::new(2, BigInt::from(7)),
//!     Share::new(3, BigInt::from(12)),
//! ];
//! let secret = recover_secret(&shares, 3, &field::default_prime()).unwrap();
//! assert_eq!(secret, BigInt::from(3));
//! ```

pub mod field;
pub mod lagrange;
pub mod recover;
pub mod share;

// Re-exports
pub use recover::{recover_from_file, recover_secret};
pub use share::{EncodedShare, Keys, Share, ShareFile};

use num_bigint::BigInt;
use thiserror::Error;

/// Errors that can occur while decoding shares or reconstructing a secret
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShamirError {
    #[error("no modular inverse of {value} (mod {modulus})")]
    NoInverse { value: BigInt, modulus: BigInt },

    /// Two share x-coordinates coincide modulo the prime, so a denominator
    /// factor is zero and the share set is degenerate.
    #[error("duplicate share index {index}")]
    DuplicateShareIndex { index: u64 },

    #[error("not enough shares to reconstruct secret (need {needed}, got {provided})")]
    InsufficientShares { needed: usize, provided: usize },

    #[error("threshold must be at least 1")]
    InvalidThreshold,

    #[error("modulus {modulus} must be positive")]
    InvalidModulus { modulus: BigInt },

    #[error("cannot interpolate an empty set of shares")]
    EmptyShareSet,

    #[error("share {index}: base {base} is out of range (expected 2..=36)")]
    InvalidBase { index: u64, base: u32 },

    #[error("share {index}: {digits:?} is not a valid base-{base} number")]
    InvalidDigits { index: u64, base: u32, digits: String },

    #[error("share key {0:?} is not an integer index")]
    InvalidShareIndex(String),
}
