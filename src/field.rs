use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Euclid, One, Zero};

use crate::ShamirError;

// Default field modulus for the share file format: P = 2^256 - 351*2^32 + 1
pub const DEFAULT_PRIME_HEX: &str =
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEA100000001";

/// The default 256-bit prime as a `BigInt`.
pub fn default_prime() -> BigInt {
    BigInt::parse_bytes(DEFAULT_PRIME_HEX.as_bytes(), 16).unwrap()
}

/// Reduce `a` into the canonical range `[0, modulus)`.
///
/// Floor division makes this correct for negative inputs:
/// `reduce(-2, 7) == 5`. The modulus must be positive.
pub fn reduce(a: &BigInt, modulus: &BigInt) -> BigInt {
    a.mod_floor(modulus)
}

/// Modular product `a * b`, reduced into `[0, modulus)`.
pub fn mulmod(a: &BigInt, b: &BigInt, modulus: &BigInt) -> BigInt {
    reduce(&(a * b), modulus)
}

/// Multiplicative inverse of `a` modulo `modulus` via the extended
/// Euclidean algorithm.
///
/// Fails with [`ShamirError::NoInverse`] when `gcd(a, modulus) != 1`;
/// in particular `a ≡ 0` is never invertible.
pub fn inverse(a: &BigInt, modulus: &BigInt) -> Result<BigInt, ShamirError> {
    let (g, x, _) = extended_gcd(reduce(a, modulus), modulus.clone());
    if !g.is_one() {
        return Err(ShamirError::NoInverse {
            value: a.clone(),
            modulus: modulus.clone(),
        });
    }
    // The Bezout coefficient may be negative; bring it back into [0, modulus)
    Ok(reduce(&x, modulus))
}

/// Extended GCD: returns (gcd, x, y) such that ax + by = gcd
fn extended_gcd(mut a: BigInt, mut b: BigInt) -> (BigInt, BigInt, BigInt) {
    let mut x0 = BigInt::one();
    let mut x1 = BigInt::zero();
    let mut y0 = BigInt::zero();
    let mut y1 = BigInt::one();

    while !b.is_zero() {
        let (quotient, remainder) = a.div_rem_euclid(&b);
        a = b;
        b = remainder;

        let temp_x = x0 - &quotient * &x1;
        x0 = x1;
        x1 = temp_x;

        let temp_y = y0 - &quotient * &y1;
        y0 = y1;
        y1 = temp_y;
    }

    (a, x0, y0)
}
