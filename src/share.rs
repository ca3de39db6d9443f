//! Shares, base decoding, and the JSON share-file model.
//!
//! A share file carries a `keys` header plus one entry per share, keyed by
//! the decimal share index, each entry a base/value string pair:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```

use std::collections::BTreeMap;

use num_bigint::BigInt;
use num_traits::Num;
use serde::Deserialize;

use crate::ShamirError;

/// A decoded share: the point (index, f(index)) on the secret polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    /// The x-coordinate of the polynomial point (share index)
    pub index: u64,
    /// The y-coordinate of the polynomial point (share value)
    pub value: BigInt,
}

impl Share {
    pub fn new(index: u64, value: BigInt) -> Self {
        Share { index, value }
    }

    /// Decode a share value written as digits in an arbitrary base 2..=36.
    ///
    /// Surrounding whitespace and a leading sign are tolerated; a digit
    /// outside the base is an error, never silently dropped.
    pub fn decode(index: u64, base: u32, digits: &str) -> Result<Share, ShamirError> {
        if !(2..=36).contains(&base) {
            return Err(ShamirError::InvalidBase { index, base });
        }
        let value =
            BigInt::from_str_radix(digits.trim(), base).map_err(|_| ShamirError::InvalidDigits {
                index,
                base,
                digits: digits.to_string(),
            })?;
        Ok(Share { index, value })
    }
}

/// One undecoded share-file entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EncodedShare {
    pub base: String,
    pub value: String,
}

/// The `keys` header: total shares issued and the reconstruction threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

/// A parsed share file: header plus every share entry.
///
/// Share-map keys stay strings at this stage; the JSON format spells
/// indices as object keys, which serde can only flatten as strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShareFile {
    pub keys: Keys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, EncodedShare>,
}

impl ShareFile {
    /// Decode every entry, ordered by ascending share index.
    pub fn decode_shares(&self) -> Result<Vec<Share>, ShamirError> {
        let mut decoded = Vec::with_capacity(self.shares.len());
        for (key, entry) in &self.shares {
            let index: u64 = key
                .parse()
                .map_err(|_| ShamirError::InvalidShareIndex(key.clone()))?;
            // 0 is never a legal base, so it marks an unparseable base string
            let base: u32 = entry
                .base
                .trim()
                .parse()
                .map_err(|_| ShamirError::InvalidBase { index, base: 0 })?;
            decoded.push(Share::decode(index, base, &entry.value)?);
        }
        // BTreeMap iterates keys lexicographically ("10" before "2");
        // reconstruction wants numeric order
        decoded.sort_by_key(|share| share.index);
        Ok(decoded)
    }
}
