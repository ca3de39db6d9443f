//! Reconstruction drivers: threshold checks plus interpolation.

use num_bigint::BigInt;

use crate::lagrange::interpolate_at_zero;
use crate::share::{Share, ShareFile};
use crate::ShamirError;

/// Reconstruct the secret from at least `threshold` shares.
///
/// Exactly the first `threshold` shares are interpolated; any surplus is
/// ignored, not cross-checked. Shares must already be in the order the
/// caller wants consulted (file decoding yields ascending index order).
pub fn recover_secret(
    shares: &[Share],
    threshold: usize,
    modulus: &BigInt,
) -> Result<BigInt, ShamirError> {
    if threshold == 0 {
        return Err(ShamirError::InvalidThreshold);
    }
    if shares.len() < threshold {
        return Err(ShamirError::InsufficientShares {
            needed: threshold,
            provided: shares.len(),
        });
    }
    interpolate_at_zero(&shares[..threshold], modulus)
}

/// Decode a parsed share file and reconstruct with its own threshold `k`.
pub fn recover_from_file(file: &ShareFile, modulus: &BigInt) -> Result<BigInt, ShamirError> {
    let shares = file.decode_shares()?;
    recover_secret(&shares, file.keys.k, modulus)
}
