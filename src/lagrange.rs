//! Lagrange interpolation at x = 0 over a prime field.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::field;
use crate::share::Share;
use crate::ShamirError;

/// Reconstruct the secret f(0) from shares (x_i, y_i) of a polynomial f.
///
/// # Formula
/// For pairwise-distinct x-coordinates x_1..x_k, the basis weight at x_i is
/// ```text
/// L_i(0) = ∏_{j ≠ i} (0 - x_j) / (x_i - x_j)  (mod P)
///        = ∏_{j ≠ i} (-x_j) * (x_i - x_j)^{-1}
/// ```
/// and f(0) = ∑_i y_i · L_i(0). Any k points of a degree-(k-1) polynomial
/// give the same f(0), in any order.
///
/// Every share in `shares` participates; selecting which k shares to use is
/// the caller's job. Two x-coordinates that coincide modulo the prime are
/// rejected as [`ShamirError::DuplicateShareIndex`] before any division, so
/// a [`ShamirError::NoInverse`] from this function can only mean the modulus
/// is composite.
pub fn interpolate_at_zero(shares: &[Share], modulus: &BigInt) -> Result<BigInt, ShamirError> {
    if !modulus.is_positive() {
        return Err(ShamirError::InvalidModulus {
            modulus: modulus.clone(),
        });
    }
    if shares.is_empty() {
        return Err(ShamirError::EmptyShareSet);
    }

    let mut secret = BigInt::zero();
    for (i, share) in shares.iter().enumerate() {
        let x_i = BigInt::from(share.index);
        // numerator = ∏_{j != i} (-x_j)
        let mut num = BigInt::one();
        // denominator = ∏_{j != i} (x_i - x_j)
        let mut den = BigInt::one();
        for (j, other) in shares.iter().enumerate() {
            if i == j {
                continue;
            }
            let x_j = BigInt::from(other.index);
            // -x_j mod P
            num = field::mulmod(&num, &(-&x_j), modulus);
            // (x_i - x_j) mod P
            let diff = field::reduce(&(&x_i - &x_j), modulus);
            if diff.is_zero() {
                return Err(ShamirError::DuplicateShareIndex { index: other.index });
            }
            den = field::mulmod(&den, &diff, modulus);
        }
        // L_i(0) = num * den^{-1}
        let basis = field::mulmod(&num, &field::inverse(&den, modulus)?, modulus);
        secret = field::reduce(
            &(secret + field::mulmod(&share.value, &basis, modulus)),
            modulus,
        );
    }
    Ok(secret)
}
