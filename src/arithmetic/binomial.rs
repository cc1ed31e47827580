//! Central binomial coefficients `C(2k, k) = (2k)! / (k!)²`.
//!
//! Built incrementally from `C(2k, k) = C(2k - 2, k - 1) * 2(2k - 1) / k`,
//! with the division applied before the multiplication so no intermediate
//! exceeds the result. Exact in `u128` up to `k = 65`.

use super::errors::ArithmeticError;

/// Largest `k` whose central binomial fits in a `u128`.
pub const MAX_CENTRAL_BINOMIAL_ARG: u32 = 65;

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `C(2k, k)` given `prev = C(2k - 2, k - 1)`, for `k >= 1`.
///
/// # Errors
/// - [`ArithmeticError::Overflow`] if the result exceeds `u128`.
pub fn next_central_binomial(prev: u128, k: u32) -> Result<u128, ArithmeticError> {
    let overflow = ArithmeticError::Overflow { operation: "central_binomial", n: k };
    let k_wide = u128::from(k.max(1));

    // prev * 2(2k - 1) is divisible by k; split k between the two factors
    let g      = gcd(prev, k_wide);
    let factor = 2 * (2 * k_wide - 1) / (k_wide / g);
    (prev / g).checked_mul(factor).ok_or(overflow)
}

/// Returns `C(2k, k)`.
///
/// # Errors
/// - [`ArithmeticError::Overflow`] if `k > 65`.
pub fn central_binomial(k: u32) -> Result<u128, ArithmeticError> {
    (1..=k).try_fold(1_u128, next_central_binomial)
}
