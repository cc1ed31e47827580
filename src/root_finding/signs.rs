//! Sign and equality utilities for root-finding algorithms.
//! - `strictly_opposite` : `true` if the values have opposite, non-zero signs
//! - [`FloatEquality`]   : comparison mode for the solvers' equality checks

use crate::errors::DomainError;

/// Returns `true` if `x * y < 0`, without forming the product.
///
/// Zeros (of either sign) are never opposite to anything, and tiny values
/// whose product would underflow still compare correctly.
#[inline]
pub(crate) fn strictly_opposite(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}


/// How the solvers decide that two function values are equal.
///
/// - [`FloatEquality::Exact`]       : `a == b`, bit-for-bit value equality (default)
/// - [`FloatEquality::Within(tol)`] : `|a - b| <= tol`
///
/// Exact comparison keeps the classic behavior of the secant
/// `f(start) == f(end)` stop and the bisection `f(s) == 0` shortcut, but is
/// sensitive to round-off. `Within` trades that for a caller-chosen band.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum FloatEquality {
    #[default]
    Exact,
    Within(f64),
}

impl FloatEquality {
    #[inline]
    pub fn equal(self, a: f64, b: f64) -> bool {
        match self {
            FloatEquality::Exact       => a == b,
            FloatEquality::Within(tol) => (a - b).abs() <= tol,
        }
    }

    /// `Within(tol)` requires `tol` finite and `>= 0`.
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        match self {
            FloatEquality::Within(tol) if !(tol.is_finite() && tol >= 0.0) => {
                Err(DomainError::InvalidTolerance { got: tol })
            }
            _ => Ok(self),
        }
    }
}
