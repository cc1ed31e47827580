//! Forward finite differences.
//!
//! Truncation error is `O(dx)` for both helpers; round-off grows like
//! `ε / dx` (first) and `ε / dx²` (second), so `dx` around `1e-6` works for
//! the first derivative of well-scaled functions and a larger `dx`
//! (around `1e-4`) for the second.

use crate::errors::DomainError;

#[inline]
fn check_step(dx: f64) -> Result<(), DomainError> {
    if !dx.is_finite() || dx == 0.0 {
        return Err(DomainError::InvalidStep { got: dx });
    }
    Ok(())
}

/// `(f(x + dx) - f(x)) / dx`
///
/// # Errors
/// - [`DomainError::InvalidStep`] : `dx` is zero or non-finite
pub fn first_derivative<F>(mut func: F, x: f64, dx: f64) -> Result<f64, DomainError>
where F: FnMut(f64) -> f64 {
    check_step(dx)?;

    let fa = func(x);
    let fb = func(x + dx);
    Ok((fb - fa) / dx)
}

/// `(f(x + 2dx) - 2 f(x + dx) + f(x)) / dx²`
///
/// # Errors
/// - [`DomainError::InvalidStep`] : `dx` is zero or non-finite
pub fn second_derivative<F>(mut func: F, x: f64, dx: f64) -> Result<f64, DomainError>
where F: FnMut(f64) -> f64 {
    check_step(dx)?;

    let fa = func(x);
    let fb = func(x + dx);
    let fc = func(x + 2.0 * dx);
    Ok((fc - 2.0 * fb + fa) / (dx * dx))
}
