//! Root-finding error types.
//!
//! [`RootFindingError`] : runtime errors common to every solver taking
//! a user function (non-finite evaluations).
//!
//! Input-range and iteration-cap failures are the crate-wide
//! [`DomainError`](crate::errors::DomainError) and
//! [`ConvergenceError`](crate::errors::ConvergenceError).


use thiserror::Error;


/// Root-finding runtime errors.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },
}


/// Wraps `func`, counting evaluations and rejecting non-finite values.
#[inline]
pub(crate) fn eval_checked<F>(
    func: &mut F,
    x: f64,
    evals: &mut usize,
) -> Result<f64, RootFindingError> where F: FnMut(f64) -> f64 {
    let fx = { *evals += 1; func(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx });
    }

    Ok(fx)
}
