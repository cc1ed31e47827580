//! Error kinds shared by every iterative routine.
//!
//! ┌ [`DomainError`]      : invalid input range
//! │   ├ invalid tolerance or iteration cap
//! │   ├ arguments outside the routine's domain
//! │   └ invalid step sizes / partitions for the calculus helpers
//! │
//! └ [`ConvergenceError`] : iteration cap exhausted before the tolerance was met


use thiserror::Error;


/// Invalid input range.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("invalid tolerance: eps must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("argument must be > 0. got {got}")]
    NonPositiveArgument { got: f64 },

    #[error("argument must be finite. got {got}")]
    NonFiniteArgument { got: f64 },

    #[error("argument {got} outside convergence radius {radius}")]
    OutsideConvergenceRadius { got: f64, radius: f64 },

    #[error("invalid step: dx must be finite and non-zero. got {got}")]
    InvalidStep { got: f64 },

    #[error("invalid partition: need at least 1 panel. got {got}")]
    InvalidPartition { got: usize },
}


/// Iteration cap exhausted before the tolerance was met.
///
/// - `algorithm`     : algorithm name (e.g. `"secant"`)
/// - `max_iter`      : the cap that was hit
/// - `last_estimate` : the approximation held when the cap was hit
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("{algorithm} did not converge within {max_iter} iterations; last estimate {last_estimate}")]
pub struct ConvergenceError {
    pub algorithm     : &'static str,
    pub max_iter      : usize,
    pub last_estimate : f64,
}
