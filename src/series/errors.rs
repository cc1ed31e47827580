use crate::arithmetic::errors::ArithmeticError;
use crate::errors::{ConvergenceError, DomainError};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SeriesError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Convergence(#[from] ConvergenceError),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
