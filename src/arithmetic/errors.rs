use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("{operation}({n}) overflows its integer type")]
    Overflow { operation: &'static str, n: u32 },
}
