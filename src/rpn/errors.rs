use thiserror::Error;

/// RPN evaluation errors. `position` is the 0-based token index.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RpnError {
    #[error("operator `{token}` at token {position} needs two operands")]
    StackUnderflow { token: String, position: usize },

    #[error("invalid token `{token}` at token {position}")]
    InvalidToken { token: String, position: usize },

    #[error("empty expression")]
    EmptyExpression,

    #[error("expression left {remaining} operands on the stack")]
    TrailingOperands { remaining: usize },
}
