//! Reverse Polish notation evaluation.

pub mod errors;
pub mod evaluator;

pub use errors::RpnError;
pub use evaluator::{eval_rpn, Operator};
