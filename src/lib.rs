//! Iterative numeric solvers and small numerical-methods utilities.
//!
//! ┌ [`root_finding`] : secant, bisection and Newton square-root solvers
//! ├ [`series`]       : convergent series summation (√2, binomial √(1 + x))
//! ├ [`arithmetic`]   : factorial cache, Fibonacci, fast power
//! ├ [`calculus`]     : trapezoidal rule, finite differences
//! ├ [`sorting`]      : quicksort, binary search, top-two maximum
//! └ [`rpn`]          : reverse Polish notation evaluation
//!
//! Every iterative routine runs under an iteration cap and fails with a
//! [`errors::ConvergenceError`] instead of looping forever.

pub mod errors;
pub(crate) mod config;

pub mod root_finding;
pub mod series;

pub mod arithmetic;
pub mod calculus;
pub mod sorting;
pub mod rpn;
