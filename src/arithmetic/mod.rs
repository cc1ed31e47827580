//! Integer and power helpers.
//!
//! ├ [`factorial`] : memoized factorial through an explicit [`factorial::FactorialCache`]
//! ├ [`binomial`]  : exact central binomial coefficients `C(2k, k)`
//! ├ [`fibonacci`] : iterative Fibonacci numbers
//! └ [`power`]     : exponentiation by squaring

pub mod errors;

pub mod binomial;
pub mod factorial;
pub mod fibonacci;
pub mod power;
