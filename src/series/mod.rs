// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub(crate) mod summation;

// series
pub mod sqrt2;
pub mod binomial;
