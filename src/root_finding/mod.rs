// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod signs;

// algorithms
pub mod bisection;
pub mod secant;
pub mod newton_sqrt;
