//! Numerical integration and differentiation helpers.
//!
//! ├ [`integration::trapezoidal_area`]       : composite trapezoidal rule
//! ├ [`differentiation::first_derivative`]   : forward first difference
//! └ [`differentiation::second_derivative`]  : forward second difference
//!
//! Invalid inputs return [`DomainError`](crate::errors::DomainError).

pub mod integration;
pub mod differentiation;
