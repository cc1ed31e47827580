//! Binomial series for `√(1 + x)`.
//!
//! ┌ [`sqrt_one_plus_series`]           : ratio recurrence between consecutive terms
//! └ [`sqrt_one_plus_factorial_series`] : closed-form factorial coefficients
//!
//! ```text
//! √(1 + x) = Σ_k (-1)^k (2k)! / ((1 - 2k) (k!)² 4^k) x^k
//! ```

use super::algorithms::Algorithm;
use super::errors::SeriesError;
use super::report::SeriesReport;
use super::summation::sum_until;
use crate::arithmetic::binomial::next_central_binomial;
use crate::config::{impl_common_cfg, CommonCfg};
use crate::errors::DomainError;


/// Binomial series configuration, shared by both variants.
///
/// # Defaults
/// - `eps = 1e-6`
/// - If `max_iter` is `None`, the algorithm's
///   [`Algorithm::default_max_iter`] is used.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BinomialSeriesCfg {
    common: CommonCfg,
}
impl BinomialSeriesCfg {
    pub const DEFAULT_EPS: f64 = 1e-6;

    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::with_default_eps(Self::DEFAULT_EPS) }
    }
}
impl Default for BinomialSeriesCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(BinomialSeriesCfg);


/// Sums `√(1 + x)` using `a_n = a_{n-1} * (-x (2n - 3)) / (2n)`.
///
/// # Errors
/// - [`DomainError::NonFiniteArgument`]        : `x` is NaN/inf
/// - [`DomainError::OutsideConvergenceRadius`] : `|x| > 1`
/// - [`ConvergenceError`](crate::errors::ConvergenceError) : cap reached first
pub fn sqrt_one_plus_series(x: f64, cfg: BinomialSeriesCfg) -> Result<SeriesReport, SeriesError> {
    if !x.is_finite() {
        return Err(DomainError::NonFiniteArgument { got: x }.into());
    }
    if x.abs() > 1.0 {
        return Err(DomainError::OutsideConvergenceRadius { got: x, radius: 1.0 }.into());
    }

    let algorithm = Algorithm::SqrtOnePlus;
    let max_iter  = cfg.max_iter().unwrap_or(algorithm.default_max_iter());

    sum_until(algorithm, cfg.eps(), max_iter, |n, prev| {
        let n = n as f64;
        Ok(prev * (-x * (2.0 * n - 3.0)) / (2.0 * n))
    })
}


/// Coefficient `(-1)^k C(2k, k) / ((1 - 2k) 4^k)` of `z^k`, given `central = C(2k, k)`.
fn binomial_coefficient(k: u32, central: u128) -> f64 {
    let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
    let k    = f64::from(k);

    sign * central as f64 / ((1.0 - 2.0 * k) * 4f64.powf(k))
}


/// Sums `√(1 + z)` from the closed-form coefficients
/// `(-1)^k (2k)! / ((1 - 2k) (k!)² 4^k)`.
///
/// The ratio `(2k)! / (k!)²` is carried as the exact central binomial
/// `C(2k, k)`, advanced one term at a time. It fits a `u128` up to
/// `k = 65`, enough for `|z| <= 0.9` at the default tolerance; slower
/// arguments fail with [`SeriesError::Arithmetic`] rather than lose exactness.
///
/// # Errors
/// - [`DomainError::NonFiniteArgument`]        : `z` is NaN/inf
/// - [`DomainError::OutsideConvergenceRadius`] : `|z| >= 1`
/// - [`ArithmeticError::Overflow`](crate::arithmetic::errors::ArithmeticError::Overflow)
///   via [`SeriesError::Arithmetic`] : more than 65 terms needed
/// - [`ConvergenceError`](crate::errors::ConvergenceError) : cap reached first
pub fn sqrt_one_plus_factorial_series(
    z: f64,
    cfg: BinomialSeriesCfg,
) -> Result<SeriesReport, SeriesError> {
    if !z.is_finite() {
        return Err(DomainError::NonFiniteArgument { got: z }.into());
    }
    if z.abs() >= 1.0 {
        return Err(DomainError::OutsideConvergenceRadius { got: z, radius: 1.0 }.into());
    }

    let algorithm = Algorithm::SqrtOnePlusFactorial;
    let max_iter  = cfg.max_iter().unwrap_or(algorithm.default_max_iter());

    let mut central = 1_u128;
    sum_until(algorithm, cfg.eps(), max_iter, |n, _| {
        let k = u32::try_from(n).unwrap_or(u32::MAX);
        central = next_central_binomial(central, k)?;
        Ok(binomial_coefficient(k, central) * z.powi(k as i32))
    })
}
