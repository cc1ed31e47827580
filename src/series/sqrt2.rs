//! √2 by Taylor series
//!
//! Sums the binomial expansion of `(1 + t)^{1/2}` with the fixed argument
//! `t = 0.999`:
//!
//! ```text
//! c_0 = 1
//! c_n = c_{n-1} * ((3 - 2n) * 0.999) / (2n)
//! s   = Σ c_n
//! ```
//!
//! The argument is the literal `0.999`, not `1`, so the sum converges to
//! `√1.999 ≈ 1.41386` rather than `√2`; it sits about `3.5e-4` below `√2`.

use super::algorithms::Algorithm;
use super::errors::SeriesError;
use super::report::SeriesReport;
use super::summation::sum_until;
use crate::config::{impl_common_cfg, CommonCfg};

/// Expansion coefficient used by [`sqrt2_series`].
pub const SQRT2_SERIES_COEFFICIENT: f64 = 0.999;


/// √2 series configuration
///
/// # Defaults
/// - `eps = 1e-15`
/// - If `max_iter` is `None`, [`Algorithm::default_max_iter`] for
///   [`Algorithm::Sqrt2Binomial`] is used.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sqrt2SeriesCfg {
    common: CommonCfg,
}
impl Sqrt2SeriesCfg {
    pub const DEFAULT_EPS: f64 = 1e-15;

    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::with_default_eps(Self::DEFAULT_EPS) }
    }
}
impl Default for Sqrt2SeriesCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(Sqrt2SeriesCfg);


/// Term `n` of the expansion given term `n - 1`.
#[inline]
fn next_term(n: usize, prev: f64) -> f64 {
    let n = n as f64;
    prev * ((-2.0 * n + 3.0) * SQRT2_SERIES_COEFFICIENT) / (2.0 * n)
}


/// Approximates √2 by summing terms until `|c_n| < eps`.
///
/// # Errors
/// - [`ConvergenceError`](crate::errors::ConvergenceError) via
///   [`SeriesError::Convergence`] if `max_iter` terms are added first.
pub fn sqrt2_series(cfg: Sqrt2SeriesCfg) -> Result<SeriesReport, SeriesError> {
    let algorithm = Algorithm::Sqrt2Binomial;
    let max_iter  = cfg.max_iter().unwrap_or(algorithm.default_max_iter());

    sum_until(algorithm, cfg.eps(), max_iter, |n, prev| Ok(next_term(n, prev)))
}
