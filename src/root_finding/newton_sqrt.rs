//! Newton square root
//!
//! Fixed-point iteration for `√x` using the arithmetic/harmonic mean update,
//! i.e. Newton's method on `a² - x` written as a pair of running estimates.

use super::algorithms::{Algorithm, OpenFamily, NEWTON_SQRT_MAX_ITER_CAP};
use super::report::{RootFindingReport, Stencil, TerminationReason};
use crate::config::{impl_common_cfg, CommonCfg};
use crate::errors::{ConvergenceError, DomainError};
use thiserror::Error;
use tracing::{debug, trace, warn};


/// Iterations reserved for the quadratic phase once `a` is near `√x`.
const QUADRATIC_PHASE_ITER: usize = 64;


#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SqrtNewtonError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Convergence(#[from] ConvergenceError),
}


/// Newton square-root configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with `eps` and optional `max_iter`.
///
/// # Defaults
/// - `eps = 1e-12`, relative: left unset, [`sqrt_newton`] stops on
///   `|b - a| < 1e-12 * s` where `s` is the power of two in `[√x, 2√x)`.
///   An `eps` given through `set_eps` is an absolute bound on `|b - a|`.
/// - If `max_iter` is `None`, [`sqrt_newton`] uses
///   `ceil(|log2 x| / 2) + 64`, bounded by [`NEWTON_SQRT_MAX_ITER_CAP`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SqrtNewtonCfg {
    common: CommonCfg,
}
impl SqrtNewtonCfg {
    pub const DEFAULT_EPS: f64 = 1e-12;

    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::with_default_eps(Self::DEFAULT_EPS) }
    }
}
impl Default for SqrtNewtonCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(SqrtNewtonCfg);


/// Smallest power of two not below `√x`, from the exponent of `x` alone.
fn sqrt_scale(x: f64) -> f64 {
    2f64.powi((x.log2() / 2.0).ceil() as i32)
}


/// Iterations needed to halve `a` from `~x` down to `~√x`, plus the quadratic phase.
fn newton_sqrt_theoretical_iter(x: f64) -> usize {
    let halving = (x.log2().abs() / 2.0).ceil() as usize;
    (halving + QUADRATIC_PHASE_ITER).min(NEWTON_SQRT_MAX_ITER_CAP)
}


/// Computes `√x` with the Newton (Heron) iteration.
///
/// # Behavior
/// - `a = 1`, `b = x`
/// - repeat `a <- (a + b) / 2`, `b <- x / a` until `|b - a| < eps`
/// - returns `(a + b) / 2`
///
/// With the default `eps` the stop is relative to `√x`, so inputs whose root
/// sits far from `1` converge instead of cycling one ulp apart.
///
/// `f_root` in the report is the residual `root² - x`, and the stencil holds
/// the final `(a, b)` pair.
///
/// # Errors
/// - [`DomainError::NonPositiveArgument`] : `x <= 0`
/// - [`DomainError::NonFiniteArgument`]   : `x` is NaN/inf
/// - [`ConvergenceError`]                 : `|b - a|` never dropped below `eps`,
///   e.g. when `eps` is finer than the spacing of floats near `√x`.
pub fn sqrt_newton(x: f64, cfg: SqrtNewtonCfg) -> Result<RootFindingReport, SqrtNewtonError> {
    if !x.is_finite() {
        return Err(DomainError::NonFiniteArgument { got: x }.into());
    }
    if x <= 0.0 {
        return Err(DomainError::NonPositiveArgument { got: x }.into());
    }

    let algorithm = Algorithm::Open(OpenFamily::NewtonSqrt);
    let algo_name = algorithm.algorithm_name();
    let eps = if cfg.common.eps_is_default() {
        cfg.eps() * sqrt_scale(x)
    } else {
        cfg.eps()
    };
    let num_iter  = match cfg.max_iter() {
        Some(v) => v,
        None    => algorithm.default_max_iter().unwrap_or_else(|| newton_sqrt_theoretical_iter(x)),
    };

    let mut a = 1.0_f64;
    let mut b = x;
    for iter in 1..=num_iter {
        a = (a + b) / 2.0;
        b = x / a;
        trace!(iter, a, b, "newton sqrt step");

        if (b - a).abs() < eps {
            let root = (a + b) / 2.0;
            debug!(iterations = iter, root, "newton sqrt converged");
            return Ok(RootFindingReport {
                root,
                f_root             : Some(root * root - x),
                iterations         : iter,
                evaluations        : 0,
                termination_reason : TerminationReason::ToleranceReached,
                stencil            : Stencil::doubleton(a, b),
                algorithm_name     : algo_name,
            });
        }
    }

    let last_estimate = (a + b) / 2.0;
    warn!(max_iter = num_iter, last_estimate, "newton sqrt hit iteration limit");
    Err(ConvergenceError {
        algorithm : algo_name,
        max_iter  : num_iter,
        last_estimate,
    }.into())
}
