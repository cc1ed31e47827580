use super::algorithms::{Algorithm, OpenFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::errors::{eval_checked, RootFindingError};
use super::report::{RootFindingReport, Stencil, TerminationReason};
use super::signs::FloatEquality;
use crate::config::{impl_common_cfg, CommonCfg};
use crate::errors::{ConvergenceError, DomainError};
use thiserror::Error;
use tracing::{debug, trace, warn};


#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SecantError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Convergence(#[from] ConvergenceError),

    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("no distinct initial evaluations: f({start}) == f({end}) == {f_value}")]
    NoDistinctEvaluations { start: f64, end: f64, f_value: f64 },

    #[error("secant step non-finite from start={start}, end={end}")]
    StepNotFinite { start: f64, end: f64 },
}


/// Secant configuration
///
/// # Fields
/// - `common`   : [`CommonCfg`] with `eps` and optional `max_iter`.
/// - `equality` : [`FloatEquality`] used for the `f(start) == f(end)` stop.
///
/// # Construction
/// - Use [`SecantCfg::new`] then optional setters.
///
/// # Defaults
/// - `eps = 1e-12`, `equality = FloatEquality::Exact`.
/// - If `max_iter` is `None`, [`secant`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Secant`], or
///   [`GLOBAL_MAX_ITER_FALLBACK`] if unavailable.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SecantCfg {
    common:   CommonCfg,
    equality: FloatEquality,
}
impl SecantCfg {
    pub const DEFAULT_EPS: f64 = 1e-12;

    #[must_use]
    pub fn new() -> Self {
        Self {
            common:   CommonCfg::with_default_eps(Self::DEFAULT_EPS),
            equality: FloatEquality::Exact,
        }
    }

    /// # Errors
    /// - [`DomainError::InvalidTolerance`] if a `Within` band is negative or non-finite.
    pub fn set_equality(mut self, v: FloatEquality) -> Result<Self, DomainError> {
        self.equality = v.validate()?;
        Ok(self)
    }

    #[inline] #[must_use] pub fn equality(&self) -> FloatEquality { self.equality }
}
impl Default for SecantCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(SecantCfg);


/// Calculates the secant x-intercept for the line
/// connecting `(start, f_start)` and `(end, f_end)`.
///
/// The caller guarantees `f_end != f_start`.
#[inline]
pub(crate) fn secant_update(
    (start, f_start): (f64, f64),
    (end, f_end):     (f64, f64),
) -> f64 {
    start - (end - start) * f_start / (f_end - f_start)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func`  : The function whose root is to be found
/// - `start` : First initial guess. Must be finite
/// - `end`   : Second initial guess. Must be finite
/// - `cfg`   : [`SecantCfg`] (`eps`, optional `max_iter`, equality mode)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`               : last secant candidate `c`
/// - `f_root`             : `f(c)`
/// - `iterations`         : number of secant updates performed
/// - `evaluations`        : total function evaluations
/// - `termination_reason` : [`TerminationReason::ToleranceReached`] or
///                          [`TerminationReason::EqualEvaluations`]
/// - `stencil`            : the `(start, end)` pair that produced `c`
/// - `algorithm_name`     : "secant"
///
/// # Errors
/// - [`SecantError::NoDistinctEvaluations`] : `f(start) == f(end)` before any update
/// - [`SecantError::StepNotFinite`]         : the update overflowed
///
/// * Propagated via [`SecantError::Domain`]
/// - [`DomainError::NonFiniteArgument`]     : `start` or `end` is NaN/inf
///
/// * Propagated via [`SecantError::RootFinding`]
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
///
/// * Propagated via [`SecantError::Convergence`]
/// - [`ConvergenceError`] : `max_iter` updates without `|f(c)| < eps`
///
/// # Behavior
/// - Update:
///     c = start - (end - start) * f(start) / (f(end) - f(start))
///     then `start <- end`, `end <- c`.
/// - Stops when `|f(c)| < eps` (strict), or when `f(start)` and `f(end)`
///   compare equal under `cfg.equality()`; the latter returns the last
///   candidate `c` as is.
///
/// # Warning
/// - Poor initial guesses may lead to divergence or extremely slow convergence.
///   For guaranteed convergence, use a **bracketed method** (e.g. bisection).
pub fn secant<F>(
    mut func: F,
    mut start: f64,
    mut end: f64,
    cfg: SecantCfg,
) -> Result<RootFindingReport, SecantError>
where F: FnMut(f64) -> f64 {

    for x in [start, end] {
        if !x.is_finite() {
            return Err(DomainError::NonFiniteArgument { got: x }.into());
        }
    }

    let eps       = cfg.eps();
    let equality  = cfg.equality();
    let algorithm = Algorithm::Open(OpenFamily::Secant);
    let algo_name = algorithm.algorithm_name();

    let num_iter = match cfg.max_iter() {
        Some(v) => v,
        None    => algorithm.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK),
    };

    let mut evals = 0;
    let mut f_start = eval_checked(&mut func, start, &mut evals)?;
    let mut f_end   = eval_checked(&mut func, end, &mut evals)?;

    // last candidate and the pair that produced it
    let mut last: Option<(f64, f64, Stencil)> = None;

    for iter in 1..=num_iter {
        if equality.equal(f_start, f_end) {
            let Some((root, f_root, stencil)) = last else {
                return Err(SecantError::NoDistinctEvaluations {
                    start, end, f_value: f_start
                });
            };
            debug!(iterations = iter - 1, root, "secant stopped on equal evaluations");
            return Ok(RootFindingReport {
                root,
                f_root             : Some(f_root),
                iterations         : iter - 1,
                evaluations        : evals,
                termination_reason : TerminationReason::EqualEvaluations,
                stencil,
                algorithm_name     : algo_name,
            });
        }

        let c = secant_update((start, f_start), (end, f_end));
        if !c.is_finite() {
            return Err(SecantError::StepNotFinite { start, end });
        }
        let stencil = Stencil::doubleton(start, end);

        start   = end;
        f_start = f_end;
        end     = c;
        f_end   = eval_checked(&mut func, c, &mut evals)?;
        trace!(iter, x = c, fx = f_end, "secant step");

        if f_end.abs() < eps {
            debug!(iterations = iter, evaluations = evals, root = c, "secant converged");
            return Ok(RootFindingReport {
                root               : c,
                f_root             : Some(f_end),
                iterations         : iter,
                evaluations        : evals,
                termination_reason : TerminationReason::ToleranceReached,
                stencil,
                algorithm_name     : algo_name,
            });
        }
        last = Some((c, f_end, stencil));
    }

    warn!(max_iter = num_iter, last_estimate = end, "secant hit iteration limit");
    Err(ConvergenceError {
        algorithm     : algo_name,
        max_iter      : num_iter,
        last_estimate : end,
    }.into())
}
