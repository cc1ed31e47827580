use super::algorithms::{Algorithm, BracketFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::errors::{eval_checked, RootFindingError};
use super::report::{RootFindingReport, Stencil, TerminationReason};
use super::signs::{strictly_opposite, FloatEquality};
use crate::config::{impl_common_cfg, CommonCfg};
use crate::errors::{ConvergenceError, DomainError};
use thiserror::Error;
use tracing::{debug, trace, warn};

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BisectionError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Convergence(#[from] ConvergenceError),

    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("no sign change on [{start}, {end}]: f(start) * f(end) >= 0")]
    NoSignChange { start: f64, end: f64 },
}

/// Bisection Configuration
///
/// # Fields
/// ┌ `common`              : [`CommonCfg`] with `eps` and optional `max_iter`
/// ├ `equality`            : [`FloatEquality`] used for the `f(s) == 0` shortcut
/// └ `require_sign_change` : reject brackets without a sign change up front
///
/// # Defaults
/// ┌ `eps`                 = 1e-12, scaled by `max(1, |start|, |end|)` while unset
/// ├ `equality`            = [`FloatEquality::Exact`]
/// └ `require_sign_change` = false
///
/// # Notes:
/// └ If `max_iter` is None, it will be set to [`bisection_theoretical_iter`]
///     ├ where [`bisection_theoretical_iter`] is the number of halvings
///     │ needed for `|end - start| < eps`,
///     └ bounded by [`GLOBAL_MAX_ITER_FALLBACK`].
/// └ An `eps` given through `set_eps` is an absolute width, used as given.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BisectionCfg {
    common:              CommonCfg,
    equality:            FloatEquality,
    require_sign_change: bool,
}
impl BisectionCfg {
    pub const DEFAULT_EPS: f64 = 1e-12;

    #[must_use]
    pub fn new() -> Self {
        Self {
            common:              CommonCfg::with_default_eps(Self::DEFAULT_EPS),
            equality:            FloatEquality::Exact,
            require_sign_change: false,
        }
    }

    /// # Errors
    /// - [`DomainError::InvalidTolerance`] if a `Within` band is negative or non-finite.
    pub fn set_equality(mut self, v: FloatEquality) -> Result<Self, DomainError> {
        self.equality = v.validate()?;
        Ok(self)
    }

    #[must_use]
    pub fn set_require_sign_change(mut self, v: bool) -> Self {
        self.require_sign_change = v;
        self
    }

    #[inline] #[must_use] pub fn equality(&self) -> FloatEquality { self.equality }
    #[inline] #[must_use] pub fn require_sign_change(&self) -> bool { self.require_sign_change }
}
impl Default for BisectionCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(BisectionCfg);

/// Calculates midpoint of [start, end]
#[inline]
fn midpoint(start: f64, end: f64) -> f64 {
    (start + end) / 2.0
}

/// Width tolerance used when `eps` was left at its default.
///
/// Floats near a root of magnitude `m` are about `2.2e-16 * m` apart, so an
/// absolute `1e-12` is unreachable once the bracket sits beyond a few thousand.
#[inline]
fn default_width_tolerance(eps: f64, start: f64, end: f64) -> f64 {
    eps * start.abs().max(end.abs()).max(1.0)
}

/// Number of halvings until the bracket width drops strictly below `eps`.
///
/// After `k` halvings the width is `w / 2^k`, so `k = floor(log2(w / eps)) + 1`
/// suffices in exact arithmetic; one extra step absorbs round-off.
pub(crate) fn bisection_theoretical_iter(start: f64, end: f64, eps: f64) -> usize {
    let w0 = (end - start).abs();
    if w0 < eps {
        return 1;
    }
    let halvings = (w0 / eps).log2().floor();
    if halvings.is_finite() { halvings as usize + 2 } else { usize::MAX }
}

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// For guaranteed convergence `func` should be continuous on `[start, end]`
/// with `func(start)` and `func(end)` of opposite signs. Neither is verified
/// unless [`BisectionCfg::set_require_sign_change`] is enabled; without a sign
/// change the bracket still shrinks, toward one of its ends.
///
/// # Arguments
///
/// ┌ `func`  - The function whose root is to be found.
/// ├ `start` - One end of the search interval. Must be finite.
/// ├ `end`   - Other end of the search interval. Must be finite.
/// └ `cfg`   - [`BisectionCfg`]
///
/// # Returns
///
/// On success, returns a [`RootFindingReport`]:
/// ├ `root`               : Approximate root location
/// ├ `f_root`             : The function value at `root`; `None` for the zero-bound shortcut
/// ├ `iterations`         : Number of halvings performed
/// ├ `evaluations`        : Number of function evaluations performed
/// ├ `termination_reason` :
/// │  ├ [`TerminationReason::ZeroBound`]        : `start == 0` or `end == 0`
/// │  ├ [`TerminationReason::ExactRoot`]        : `f(s) == 0` at a midpoint
/// │  └ [`TerminationReason::ToleranceReached`] : `|end - start| < eps`
/// ├ `stencil`            : final `[start, end]` bracket
/// └ `algorithm_name`     : "bisection"
///
/// # Errors
///
/// ┌ [`BisectionError::NoSignChange`]  - only with `require_sign_change`.
/// ├ [`DomainError::NonFiniteArgument`] - `start` or `end` is NaN/inf.
/// ├ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produces NaN or inf.
/// └ [`ConvergenceError`] - `max_iter` halvings without `|end - start| < eps`.
///
/// # Warning
/// └ A bound equal to `0` returns `0` immediately, without evaluating `func`.
///   This treats a zero bound as the root whether or not `func(0) == 0`.
pub fn bisection<F>(
    mut func: F,
    mut start: f64,
    mut end: f64,
    cfg: BisectionCfg,
) -> Result<RootFindingReport, BisectionError>
where F: FnMut(f64) -> f64 {

    for x in [start, end] {
        if !x.is_finite() {
            return Err(DomainError::NonFiniteArgument { got: x }.into());
        }
    }

    let algo_name = ALGORITHM.algorithm_name();

    // zero-bound shortcuts
    if start == 0.0 || end == 0.0 {
        debug!(start, end, "bisection zero-bound shortcut");
        return Ok(RootFindingReport {
            root               : 0.0,
            f_root             : None,
            iterations         : 0,
            evaluations        : 0,
            termination_reason : TerminationReason::ZeroBound,
            stencil            : Stencil::bracket(start, end),
            algorithm_name     : algo_name,
        });
    }

    let eps = if cfg.common.eps_is_default() {
        default_width_tolerance(cfg.eps(), start, end)
    } else {
        cfg.eps()
    };
    let equality = cfg.equality();
    let num_iter = match cfg.max_iter() {
        Some(m) => m,
        None    => bisection_theoretical_iter(start, end, eps).min(GLOBAL_MAX_ITER_FALLBACK),
    };

    let mut evals = 0;
    let mut f_start = eval_checked(&mut func, start, &mut evals)?;

    if cfg.require_sign_change() {
        let f_end = eval_checked(&mut func, end, &mut evals)?;
        if !strictly_opposite(f_start, f_end) {
            return Err(BisectionError::NoSignChange { start, end });
        }
    }

    for iter in 1..=num_iter {
        let s   = midpoint(start, end);
        let f_s = eval_checked(&mut func, s, &mut evals)?;
        trace!(iter, start, end, s, fs = f_s, "bisection step");

        if equality.equal(f_s, 0.0) {
            debug!(iterations = iter, root = s, "bisection hit exact root");
            return Ok(RootFindingReport {
                root               : s,
                f_root             : Some(f_s),
                iterations         : iter,
                evaluations        : evals,
                termination_reason : TerminationReason::ExactRoot,
                stencil            : Stencil::bracket(start, end),
                algorithm_name     : algo_name,
            });
        }

        // shrink interval
        if strictly_opposite(f_s, f_start) {
            end = s;
        } else {
            start   = s;
            f_start = f_s;
        }

        if (end - start).abs() < eps {
            let root   = midpoint(start, end);
            let f_root = eval_checked(&mut func, root, &mut evals)?;
            debug!(iterations = iter, evaluations = evals, root, "bisection converged");
            return Ok(RootFindingReport {
                root,
                f_root             : Some(f_root),
                iterations         : iter,
                evaluations        : evals,
                termination_reason : TerminationReason::ToleranceReached,
                stencil            : Stencil::bracket(start, end),
                algorithm_name     : algo_name,
            });
        }
    }

    let last_estimate = midpoint(start, end);
    warn!(max_iter = num_iter, last_estimate, "bisection hit iteration limit");
    Err(ConvergenceError {
        algorithm : algo_name,
        max_iter  : num_iter,
        last_estimate,
    }.into())
}
