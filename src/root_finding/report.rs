//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms.

/// Reasons a root-finding algorithm stopped successfully.
///
/// Exhausting the iteration cap is not a variant here; it surfaces as a
/// [`ConvergenceError`](crate::errors::ConvergenceError).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The method's error metric dropped below `eps`.
    ToleranceReached,
    /// Secant only: `f(start)` and `f(end)` compared equal after at least one update.
    EqualEvaluations,
    /// Bisection only: a midpoint evaluated to zero.
    ExactRoot,
    /// Bisection only: one of the bounds was `0`.
    ZeroBound,
}


/// Method-specific data returned by a solver.
/// Contains the last set of points used in the update formula.
/// - [`Stencil::Bracket`] : bracketing methods
///     - `bounds` of the final interval
/// - [`Stencil::Open`]    : open methods
///     - `x` = last iterates used to compute the root
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Stencil {
    Bracket { bounds: [f64; 2] },
    Open    { x: [f64; 2], len: usize },
}
impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x, len }    => &x[..*len],
        }
    }
    pub fn singleton(x: f64) -> Self {
        Stencil::Open { x: [x, 0.0], len: 1 }
    }
    pub fn doubleton(x1: f64, x2: f64) -> Self {
        Stencil::Open { x: [x1, x2], len: 2 }
    }
    pub fn bracket(a: f64, b: f64) -> Self {
        Stencil::Bracket { bounds: [a, b] }
    }
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`               : best root estimate
/// - `f_root`             : function value at `root` (`None` when the method never evaluates a function)
/// - `iterations`         : total iterations
/// - `evaluations`        : total function evaluations
/// - `termination_reason` : why the solver stopped ([`TerminationReason`])
/// - `stencil`            : last set of points used in update formula
/// - `algorithm_name`     : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootFindingReport {
    pub root               : f64,
    pub f_root             : Option<f64>,
    pub iterations         : usize,
    pub evaluations        : usize,
    pub termination_reason : TerminationReason,
    pub stencil            : Stencil,
    pub algorithm_name     : &'static str,
}
