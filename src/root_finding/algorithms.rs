//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with the shared [`GLOBAL_MAX_ITER_FALLBACK`] hard cap.


/// Most methods use heuristic defaults from [`Algorithm::default_max_iter`].
/// This cap is only applied when a method's theoretical iteration bound
/// would otherwise exceed it (e.g. [`BracketFamily::Bisection`]).
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500;

/// Upper bound on the computed cap for [`OpenFamily::NewtonSqrt`].
///
/// The halving phase of the Newton square-root update needs about
/// `|log2 x| / 2` steps, which stays below this for every finite `f64`.
pub const NEWTON_SQRT_MAX_ITER_CAP: usize = 1100;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding
/// - [`Algorithm::Open`]    contains open methods for root-finding
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily {
    Bisection,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily {
    Secant,
    NewtonSqrt,
}

impl Algorithm {
    /// Default iteration count if `max_iter` is unset in config.
    ///
    /// # Notes
    /// - Applied only when `max_iter` is unset.
    /// - Methods with theoretical bounds ([`BracketFamily::Bisection`],
    ///   [`OpenFamily::NewtonSqrt`]) return `None`, meaning
    ///   “compute theoretical bound instead”.
    pub const fn default_max_iter(self) -> Option<usize> {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => None,
            Algorithm::Open(OpenFamily::Secant)          => Some(100),
            Algorithm::Open(OpenFamily::NewtonSqrt)      => None,
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => "bisection",
            Algorithm::Open(OpenFamily::Secant)          => "secant",
            Algorithm::Open(OpenFamily::NewtonSqrt)      => "newton_sqrt",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
