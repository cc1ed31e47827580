//! Defines the [`SeriesReport`] struct returned by all series summations.

/// Summary of a converged series summation.
///
/// [`SeriesReport`]
/// - `sum`            : partial sum including the last term
/// - `last_term`      : the term whose magnitude fell below `eps`
/// - `terms`          : number of terms added after the leading `1`
/// - `algorithm_name` : series name (e.g. `"sqrt2_series"`)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SeriesReport {
    pub sum            : f64,
    pub last_term      : f64,
    pub terms          : usize,
    pub algorithm_name : &'static str,
}
