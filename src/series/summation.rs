//! Shared accumulation loop for the series in this module.

use super::algorithms::Algorithm;
use super::errors::SeriesError;
use super::report::SeriesReport;
use crate::errors::ConvergenceError;
use tracing::{debug, trace, warn};


/// Adds terms to a running sum seeded with `1` until a term's magnitude is
/// strictly below `eps`.
///
/// `next_term(n, prev)` returns term `n` (`n = 1, 2, ...`) given term `n - 1`
/// (the seed `1` for `n = 1`). The term that meets the tolerance is still
/// added to the sum.
///
/// # Errors
/// - Whatever `next_term` returns.
/// - [`ConvergenceError`] after `max_iter` terms without meeting `eps`.
pub(crate) fn sum_until<T>(
    algorithm: Algorithm,
    eps: f64,
    max_iter: usize,
    mut next_term: T,
) -> Result<SeriesReport, SeriesError>
where T: FnMut(usize, f64) -> Result<f64, SeriesError> {
    let algo_name = algorithm.algorithm_name();

    let mut term = 1.0_f64;
    let mut sum  = 1.0_f64;
    for n in 1..=max_iter {
        term = next_term(n, term)?;
        sum += term;
        trace!(n, term, sum, "{} term", algo_name);

        if term.abs() < eps {
            debug!(terms = n, sum, "{} converged", algo_name);
            return Ok(SeriesReport {
                sum,
                last_term      : term,
                terms          : n,
                algorithm_name : algo_name,
            });
        }
    }

    warn!(max_iter, last_estimate = sum, "{} hit iteration limit", algo_name);
    Err(ConvergenceError {
        algorithm     : algo_name,
        max_iter,
        last_estimate : sum,
    }.into())
}
