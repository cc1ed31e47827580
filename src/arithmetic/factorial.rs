//! Memoized factorial.
//!
//! Results are kept in a [`FactorialCache`] owned by the caller and passed by
//! `&mut` reference, so the cache lifetime is explicit and no global state
//! exists. Values are exact `u128`; `34!` is the largest that fits.

use super::errors::ArithmeticError;
use tracing::trace;

/// Largest `n` whose factorial fits in a `u128`.
pub const MAX_FACTORIAL_ARG: u32 = 34;


/// Growable table of `k!` for `k = 0..len`.
///
/// Filling is incremental: asking for `n!` computes and stores every missing
/// value up to `n`, and later calls for any `k <= n` are lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorialCache {
    table: Vec<u128>,
}

impl FactorialCache {
    #[must_use]
    pub fn new() -> Self {
        Self { table: vec![1] }
    }

    /// Number of factorials currently stored (`0!` is always present).
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always `false`: `0!` is stored at construction and never removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns `n!`, filling the table as needed.
    ///
    /// # Errors
    /// - [`ArithmeticError::Overflow`] if `n > 34`.
    pub fn factorial(&mut self, n: u32) -> Result<u128, ArithmeticError> {
        let idx = n as usize;
        if let Some(&v) = self.table.get(idx) {
            return Ok(v);
        }

        let mut k    = self.table.len();
        let mut last = self.table[k - 1];
        while k <= idx {
            last = last
                .checked_mul(k as u128)
                .ok_or(ArithmeticError::Overflow { operation: "factorial", n })?;
            self.table.push(last);
            k += 1;
        }
        trace!(n, cached = self.table.len(), "factorial cache extended");

        Ok(last)
    }
}

impl Default for FactorialCache {
    fn default() -> Self { Self::new() }
}


/// `n!` through `cache`. See [`FactorialCache::factorial`].
pub fn factorial(n: u32, cache: &mut FactorialCache) -> Result<u128, ArithmeticError> {
    cache.factorial(n)
}
