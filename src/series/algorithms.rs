//! Series summation algorithm definitions.

/// Series variants.
/// - [`Algorithm::Sqrt2Binomial`]         : √2 binomial expansion with the `0.999` coefficient
/// - [`Algorithm::SqrtOnePlus`]           : √(1 + x), recurrence form
/// - [`Algorithm::SqrtOnePlusFactorial`]  : √(1 + z), closed-form factorial coefficients
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Sqrt2Binomial,
    SqrtOnePlus,
    SqrtOnePlusFactorial,
}

impl Algorithm {
    /// Default term cap if `max_iter` is unset in config.
    ///
    /// Binomial terms for `√(1 + x)` decay like `|x|^n / n^{3/2}`, so slow
    /// arguments near the radius need thousands of terms.
    pub const fn default_max_iter(self) -> usize {
        match self {
            Algorithm::Sqrt2Binomial        => 100_000,
            Algorithm::SqrtOnePlus          => 100_000,
            Algorithm::SqrtOnePlusFactorial => 100_000,
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Sqrt2Binomial        => "sqrt2_series",
            Algorithm::SqrtOnePlus          => "sqrt_one_plus_series",
            Algorithm::SqrtOnePlusFactorial => "sqrt_one_plus_factorial_series",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
