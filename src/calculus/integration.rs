use crate::errors::DomainError;

/// Approximates `∫ f` over `[start, end]` with the composite
/// [trapezoidal rule](https://en.wikipedia.org/wiki/Trapezoidal_rule) on `n`
/// equal panels.
///
/// Each panel adds `(f(x_i) + f(x_{i+1})) / 2 * h`; the right-edge value of a
/// panel is reused as the left-edge value of the next, so `f` is evaluated
/// `n + 1` times. `start > end` yields the negated area.
///
/// # Errors
/// - [`DomainError::InvalidPartition`]  : `n == 0`
/// - [`DomainError::NonFiniteArgument`] : `start` or `end` is NaN/inf
pub fn trapezoidal_area<F>(
    mut func: F,
    start: f64,
    end: f64,
    n: usize,
) -> Result<f64, DomainError>
where F: FnMut(f64) -> f64 {
    if n == 0 {
        return Err(DomainError::InvalidPartition { got: n });
    }
    for x in [start, end] {
        if !x.is_finite() {
            return Err(DomainError::NonFiniteArgument { got: x });
        }
    }

    let h = (end - start) / n as f64;
    let mut f_left = func(start);
    let mut area   = 0.0;
    for i in 1..=n {
        let f_right = func(start + h * i as f64);
        area  += (f_left + f_right) / 2.0 * h;
        f_left = f_right;
    }

    Ok(area)
}
