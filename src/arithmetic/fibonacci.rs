use super::errors::ArithmeticError;

/// Largest `n` whose Fibonacci number fits in a `u64`.
pub const MAX_FIBONACCI_ARG: u32 = 93;

/// Returns the `n`-th Fibonacci number with `F(0) = 0`, `F(1) = 1`.
///
/// # Errors
/// - [`ArithmeticError::Overflow`] if `n > 93`.
pub fn fibonacci(n: u32) -> Result<u64, ArithmeticError> {
    if n == 0 {
        return Ok(0);
    }

    // (F(i), F(i + 1))
    let (mut a, mut b) = (0_u64, 1_u64);
    for _ in 1..n {
        let next = a
            .checked_add(b)
            .ok_or(ArithmeticError::Overflow { operation: "fibonacci", n })?;
        a = b;
        b = next;
    }
    Ok(b)
}
