//! tests for factorial, fibonacci and fast power
use approx::assert_relative_eq;
use itersolve::arithmetic::binomial::{central_binomial, MAX_CENTRAL_BINOMIAL_ARG};
use itersolve::arithmetic::errors::ArithmeticError;
use itersolve::arithmetic::factorial::{factorial, FactorialCache, MAX_FACTORIAL_ARG};
use itersolve::arithmetic::fibonacci::{fibonacci, MAX_FIBONACCI_ARG};
use itersolve::arithmetic::power::fast_power;

#[test]
fn factorial_small_values() -> Result<(), ArithmeticError> {
    let mut cache = FactorialCache::new();

    assert_eq!(factorial(0, &mut cache)?, 1);
    assert_eq!(factorial(1, &mut cache)?, 1);
    assert_eq!(factorial(5, &mut cache)?, 120);
    assert_eq!(factorial(20, &mut cache)?, 2_432_902_008_176_640_000);
    Ok(())
}

#[test]
fn factorial_largest_fits() -> Result<(), ArithmeticError> {
    let mut cache = FactorialCache::new();
    let v = factorial(MAX_FACTORIAL_ARG, &mut cache)?;

    assert_eq!(v, 295_232_799_039_604_140_847_618_609_643_520_000_000);
    Ok(())
}

#[test]
fn factorial_overflow() {
    let mut cache = FactorialCache::default();
    assert_eq!(
        factorial(40, &mut cache),
        Err(ArithmeticError::Overflow { operation: "factorial", n: 40 })
    );
}

#[test]
fn fibonacci_values() -> Result<(), ArithmeticError> {
    assert_eq!(fibonacci(0)?, 0);
    assert_eq!(fibonacci(1)?, 1);
    assert_eq!(fibonacci(2)?, 1);
    assert_eq!(fibonacci(10)?, 55);
    assert_eq!(fibonacci(MAX_FIBONACCI_ARG)?, 12_200_160_415_121_876_738);
    Ok(())
}

#[test]
fn fibonacci_overflow() {
    assert_eq!(
        fibonacci(MAX_FIBONACCI_ARG + 1),
        Err(ArithmeticError::Overflow { operation: "fibonacci", n: 94 })
    );
}

#[test]
fn fast_power_matches_powi() {
    assert_eq!(fast_power(2.0, 10), 1024.0);
    assert_eq!(fast_power(3.0, 0), 1.0);
    assert_eq!(fast_power(0.0, 0), 1.0);
    assert_eq!(fast_power(-2.0, 3), -8.0);
    assert_eq!(fast_power(2.0, -2), 0.25);
    assert_relative_eq!(fast_power(1.0001, 10_000), 1.0001_f64.powi(10_000), max_relative = 1e-10);
}

#[test]
fn fast_power_zero_negative_exponent_is_inf() {
    assert!(fast_power(0.0, -1).is_infinite());
}

#[test]
fn central_binomial_matches_factorials() -> Result<(), ArithmeticError> {
    let mut cache = FactorialCache::new();
    for k in 0..=17 {
        let k_fact = factorial(k, &mut cache)?;
        assert_eq!(central_binomial(k)?, factorial(2 * k, &mut cache)? / (k_fact * k_fact), "k={k}");
    }
    Ok(())
}

#[test]
fn central_binomial_range() -> Result<(), ArithmeticError> {
    assert_eq!(central_binomial(10)?, 184_756);
    assert!(central_binomial(MAX_CENTRAL_BINOMIAL_ARG).is_ok());
    assert_eq!(
        central_binomial(MAX_CENTRAL_BINOMIAL_ARG + 1),
        Err(ArithmeticError::Overflow { operation: "central_binomial", n: 66 })
    );
    Ok(())
}
