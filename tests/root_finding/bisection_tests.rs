//! tests for the bisection root finding algorithm
use approx::assert_abs_diff_eq;
use itersolve::errors::{ConvergenceError, DomainError};
use itersolve::root_finding::bisection::{bisection, BisectionCfg, BisectionError};
use itersolve::root_finding::errors::RootFindingError;
use itersolve::root_finding::report::{Stencil, TerminationReason};
use itersolve::root_finding::signs::FloatEquality;

type TestResult = Result<(), BisectionError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new().set_eps(1e-4)?;

    let res = bisection(f, 0.1, 2.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_abs_diff_eq!(res.root, std::f64::consts::SQRT_2, epsilon = 1e-4);
    let bounds = res.stencil.stencil();
    assert!((bounds[1] - bounds[0]).abs() < 1e-4);
    assert_eq!(res.algorithm_name, "bisection");
    Ok(())
}

#[test]
fn finds_negative_5() -> TestResult {
    let f   = |x: f64| x + 5.0;
    let cfg = BisectionCfg::new().set_eps(1e-10)?;

    let res = bisection(f, -10.0, 1.0, cfg)?;

    assert_abs_diff_eq!(res.root, -5.0, epsilon = 1e-10);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn zero_start_returns_zero_without_evaluating() -> TestResult {
    let f = |_x: f64| -> f64 { panic!("zero bound must not evaluate f") };

    let res = bisection(f, 0.0, 5.0, BisectionCfg::new().set_eps(1e-6)?)?;

    assert_eq!(res.root, 0.0);
    assert_eq!(res.termination_reason, TerminationReason::ZeroBound);
    assert_eq!(res.f_root, None);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.evaluations, 0);
    Ok(())
}

#[test]
fn zero_end_returns_zero_for_any_function() -> TestResult {
    // f(0) = 7, so 0 is not a root; the shortcut still applies
    let f = |x: f64| x + 7.0;

    let res = bisection(f, -5.0, 0.0, BisectionCfg::new().set_eps(1e-6)?)?;

    assert_eq!(res.root, 0.0);
    assert_eq!(res.termination_reason, TerminationReason::ZeroBound);
    assert_eq!(res.stencil, Stencil::bracket(-5.0, 0.0));
    Ok(())
}

#[test]
fn exact_midpoint_root() -> TestResult {
    let f = |x: f64| x - 1.0;

    let res = bisection(f, -1.0, 3.0, BisectionCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ExactRoot);
    assert_eq!(res.root, 1.0);
    assert_eq!(res.f_root, Some(0.0));
    assert_eq!(res.iterations, 1);
    assert_eq!(res.evaluations, 2);
    Ok(())
}

#[test]
fn tolerance_equality_accepts_near_zero_midpoint() -> TestResult {
    let f   = |x: f64| x - 1.000_000_1;
    let cfg = BisectionCfg::new().set_equality(FloatEquality::Within(1e-6))?;

    let res = bisection(f, -1.0, 3.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::ExactRoot);
    assert_eq!(res.root, 1.0);
    assert_eq!(res.iterations, 1);
    Ok(())
}

#[test]
fn reversed_bracket_still_converges() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new().set_eps(1e-9)?;

    let res = bisection(f, 2.0, 1.0, cfg)?;

    assert_abs_diff_eq!(res.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
    Ok(())
}

#[test]
fn without_sign_change_collapses_to_an_end() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let cfg = BisectionCfg::new().set_eps(1e-8)?;

    let res = bisection(f, -1.0, 1.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_abs_diff_eq!(res.root, 1.0, epsilon = 1e-8);
    Ok(())
}

#[test]
fn require_sign_change_rejects_bracket() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let cfg = BisectionCfg::new().set_require_sign_change(true);

    let err = bisection(f, -1.0, 1.0, cfg).unwrap_err();

    assert_eq!(err, BisectionError::NoSignChange { start: -1.0, end: 1.0 });
    Ok(())
}

#[test]
fn require_sign_change_accepts_bracket() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new().set_require_sign_change(true).set_eps(1e-9)?;

    let res = bisection(f, 1.0, 2.0, cfg)?;

    assert_abs_diff_eq!(res.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
    Ok(())
}

#[test]
fn unreachable_tolerance_hits_iteration_cap() -> TestResult {
    // bracket stalls at one ulp, far above eps
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new().set_eps(1e-300)?.set_max_iter(1000)?;

    let err = bisection(f, 1.0, 2.0, cfg).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::Convergence(ConvergenceError { algorithm: "bisection", max_iter: 1000, last_estimate })
        if (last_estimate - std::f64::consts::SQRT_2).abs() < 1e-15
    ));
    Ok(())
}

#[test]
fn default_cap_converges_with_default_eps() -> TestResult {
    let f = |x: f64| x * x * x - 2.0 * x - 5.0;

    let res = bisection(f, 2.0, 3.0, BisectionCfg::new())?;

    assert_abs_diff_eq!(res.root, 2.094_551_481_542_326_5, epsilon = 1e-11);
    Ok(())
}

#[test]
fn non_finite_eval() {
    let f   = |x: f64| x.sqrt() - 2.0;
    let err = bisection(f, -1.0, 5.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == -1.0 && fx.is_nan()
    ));
}

#[test]
fn non_finite_bound() {
    let f   = |x: f64| x;
    let err = bisection(f, -1.0, f64::INFINITY, BisectionCfg::new()).unwrap_err();

    assert!(matches!(err, BisectionError::Domain(DomainError::NonFiniteArgument { .. })));
}

#[test]
fn invalid_eps() {
    let err = BisectionCfg::new().set_eps(-1.0).unwrap_err();
    assert_eq!(err, DomainError::InvalidTolerance { got: -1.0 });
}

#[test]
fn repeated_calls_are_bit_identical() -> TestResult {
    let f   = |x: f64| x.cos() - x;
    let cfg = BisectionCfg::new().set_eps(1e-10)?;

    let a = bisection(f, 1e-3, 1.0, cfg)?;
    let b = bisection(f, 1e-3, 1.0, cfg)?;

    assert_eq!(a.root.to_bits(), b.root.to_bits());
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn default_eps_converges_on_large_bracket() -> TestResult {
    let f = |x: f64| x * x - 2e10;

    let res = bisection(f, 1e5, 2e5, BisectionCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_abs_diff_eq!(res.root, 2e10_f64.sqrt(), epsilon = 1e-6);
    Ok(())
}

#[test]
fn explicit_eps_is_absolute_width() -> TestResult {
    let f   = |x: f64| x * x - 2e10;
    let cfg = BisectionCfg::new().set_eps(1e-12)?;

    let err = bisection(f, 1e5, 2e5, cfg).unwrap_err();

    assert!(matches!(err, BisectionError::Convergence(ConvergenceError { algorithm: "bisection", .. })));
    Ok(())
}
