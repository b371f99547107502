#![cfg(feature = "dev")]
//! Tests for the math layer.
//!
//! ## Test Organization
//!
//! 1. **Powers** - Repeated multiplication and negative exponents
//! 2. **Factorials and Binomials** - Exact values and overflow
//! 3. **Taylor Series** - Truncation and range reduction
//! 4. **Sequences** - Quadratic orbits, stability, partial sums
//! 5. **Dense Linear Algebra** - Square and least-squares solves

use approx::assert_relative_eq;
use core::f64::consts::{FRAC_PI_6, LN_2, PI};
use numlab::internals::math::linalg::FloatLinalg;
use numlab::internals::math::power::{binomial, factorial, raise_power, raise_power_unsigned};
use numlab::internals::math::sequences::{
    alternating_harmonic, fixed_point_stability, mean, partial_sums, quadratic_fixed_points,
    quadratic_orbit, Stability,
};
use numlab::internals::math::taylor::{sin_periodic, sin_series, sin_table, sin_taylor};
use numlab::internals::primitives::errors::NumError;

// ============================================================================
// Power Tests
// ============================================================================

/// Test positive, zero and negative exponents.
#[test]
fn test_raise_power() {
    assert_relative_eq!(raise_power(2.0, 10), 1024.0);
    assert_relative_eq!(raise_power(5.0, 0), 1.0);
    assert_relative_eq!(raise_power(2.0, -2), 0.25);
    assert_relative_eq!(raise_power(-3.0, 3), -27.0);
}

/// Test that the unsigned variant maps negative powers to zero.
#[test]
fn test_raise_power_unsigned() {
    assert_relative_eq!(raise_power_unsigned(2.0, 3), 8.0);
    assert_eq!(raise_power_unsigned(2.0, -2), 0.0);
}

// ============================================================================
// Factorial and Binomial Tests
// ============================================================================

/// Test exact factorials up to the 64-bit limit.
#[test]
fn test_factorial() {
    assert_eq!(factorial(0), Ok(1));
    assert_eq!(factorial(5), Ok(120));
    assert_eq!(factorial(20), Ok(2_432_902_008_176_640_000));
    assert_eq!(
        factorial(21),
        Err(NumError::Overflow {
            operation: "factorial",
            n: 21
        })
    );
}

/// Test small binomial coefficients.
#[test]
fn test_binomial_small() {
    assert_eq!(binomial(5, 2), Ok(10));
    assert_eq!(binomial(0, 0), Ok(1));
    assert_eq!(binomial(10, 0), Ok(1));
    assert_eq!(binomial(10, 10), Ok(1));
    assert_eq!(binomial(3, 5), Ok(0));
    assert_eq!(binomial(15, 8), Ok(6435));
}

/// Test binomials far beyond the factorial limit.
#[test]
fn test_binomial_large() {
    assert_eq!(binomial(60, 30), Ok(118_264_581_564_861_424));
    assert_eq!(binomial(67, 33), Ok(14_226_520_737_620_288_370));
    assert_eq!(
        binomial(68, 34),
        Err(NumError::Overflow {
            operation: "binomial",
            n: 68
        })
    );
}

// ============================================================================
// Taylor Series Tests
// ============================================================================

/// Test the four-term series near zero.
#[test]
fn test_sin_taylor_small_arguments() {
    assert_eq!(sin_taylor(0.0), 0.0);
    assert_relative_eq!(sin_taylor(FRAC_PI_6), 0.5, epsilon = 1e-7);
    assert_relative_eq!(sin_series(0.3, 1), 0.3);
}

/// Test that the truncated series degrades away from zero.
#[test]
fn test_sin_series_large_argument() {
    let err = (sin_taylor(PI) - PI.sin()).abs();
    assert!(err > 1e-2, "four terms at pi should be visibly off, got {err}");
}

/// Test that range reduction restores accuracy.
#[test]
fn test_sin_periodic() {
    assert_relative_eq!(sin_periodic(PI, 4), 0.0, epsilon = 1e-12);
    assert_relative_eq!(sin_periodic(10.0, 8), 10.0f64.sin(), epsilon = 1e-9);
    assert_relative_eq!(sin_periodic(-7.0, 8), (-7.0f64).sin(), epsilon = 1e-9);
    assert!(sin_periodic(f64::NAN, 4).is_nan());
}

/// Test the comparison table.
#[test]
fn test_sin_table() {
    let table = sin_table(-PI, PI, 13, 4, true);
    assert_eq!(table.len(), 13);
    assert_relative_eq!(table[0].x, -PI);
    for row in &table {
        assert!(row.error() < 1e-3);
    }

    let raw = sin_table(-PI, PI, 13, 4, false);
    assert!(raw[0].error() > 1e-2);
}

// ============================================================================
// Sequence Tests
// ============================================================================

/// Test a periodic orbit of the quadratic map.
#[test]
fn test_quadratic_orbit_cycle() {
    let orbit = quadratic_orbit(0.0, -1.0, 5);
    assert_eq!(orbit, vec![0.0, -1.0, 0.0, -1.0, 0.0]);
}

/// Test that a diverging orbit reaches infinity and stays there.
#[test]
fn test_quadratic_orbit_diverges() {
    let orbit = quadratic_orbit(2.0_f64, 1.0, 20);
    assert!(orbit.last().unwrap().is_infinite());
}

/// Test the fixed points of x^2 + c.
#[test]
fn test_quadratic_fixed_points() {
    let (lo, hi) = quadratic_fixed_points(-1.0).unwrap();
    assert_relative_eq!(lo, (1.0 - 5.0f64.sqrt()) / 2.0);
    assert_relative_eq!(hi, (1.0 + 5.0f64.sqrt()) / 2.0);
    assert!(quadratic_fixed_points(0.5).is_none());
}

/// Test stability classification.
#[test]
fn test_fixed_point_stability() {
    let (lo, hi) = quadratic_fixed_points(0.0).unwrap();
    assert_eq!(fixed_point_stability(lo), Stability::Attracting);
    assert_eq!(fixed_point_stability(hi), Stability::Repelling);

    let (lo, _) = quadratic_fixed_points(-0.75).unwrap();
    assert_eq!(fixed_point_stability(lo), Stability::Neutral);

    let (lo, hi) = quadratic_fixed_points(-1.0).unwrap();
    assert_eq!(fixed_point_stability(lo), Stability::Repelling);
    assert_eq!(fixed_point_stability(hi), Stability::Repelling);
}

/// Test the alternating harmonic sequence and its partial sums.
#[test]
fn test_alternating_harmonic() {
    let v: Vec<f64> = alternating_harmonic(4);
    assert_eq!(v.len(), 4);
    assert_relative_eq!(v[0], 1.0);
    assert_relative_eq!(v[1], -0.5);
    assert_relative_eq!(v[2], 1.0 / 3.0);
    assert_relative_eq!(v[3], -0.25);

    let s = partial_sums(&v);
    assert_relative_eq!(s[1], 0.5);
    assert_relative_eq!(s[3], 7.0 / 12.0);
}

/// Test that the partial sums approach ln 2.
#[test]
fn test_alternating_harmonic_limit() {
    let s = partial_sums(&alternating_harmonic::<f64>(10_000));
    assert_relative_eq!(*s.last().unwrap(), LN_2, epsilon = 1e-4);
}

/// Test mean and its validation.
#[test]
fn test_mean() {
    assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
    assert_eq!(mean::<f64>(&[]), Err(NumError::EmptyInput));
    assert!(matches!(
        mean(&[1.0, f64::NAN]),
        Err(NumError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Dense Linear Algebra Tests
// ============================================================================

/// Test a square solve.
#[test]
fn test_solve_square() {
    let a = [7.0, -1.0, 3.0, -5.0];
    let b = [5.0, -7.0];
    let x = f64::solve_square(&a, &b, 2).unwrap();
    assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
}

/// Test that malformed shapes are rejected.
#[test]
fn test_solve_square_bad_shape() {
    assert!(f64::solve_square(&[1.0, 2.0, 3.0], &[1.0, 2.0], 2).is_none());
    assert!(f64::solve_least_squares(&[1.0, 2.0], &[1.0], 1, 2).is_none());
}

/// Test an overdetermined least-squares solve.
#[test]
fn test_solve_least_squares() {
    // Rows [1, x] for x = 0..4, y = 1 + 2x exactly
    let a = [1.0, 0.0, 1.0, 1.0, 1.0, 2.0, 1.0, 3.0];
    let b = [1.0, 3.0, 5.0, 7.0];
    let c = f64::solve_least_squares(&a, &b, 4, 2).unwrap();
    assert_relative_eq!(c[0], 1.0, epsilon = 1e-10);
    assert_relative_eq!(c[1], 2.0, epsilon = 1e-10);

    let c32 = f32::solve_least_squares(&[1.0, 0.0, 1.0, 1.0, 1.0, 2.0], &[1.0, 3.0, 5.0], 3, 2)
        .unwrap();
    assert_relative_eq!(c32[1], 2.0, epsilon = 1e-4);
}
