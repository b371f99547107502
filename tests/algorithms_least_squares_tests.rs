#![cfg(feature = "dev")]
//! Tests for least-squares fitting.
//!
//! ## Test Organization
//!
//! 1. **Accumulators** - SIMD and scalar normal-equation sums
//! 2. **Straight Lines** - Exact and noisy data, validation
//! 3. **Polynomials** - Coefficient recovery
//! 4. **Conics** - Classification, fitting and curve extraction

use approx::assert_relative_eq;
use core::f64::consts::PI;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use numlab::internals::algorithms::hull::{convex_hull, polygon_area};
use numlab::internals::algorithms::least_squares::accumulators::{
    accumulate_line_scalar, accumulate_line_simd,
};
use numlab::internals::algorithms::least_squares::conic::{
    ellipse_samples, fit_conic, implicit_curve, Conic, ConicKind, EllipseShape,
};
use numlab::internals::algorithms::least_squares::{fit_line, fit_polynomial};
use numlab::internals::primitives::errors::NumError;
use numlab::internals::primitives::grid::{linspace, Region};
use numlab::internals::primitives::point::Point2;

// ============================================================================
// Accumulator Tests
// ============================================================================

/// Test that the SIMD sums match the scalar sums, including the remainder lanes.
#[test]
fn test_simd_matches_scalar() {
    let x: Vec<f64> = (0..37).map(|i| i as f64 * 0.3 - 2.0).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin() + 0.5 * v).collect();

    let simd = accumulate_line_simd(&x, &y);
    let scalar = accumulate_line_scalar(&x, &y);
    assert_eq!(simd.n, 37);
    assert_eq!(scalar.n, 37);
    assert_relative_eq!(simd.sx, scalar.sx, epsilon = 1e-10);
    assert_relative_eq!(simd.sxx, scalar.sxx, epsilon = 1e-10);
    assert_relative_eq!(simd.sy, scalar.sy, epsilon = 1e-10);
    assert_relative_eq!(simd.sxy, scalar.sxy, epsilon = 1e-10);
}

// ============================================================================
// Straight Line Tests
// ============================================================================

/// Test an exact line.
#[test]
fn test_fit_line_exact() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [1.0, 3.0, 5.0, 7.0, 9.0];
    let fit = fit_line(&x, &y).unwrap();
    assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
    assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-12);
    assert_relative_eq!(fit.rss, 0.0, epsilon = 1e-20);
    assert_relative_eq!(fit.r_squared, 1.0, epsilon = 1e-12);
    assert_eq!(fit.n, 5);
    assert_relative_eq!(fit.predict(10.0), 21.0, epsilon = 1e-10);
}

/// Test single precision through the scalar path.
#[test]
fn test_fit_line_f32() {
    let x = [0.0f32, 1.0, 2.0, 3.0];
    let y = [0.5f32, 1.0, 1.5, 2.0];
    let fit = fit_line(&x, &y).unwrap();
    assert_relative_eq!(fit.slope, 0.5, epsilon = 1e-5);
    assert_relative_eq!(fit.intercept, 0.5, epsilon = 1e-5);
}

/// Test recovery of y = 0.5 x + 0.5 from uniformly perturbed samples.
#[test]
fn test_fit_line_noisy() {
    let mut rng = StdRng::seed_from_u64(42);
    let x = linspace(0.0, 10.0, 21);
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 0.5 * xi + 0.5 + 2.0 * (rng.random::<f64>() - 0.5))
        .collect();

    let fit = fit_line(&x, &y).unwrap();
    assert_eq!(fit.n, 21);
    assert_relative_eq!(fit.slope, 0.5, epsilon = 0.2);
    assert_relative_eq!(fit.intercept, 0.5, epsilon = 1.0);
    assert!(fit.r_squared > 0.5 && fit.r_squared <= 1.0);
}

/// Test input validation.
#[test]
fn test_fit_line_invalid() {
    assert_eq!(
        fit_line(&[1.0], &[1.0]),
        Err(NumError::TooFewPoints { got: 1, min: 2 })
    );
    assert_eq!(
        fit_line(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
        Err(NumError::MismatchedInputs { x_len: 3, y_len: 2 })
    );
    assert_eq!(fit_line::<f64>(&[], &[]), Err(NumError::EmptyInput));
    assert_eq!(
        fit_line(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]),
        Err(NumError::SingularSystem)
    );
}

// ============================================================================
// Polynomial Tests
// ============================================================================

/// Test recovery of a quadratic.
#[test]
fn test_fit_polynomial() {
    let x = linspace(-1.0, 2.0, 6);
    let y: Vec<f64> = x.iter().map(|&v| 1.0 - v + 2.0 * v * v).collect();
    let fit = fit_polynomial(&x, &y, 2).unwrap();

    assert_eq!(fit.degree(), 2);
    assert_relative_eq!(fit.coefficients[0], 1.0, epsilon = 1e-9);
    assert_relative_eq!(fit.coefficients[1], -1.0, epsilon = 1e-9);
    assert_relative_eq!(fit.coefficients[2], 2.0, epsilon = 1e-9);
    assert_relative_eq!(fit.predict(3.0), 16.0, epsilon = 1e-8);
    assert_relative_eq!(fit.r_squared, 1.0, epsilon = 1e-9);
}

/// Test that a polynomial needs more points than coefficients.
#[test]
fn test_fit_polynomial_too_few() {
    assert_eq!(
        fit_polynomial(&[0.0, 1.0], &[0.0, 1.0], 2),
        Err(NumError::TooFewPoints { got: 2, min: 3 })
    );
}

// ============================================================================
// Conic Tests
// ============================================================================

/// Test classification by discriminant.
#[test]
fn test_conic_kind() {
    let circle = Conic {
        a: 1.0,
        b: 1.0,
        c: 0.0,
        d: 0.0,
        e: 0.0,
    };
    assert_eq!(circle.kind(1e-12), ConicKind::Ellipse);
    assert_relative_eq!(circle.discriminant(), -4.0);
    assert_eq!(circle.center(), Some(Point2::new(0.0, 0.0)));

    let hyperbola = Conic { b: -1.0, ..circle };
    assert_eq!(hyperbola.kind(1e-12), ConicKind::Hyperbola);

    let parabola = Conic {
        b: 0.0,
        e: 1.0,
        ..circle
    };
    assert_eq!(parabola.kind(1e-12), ConicKind::Parabola);
    assert_eq!(parabola.center(), None);
}

/// Test the parametric ellipse.
#[test]
fn test_ellipse_shape() {
    let shape = EllipseShape::<f64>::default();
    let p = shape.at(0.0);
    // t = 0: x = a cos(th) + x0, y = b cos(th)
    assert_relative_eq!(p.x, 2.0 * (PI / 8.0).cos() + 2.0, epsilon = 1e-12);
    assert_relative_eq!(p.y, 1.5 * (PI / 8.0).cos(), epsilon = 1e-12);

    let pts = ellipse_samples(&shape, 100, |_| (0.0, 0.0));
    assert_eq!(pts.len(), 101);
    assert_relative_eq!(pts[0].x, pts[100].x, epsilon = 1e-12);
}

/// Test fitting noise-free ellipse samples.
#[test]
fn test_fit_conic_exact() {
    let pts = ellipse_samples(&EllipseShape::<f64>::default(), 100, |_| (0.0, 0.0));
    let conic = fit_conic(&pts).unwrap();

    assert_eq!(conic.kind(1e-9), ConicKind::Ellipse);
    for p in &pts {
        assert!(conic.evaluate(p.x, p.y).abs() < 1e-8);
    }
    let centre = conic.center().unwrap();
    assert_relative_eq!(centre.x, 2.0, epsilon = 1e-8);
    assert_relative_eq!(centre.y, 0.0, epsilon = 1e-8);
}

/// Test fitting perturbed samples.
#[test]
fn test_fit_conic_noisy() {
    let mut rng = StdRng::seed_from_u64(7);
    let pts = ellipse_samples(&EllipseShape::<f64>::default(), 100, |_| {
        (
            0.5 * (rng.random::<f64>() - 0.5),
            0.5 * (rng.random::<f64>() - 0.5),
        )
    });
    let conic = fit_conic(&pts).unwrap();
    assert_eq!(conic.kind(1e-9), ConicKind::Ellipse);
    let centre = conic.center().unwrap();
    assert_relative_eq!(centre.x, 2.0, epsilon = 0.3);
    assert_relative_eq!(centre.y, 0.0, epsilon = 0.3);
}

/// Test the minimum sample count.
#[test]
fn test_fit_conic_too_few() {
    let pts = ellipse_samples(&EllipseShape::<f64>::default(), 3, |_| (0.0, 0.0));
    assert_eq!(
        fit_conic(&pts),
        Err(NumError::TooFewPoints { got: 4, min: 5 })
    );
}

/// Test extracting and outlining the fitted curve.
#[test]
fn test_implicit_curve_outline() {
    let shape = EllipseShape::<f64>::default();
    let pts = ellipse_samples(&shape, 100, |_| (0.0, 0.0));
    let conic = fit_conic(&pts).unwrap();
    let region = Region::new(-0.5, 4.5, -2.5, 2.5).unwrap();

    let curve = implicit_curve(&conic, &region, 0.05, 1e-4).unwrap();
    assert!(curve.len() > 20);
    for p in &curve {
        assert!(region.contains(p.x, p.y));
        assert!(conic.evaluate(p.x, p.y).powi(2) < 1e-4);
    }

    // Area of the ellipse is pi |det| of the parametrisation
    let (s, c) = shape.theta.sin_cos();
    let exact = PI * (shape.a * shape.a + shape.b * shape.b) * s * c;
    let hull = convex_hull(&curve).unwrap();
    let area = polygon_area(&hull);
    assert!(
        (area - exact).abs() < 0.05 * exact,
        "hull area {area} vs ellipse {exact}"
    );
}

/// Test curve extraction validation.
#[test]
fn test_implicit_curve_invalid() {
    let conic = Conic {
        a: 1.0,
        b: 1.0,
        c: 0.0,
        d: 0.0,
        e: 0.0,
    };
    let region = Region::new(-1.0, 1.0, -1.0, 1.0).unwrap();
    assert_eq!(
        implicit_curve(&conic, &region, 0.0, 1e-4),
        Err(NumError::InvalidStep(0.0))
    );
    assert_eq!(
        implicit_curve(&conic, &region, 0.1, -1.0),
        Err(NumError::InvalidTolerance(-1.0))
    );
}
