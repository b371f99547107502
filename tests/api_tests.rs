//! Tests for the public builder API.
//!
//! ## Test Organization
//!
//! 1. **Fixed Point Builder** - Defaults, duplicates, validation
//! 2. **Newton Builder** - Defaults, duplicates, validation
//! 3. **Escape Builder** - Defaults, duplicates, validation
//! 4. **Grid Search Builder** - Defaults, duplicates, validation
//! 5. **Prelude** - End-to-end use through the prelude

use approx::assert_relative_eq;
use num_complex::Complex;
use numlab::prelude::*;

// ============================================================================
// Fixed Point Builder Tests
// ============================================================================

/// Test the default solver configuration.
#[test]
fn test_fixed_point_defaults() {
    let solver = FixedPoint::<f64>::new().build().unwrap();
    assert_eq!(solver.method, Method::Jacobi);
    assert_eq!(solver.max_iterations, 9);
    assert_eq!(solver.tolerance, None);
    assert_eq!(solver.initial_guess, None);
}

/// Test that setting a parameter twice is reported by name.
#[test]
fn test_fixed_point_duplicate() {
    let err = FixedPoint::<f64>::new()
        .method(GaussSeidel)
        .method(Jacobi)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        NumError::DuplicateParameter {
            parameter: "method"
        }
    );
    assert_eq!(
        err.to_string(),
        "Parameter 'method' was set multiple times"
    );
}

/// Test builder validation.
#[test]
fn test_fixed_point_invalid() {
    assert_eq!(
        FixedPoint::<f64>::new().max_iterations(0).build(),
        Err(NumError::InvalidIterations(0))
    );
    assert_eq!(
        FixedPoint::<f64>::new().tolerance(-1.0).build(),
        Err(NumError::InvalidTolerance(-1.0))
    );
    assert!(matches!(
        FixedPoint::new().initial_guess(vec![0.0, f64::NAN]).build(),
        Err(NumError::InvalidNumericValue(_))
    ));
}

/// Test a tolerance-driven Gauss-Seidel solve.
#[test]
fn test_fixed_point_solve() {
    let system = LinearSystem::new(2, vec![4.0, -1.0, -1.0, 4.0], vec![3.0, 3.0]).unwrap();
    let result = FixedPoint::new()
        .method(GaussSeidel)
        .tolerance(1e-12)
        .max_iterations(100)
        .build()
        .unwrap()
        .solve(&system)
        .unwrap();
    assert!(result.converged);
    assert_relative_eq!(result.solution[0], 1.0, epsilon = 1e-10);
    assert_relative_eq!(result.solution[1], 1.0, epsilon = 1e-10);
}

// ============================================================================
// Newton Builder Tests
// ============================================================================

/// Test the default solver configuration.
#[test]
fn test_newton_defaults() {
    let solver = Newton::<f64>::new().build().unwrap();
    assert_eq!(solver.tolerance.criterion, Criterion::Residual);
    assert_relative_eq!(solver.tolerance.eps, 1e-8);
    assert_eq!(solver.max_iterations, 1000);
}

/// Test duplicates and validation.
#[test]
fn test_newton_invalid() {
    assert_eq!(
        Newton::<f64>::new().tolerance(1e-6).tolerance(1e-7).build(),
        Err(NumError::DuplicateParameter {
            parameter: "tolerance"
        })
    );
    assert_eq!(
        Newton::<f64>::new().tolerance(0.0).build(),
        Err(NumError::InvalidTolerance(0.0))
    );
    assert_eq!(
        Newton::<f64>::new().max_iterations(0).build(),
        Err(NumError::InvalidIterations(0))
    );
}

/// Test a step-length criterion solve of x^2 = 2.
#[test]
fn test_newton_solve() {
    let root = Newton::new()
        .criterion(Criterion::Step)
        .tolerance(1e-12)
        .build()
        .unwrap()
        .solve(|x: f64| x * x - 2.0, |x| 2.0 * x, 1.0)
        .unwrap();
    assert_relative_eq!(root.x, 2f64.sqrt(), epsilon = 1e-12);
    assert_eq!(root.trace.len(), root.iterations + 1);
}

// ============================================================================
// Escape Builder Tests
// ============================================================================

/// Test the default render configuration.
#[test]
fn test_escape_defaults() {
    let renderer = Escape::<f64>::new().build().unwrap();
    assert_eq!(renderer.fractal, Mandelbrot);
    assert_eq!(renderer.region, Region::default());
    assert_eq!(renderer.width, DEFAULT_SIZE);
    assert_eq!(renderer.height, DEFAULT_SIZE);
    assert_eq!(renderer.max_depth, DEFAULT_MAX_DEPTH);
}

/// Test duplicates and validation.
#[test]
fn test_escape_invalid() {
    assert_eq!(
        Escape::<f64>::new().max_depth(10).max_depth(20).build(),
        Err(NumError::DuplicateParameter {
            parameter: "max_depth"
        })
    );
    assert_eq!(
        Escape::<f64>::new().resolution(0, 10).build(),
        Err(NumError::InvalidResolution {
            width: 0,
            height: 10
        })
    );
    assert_eq!(
        Escape::<f64>::new().max_depth(0).build(),
        Err(NumError::InvalidIterations(0))
    );
    assert!(matches!(
        Escape::new()
            .fractal(Julia {
                c: Complex::new(f64::NAN, 0.0)
            })
            .build(),
        Err(NumError::InvalidNumericValue(_))
    ));
}

/// Test a small Julia render end to end.
#[test]
fn test_escape_render() {
    let map = Escape::new()
        .fractal(Julia {
            c: Complex::new(-0.8, 0.156),
        })
        .resolution(24, 12)
        .max_depth(30)
        .parallel(false)
        .build()
        .unwrap()
        .render()
        .unwrap();
    assert_eq!(map.width(), 24);
    assert_eq!(map.height(), 12);

    let image = Gradient.paint(&map).unwrap();
    let bytes = encode_ppm(&image);
    assert_eq!(bytes.len(), b"P6\n24 12\n255\n".len() + 24 * 12 * 3);
}

// ============================================================================
// Grid Search Builder Tests
// ============================================================================

/// Test the default search configuration.
#[test]
fn test_grid_search_defaults() {
    let solver = GridSearch::<f64>::new().build().unwrap();
    assert_eq!(solver.x_range, (0.0, 75.0));
    assert_eq!(solver.y_range, (0.0, 75.0));
    assert_eq!(solver.step, 1.0);
    assert!(!solver.keep_points);
}

/// Test duplicates and validation.
#[test]
fn test_grid_search_invalid() {
    assert_eq!(
        GridSearch::<f64>::new().step(1.0).step(0.5).build(),
        Err(NumError::DuplicateParameter { parameter: "step" })
    );
    assert_eq!(
        GridSearch::<f64>::new().step(-0.5).build(),
        Err(NumError::InvalidStep(-0.5))
    );
    assert_eq!(
        GridSearch::<f64>::new().x_range(5.0, 1.0).build(),
        Err(NumError::InvalidInterval {
            lower: 5.0,
            upper: 1.0
        })
    );
}

/// Test that grid search stays below the exact vertex optimum.
#[test]
fn test_grid_search_solve() {
    let program = LinearProgram::new(143.0, 60.0)
        .constraint(120.0, 210.0, 15000.0)
        .constraint(110.0, 30.0, 4000.0)
        .constraint(1.0, 1.0, 75.0);
    let grid = GridSearch::new().build().unwrap().solve(&program).unwrap();
    let exact = solve_vertices(&program).unwrap();
    assert_eq!(grid.best, Point2::new(22.0, 52.0));
    assert!(grid.value < exact.value);
}

// ============================================================================
// Prelude Tests
// ============================================================================

/// Test a mix of free functions exported through the prelude.
#[test]
fn test_prelude_functions() {
    assert_eq!(binomial(5, 2), Ok(10));
    assert_relative_eq!(sqrt_newton(2.0, 1e-12).unwrap(), 2f64.sqrt(), epsilon = 1e-12);

    let fit = fit_line(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
    assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);

    let hull = convex_hull(&[
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
    ])
    .unwrap();
    assert_relative_eq!(polygon_area(&hull), 0.5);
}
