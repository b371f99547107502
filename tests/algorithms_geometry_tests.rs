#![cfg(feature = "dev")]
//! Tests for convex hulls and two-variable linear programs.
//!
//! ## Test Organization
//!
//! 1. **Convex Hull** - Gift wrapping, collinear and degenerate input
//! 2. **Polygon Area** - Shoelace formula
//! 3. **Linear Programs** - Feasibility, grid search, vertex enumeration

use approx::assert_relative_eq;
use numlab::internals::algorithms::hull::{convex_hull, polygon_area, rotation};
use numlab::internals::algorithms::optimization::{
    solve_vertices, GridSearchSolver, LinearConstraint, LinearProgram,
};
use numlab::internals::primitives::errors::NumError;
use numlab::internals::primitives::point::Point2;

fn pts(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
    coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

fn lesson_program() -> LinearProgram<f64> {
    LinearProgram::new(143.0, 60.0)
        .constraint(120.0, 210.0, 15000.0)
        .constraint(110.0, 30.0, 4000.0)
        .constraint(1.0, 1.0, 75.0)
}

fn grid(step: f64, keep_points: bool) -> GridSearchSolver<f64> {
    GridSearchSolver {
        x_range: (0.0, 75.0),
        y_range: (0.0, 75.0),
        step,
        keep_points,
    }
}

// ============================================================================
// Convex Hull Tests
// ============================================================================

/// Test the orientation sign.
#[test]
fn test_rotation_sign() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(1.0, 0.0);
    assert!(rotation(&a, &b, &Point2::new(1.0, 1.0)) < 0.0);
    assert!(rotation(&a, &b, &Point2::new(1.0, -1.0)) > 0.0);
    assert_eq!(rotation(&a, &b, &Point2::new(2.0, 0.0)), 0.0);
}

/// Test the four-point example with one interior point.
#[test]
fn test_hull_small() {
    let hull = convex_hull(&pts(&[(1.0, 1.0), (1.0, 3.0), (2.0, 2.0), (3.0, 2.0)])).unwrap();
    assert_eq!(hull, pts(&[(1.0, 1.0), (3.0, 2.0), (1.0, 3.0)]));
}

/// Test that interior and edge points are dropped.
#[test]
fn test_hull_square_with_edge_points() {
    let input = pts(&[
        (0.0, 0.0),
        (2.0, 0.0),
        (2.0, 2.0),
        (0.0, 2.0),
        (1.0, 1.0),
        (1.0, 0.0),
        (0.0, 1.0),
    ]);
    let hull = convex_hull(&input).unwrap();
    assert_eq!(hull, pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]));
}

/// Test that the hull does not depend on input order or duplicates.
#[test]
fn test_hull_order_independent() {
    let a = convex_hull(&pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.2, 0.2)])).unwrap();
    let b = convex_hull(&pts(&[
        (0.2, 0.2),
        (0.0, 1.0),
        (0.0, 1.0),
        (1.0, 0.0),
        (0.0, 0.0),
    ]))
    .unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 3);
}

/// Test collinear input.
#[test]
fn test_hull_collinear() {
    let hull = convex_hull(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])).unwrap();
    assert_eq!(hull, pts(&[(0.0, 0.0), (2.0, 2.0)]));
}

/// Test degenerate and invalid input.
#[test]
fn test_hull_invalid() {
    assert_eq!(
        convex_hull(&pts(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)])),
        Err(NumError::TooFewPoints { got: 2, min: 3 })
    );
    assert!(matches!(
        convex_hull(&pts(&[(0.0, 0.0), (f64::NAN, 1.0), (1.0, 1.0)])),
        Err(NumError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Polygon Area Tests
// ============================================================================

/// Test signed area.
#[test]
fn test_polygon_area() {
    let ccw = pts(&[(1.0, 1.0), (3.0, 2.0), (1.0, 3.0)]);
    assert_relative_eq!(polygon_area(&ccw), 2.0);

    let cw: Vec<_> = ccw.iter().rev().copied().collect();
    assert_relative_eq!(polygon_area(&cw), -2.0);
    assert_eq!(polygon_area(&ccw[..2]), 0.0);
}

// ============================================================================
// Linear Program Tests
// ============================================================================

/// Test constraint slack and feasibility.
#[test]
fn test_feasibility() {
    let c = LinearConstraint::new(1.0, 1.0, 75.0);
    assert_relative_eq!(c.slack(70.0, 10.0), 5.0);

    let lp = lesson_program();
    assert!(lp.is_feasible(22.0, 52.0));
    assert!(!lp.is_feasible(22.0, 53.0));
    assert!(!lp.is_feasible(-1.0, 0.0));
    assert_relative_eq!(lp.objective(22.0, 52.0), 6266.0);
}

/// Test the integer grid search.
#[test]
fn test_grid_search_integer() {
    let result = grid(1.0, false).solve(&lesson_program()).unwrap();
    assert_eq!(result.best, Point2::new(22.0, 52.0));
    assert_relative_eq!(result.value, 6266.0);
    assert_eq!(result.feasible_count, 1835);
    assert!(result.points.is_none());
}

/// Test the fine grid search.
#[test]
fn test_grid_search_fine() {
    let result = grid(1.0 / 20.0, true).solve(&lesson_program()).unwrap();
    assert_relative_eq!(result.best.x, 21.85, epsilon = 1e-9);
    assert_relative_eq!(result.best.y, 53.15, epsilon = 1e-9);
    assert_relative_eq!(result.value, 6313.55, epsilon = 1e-6);
    assert_eq!(
        result.points.as_ref().map(Vec::len),
        Some(result.feasible_count)
    );
}

/// Test the exact optimum at the vertex of the first two constraints.
#[test]
fn test_solve_vertices() {
    let opt = solve_vertices(&lesson_program()).unwrap();
    assert_relative_eq!(opt.point.x, 21.875, epsilon = 1e-9);
    assert_relative_eq!(opt.point.y, 53.125, epsilon = 1e-9);
    assert_relative_eq!(opt.value, 6315.625, epsilon = 1e-6);

    let grid_best = grid(1.0, false).solve(&lesson_program()).unwrap();
    assert!(grid_best.value <= opt.value);
}

/// Test programs with no feasible point.
#[test]
fn test_infeasible() {
    let lp = LinearProgram::new(1.0, 1.0).constraint(1.0, 1.0, -1.0);
    assert_eq!(grid(1.0, false).solve(&lp), Err(NumError::Infeasible));
    assert_eq!(solve_vertices(&lp), Err(NumError::Infeasible));
}

/// Test that an unbounded objective is not reported as an optimum.
#[test]
fn test_unbounded() {
    let lp = LinearProgram::new(1.0, 1.0).constraint(1.0, -1.0, 1.0);
    assert_eq!(solve_vertices(&lp), Err(NumError::Infeasible));

    let bounded = LinearProgram::new(-1.0, -1.0).constraint(1.0, -1.0, 1.0);
    let opt = solve_vertices(&bounded).unwrap();
    assert_relative_eq!(opt.value, 0.0);
}

/// Test non-finite coefficients.
#[test]
fn test_program_invalid() {
    let lp = LinearProgram::new(f64::NAN, 1.0);
    assert!(matches!(
        solve_vertices(&lp),
        Err(NumError::InvalidNumericValue(_))
    ));
}
