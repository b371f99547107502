//! Two-variable linear programming.
//!
//! ## Purpose
//!
//! This module maximizes a linear objective `c_x x + c_y y` over the first
//! quadrant cut by linear inequality constraints. Two solvers are provided:
//! an exhaustive grid search and an exact vertex enumeration.
//!
//! ## Design notes
//!
//! * **Grid search**: Evaluates every grid point of a rectangle, keeping the
//!   best feasible one. Coarse grids yield integer solutions; refining the
//!   step approaches the continuous optimum.
//! * **Vertex enumeration**: The optimum of a bounded linear program sits on a
//!   vertex, and with two variables every vertex is the intersection of two
//!   boundary lines.
//!
//! ## Invariants
//!
//! * The grid search scans `x` in the outer loop and keeps the first of equal
//!   maxima.
//! * A vertex is accepted when it violates no constraint by more than a
//!   relative tolerance.
//!
//! ## Non-goals
//!
//! * This module does not handle more than two variables or equality constraints.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::lit;
use crate::primitives::errors::NumError;
use crate::primitives::grid::arange;
use crate::primitives::point::Point2;

// ============================================================================
// Problem Definition
// ============================================================================

/// Half-plane `a x + b y <= bound`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearConstraint<T> {
    /// Coefficient of `x`.
    pub a: T,
    /// Coefficient of `y`.
    pub b: T,
    /// Right-hand side.
    pub bound: T,
}

impl<T: Float> LinearConstraint<T> {
    /// Constraint `a x + b y <= bound`.
    pub fn new(a: T, b: T, bound: T) -> Self {
        Self { a, b, bound }
    }

    /// `a x + b y - bound`; non-positive when satisfied.
    #[inline]
    pub fn slack(&self, x: T, y: T) -> T {
        self.a * x + self.b * y - self.bound
    }
}

/// Maximize `c_x x + c_y y` subject to `constraints` and `x, y >= 0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearProgram<T> {
    /// Objective coefficient of `x`.
    pub c_x: T,
    /// Objective coefficient of `y`.
    pub c_y: T,
    /// Inequality constraints.
    pub constraints: Vec<LinearConstraint<T>>,
}

impl<T: Float> LinearProgram<T> {
    /// Unconstrained program with the given objective.
    pub fn new(c_x: T, c_y: T) -> Self {
        Self {
            c_x,
            c_y,
            constraints: Vec::new(),
        }
    }

    /// Add the constraint `a x + b y <= bound`.
    pub fn constraint(mut self, a: T, b: T, bound: T) -> Self {
        self.constraints.push(LinearConstraint::new(a, b, bound));
        self
    }

    /// Objective value at `(x, y)`.
    #[inline]
    pub fn objective(&self, x: T, y: T) -> T {
        self.c_x * x + self.c_y * y
    }

    /// True if `(x, y)` satisfies every constraint exactly.
    pub fn is_feasible(&self, x: T, y: T) -> bool {
        self.is_feasible_within(x, y, T::zero())
    }

    fn is_feasible_within(&self, x: T, y: T, tol: T) -> bool {
        x >= -tol
            && y >= -tol
            && self.constraints.iter().all(|c| {
                let scale = T::one().max(c.bound.abs());
                c.slack(x, y) <= tol * scale
            })
    }

    /// Reject non-finite coefficients.
    pub fn validate(&self) -> Result<(), NumError> {
        Validator::validate_finite(&[self.c_x, self.c_y], "objective")?;
        for c in &self.constraints {
            Validator::validate_finite(&[c.a, c.b, c.bound], "constraint")?;
        }
        Ok(())
    }
}

/// Best point found by a solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Optimum<T> {
    /// Maximizer.
    pub point: Point2<T>,
    /// Objective value at `point`.
    pub value: T,
}

// ============================================================================
// Grid Search
// ============================================================================

/// Outcome of [`GridSearchSolver::solve`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSearchResult<T> {
    /// Best feasible grid point.
    pub best: Point2<T>,
    /// Objective value at `best`.
    pub value: T,
    /// Number of feasible grid points.
    pub feasible_count: usize,
    /// Every feasible grid point, when requested.
    pub points: Option<Vec<Point2<T>>>,
}

/// Exhaustive search over `[x0, x1) x [y0, y1)`; build with `GridSearch::new()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSearchSolver<T> {
    /// Half-open `x` range.
    pub x_range: (T, T),
    /// Half-open `y` range.
    pub y_range: (T, T),
    /// Grid spacing.
    pub step: T,
    /// Collect feasible points into the result.
    pub keep_points: bool,
}

impl<T: Float> GridSearchSolver<T> {
    /// Maximize `program` over the grid.
    pub fn solve(&self, program: &LinearProgram<T>) -> Result<GridSearchResult<T>, NumError> {
        program.validate()?;
        let xs = arange(self.x_range.0, self.x_range.1, self.step)?;
        let ys = arange(self.y_range.0, self.y_range.1, self.step)?;

        let mut best: Option<Optimum<T>> = None;
        let mut feasible_count = 0usize;
        let mut points = self.keep_points.then(Vec::new);

        for &x in &xs {
            for &y in &ys {
                if !program.is_feasible(x, y) {
                    continue;
                }
                feasible_count += 1;
                if let Some(pts) = points.as_mut() {
                    pts.push(Point2::new(x, y));
                }
                let value = program.objective(x, y);
                if best.map_or(true, |b| value > b.value) {
                    best = Some(Optimum {
                        point: Point2::new(x, y),
                        value,
                    });
                }
            }
        }

        let best = best.ok_or(NumError::Infeasible)?;
        debug!(
            grid = xs.len() * ys.len(),
            feasible = feasible_count,
            "grid search done"
        );
        Ok(GridSearchResult {
            best: best.point,
            value: best.value,
            feasible_count,
            points,
        })
    }
}

// ============================================================================
// Vertex Enumeration
// ============================================================================

/// Exact optimum by enumerating vertices of the feasible polygon.
///
/// Returns `Infeasible` when no vertex is feasible or the objective is
/// unbounded on the feasible set.
pub fn solve_vertices<T: Float>(program: &LinearProgram<T>) -> Result<Optimum<T>, NumError> {
    program.validate()?;
    let tol = lit::<T>(1e-9);

    // Boundary lines a x + b y = bound, including both axes.
    let mut lines: Vec<LinearConstraint<T>> = Vec::with_capacity(program.constraints.len() + 2);
    lines.push(LinearConstraint::new(T::one(), T::zero(), T::zero()));
    lines.push(LinearConstraint::new(T::zero(), T::one(), T::zero()));
    lines.extend_from_slice(&program.constraints);

    if is_unbounded(program, &lines, tol) {
        return Err(NumError::Infeasible);
    }

    let mut best: Option<Optimum<T>> = None;
    for (i, l1) in lines.iter().enumerate() {
        for l2 in &lines[i + 1..] {
            let Some(p) = intersect(l1, l2) else {
                continue;
            };
            if !program.is_feasible_within(p.x, p.y, tol) {
                continue;
            }
            let value = program.objective(p.x, p.y);
            if best.map_or(true, |b| value > b.value) {
                best = Some(Optimum { point: p, value });
            }
        }
    }

    let best = best.ok_or(NumError::Infeasible)?;
    debug!(
        x = best.point.x.to_f64().unwrap_or(f64::NAN),
        y = best.point.y.to_f64().unwrap_or(f64::NAN),
        "vertex enumeration done"
    );
    Ok(best)
}

/// Intersection of two boundary lines, if they are not parallel.
fn intersect<T: Float>(l1: &LinearConstraint<T>, l2: &LinearConstraint<T>) -> Option<Point2<T>> {
    let det = l1.a * l2.b - l1.b * l2.a;
    let scale = l1.a.abs().max(l1.b.abs()) * l2.a.abs().max(l2.b.abs());
    if det.abs() <= T::epsilon() * scale {
        return None;
    }
    let x = (l1.bound * l2.b - l1.b * l2.bound) / det;
    let y = (l1.a * l2.bound - l1.bound * l2.a) / det;
    Some(Point2::new(x, y))
}

/// True if some recession direction of the feasible set increases the objective.
///
/// Candidate extreme rays are the axes and the directions along each line.
fn is_unbounded<T: Float>(
    program: &LinearProgram<T>,
    lines: &[LinearConstraint<T>],
    tol: T,
) -> bool {
    let recedes = |dx: T, dy: T| {
        let norm = dx.abs().max(dy.abs());
        if norm == T::zero() || dx < T::zero() || dy < T::zero() {
            return false;
        }
        let (dx, dy) = (dx / norm, dy / norm);
        program
            .constraints
            .iter()
            .all(|c| c.a * dx + c.b * dy <= tol * T::one().max(c.a.abs().max(c.b.abs())))
            && program.objective(dx, dy) > tol
    };

    lines
        .iter()
        .any(|l| recedes(l.b, -l.a) || recedes(-l.b, l.a))
}
