//! Fixed-point iteration for linear systems.
//!
//! ## Purpose
//!
//! This module solves square systems `A x = b` by rewriting each equation as
//! `x_i = (b_i - sum_{j != i} a_ij x_j) / a_ii` and iterating, either with
//! the previous sweep's values (Jacobi) or with each component as soon as it
//! is updated (Gauss-Seidel).
//!
//! ## Design notes
//!
//! * **Two modes**: Without a tolerance the solver runs exactly
//!   `max_iterations` sweeps and reports the trace. With a tolerance it stops
//!   once the largest component change drops below it, and fails with
//!   `NotConverged` if that never happens.
//! * **Traced**: Every sweep is recorded in an [`IterationTrace`].
//! * **Reference solve**: [`LinearSystem::solve_direct`] uses the QR backend
//!   so results can be checked against an exact answer.
//!
//! ## Key concepts
//!
//! * **Diagonal dominance**: `|a_ii| > sum_{j != i} |a_ij|` for every row
//!   guarantees convergence of both methods. Systems that are not dominant
//!   are still iterated, with a warning.
//!
//! ## Invariants
//!
//! * A zero diagonal entry is rejected before the first sweep.
//! * The trace always starts with the initial guess.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::{debug, warn};

// Internal dependencies
use crate::engine::trace::IterationTrace;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::NumError;

// ============================================================================
// Linear System
// ============================================================================

/// Square linear system `A x = b` with `A` stored row-major.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearSystem<T> {
    n: usize,
    a: Vec<T>,
    b: Vec<T>,
}

impl<T: Float> LinearSystem<T> {
    /// Create an `n x n` system from row-major coefficients and right-hand side.
    pub fn new(n: usize, a: Vec<T>, b: Vec<T>) -> Result<Self, NumError> {
        if n == 0 {
            return Err(NumError::EmptyInput);
        }
        Validator::validate_dimension(n * n, a.len())?;
        Validator::validate_dimension(n, b.len())?;
        Validator::validate_finite(&a, "a")?;
        Validator::validate_finite(&b, "b")?;
        Ok(Self { n, a, b })
    }

    /// Number of unknowns.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Coefficient `a_ij`.
    #[inline]
    pub fn coeff(&self, i: usize, j: usize) -> T {
        self.a[i * self.n + j]
    }

    /// Row `i` of the coefficient matrix.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.a[i * self.n..(i + 1) * self.n]
    }

    /// Right-hand side.
    #[inline]
    pub fn rhs(&self) -> &[T] {
        &self.b
    }

    /// True if every row is strictly diagonally dominant.
    pub fn is_diagonally_dominant(&self) -> bool {
        (0..self.n).all(|i| {
            let off: T = self
                .row(i)
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(T::zero(), |acc, (_, &v)| acc + v.abs());
            self.coeff(i, i).abs() > off
        })
    }

    /// Residual vector `b - A x`.
    pub fn residual(&self, x: &[T]) -> Result<Vec<T>, NumError> {
        Validator::validate_dimension(self.n, x.len())?;
        Ok((0..self.n)
            .map(|i| {
                let ax = self
                    .row(i)
                    .iter()
                    .zip(x)
                    .fold(T::zero(), |acc, (&a, &xj)| acc + a * xj);
                self.b[i] - ax
            })
            .collect())
    }

    /// Row of the first zero diagonal entry, if any.
    fn zero_pivot(&self) -> Option<usize> {
        (0..self.n).find(|&i| self.coeff(i, i) == T::zero())
    }
}

impl<T: FloatLinalg> LinearSystem<T> {
    /// Direct solution by QR, used as a reference for the iterative methods.
    pub fn solve_direct(&self) -> Result<Vec<T>, NumError> {
        T::solve_square(&self.a, &self.b, self.n).ok_or(NumError::SingularSystem)
    }
}

// ============================================================================
// Iteration Method
// ============================================================================

/// Update scheme for each sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Every component uses the previous sweep's values.
    #[default]
    Jacobi,
    /// Components are used as soon as they are updated.
    GaussSeidel,
}

/// One sweep in place; returns the largest absolute component change.
fn sweep<T: Float>(system: &LinearSystem<T>, method: Method, x: &mut [T], scratch: &mut [T]) -> T {
    let n = system.n();
    let mut delta = T::zero();

    match method {
        Method::Jacobi => {
            scratch.copy_from_slice(x);
            for i in 0..n {
                let row = system.row(i);
                let mut sum = system.rhs()[i];
                for j in 0..n {
                    if j != i {
                        sum = sum - row[j] * scratch[j];
                    }
                }
                x[i] = sum / row[i];
                delta = delta.max((x[i] - scratch[i]).abs());
            }
        }
        Method::GaussSeidel => {
            for i in 0..n {
                let row = system.row(i);
                let mut sum = system.rhs()[i];
                for j in 0..n {
                    if j != i {
                        sum = sum - row[j] * x[j];
                    }
                }
                let updated = sum / row[i];
                delta = delta.max((updated - x[i]).abs());
                x[i] = updated;
            }
        }
    }
    delta
}

/// Largest component magnitude, as `f64`.
fn max_abs<T: Float>(x: &[T]) -> f64 {
    x.iter()
        .fold(0.0, |m, v| f64::max(m, v.to_f64().unwrap_or(f64::NAN).abs()))
}

// ============================================================================
// Solver
// ============================================================================

/// Outcome of a fixed-point solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedPointResult<T> {
    /// Final iterate.
    pub solution: Vec<T>,
    /// Number of sweeps performed.
    pub iterations: usize,
    /// True if a tolerance was given and met.
    pub converged: bool,
    /// Initial guess followed by every sweep.
    pub trace: IterationTrace<T>,
}

/// Configured Jacobi / Gauss-Seidel solver; build with `FixedPoint::new()`.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPointSolver<T> {
    /// Update scheme.
    pub method: Method,
    /// Maximum number of sweeps.
    pub max_iterations: usize,
    /// Stop once the largest change is below this.
    pub tolerance: Option<T>,
    /// Starting vector (zeros when absent).
    pub initial_guess: Option<Vec<T>>,
}

impl<T: Float> FixedPointSolver<T> {
    /// Iterate on `system` from the initial guess.
    pub fn solve(&self, system: &LinearSystem<T>) -> Result<FixedPointResult<T>, NumError> {
        let n = system.n();
        let mut x = match &self.initial_guess {
            Some(guess) => {
                Validator::validate_dimension(n, guess.len())?;
                Validator::validate_finite(guess, "initial_guess")?;
                guess.clone()
            }
            None => vec![T::zero(); n],
        };

        if let Some(row) = system.zero_pivot() {
            return Err(NumError::ZeroPivot { row });
        }
        if !system.is_diagonally_dominant() {
            warn!(n, method = ?self.method, "system is not diagonally dominant; iteration may diverge");
        }

        let mut trace = IterationTrace::new(n);
        trace.push(&x);
        let mut scratch = vec![T::zero(); n];
        let mut delta = T::infinity();

        for k in 0..self.max_iterations {
            delta = sweep(system, self.method, &mut x, &mut scratch);
            trace.push(&x);

            if !delta.is_finite() {
                // Row k is the last iterate before the blow-up.
                let last = trace.get(k).map_or(f64::NAN, max_abs);
                return Err(NumError::IteratedToNaN { x: last });
            }

            if let Some(tol) = self.tolerance {
                if delta < tol {
                    debug!(iterations = k + 1, method = ?self.method, "fixed-point converged");
                    return Ok(FixedPointResult {
                        solution: x,
                        iterations: k + 1,
                        converged: true,
                        trace,
                    });
                }
            }
        }

        if self.tolerance.is_some() {
            return Err(NumError::NotConverged {
                iterations: self.max_iterations,
                delta: delta.to_f64().unwrap_or(f64::NAN),
            });
        }

        debug!(iterations = self.max_iterations, method = ?self.method, "fixed-point sweeps done");
        Ok(FixedPointResult {
            solution: x,
            iterations: self.max_iterations,
            converged: false,
            trace,
        })
    }
}
