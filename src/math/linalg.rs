//! Linear algebra backend.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the two dense solves
//! the crate needs: square systems (reference solutions for iterative
//! methods) and overdetermined least-squares systems (polynomial and conic
//! fits).
//!
//! ## Design notes
//!
//! * Uses QR decomposition (Householder reflections) instead of normal
//!   equations for better conditioning.
//! * Least squares solves `R x = Q^T b` on the thin QR factorization, the
//!   same approach as LAPACK's `DGELS`.
//! * Falls back to SVD for rank-deficient matrices.
//! * Inputs are row-major slices; nalgebra stores column-major, so matrices
//!   are built with `from_row_slice`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Solve the square system `A x = b`, with `A` row-major `n x n`.
    fn solve_square(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>>;

    /// Minimize `|A x - b|` with `A` row-major `rows x cols`, `rows >= cols`.
    fn solve_least_squares(a: &[Self], b: &[Self], rows: usize, cols: usize)
        -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_square(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_square(a, b, n, f64::EPSILON * 100.0)
    }
    #[inline]
    fn solve_least_squares(
        a: &[Self],
        b: &[Self],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<Self>> {
        nalgebra_backend::solve_least_squares(a, b, rows, cols, f64::EPSILON * 100.0)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_square(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_square(a, b, n, f32::EPSILON * 100.0)
    }
    #[inline]
    fn solve_least_squares(
        a: &[Self],
        b: &[Self],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<Self>> {
        nalgebra_backend::solve_least_squares(a, b, rows, cols, f32::EPSILON * 100.0)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector, RealField};

    /// Solve `A x = b` by QR, falling back to SVD when `A` is singular.
    pub fn solve_square<T: RealField + Copy>(
        a: &[T],
        b: &[T],
        n: usize,
        eps: T,
    ) -> Option<Vec<T>> {
        if n == 0 || a.len() != n * n || b.len() != n {
            return None;
        }
        let matrix = DMatrix::from_row_slice(n, n, a);
        let rhs = DVector::from_column_slice(b);

        let qr = matrix.clone().qr();
        if let Some(solution) = qr.solve(&rhs) {
            if solution.iter().all(|v| v.is_finite()) {
                return Some(solution.as_slice().to_vec());
            }
        }

        matrix
            .svd(true, true)
            .solve(&rhs, eps)
            .ok()
            .map(|s: DVector<T>| s.as_slice().to_vec())
    }

    /// Least-squares solve of an overdetermined system via thin QR.
    pub fn solve_least_squares<T: RealField + Copy>(
        a: &[T],
        b: &[T],
        rows: usize,
        cols: usize,
        eps: T,
    ) -> Option<Vec<T>> {
        if cols == 0 || rows < cols || a.len() != rows * cols || b.len() != rows {
            return None;
        }
        let matrix = DMatrix::from_row_slice(rows, cols, a);
        let rhs = DVector::from_column_slice(b);

        let qr = matrix.clone().qr();
        let qtb = qr.q().transpose() * &rhs;
        let r = qr.r();
        let full_rank = (0..cols).all(|i| r[(i, i)].clone().abs() > eps);
        if full_rank {
            if let Some(solution) = r.solve_upper_triangular(&qtb) {
                return Some(solution.as_slice().to_vec());
            }
        }

        matrix
            .svd(true, true)
            .solve(&rhs, eps)
            .ok()
            .map(|s: DVector<T>| s.as_slice().to_vec())
    }
}
