//! Least-squares curve fitting.
//!
//! ## Purpose
//!
//! This module fits models to noisy samples by minimizing the sum of squared
//! residuals: straight lines through the closed-form normal equations,
//! polynomials of any degree and implicit conics through QR least squares.
//!
//! ## Design notes
//!
//! * **Line fit**: The 2x2 normal equations
//!   `[[n, Sx], [Sx, Sxx]] [b, a] = [Sy, Sxy]` are solved with the explicit
//!   inverse. Sums are accumulated with SIMD for `f64`.
//! * **Polynomial fit**: A Vandermonde design solved by thin QR, avoiding the
//!   squared condition number of the normal equations.
//! * **Dispatch**: [`FitLinalg`] selects the SIMD or scalar accumulator per
//!   float type.
//!
//! ## Invariants
//!
//! * Coefficients are always finite; degenerate designs return `SingularSystem`.
//!
//! ## Non-goals
//!
//! * This module does not weight samples or reject outliers.

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
use crate::math::from_usize;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::NumError;

/// Normal-equation accumulators.
pub mod accumulators;

/// Implicit conic fitting and curve extraction.
pub mod conic;

use accumulators::{accumulate_line_scalar, accumulate_line_simd, LineSums};

// ============================================================================
// FitLinalg Trait
// ============================================================================

/// Per-type kernels for straight-line fitting.
pub trait FitLinalg: FloatLinalg {
    /// Accumulate `n, Sx, Sxx, Sy, Sxy`.
    fn accumulate_line(x: &[Self], y: &[Self]) -> LineSums<Self>;

    /// Solve the row-major 2x2 system `a z = b` by the explicit inverse.
    fn solve_2x2(a: [Self; 4], b: [Self; 2]) -> Option<[Self; 2]> {
        let det = a[0] * a[3] - a[1] * a[2];
        let scale = a.iter().fold(Self::zero(), |m, v| m.max(v.abs()));
        if det.abs() <= Self::epsilon() * scale * scale {
            return None;
        }
        let inv_det = Self::one() / det;
        Some([
            (b[0] * a[3] - a[1] * b[1]) * inv_det,
            (a[0] * b[1] - b[0] * a[2]) * inv_det,
        ])
    }
}

impl FitLinalg for f64 {
    #[inline]
    fn accumulate_line(x: &[f64], y: &[f64]) -> LineSums<f64> {
        accumulate_line_simd(x, y)
    }
}

impl FitLinalg for f32 {
    #[inline]
    fn accumulate_line(x: &[f32], y: &[f32]) -> LineSums<f32> {
        accumulate_line_scalar(x, y)
    }
}

// ============================================================================
// Goodness of Fit
// ============================================================================

/// Residual sum of squares and coefficient of determination.
fn goodness<T: Float, P: Fn(T) -> T>(x: &[T], y: &[T], predict: P) -> (T, T) {
    let n = from_usize::<T>(y.len());
    let mean = y.iter().fold(T::zero(), |acc, &v| acc + v) / n;
    let (rss, tss) = x
        .iter()
        .zip(y)
        .fold((T::zero(), T::zero()), |(rss, tss), (&xi, &yi)| {
            let r = yi - predict(xi);
            let d = yi - mean;
            (rss + r * r, tss + d * d)
        });
    let r_squared = if tss > T::zero() {
        T::one() - rss / tss
    } else {
        T::one()
    };
    (rss, r_squared)
}

// ============================================================================
// Straight Line
// ============================================================================

/// Fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFit<T> {
    /// Slope `a`.
    pub slope: T,
    /// Intercept `b`.
    pub intercept: T,
    /// Residual sum of squares.
    pub rss: T,
    /// Coefficient of determination.
    pub r_squared: T,
    /// Number of samples.
    pub n: usize,
}

impl<T: Float> LinearFit<T> {
    /// Value of the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}

/// Least-squares line through `(x_i, y_i)`.
pub fn fit_line<T: FitLinalg>(x: &[T], y: &[T]) -> Result<LinearFit<T>, NumError> {
    Validator::validate_xy(x, y, 2)?;

    let s = T::accumulate_line(x, y);
    let n = from_usize::<T>(s.n);
    let [intercept, slope] =
        T::solve_2x2([n, s.sx, s.sx, s.sxx], [s.sy, s.sxy]).ok_or(NumError::SingularSystem)?;

    let (rss, r_squared) = goodness(x, y, |xi| slope * xi + intercept);
    debug!(n = s.n, "line fit done");
    Ok(LinearFit {
        slope,
        intercept,
        rss,
        r_squared,
        n: s.n,
    })
}

// ============================================================================
// Polynomial
// ============================================================================

/// Fitted polynomial `c_0 + c_1 x + ... + c_d x^d`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolynomialFit<T> {
    /// Coefficients, constant term first.
    pub coefficients: Vec<T>,
    /// Residual sum of squares.
    pub rss: T,
    /// Coefficient of determination.
    pub r_squared: T,
}

impl<T: Float> PolynomialFit<T> {
    /// Polynomial degree.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Value at `x` by Horner's rule.
    pub fn predict(&self, x: T) -> T {
        self.coefficients
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * x + c)
    }
}

/// Least-squares polynomial of the given degree through `(x_i, y_i)`.
pub fn fit_polynomial<T: FloatLinalg>(
    x: &[T],
    y: &[T],
    degree: usize,
) -> Result<PolynomialFit<T>, NumError> {
    let cols = degree + 1;
    Validator::validate_xy(x, y, cols)?;

    let mut design = Vec::with_capacity(x.len() * cols);
    for &xi in x {
        let mut p = T::one();
        for _ in 0..cols {
            design.push(p);
            p = p * xi;
        }
    }

    let coefficients =
        T::solve_least_squares(&design, y, x.len(), cols).ok_or(NumError::SingularSystem)?;
    if coefficients.iter().any(|c| !c.is_finite()) {
        return Err(NumError::SingularSystem);
    }

    let fit = PolynomialFit {
        coefficients,
        rss: T::zero(),
        r_squared: T::zero(),
    };
    let (rss, r_squared) = goodness(x, y, |xi| fit.predict(xi));
    Ok(PolynomialFit {
        rss,
        r_squared,
        ..fit
    })
}
