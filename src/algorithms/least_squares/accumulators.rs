//! Normal-equation accumulators for straight-line fits.
//!
//! ## Purpose
//!
//! This module provides scalar and SIMD accumulation of the four sums that
//! make up the normal equations of `y = a x + b`: `Sx`, `Sxx`, `Sy`, `Sxy`.

// External dependencies
use num_traits::Float;
use wide::f64x2;

// ============================================================================
// Line Sums
// ============================================================================

/// Sums over the sample needed for a straight-line fit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineSums<T> {
    /// Number of samples.
    pub n: usize,
    /// `sum x_i`.
    pub sx: T,
    /// `sum x_i^2`.
    pub sxx: T,
    /// `sum y_i`.
    pub sy: T,
    /// `sum x_i y_i`.
    pub sxy: T,
}

// ============================================================================
// Accumulation Functions
// ============================================================================

/// Accumulate line sums (Scalar).
pub fn accumulate_line_scalar<T: Float>(x: &[T], y: &[T]) -> LineSums<T> {
    let mut sums = LineSums {
        n: x.len().min(y.len()),
        sx: T::zero(),
        sxx: T::zero(),
        sy: T::zero(),
        sxy: T::zero(),
    };
    for (&xi, &yi) in x.iter().zip(y) {
        sums.sx = sums.sx + xi;
        sums.sxx = sums.sxx + xi * xi;
        sums.sy = sums.sy + yi;
        sums.sxy = sums.sxy + xi * yi;
    }
    sums
}

/// Accumulate line sums using SIMD.
pub fn accumulate_line_simd(x: &[f64], y: &[f64]) -> LineSums<f64> {
    let n = x.len().min(y.len());
    let (x, y) = (&x[..n], &y[..n]);

    let mut s_x = f64x2::splat(0.0);
    let mut s_xx = f64x2::splat(0.0);
    let mut s_y = f64x2::splat(0.0);
    let mut s_xy = f64x2::splat(0.0);

    let mut x_pairs = x.chunks_exact(2);
    let mut y_pairs = y.chunks_exact(2);
    for (xp, yp) in (&mut x_pairs).zip(&mut y_pairs) {
        let xv = f64x2::new([xp[0], xp[1]]);
        let yv = f64x2::new([yp[0], yp[1]]);
        s_x += xv;
        s_xx += xv * xv;
        s_y += yv;
        s_xy += xv * yv;
    }

    let mut sums = LineSums {
        n,
        sx: s_x.reduce_add(),
        sxx: s_xx.reduce_add(),
        sy: s_y.reduce_add(),
        sxy: s_xy.reduce_add(),
    };

    // Tail
    for (&xi, &yi) in x_pairs.remainder().iter().zip(y_pairs.remainder()) {
        sums.sx += xi;
        sums.sxx += xi * xi;
        sums.sy += yi;
        sums.sxy += xi * yi;
    }
    sums
}
