//! Sample grids and rectangular regions.
//!
//! ## Purpose
//!
//! This module generates the evaluation grids used by plots, interpolation
//! error sweeps and brute-force searches, and defines [`Region`], the
//! rectangle that escape-time renders and implicit-curve scans cover.
//!
//! ## Design notes
//!
//! * **Drift-free**: Sample `k` is computed as `start + k * step`, never by
//!   repeated addition.
//! * **Validated**: `Region::new` rejects non-finite or unordered bounds.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::NumError;

// ============================================================================
// Sample Grids
// ============================================================================

/// `count` evenly spaced samples from `start` to `end`, both included.
///
/// A count of one yields `[start]`; zero yields an empty vector.
pub fn linspace<T: Float>(start: T, end: T, count: usize) -> Vec<T> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = T::from(count - 1).unwrap_or_else(T::one);
            let step = (end - start) / last;
            (0..count)
                .map(|k| {
                    if k == count - 1 {
                        end
                    } else {
                        start + T::from(k).unwrap_or_else(T::zero) * step
                    }
                })
                .collect()
        }
    }
}

/// Samples `start, start + step, ...` strictly below `end`.
pub fn arange<T: Float>(start: T, end: T, step: T) -> Result<Vec<T>, NumError> {
    if !(step > T::zero()) || !step.is_finite() {
        return Err(NumError::InvalidStep(step.to_f64().unwrap_or(f64::NAN)));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(NumError::InvalidInterval {
            lower: start.to_f64().unwrap_or(f64::NAN),
            upper: end.to_f64().unwrap_or(f64::NAN),
        });
    }

    let mut out = Vec::new();
    let mut k = 0usize;
    loop {
        let v = start + T::from(k).unwrap_or_else(T::zero) * step;
        if v >= end {
            break;
        }
        out.push(v);
        k += 1;
    }
    Ok(out)
}

// ============================================================================
// Region
// ============================================================================

/// Axis-aligned rectangle `[x_min, x_max] x [y_min, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region<T> {
    /// Left edge.
    pub x_min: T,
    /// Right edge.
    pub x_max: T,
    /// Bottom edge.
    pub y_min: T,
    /// Top edge.
    pub y_max: T,
}

impl<T: Float> Region<T> {
    /// Create a region, rejecting non-finite or empty spans.
    pub fn new(x_min: T, x_max: T, y_min: T, y_max: T) -> Result<Self, NumError> {
        for (lo, hi) in [(x_min, x_max), (y_min, y_max)] {
            if !lo.is_finite() || !hi.is_finite() || lo >= hi {
                return Err(NumError::InvalidInterval {
                    lower: lo.to_f64().unwrap_or(f64::NAN),
                    upper: hi.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Horizontal extent.
    #[inline]
    pub fn width(&self) -> T {
        self.x_max - self.x_min
    }

    /// Vertical extent.
    #[inline]
    pub fn height(&self) -> T {
        self.y_max - self.y_min
    }

    /// True if `(x, y)` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, x: T, y: T) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

impl<T: Float> Default for Region<T> {
    /// The square `[-2, 2] x [-2, 2]`, which holds the whole Mandelbrot set.
    fn default() -> Self {
        let two = T::one() + T::one();
        Self {
            x_min: -two,
            x_max: two,
            y_min: -two,
            y_max: two,
        }
    }
}
