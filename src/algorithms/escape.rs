//! Escape-time iteration for Mandelbrot and Julia sets.
//!
//! ## Purpose
//!
//! This module iterates the complex quadratic map `z <- z^2 + c` over a
//! rectangular grid of the complex plane and records how quickly each orbit
//! leaves the disc `|z| <= 2`.
//!
//! ## Design notes
//!
//! * **Escape test**: The bound is checked on the freshly computed iterate,
//!   using `|z|^2 > 4` to avoid a square root.
//! * **Inverted depth**: [`DepthMap`] stores `max_depth - n`, so fast-escaping
//!   points get large values and bounded points get zero.
//! * **Parallel**: With the `parallel` feature, rows are rendered with rayon.
//!
//! ## Key concepts
//!
//! * **Mandelbrot**: `z_0 = 0`, `c` is the pixel.
//! * **Julia**: `z_0` is the pixel, `c` is fixed.
//! * **Pixel mapping**: Column `col` maps to `re = x_min + col * dr` and row
//!   `row` to `im = y_min + (height - 1 - row) * di`, with
//!   `dr = (x_max - x_min) / width`. Row 0 is the top of the picture.
//!
//! ## Invariants
//!
//! * `escape_depth` returns a value in `0..=max_depth`.
//! * Every stored inverted depth is in `0..=max_depth`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

use core::slice::ChunksExact;

// External dependencies
use num_complex::Complex;
use num_traits::{Float, Zero};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::{from_usize, lit};
use crate::primitives::errors::NumError;
use crate::primitives::grid::Region;

/// Iteration limit used by the classic renders.
pub const DEFAULT_MAX_DEPTH: u32 = 250;

/// Raster side length used by the classic renders.
pub const DEFAULT_SIZE: usize = 600;

// ============================================================================
// Escape Depth
// ============================================================================

/// Number of steps of `z <- z^2 + c` from `z0` before `|z|^2 > 4`.
///
/// Returns `max_depth` if the orbit stays bounded that long.
pub fn escape_depth<T: Float>(z0: Complex<T>, c: Complex<T>, max_depth: u32) -> u32 {
    let four = lit::<T>(4.0);
    let mut z = z0;
    for n in 0..max_depth {
        z = z * z + c;
        if z.norm_sqr() > four {
            return n;
        }
    }
    max_depth
}

/// Escape depth of the Mandelbrot orbit of `c`.
#[inline]
pub fn mandelbrot_depth<T: Float>(c: Complex<T>, max_depth: u32) -> u32 {
    escape_depth(Complex::zero(), c, max_depth)
}

/// Escape depth of `z` under the Julia map with parameter `c`.
#[inline]
pub fn julia_depth<T: Float>(z: Complex<T>, c: Complex<T>, max_depth: u32) -> u32 {
    escape_depth(z, c, max_depth)
}

// ============================================================================
// Fractal Selection
// ============================================================================

/// Which quadratic-map family to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fractal<T> {
    /// Orbit of 0 under `z^2 + pixel`.
    Mandelbrot,
    /// Orbit of the pixel under `z^2 + c`.
    Julia {
        /// Fixed map parameter.
        c: Complex<T>,
    },
}

impl<T> Default for Fractal<T> {
    fn default() -> Self {
        Fractal::Mandelbrot
    }
}

impl<T: Float> Fractal<T> {
    /// Escape depth for the point `p` of the plane.
    #[inline]
    pub fn depth(&self, p: Complex<T>, max_depth: u32) -> u32 {
        match *self {
            Fractal::Mandelbrot => mandelbrot_depth(p, max_depth),
            Fractal::Julia { c } => julia_depth(p, c, max_depth),
        }
    }
}

// ============================================================================
// Depth Map
// ============================================================================

/// Raster of inverted escape depths, row-major with row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepthMap {
    width: usize,
    height: usize,
    max_depth: u32,
    data: Vec<u32>,
}

impl DepthMap {
    /// Wrap precomputed inverted depths, checking the raster shape.
    pub fn from_raw(
        width: usize,
        height: usize,
        max_depth: u32,
        data: Vec<u32>,
    ) -> Result<Self, NumError> {
        Validator::validate_resolution(width, height)?;
        Validator::validate_dimension(width * height, data.len())?;
        if let Some(&v) = data.iter().find(|&&v| v > max_depth) {
            return Err(NumError::InvalidNumericValue(format!(
                "depth {v} exceeds max_depth {max_depth}"
            )));
        }
        Ok(Self {
            width,
            height,
            max_depth,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Iteration limit used for the render.
    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Inverted depth `max_depth - n` at `(col, row)`.
    pub fn get(&self, col: usize, row: usize) -> Option<u32> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.data[row * self.width + col])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> ChunksExact<'_, u32> {
        self.data.chunks_exact(self.width)
    }

    /// All inverted depths, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    /// Number of pixels whose orbit never escaped.
    pub fn bounded_count(&self) -> usize {
        self.data.iter().filter(|&&v| v == 0).count()
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// Configured escape-time renderer; build with `Escape::new()`.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeRenderer<T> {
    /// Map family.
    pub fractal: Fractal<T>,
    /// Covered part of the complex plane.
    pub region: Region<T>,
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Iteration limit.
    pub max_depth: u32,
    /// Render rows in parallel (requires the `parallel` feature).
    pub parallel: bool,
}

impl<T: Float + Send + Sync> EscapeRenderer<T> {
    /// Point of the complex plane sampled by pixel `(col, row)`.
    pub fn pixel_coordinate(&self, col: usize, row: usize) -> Complex<T> {
        let dr = self.region.width() / from_usize(self.width);
        let di = self.region.height() / from_usize(self.height);
        let last = self.height.saturating_sub(1);
        let flipped = last - row.min(last);
        Complex::new(
            self.region.x_min + from_usize::<T>(col) * dr,
            self.region.y_min + from_usize::<T>(flipped) * di,
        )
    }

    /// Fill one raster row with inverted depths.
    fn render_row(&self, row: usize, out: &mut [u32]) {
        for (col, cell) in out.iter_mut().enumerate() {
            let depth = self.fractal.depth(self.pixel_coordinate(col, row), self.max_depth);
            *cell = self.max_depth - depth;
        }
    }

    /// Compute the inverted escape depth of every pixel.
    ///
    /// Fields are public, so the raster size and region are checked here as
    /// well as in the builder.
    pub fn render(&self) -> Result<DepthMap, NumError> {
        Validator::validate_resolution(self.width, self.height)?;
        Validator::validate_interval(self.region.x_min, self.region.x_max)?;
        Validator::validate_interval(self.region.y_min, self.region.y_max)?;

        let mut data = vec![0u32; self.width * self.height];

        #[cfg(feature = "parallel")]
        {
            if self.parallel {
                data.par_chunks_mut(self.width)
                    .enumerate()
                    .for_each(|(row, out)| self.render_row(row, out));
            } else {
                self.render_serial(&mut data);
            }
        }

        #[cfg(not(feature = "parallel"))]
        self.render_serial(&mut data);

        debug!(
            width = self.width,
            height = self.height,
            max_depth = self.max_depth,
            "escape-time render done"
        );
        Ok(DepthMap {
            width: self.width,
            height: self.height,
            max_depth: self.max_depth,
            data,
        })
    }

    fn render_serial(&self, data: &mut [u32]) {
        for (row, out) in data.chunks_mut(self.width).enumerate() {
            self.render_row(row, out);
        }
    }
}
