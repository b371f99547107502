//! Character-grid plots.
//!
//! ## Purpose
//!
//! This module draws data series onto a fixed-size grid of characters so a
//! fit can be inspected in a terminal. Each series has its own marker; later
//! series overwrite earlier ones where they share a cell.
//!
//! ## Design notes
//!
//! * **Mapping**: `x` spans the columns left to right and `y` the rows bottom
//!   to top, both rounded to the nearest cell.
//! * **Clipping**: Points outside the region or non-finite are skipped.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

use core::fmt;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::NumError;
use crate::primitives::grid::Region;

/// Default plot width in characters.
pub const DEFAULT_COLUMNS: usize = 70;

/// Default plot height in characters.
pub const DEFAULT_ROWS: usize = 20;

/// Fixed-size character canvas over a region of the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct AsciiCanvas {
    width: usize,
    height: usize,
    region: Region<f64>,
    cells: Vec<char>,
}

impl AsciiCanvas {
    /// Blank canvas of `width x height` characters showing `region`.
    pub fn new(width: usize, height: usize, region: Region<f64>) -> Result<Self, NumError> {
        Validator::validate_resolution(width, height)?;
        Ok(Self {
            width,
            height,
            region,
            cells: vec![' '; width * height],
        })
    }

    /// Canvas whose region encloses every finite point of the series.
    pub fn fitted<T: Float>(
        width: usize,
        height: usize,
        x: &[T],
        ys: &[&[T]],
    ) -> Result<Self, NumError> {
        let xs = finite_range(x.iter().copied()).ok_or(NumError::EmptyInput)?;
        let yr = finite_range(ys.iter().flat_map(|s| s.iter().copied()))
            .ok_or(NumError::EmptyInput)?;
        let widen = |(lo, hi): (f64, f64)| if lo < hi { (lo, hi) } else { (lo - 1.0, hi + 1.0) };
        let (x0, x1) = widen(xs);
        let (y0, y1) = widen(yr);
        Self::new(width, height, Region::new(x0, x1, y0, y1)?)
    }

    /// Width in characters.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in characters.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Character at `(col, row)`, row 0 at the top.
    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        (col < self.width && row < self.height).then(|| self.cells[row * self.width + col])
    }

    /// Cell of the point `(x, y)`, if it falls on the canvas.
    pub fn cell_of(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if !x.is_finite() || !y.is_finite() || !self.region.contains(x, y) {
            return None;
        }
        let fx = (x - self.region.x_min) / self.region.width();
        let fy = (y - self.region.y_min) / self.region.height();
        let col = (fx * (self.width - 1) as f64).round() as usize;
        let up = (fy * (self.height - 1) as f64).round() as usize;
        Some((col.min(self.width - 1), self.height - 1 - up.min(self.height - 1)))
    }

    /// Draw `y = 0` with `-` and `x = 0` with `|` where they are in view.
    pub fn draw_axes(&mut self) {
        if let Some((_, row)) = self.cell_of(self.region.x_min, 0.0) {
            for col in 0..self.width {
                self.cells[row * self.width + col] = '-';
            }
        }
        if let Some((col, _)) = self.cell_of(0.0, self.region.y_min) {
            for row in 0..self.height {
                let cell = &mut self.cells[row * self.width + col];
                *cell = if *cell == '-' { '+' } else { '|' };
            }
        }
    }

    /// Plot the series `(x_i, y_i)` with `marker`.
    pub fn plot<T: Float>(&mut self, x: &[T], y: &[T], marker: char) {
        for (&xi, &yi) in x.iter().zip(y) {
            let (Some(xf), Some(yf)) = (xi.to_f64(), yi.to_f64()) else {
                continue;
            };
            if let Some((col, row)) = self.cell_of(xf, yf) {
                self.cells[row * self.width + col] = marker;
            }
        }
    }

    /// The canvas as text, one line per row.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks_exact(self.width) {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn finite_range<T: Float, I: Iterator<Item = T>>(values: I) -> Option<(f64, f64)> {
    values
        .filter_map(|v| v.to_f64())
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
