//! Iteration traces.
//!
//! ## Purpose
//!
//! This module records the sequence of vector iterates produced by an
//! iterative solver and prints it as a fixed-width table, one row per
//! iteration, matching the console output of the lesson programs.
//!
//! ## Design notes
//!
//! * **Flat storage**: Iterates live in one contiguous `Vec`, `dim` values per row.
//! * **Display**: `format!("{trace}")` gives the table; `{trace:.3}` changes
//!   the number of decimals.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;
use core::slice::ChunksExact;

// External dependencies
use num_traits::Float;

// ============================================================================
// IterationTrace
// ============================================================================

/// Row-per-iteration record of a vector iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationTrace<T> {
    dim: usize,
    values: Vec<T>,
}

impl<T: Float> IterationTrace<T> {
    /// Create an empty trace for iterates of length `dim`.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            values: Vec::new(),
        }
    }

    /// Append one iterate; it must have length `dim`.
    pub fn push(&mut self, iterate: &[T]) {
        debug_assert_eq!(iterate.len(), self.dim);
        self.values.extend_from_slice(iterate);
    }

    /// Length of each iterate.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of recorded iterates.
    #[inline]
    pub fn len(&self) -> usize {
        if self.dim == 0 {
            0
        } else {
            self.values.len() / self.dim
        }
    }

    /// True if nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate `k`, if recorded.
    pub fn get(&self, k: usize) -> Option<&[T]> {
        let start = k.checked_mul(self.dim)?;
        self.values.get(start..start + self.dim)
    }

    /// Most recent iterate.
    pub fn last(&self) -> Option<&[T]> {
        self.len().checked_sub(1).and_then(|k| self.get(k))
    }

    /// All iterates in order.
    pub fn iter(&self) -> ChunksExact<'_, T> {
        self.values.chunks_exact(self.dim.max(1))
    }
}

impl<T: Float> fmt::Display for IterationTrace<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        let width = precision + 8;

        write!(f, "{:>4}", "k")?;
        for i in 1..=self.dim {
            write!(f, " {:>width$}", format!("x{i}"))?;
        }
        writeln!(f)?;

        for (k, row) in self.iter().enumerate() {
            write!(f, "{k:>4}")?;
            for v in row {
                let v = v.to_f64().unwrap_or(f64::NAN);
                write!(f, " {v:>width$.precision$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
