//! Whitespace-separated data tables.
//!
//! ## Purpose
//!
//! This module prints equally long columns side by side, one sample per line,
//! preceded by a `#` header naming the columns. The output loads directly into
//! gnuplot, numpy or a spreadsheet.

use core::fmt;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::NumError;

/// Named columns of equal length.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a, T> {
    headers: &'a [&'a str],
    columns: &'a [&'a [T]],
}

impl<'a, T: Float> Table<'a, T> {
    /// Table of `columns` titled by `headers`.
    pub fn new(headers: &'a [&'a str], columns: &'a [&'a [T]]) -> Result<Self, NumError> {
        Validator::validate_dimension(headers.len(), columns.len())?;
        let rows = columns.first().map_or(0, |c| c.len());
        for c in columns {
            Validator::validate_dimension(rows, c.len())?;
        }
        Ok(Self { headers, columns })
    }

    /// Number of data lines.
    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.len())
    }
}

impl<T: Float> fmt::Display for Table<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        let width = precision + 10;

        for (i, h) in self.headers.iter().enumerate() {
            let lead = if i == 0 { '#' } else { ' ' };
            write!(f, "{lead}{h:>width$}")?;
        }
        writeln!(f)?;

        for k in 0..self.rows() {
            for col in self.columns {
                let v = col[k].to_f64().unwrap_or(f64::NAN);
                write!(f, " {v:>width$.precision$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Write `table` to `writer`.
#[cfg(feature = "std")]
pub fn write_table<T: Float, W: std::io::Write>(
    table: &Table<'_, T>,
    writer: &mut W,
) -> std::io::Result<()> {
    write!(writer, "{table}")?;
    writer.flush()
}
