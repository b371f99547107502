//! Taylor-series approximation of the sine.
//!
//! ## Purpose
//!
//! This module evaluates the Maclaurin series
//! `sin x = sum_i (-1)^i x^(2i+1) / (2i+1)!` truncated to a fixed number of
//! terms, with and without range reduction.
//!
//! ## Design notes
//!
//! * **Recurrence**: Term `i+1` is derived from term `i` as
//!   `-t_i x^2 / ((2i+2)(2i+3))`, so no factorial is ever formed.
//! * **Range reduction**: [`sin_periodic`] shifts by multiples of pi, flipping
//!   the sign each time, then folds into `[-pi/2, pi/2]` where a short series
//!   is accurate.
//!
//! ## Key concepts
//!
//! * **Truncation error**: Bounded by the first omitted term,
//!   `|x|^(2m+1) / (2m+1)!` for `m` terms.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::f64::consts::{FRAC_PI_2, PI};
use num_traits::Float;

// Internal dependencies
use crate::math::lit;
use crate::primitives::grid::linspace;

/// Number of terms in the classic four-term approximation.
pub const DEFAULT_TERMS: usize = 4;

// ============================================================================
// Series Evaluation
// ============================================================================

/// Sum of the first `terms` terms of the sine series at `x`.
pub fn sin_series<T: Float>(x: T, terms: usize) -> T {
    let x2 = x * x;
    let mut term = x;
    let mut sum = T::zero();
    for i in 0..terms {
        sum = sum + term;
        let a = lit::<T>((2 * i + 2) as f64);
        let b = lit::<T>((2 * i + 3) as f64);
        term = -term * x2 / (a * b);
    }
    sum
}

/// `x - x^3/6 + x^5/120 - x^7/5040`.
#[inline]
pub fn sin_taylor<T: Float>(x: T) -> T {
    sin_series(x, DEFAULT_TERMS)
}

/// Sine series after reducing `x` into `[-pi/2, pi/2]`.
pub fn sin_periodic<T: Float>(x: T, terms: usize) -> T {
    if !x.is_finite() {
        return T::nan();
    }
    let (reduced, sign) = reduce_half_period(x);
    sign * sin_series(reduced, terms)
}

/// Reduce `x` to `r` in `[-pi/2, pi/2]` with `sin x = sign * sin r`.
fn reduce_half_period<T: Float>(x: T) -> (T, T) {
    let pi = lit::<T>(PI);
    let half_pi = lit::<T>(FRAC_PI_2);

    // sin(x - k pi) = (-1)^k sin x
    let k = (x / pi).round();
    let mut r = x - k * pi;
    let odd = (k / (T::one() + T::one())).fract() != T::zero();
    let sign = if odd { -T::one() } else { T::one() };

    // Rounding error may leave r just outside the half period.
    if r > half_pi {
        r = pi - r;
    } else if r < -half_pi {
        r = -pi - r;
    }
    (r, sign)
}

// ============================================================================
// Comparison Table
// ============================================================================

/// One row of a series-versus-library comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SinSample<T> {
    /// Argument.
    pub x: T,
    /// Truncated series value.
    pub series: T,
    /// Reference value from `Float::sin`.
    pub exact: T,
}

impl<T: Float> SinSample<T> {
    /// Absolute deviation of the series from the reference.
    #[inline]
    pub fn error(&self) -> T {
        (self.series - self.exact).abs()
    }
}

/// Tabulate the series against `Float::sin` on `count` points of `[start, end]`.
///
/// With `periodic` the argument is range-reduced first.
pub fn sin_table<T: Float>(
    start: T,
    end: T,
    count: usize,
    terms: usize,
    periodic: bool,
) -> Vec<SinSample<T>> {
    linspace(start, end, count)
        .into_iter()
        .map(|x| SinSample {
            x,
            series: if periodic {
                sin_periodic(x, terms)
            } else {
                sin_series(x, terms)
            },
            exact: x.sin(),
        })
        .collect()
}
