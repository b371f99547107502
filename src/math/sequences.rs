//! Real sequences: quadratic orbits, alternating terms and means.
//!
//! ## Purpose
//!
//! This module generates the sequences used to study stability of iterated
//! maps (`x_{n+1} = x_n^2 + c`), the alternating harmonic sequence, and the
//! small statistics helpers the lessons print alongside them.
//!
//! ## Key concepts
//!
//! * **Fixed point**: `x* = f(x*)`. For `f(x) = x^2 + c` these are the roots of
//!   `x^2 - x + c = 0`, i.e. `(1 +- sqrt(1 - 4c)) / 2`.
//! * **Stability**: A fixed point attracts nearby orbits when `|f'(x*)| < 1`
//!   and repels them when `|f'(x*)| > 1`.
//!
//! ## Invariants
//!
//! * `quadratic_orbit(x0, c, len)` has exactly `len` entries and starts at `x0`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::{from_usize, lit};
use crate::primitives::errors::NumError;

// ============================================================================
// Quadratic Map
// ============================================================================

/// Orbit of `x_{n+1} = x_n^2 + c` starting at `x0`, `len` terms long.
///
/// Once an iterate overflows to infinity the remaining terms stay infinite.
pub fn quadratic_orbit<T: Float>(x0: T, c: T, len: usize) -> Vec<T> {
    let mut orbit = Vec::with_capacity(len);
    let mut x = x0;
    for _ in 0..len {
        orbit.push(x);
        x = x * x + c;
    }
    orbit
}

/// Both real fixed points of `x^2 + c`, smaller first; `None` when `c > 1/4`.
pub fn quadratic_fixed_points<T: Float>(c: T) -> Option<(T, T)> {
    let disc = T::one() - lit::<T>(4.0) * c;
    if disc < T::zero() {
        return None;
    }
    let root = disc.sqrt();
    let half = lit::<T>(0.5);
    Some(((T::one() - root) * half, (T::one() + root) * half))
}

/// Local behaviour of an iterated map near a fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stability {
    /// `|f'(x*)| < 1`: nearby orbits converge.
    Attracting,
    /// `|f'(x*)| == 1`: first-order analysis is inconclusive.
    Neutral,
    /// `|f'(x*)| > 1`: nearby orbits move away.
    Repelling,
}

/// Classify a fixed point of `x^2 + c` from `|f'(x*)| = |2 x*|`.
pub fn fixed_point_stability<T: Float>(x_star: T) -> Stability {
    let slope = (x_star + x_star).abs();
    let eps = T::epsilon() * lit(16.0);
    if (slope - T::one()).abs() <= eps {
        Stability::Neutral
    } else if slope < T::one() {
        Stability::Attracting
    } else {
        Stability::Repelling
    }
}

// ============================================================================
// Alternating Harmonic Sequence
// ============================================================================

/// `x_n = (-1)^(n+1) / n` for `n = 1..=len`.
pub fn alternating_harmonic<T: Float>(len: usize) -> Vec<T> {
    (1..=len)
        .map(|n| {
            let magnitude = T::one() / from_usize::<T>(n);
            if n % 2 == 1 {
                magnitude
            } else {
                -magnitude
            }
        })
        .collect()
}

/// Running sums `s_k = x_1 + ... + x_k`.
pub fn partial_sums<T: Float>(values: &[T]) -> Vec<T> {
    values
        .iter()
        .scan(T::zero(), |acc, &v| {
            *acc = *acc + v;
            Some(*acc)
        })
        .collect()
}

// ============================================================================
// Statistics
// ============================================================================

/// Arithmetic mean of a non-empty, finite slice.
pub fn mean<T: Float>(values: &[T]) -> Result<T, NumError> {
    if values.is_empty() {
        return Err(NumError::EmptyInput);
    }
    let mut sum = T::zero();
    for (i, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            return Err(NumError::InvalidNumericValue(format!(
                "values[{}]={}",
                i,
                v.to_f64().unwrap_or(f64::NAN)
            )));
        }
        sum = sum + v;
    }
    Ok(sum / from_usize(values.len()))
}
