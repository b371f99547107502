//! Trapezoidal quadrature.
//!
//! ## Purpose
//!
//! This module integrates functions and tabulated samples with the composite
//! trapezoidal rule, optionally doubling the panel count until the estimate
//! settles.
//!
//! ## Key concepts
//!
//! * **Composite rule**: With `h = (b - a) / n`,
//!   `I = h (f(a) + f(b)) / 2 + h sum_{k=1}^{n-1} f(a + k h)`.
//! * **Refinement**: Doubling `n` reuses every old abscissa, so each level
//!   only evaluates the new midpoints.
//!
//! ## Invariants
//!
//! * An empty interval integrates to zero; a reversed interval negates the result.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::convergence::{DeltaX, IsConverged};
use crate::engine::validator::Validator;
use crate::math::{from_usize, lit};
use crate::primitives::errors::NumError;

// ============================================================================
// Composite Rule
// ============================================================================

/// Composite trapezoidal rule with `n` panels on `[a, b]`.
pub fn trapezoid<T, F>(f: F, a: T, b: T, n: usize) -> Result<T, NumError>
where
    T: Float,
    F: Fn(T) -> T,
{
    Validator::validate_iterations(n)?;
    Validator::validate_finite(&[a, b], "bounds")?;
    if a == b {
        return Ok(T::zero());
    }

    let h = (b - a) / from_usize(n);
    let half = lit::<T>(0.5);
    let mut sum = half * (f(a) + f(b));
    for k in 1..n {
        sum = sum + f(a + from_usize::<T>(k) * h);
    }
    Ok(h * sum)
}

/// Trapezoidal integral of samples `y` taken with spacing `h`.
pub fn trapezoid_samples<T: Float>(y: &[T], h: T) -> Result<T, NumError> {
    Validator::validate_min_points(y.len(), 2)?;
    Validator::validate_finite(y, "y")?;
    Validator::validate_finite(&[h], "h")?;

    let half = lit::<T>(0.5);
    let last = y.len() - 1;
    let interior = y[1..last].iter().fold(T::zero(), |acc, &v| acc + v);
    Ok(h * (half * (y[0] + y[last]) + interior))
}

// ============================================================================
// Refinement
// ============================================================================

/// Outcome of [`trapezoid_refined`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefinedIntegral<T> {
    /// Final estimate.
    pub value: T,
    /// Panel count of the final estimate.
    pub panels: usize,
    /// Estimate at each level, starting with one panel.
    pub history: Vec<T>,
}

/// Double the panel count until successive estimates differ by less than `tol`.
pub fn trapezoid_refined<T, F>(
    f: F,
    a: T,
    b: T,
    tol: T,
    max_doublings: usize,
) -> Result<RefinedIntegral<T>, NumError>
where
    T: Float,
    F: Fn(T) -> T,
{
    Validator::validate_tolerance(tol)?;
    Validator::validate_iterations(max_doublings)?;

    let criterion = DeltaX::new(tol);
    let half = lit::<T>(0.5);
    let mut panels = 1usize;
    let mut estimate = trapezoid(&f, a, b, panels)?;
    let mut history = vec![estimate];

    for _ in 0..max_doublings {
        // T_{2n} = T_n / 2 + h_{2n} * sum of new midpoints
        let h = (b - a) / from_usize(panels);
        let mut mid_sum = T::zero();
        for k in 0..panels {
            mid_sum = mid_sum + f(a + (from_usize::<T>(k) + half) * h);
        }
        let refined = half * estimate + half * h * mid_sum;
        panels *= 2;
        history.push(refined);

        if criterion.is_converged(estimate, refined, T::zero()) {
            debug!(panels, "trapezoid refinement converged");
            return Ok(RefinedIntegral {
                value: refined,
                panels,
                history,
            });
        }
        estimate = refined;
    }

    Err(NumError::IterationLimit {
        iterations: max_doublings,
        last_x: estimate.to_f64().unwrap_or(f64::NAN),
    })
}
