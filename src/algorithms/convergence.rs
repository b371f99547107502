//! Convergence criteria and the scalar iteration driver.
//!
//! ## Purpose
//!
//! This module decides when an iteration has finished. Criteria are small
//! types implementing [`IsConverged`], and [`iterate_to_convergence`] runs any
//! scalar update rule until a criterion is met or the step budget runs out.
//!
//! ## Design notes
//!
//! * **Pluggable**: Solvers are generic over `C: IsConverged<T>`.
//! * **Traced**: The driver records every iterate so callers can print the
//!   sequence the way the lessons do.
//! * **Failure is typed**: Running out of steps is `IterationLimit`, a non-finite
//!   iterate is `IteratedToNaN`; the update rule may fail with its own error.
//!
//! ## Key concepts
//!
//! * **Step criterion** ([`DeltaX`]): `|x_prev - x_cur| < eps`.
//! * **Residual criterion** ([`Residual`]): `|f(x_cur)| < eps`.

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
// Criteria
// ============================================================================

/// Stopping rule for an iterative method.
pub trait IsConverged<T> {
    /// True when the step from `x_pre` to `x_cur`, with residual `f_cur`, is final.
    fn is_converged(&self, x_pre: T, x_cur: T, f_cur: T) -> bool;
}

/// Stop when successive iterates differ by less than `eps`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaX<T> {
    /// Absolute step tolerance.
    pub eps: T,
}

impl<T: Float> DeltaX<T> {
    /// Create the criterion. `eps` is expected to be positive and finite.
    pub fn new(eps: T) -> Self {
        Self { eps }
    }
}

impl<T: Float> IsConverged<T> for DeltaX<T> {
    #[inline]
    fn is_converged(&self, x_pre: T, x_cur: T, _f_cur: T) -> bool {
        (x_pre - x_cur).abs() < self.eps
    }
}

/// Stop when the residual magnitude falls below `eps`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residual<T> {
    /// Absolute residual tolerance.
    pub eps: T,
}

impl<T: Float> Residual<T> {
    /// Create the criterion. `eps` is expected to be positive and finite.
    pub fn new(eps: T) -> Self {
        Self { eps }
    }
}

impl<T: Float> IsConverged<T> for Residual<T> {
    #[inline]
    fn is_converged(&self, _x_pre: T, _x_cur: T, f_cur: T) -> bool {
        f_cur.abs() < self.eps
    }
}

/// Which quantity a tolerance applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Criterion {
    /// Residual `|f(x)|` (see [`Residual`]).
    #[default]
    Residual,
    /// Step length `|x_k - x_{k-1}|` (see [`DeltaX`]).
    Step,
}

/// A [`Criterion`] paired with its tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T> {
    /// Quantity being tested.
    pub criterion: Criterion,
    /// Threshold.
    pub eps: T,
}

impl<T: Float> IsConverged<T> for Tolerance<T> {
    #[inline]
    fn is_converged(&self, x_pre: T, x_cur: T, f_cur: T) -> bool {
        match self.criterion {
            Criterion::Residual => Residual::new(self.eps).is_converged(x_pre, x_cur, f_cur),
            Criterion::Step => DeltaX::new(self.eps).is_converged(x_pre, x_cur, f_cur),
        }
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Outcome of a converged scalar iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iterated<T> {
    /// Final iterate.
    pub x: T,
    /// Residual at the final iterate.
    pub residual: T,
    /// Number of update steps taken.
    pub iterations: usize,
    /// Every iterate, starting with the initial value.
    pub trace: Vec<T>,
}

/// Run `step` from `start` until `finish` accepts or `max_iter` steps pass.
///
/// `eval` computes the residual of an iterate; `step` maps `(x, f(x))` to the
/// next iterate.
pub fn iterate_to_convergence<T, E, S, C>(
    eval: &E,
    step: &S,
    start: T,
    finish: &C,
    max_iter: usize,
) -> Result<Iterated<T>, NumError>
where
    T: Float,
    E: Fn(T) -> T,
    S: Fn(T, T) -> Result<T, NumError>,
    C: IsConverged<T>,
{
    let mut trace = Vec::with_capacity(max_iter.min(64) + 1);
    trace.push(start);

    let mut x_pre = start;
    let mut f_pre = eval(x_pre);

    for k in 0..max_iter {
        let x_cur = step(x_pre, f_pre)?;
        if !x_cur.is_finite() {
            return Err(NumError::IteratedToNaN {
                x: x_pre.to_f64().unwrap_or(f64::NAN),
            });
        }
        let f_cur = eval(x_cur);
        trace.push(x_cur);

        if finish.is_converged(x_pre, x_cur, f_cur) {
            return Ok(Iterated {
                x: x_cur,
                residual: f_cur,
                iterations: k + 1,
                trace,
            });
        }

        x_pre = x_cur;
        f_pre = f_cur;
    }

    Err(NumError::IterationLimit {
        iterations: max_iter,
        last_x: x_pre.to_f64().unwrap_or(f64::NAN),
    })
}
