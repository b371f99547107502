//! Newton-Raphson root finding.
//!
//! ## Purpose
//!
//! This module finds roots of scalar functions with Newton's update
//! `x_{k+1} = x_k - f(x_k) / f'(x_k)`, and square roots with Heron's special
//! case `x_{k+1} = (x_k + a / x_k) / 2`.
//!
//! ## Design notes
//!
//! * **Driver-based**: Both methods are an update rule handed to
//!   [`iterate_to_convergence`], so tracing and failure handling are shared.
//! * **Configurable stop**: [`NewtonSolver`] stops on residual or step size,
//!   chosen through the `Newton` builder.
//!
//! ## Invariants
//!
//! * A starting point with `f(x0) == 0` is returned after zero iterations.
//! * A vanishing derivative is reported, never divided by.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::convergence::{iterate_to_convergence, DeltaX, Iterated, Tolerance};
use crate::engine::validator::Validator;
use crate::math::lit;
use crate::primitives::errors::NumError;

/// A converged root together with its iteration history.
pub type RootResult<T> = Iterated<T>;

/// Steps granted to [`sqrt_newton`] beyond the halving phase.
pub const SQRT_EXTRA_STEPS: usize = 64;

/// Step budget for [`sqrt_newton`] in the float type `T`.
///
/// Far from the root each Heron step roughly halves the iterate, so the
/// binary exponent range of `T` bounds the steps taken before quadratic
/// convergence.
pub fn sqrt_max_iterations<T: Float>() -> usize {
    let span = T::max_value().log2() - T::min_positive_value().log2();
    span.ceil().to_usize().unwrap_or(usize::MAX / 2) + SQRT_EXTRA_STEPS
}

// ============================================================================
// Newton Solver
// ============================================================================

/// Configured Newton-Raphson solver; build with `Newton::new()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonSolver<T> {
    /// Stopping rule.
    pub tolerance: Tolerance<T>,
    /// Maximum number of Newton steps.
    pub max_iterations: usize,
}

impl<T: Float> NewtonSolver<T> {
    /// Find a root of `f` with derivative `df`, starting at `x0`.
    pub fn solve<F, D>(&self, f: F, df: D, x0: T) -> Result<RootResult<T>, NumError>
    where
        F: Fn(T) -> T,
        D: Fn(T) -> T,
    {
        Validator::validate_finite(&[x0], "x0")?;

        let f0 = f(x0);
        if f0 == T::zero() {
            return Ok(Iterated {
                x: x0,
                residual: f0,
                iterations: 0,
                trace: vec![x0],
            });
        }

        let step = |x: T, fx: T| -> Result<T, NumError> {
            let d = df(x);
            if d == T::zero() {
                return Err(NumError::ZeroDerivative {
                    x: x.to_f64().unwrap_or(f64::NAN),
                });
            }
            Ok(x - fx / d)
        };

        let result = iterate_to_convergence(&f, &step, x0, &self.tolerance, self.max_iterations)?;
        debug!(
            iterations = result.iterations,
            root = result.x.to_f64().unwrap_or(f64::NAN),
            "newton converged"
        );
        Ok(result)
    }
}

// ============================================================================
// Square Root
// ============================================================================

/// Square root of `value` by Heron's iteration, starting at `|value|`.
///
/// Stops when successive iterates differ by less than `tol` and returns the
/// newer one.
pub fn sqrt_newton<T: Float>(value: T, tol: T) -> Result<T, NumError> {
    Validator::validate_finite(&[value], "value")?;
    Validator::validate_tolerance(tol)?;
    if value < T::zero() {
        return Err(NumError::InvalidNumericValue(format!(
            "cannot take the square root of {}",
            value.to_f64().unwrap_or(f64::NAN)
        )));
    }
    if value == T::zero() {
        return Ok(T::zero());
    }

    let half = lit::<T>(0.5);
    let residual = |x: T| x * x - value;
    let step = |x: T, _fx: T| Ok::<T, NumError>(half * (x + value / x));

    iterate_to_convergence(
        &residual,
        &step,
        value.abs(),
        &DeltaX::new(tol),
        sqrt_max_iterations::<T>(),
    )
    .map(|r| r.x)
}
