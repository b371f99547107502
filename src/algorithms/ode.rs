//! Explicit Euler integration of first-order lag systems.
//!
//! ## Purpose
//!
//! This module simulates `x' = -a x + u(t)` with the explicit Euler scheme
//! `x[k+1] = (1 - a dt) x[k] + dt u[k]`, alone or as a cascade where each
//! stage is driven by the output of the previous one.
//!
//! ## Invariants
//!
//! * Output has the same length as the input signal; `x[0] = x0`.
//! * The scheme is stable only for `|1 - a dt| <= 1`; larger steps are not
//!   rejected.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::{debug, warn};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::NumError;

/// Response of `x' = -a x + u` to the sampled input `u`.
pub fn euler<T: Float>(u: &[T], a: T, x0: T, dt: T) -> Result<Vec<T>, NumError> {
    if u.is_empty() {
        return Err(NumError::EmptyInput);
    }
    Validator::validate_finite(u, "u")?;
    Validator::validate_finite(&[a, x0], "a, x0")?;
    Validator::validate_step(dt)?;

    let decay = T::one() - a * dt;
    if decay.abs() > T::one() {
        warn!(
            factor = decay.to_f64().unwrap_or(f64::NAN),
            "euler step is unstable"
        );
    }

    let mut x = Vec::with_capacity(u.len());
    x.push(x0);
    for &uk in &u[..u.len() - 1] {
        let prev = x[x.len() - 1];
        x.push(decay * prev + dt * uk);
    }
    Ok(x)
}

/// `stages` identical lags in series, each fed by the previous output.
///
/// Returns the output of every stage, first stage first.
pub fn euler_cascade<T: Float>(
    u: &[T],
    a: T,
    x0: T,
    dt: T,
    stages: usize,
) -> Result<Vec<Vec<T>>, NumError> {
    Validator::validate_iterations(stages)?;

    let mut outputs: Vec<Vec<T>> = Vec::with_capacity(stages);
    for _ in 0..stages {
        let input = outputs.last().map_or(u, |prev| prev.as_slice());
        let next = euler(input, a, x0, dt)?;
        outputs.push(next);
    }
    debug!(stages, samples = u.len(), "euler cascade done");
    Ok(outputs)
}
