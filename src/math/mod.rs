//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical building blocks:
//! - Integer powers, factorials and binomial coefficients
//! - Taylor-series evaluation of the sine
//! - Real sequences (quadratic orbits, alternating harmonic terms)
//! - The dense linear algebra backend
//!
//! Nothing here iterates to convergence; that lives in the algorithms layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Render
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

// External dependencies
use num_traits::Float;

/// Integer powers, factorials and binomial coefficients.
pub mod power;

/// Taylor-series approximation of the sine.
pub mod taylor;

/// Quadratic orbits, alternating sequences and means.
pub mod sequences;

/// Linear algebra backend (nalgebra).
pub mod linalg;

/// Convert an `f64` literal to `T`.
///
/// Every `Float` in use (f32, f64) represents f64 literals, possibly rounded.
#[inline]
pub(crate) fn lit<T: Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}

/// Convert a count or index to `T`.
#[inline]
pub(crate) fn from_usize<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::infinity)
}
