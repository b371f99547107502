//! Error types for numerical routines.
//!
//! ## Purpose
//!
//! This module defines [`NumError`], the single error enum returned by every
//! fallible operation in the crate: input validation, iteration failures,
//! degenerate linear systems and builder misuse.
//!
//! ## Design notes
//!
//! * **Flat**: One enum for the whole crate, so callers match in one place.
//! * **Cloneable**: Errors are `Clone` and `PartialEq` so tests can compare them.
//! * **no_std**: `std::error::Error` is only implemented with the `std` feature.
//!
//! ## Non-goals
//!
//! * This module does not log. Callers decide whether a failure is noteworthy.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

// ============================================================================
// NumError
// ============================================================================

/// Errors produced by numerical routines and their builders.
#[derive(Debug, Clone, PartialEq)]
pub enum NumError {
    /// An input slice was empty.
    EmptyInput,

    /// Paired inputs have different lengths.
    MismatchedInputs {
        /// Length of the first input.
        x_len: usize,
        /// Length of the second input.
        y_len: usize,
    },

    /// Not enough points for the requested operation.
    TooFewPoints {
        /// Number of points supplied.
        got: usize,
        /// Minimum number required.
        min: usize,
    },

    /// An input contained NaN or infinity.
    InvalidNumericValue(String),

    /// Tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// Iteration or subdivision count must be positive.
    InvalidIterations(usize),

    /// Interval bounds are not finite or not ordered.
    InvalidInterval {
        /// Lower bound.
        lower: f64,
        /// Upper bound.
        upper: f64,
    },

    /// Step size must be positive and finite.
    InvalidStep(f64),

    /// Interpolation degree must be at least one.
    InvalidNodeCount(usize),

    /// Raster dimensions must be non-zero.
    InvalidResolution {
        /// Width in pixels.
        width: usize,
        /// Height in pixels.
        height: usize,
    },

    /// A vector or matrix has the wrong size.
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// An integer result does not fit in 64 bits.
    Overflow {
        /// Operation that overflowed.
        operation: &'static str,
        /// Argument at which it overflowed.
        n: u64,
    },

    /// Interpolation nodes are not distinct.
    DuplicateNodes {
        /// Index of the first repeated node.
        index: usize,
    },

    /// A diagonal entry needed for division is zero.
    ZeroPivot {
        /// Row of the zero diagonal entry.
        row: usize,
    },

    /// Newton step hit a zero derivative.
    ZeroDerivative {
        /// Iterate at which the derivative vanished.
        x: f64,
    },

    /// Iteration produced NaN or infinity.
    IteratedToNaN {
        /// Last finite iterate.
        x: f64,
    },

    /// Scalar iteration ran out of steps.
    IterationLimit {
        /// Number of iterations performed.
        iterations: usize,
        /// Last iterate.
        last_x: f64,
    },

    /// Vector iteration ran out of sweeps before reaching the tolerance.
    NotConverged {
        /// Number of sweeps performed.
        iterations: usize,
        /// Largest component change in the final sweep.
        delta: f64,
    },

    /// A linear system has no unique solution.
    SingularSystem,

    /// No point satisfies the constraints.
    Infeasible,

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Parameter name.
        parameter: &'static str,
    },
}

impl fmt::Display for NumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::InvalidIterations(n) => {
                write!(f, "Invalid iteration count: {n} (must be at least 1)")
            }
            Self::InvalidInterval { lower, upper } => {
                write!(f, "Invalid interval: [{lower}, {upper}] (bounds must be finite and ordered)")
            }
            Self::InvalidStep(step) => {
                write!(f, "Invalid step: {step} (must be > 0 and finite)")
            }
            Self::InvalidNodeCount(n) => {
                write!(f, "Invalid node count: degree {n} (must be at least 1)")
            }
            Self::InvalidResolution { width, height } => {
                write!(f, "Invalid resolution: {width}x{height} (both must be > 0)")
            }
            Self::DimensionMismatch { expected, got } => {
                write!(f, "Dimension mismatch: expected {expected}, got {got}")
            }
            Self::Overflow { operation, n } => {
                write!(f, "Overflow in {operation}({n}): result exceeds 64 bits")
            }
            Self::DuplicateNodes { index } => {
                write!(f, "Duplicate interpolation node at index {index}")
            }
            Self::ZeroPivot { row } => write!(f, "Zero diagonal entry in row {row}"),
            Self::ZeroDerivative { x } => write!(f, "Zero derivative at x = {x}"),
            Self::IteratedToNaN { x } => write!(f, "Iteration diverged to NaN after x = {x}"),
            Self::IterationLimit { iterations, last_x } => {
                write!(f, "No convergence after {iterations} iterations (last x = {last_x})")
            }
            Self::NotConverged { iterations, delta } => {
                write!(f, "No convergence after {iterations} sweeps (last change = {delta})")
            }
            Self::SingularSystem => write!(f, "Linear system is singular"),
            Self::Infeasible => write!(f, "No feasible point satisfies the constraints"),
            Self::DuplicateParameter { parameter } => {
                write!(f, "Parameter '{parameter}' was set multiple times")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NumError {}
