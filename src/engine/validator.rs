//! Input validation for solver configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions every solver and builder
//! runs before computing anything. It checks input lengths, finite values,
//! tolerances, step sizes, intervals and raster sizes.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not correct invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::NumError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for solver configuration and input data.
///
/// All methods return `Result<(), NumError>` and fail fast upon the first
/// violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate that every value in `values` is finite.
    pub fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), NumError> {
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(NumError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate paired samples `(x_i, y_i)`.
    pub fn validate_xy<T: Float>(x: &[T], y: &[T], min_points: usize) -> Result<(), NumError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(NumError::EmptyInput);
        }

        // Check 2: Matching lengths
        if x.len() != y.len() {
            return Err(NumError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // Check 3: Enough points
        Self::validate_min_points(x.len(), min_points)?;

        // Check 4: All values finite
        Self::validate_finite(x, "x")?;
        Self::validate_finite(y, "y")
    }

    /// Validate that `got` points meet the minimum `min`.
    pub fn validate_min_points(got: usize, min: usize) -> Result<(), NumError> {
        if got < min {
            return Err(NumError::TooFewPoints { got, min });
        }
        Ok(())
    }

    /// Validate that the nodes in `x` are pairwise distinct.
    ///
    /// Quadratic in the number of nodes, which is small for interpolation.
    pub fn validate_distinct<T: Float>(x: &[T]) -> Result<(), NumError> {
        for (j, &xj) in x.iter().enumerate() {
            if x[..j].iter().any(|&xk| xk == xj) {
                return Err(NumError::DuplicateNodes { index: j });
            }
        }
        Ok(())
    }

    /// Validate a vector length against the expected dimension.
    pub fn validate_dimension(expected: usize, got: usize) -> Result<(), NumError> {
        if expected != got {
            return Err(NumError::DimensionMismatch { expected, got });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a convergence tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), NumError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(NumError::InvalidTolerance(tol.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate an iteration or subdivision count.
    pub fn validate_iterations(iterations: usize) -> Result<(), NumError> {
        if iterations == 0 {
            return Err(NumError::InvalidIterations(iterations));
        }
        Ok(())
    }

    /// Validate a closed interval `[lower, upper]` with `lower < upper`.
    pub fn validate_interval<T: Float>(lower: T, upper: T) -> Result<(), NumError> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(NumError::InvalidInterval {
                lower: lower.to_f64().unwrap_or(f64::NAN),
                upper: upper.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate a grid step.
    pub fn validate_step<T: Float>(step: T) -> Result<(), NumError> {
        if !step.is_finite() || step <= T::zero() {
            return Err(NumError::InvalidStep(step.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate raster dimensions.
    pub fn validate_resolution(width: usize, height: usize) -> Result<(), NumError> {
        if width == 0 || height == 0 {
            return Err(NumError::InvalidResolution { width, height });
        }
        Ok(())
    }

    /// Validate an interpolation degree (number of nodes minus one).
    pub fn validate_node_count(degree: usize) -> Result<(), NumError> {
        if degree == 0 {
            return Err(NumError::InvalidNodeCount(degree));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), NumError> {
        if let Some(param) = duplicate_param {
            return Err(NumError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
