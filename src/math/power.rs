//! Integer powers, factorials and binomial coefficients.
//!
//! ## Purpose
//!
//! This module provides exact-arithmetic helpers used by the series and
//! interpolation code: powers by repeated multiplication, checked factorials
//! and overflow-safe binomial coefficients.
//!
//! ## Design notes
//!
//! * **Checked**: Factorials and binomials return `Overflow` instead of wrapping.
//! * **Multiplicative binomial**: `C(n, k)` is built as `C(n, i+1) = C(n, i) (n-i) / (i+1)`,
//!   which is exact at every step and never forms `n!`.
//!
//! ## Invariants
//!
//! * `raise_power(b, 0) == 1` for every `b`, including zero.
//! * `binomial(n, k) == binomial(n, n - k)` for `k <= n`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::NumError;

// ============================================================================
// Powers
// ============================================================================

/// `base^power` by repeated multiplication.
///
/// Negative powers return `1 / base^|power|`.
pub fn raise_power<T: Float>(base: T, power: i32) -> T {
    let magnitude = raise_power_unsigned(base, power.saturating_abs());
    if power < 0 {
        T::one() / magnitude
    } else {
        magnitude
    }
}

/// `base^power` for non-negative powers; negative powers yield zero.
pub fn raise_power_unsigned<T: Float>(base: T, power: i32) -> T {
    if power < 0 {
        return T::zero();
    }
    let mut result = T::one();
    for _ in 0..power {
        result = result * base;
    }
    result
}

// ============================================================================
// Factorials and Binomials
// ============================================================================

/// `n!` as a `u64`. `21!` and above overflow.
pub fn factorial(n: u32) -> Result<u64, NumError> {
    let mut result: u64 = 1;
    for k in 2..=u64::from(n) {
        result = result.checked_mul(k).ok_or(NumError::Overflow {
            operation: "factorial",
            n: u64::from(n),
        })?;
    }
    Ok(result)
}

/// Binomial coefficient `C(n, k)`; zero when `k > n`.
pub fn binomial(n: u32, k: u32) -> Result<u64, NumError> {
    if k > n {
        return Ok(0);
    }
    let k = k.min(n - k);
    let n64 = u64::from(n);

    // u128 keeps the intermediate product exact before the division.
    let mut result: u128 = 1;
    for i in 0..u64::from(k) {
        result = result * u128::from(n64 - i) / u128::from(i + 1);
        if result > u128::from(u64::MAX) {
            return Err(NumError::Overflow {
                operation: "binomial",
                n: n64,
            });
        }
    }
    Ok(result as u64)
}

// ============================================================================
// Tests
// ============================================================================
