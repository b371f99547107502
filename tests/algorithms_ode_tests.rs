#![cfg(feature = "dev")]
//! Tests for explicit Euler integration of first-order lags.
//!
//! ## Test Organization
//!
//! 1. **Single Lag** - Hand-computed step response and steady state
//! 2. **Cascades** - Stage outputs, pulse delay and inclusive horizon
//! 3. **Validation** - Empty input, step and stage count

use approx::assert_relative_eq;
use numlab::internals::algorithms::ode::{euler, euler_cascade};
use numlab::internals::primitives::errors::NumError;

// ============================================================================
// Euler Integration Tests
// ============================================================================

/// Test a step response by hand.
#[test]
fn test_euler_step_response() {
    let x = euler(&[1.0, 1.0, 1.0, 1.0], 1.0, 0.0, 0.5).unwrap();
    assert_eq!(x, vec![0.0, 0.5, 0.75, 0.875]);
}

/// Test that a constant input settles at u / a.
#[test]
fn test_euler_steady_state() {
    let u = vec![3.0; 400];
    let x = euler(&u, 1.5, 0.0, 0.1).unwrap();
    assert_eq!(x.len(), 400);
    assert_relative_eq!(*x.last().unwrap(), 2.0, epsilon = 1e-9);
}

/// Test two lags in series.
#[test]
fn test_euler_cascade() {
    let out = euler_cascade(&[1.0, 1.0, 1.0, 1.0], 1.0, 0.0, 0.5, 2).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], vec![0.0, 0.5, 0.75, 0.875]);
    assert_eq!(out[1], vec![0.0, 0.0, 0.25, 0.5]);
}

/// Test that each stage delays the pulse.
#[test]
fn test_euler_cascade_pulse_delay() {
    let dt = 0.1;
    let u: Vec<f64> = (0..100)
        .map(|k| (-(k as f64 * dt - 5.0).powi(10)).exp())
        .collect();
    let out = euler_cascade(&u, 1.5, 0.0, dt, 2).unwrap();

    let peak = |v: &[f64]| {
        v.iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |m, (k, &x)| if x > m.1 { (k, x) } else { m })
    };
    let (k1, p1) = peak(&out[0]);
    let (k2, p2) = peak(&out[1]);
    assert!(k2 > k1);
    assert!(p2 < p1);
}

/// Test that n steps over an inclusive horizon give n + 1 states per stage.
#[test]
fn test_euler_cascade_inclusive_horizon() {
    let (dt, n) = (0.1, 100);
    let t: Vec<f64> = (0..=n).map(|k| k as f64 * dt).collect();
    let u: Vec<f64> = t.iter().map(|&tk| (-(tk - 5.0).powi(10)).exp()).collect();
    let out = euler_cascade(&u, 1.5, 0.0, dt, 2).unwrap();

    assert_eq!(t.len(), n + 1);
    assert_relative_eq!(*t.last().unwrap(), 10.0, epsilon = 1e-12);
    for x in &out {
        assert_eq!(x.len(), n + 1);
        assert_eq!(x[0], 0.0);
        // The pulse has passed, so the final state has decayed below the peak.
        let peak = x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(x[n] < peak);
    }
}

/// Test argument validation.
#[test]
fn test_euler_invalid() {
    assert_eq!(euler::<f64>(&[], 1.0, 0.0, 0.1), Err(NumError::EmptyInput));
    assert_eq!(
        euler(&[1.0], 1.0, 0.0, 0.0),
        Err(NumError::InvalidStep(0.0))
    );
    assert_eq!(
        euler_cascade(&[1.0], 1.0, 0.0, 0.1, 0),
        Err(NumError::InvalidIterations(0))
    );
}
