//! Polynomial interpolation in Lagrange and barycentric form.
//!
//! ## Purpose
//!
//! This module builds interpolation nodes with their barycentric weights and
//! evaluates the interpolating polynomial through them. It is the tool for
//! showing Runge's phenomenon on equispaced nodes and its cure on Chebyshev
//! nodes.
//!
//! ## Design notes
//!
//! * **Second barycentric form**: `p(t) = sum w_j f_j / (t - x_j) / sum w_j / (t - x_j)`,
//!   `O(n)` per evaluation once weights are known.
//! * **Closed-form weights**: Equispaced and Chebyshev families use their
//!   known weights (up to a common factor); arbitrary nodes use the generic
//!   product formula.
//! * **Node hits**: If `|t - x_j| < 1e-15` the stored value `f_j` is returned
//!   as is.
//!
//! ## Key concepts
//!
//! * **Equispaced nodes**: `x_k = -1 + 2k/n`, weights `(-1)^k C(n, k)`.
//! * **Closed Chebyshev nodes**: `x_k = cos(k pi / n)`, weights
//!   `1/2, -1, 1, ..., (-1)^n / 2`.
//! * **Scale invariance**: Barycentric weights may be multiplied by any
//!   common factor, so an affine map of the nodes leaves them valid.
//!
//! ## Non-goals
//!
//! * This module does not choose the degree or the node family automatically.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::f64::consts::PI;
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::power::binomial;
use crate::math::{from_usize, lit};
use crate::primitives::errors::NumError;
use crate::primitives::grid::linspace;

/// Distance below which an evaluation point is treated as a node.
pub const NODE_SNAP: f64 = 1e-15;

// ============================================================================
// Nodes and Weights
// ============================================================================

/// Node family for [`Nodes::family`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeFamily {
    /// Uniformly spaced nodes including both ends.
    Equispaced,
    /// Closed Chebyshev (extrema) nodes.
    #[default]
    Chebyshev,
}

/// Interpolation nodes with their barycentric weights.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nodes<T> {
    /// Node positions.
    pub x: Vec<T>,
    /// Barycentric weights, one per node.
    pub w: Vec<T>,
}

impl<T: Float> Nodes<T> {
    /// `n + 1` nodes of the given family on `[-1, 1]`.
    pub fn family(family: NodeFamily, n: usize) -> Result<Self, NumError> {
        match family {
            NodeFamily::Equispaced => equispaced_nodes(n),
            NodeFamily::Chebyshev => chebyshev_nodes(n),
        }
    }

    /// Arbitrary distinct nodes with generic weights.
    pub fn from_points(x: Vec<T>) -> Result<Self, NumError> {
        let w = barycentric_weights(&x)?;
        Ok(Self { x, w })
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True if there are no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Map nodes affinely from `[-1, 1]` onto `[a, b]`.
    pub fn map_to(mut self, a: T, b: T) -> Result<Self, NumError> {
        Validator::validate_interval(a, b)?;
        let half = lit::<T>(0.5);
        let mid = (a + b) * half;
        let radius = (b - a) * half;
        for x in &mut self.x {
            *x = mid + radius * *x;
        }
        Ok(self)
    }
}

/// `n + 1` equispaced nodes on `[-1, 1]` with weights `(-1)^k C(n, k)`.
pub fn equispaced_nodes<T: Float>(n: usize) -> Result<Nodes<T>, NumError> {
    Validator::validate_node_count(n)?;
    let n32 = u32::try_from(n).map_err(|_| NumError::Overflow {
        operation: "binomial",
        n: n as u64,
    })?;

    let x = linspace(-T::one(), T::one(), n + 1);
    let mut w = Vec::with_capacity(n + 1);
    for k in 0..=n32 {
        let c: T = T::from(binomial(n32, k)?).ok_or(NumError::Overflow {
            operation: "binomial",
            n: u64::from(n32),
        })?;
        w.push(if k % 2 == 0 { c } else { -c });
    }
    Ok(Nodes { x, w })
}

/// `n + 1` closed Chebyshev nodes `cos(k pi / n)` with their weights.
pub fn chebyshev_nodes<T: Float>(n: usize) -> Result<Nodes<T>, NumError> {
    Validator::validate_node_count(n)?;
    let pi = lit::<T>(PI);
    let nf = from_usize::<T>(n);
    let half = lit::<T>(0.5);

    let x = (0..=n)
        .map(|k| (from_usize::<T>(k) * pi / nf).cos())
        .collect();
    let w = (0..=n)
        .map(|k| {
            let sign = if k % 2 == 0 { T::one() } else { -T::one() };
            if k == 0 || k == n {
                sign * half
            } else {
                sign
            }
        })
        .collect();
    Ok(Nodes { x, w })
}

/// Generic weights `w_j = 1 / prod_{k != j} (x_j - x_k)`.
pub fn barycentric_weights<T: Float>(x: &[T]) -> Result<Vec<T>, NumError> {
    if x.is_empty() {
        return Err(NumError::EmptyInput);
    }
    Validator::validate_finite(x, "x")?;
    Validator::validate_distinct(x)?;

    Ok(x.iter()
        .enumerate()
        .map(|(j, &xj)| {
            let prod = x
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != j)
                .fold(T::one(), |acc, (_, &xk)| acc * (xj - xk));
            T::one() / prod
        })
        .collect())
}

// ============================================================================
// Barycentric Interpolant
// ============================================================================

/// Interpolating polynomial through `(x_j, f_j)` in barycentric form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarycentricInterpolant<T> {
    nodes: Nodes<T>,
    values: Vec<T>,
}

impl<T: Float> BarycentricInterpolant<T> {
    /// Interpolant through `values` at `nodes`.
    pub fn new(nodes: Nodes<T>, values: Vec<T>) -> Result<Self, NumError> {
        if nodes.is_empty() {
            return Err(NumError::EmptyInput);
        }
        Validator::validate_dimension(nodes.len(), nodes.w.len())?;
        if values.len() != nodes.len() {
            return Err(NumError::MismatchedInputs {
                x_len: nodes.len(),
                y_len: values.len(),
            });
        }
        Validator::validate_finite(&values, "values")?;
        Ok(Self { nodes, values })
    }

    /// Interpolant of `f` sampled at `nodes`.
    pub fn from_fn<F: Fn(T) -> T>(nodes: Nodes<T>, f: F) -> Result<Self, NumError> {
        let values = nodes.x.iter().map(|&x| f(x)).collect();
        Self::new(nodes, values)
    }

    /// Nodes and weights.
    #[inline]
    pub fn nodes(&self) -> &Nodes<T> {
        &self.nodes
    }

    /// Sampled values at the nodes.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Value of the interpolating polynomial at `t`.
    pub fn evaluate(&self, t: T) -> T {
        let snap = lit::<T>(NODE_SNAP);
        let mut num = T::zero();
        let mut den = T::zero();
        for ((&xj, &wj), &fj) in self.nodes.x.iter().zip(&self.nodes.w).zip(&self.values) {
            let diff = t - xj;
            if diff.abs() < snap {
                return fj;
            }
            let c = wj / diff;
            num = num + c * fj;
            den = den + c;
        }
        num / den
    }

    /// Values at every point of `ts`.
    pub fn evaluate_many(&self, ts: &[T]) -> Vec<T> {
        ts.iter().map(|&t| self.evaluate(t)).collect()
    }

    /// Largest `|p(t) - f(t)|` over `samples` evenly spaced points of `[a, b]`.
    pub fn max_error<F: Fn(T) -> T>(
        &self,
        f: F,
        a: T,
        b: T,
        samples: usize,
    ) -> Result<T, NumError> {
        Validator::validate_interval(a, b)?;
        Validator::validate_min_points(samples, 2)?;
        Ok(linspace(a, b, samples)
            .into_iter()
            .fold(T::zero(), |m, t| m.max((self.evaluate(t) - f(t)).abs())))
    }
}

// ============================================================================
// Lagrange Form
// ============================================================================

/// Classical Lagrange form `sum_j f_j prod_{k != j} (t - x_k) / (x_j - x_k)`.
///
/// `O(n^2)` per evaluation; kept as a reference for the barycentric form.
pub fn lagrange_eval<T: Float>(x: &[T], f: &[T], t: T) -> Result<T, NumError> {
    Validator::validate_xy(x, f, 1)?;
    Validator::validate_distinct(x)?;

    let mut sum = T::zero();
    for (j, (&xj, &fj)) in x.iter().zip(f).enumerate() {
        let basis = x
            .iter()
            .enumerate()
            .filter(|&(k, _)| k != j)
            .fold(T::one(), |acc, (_, &xk)| acc * (t - xk) / (xj - xk));
        sum = sum + fj * basis;
    }
    Ok(sum)
}

/// The Runge function `1 / (1 + 16 x^2)`.
#[inline]
pub fn runge<T: Float>(x: T) -> T {
    T::one() / (T::one() + lit::<T>(16.0) * x * x)
}
