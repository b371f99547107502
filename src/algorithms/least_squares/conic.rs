//! Implicit conic fitting.
//!
//! ## Purpose
//!
//! This module fits the implicit conic `A x^2 + B y^2 + C xy + D x + E y = 1`
//! to scattered points and extracts a sampled outline of the fitted curve.
//!
//! ## Design notes
//!
//! * **Linear model**: Each point contributes a design row
//!   `[x^2, y^2, xy, x, y]` with right-hand side 1, solved by QR least squares.
//! * **Normalization**: Fixing the constant term to `-1` excludes conics
//!   through the origin; data near the origin makes the fit ill-posed.
//! * **Outline**: [`implicit_curve`] keeps the grid points whose squared
//!   residual is below a threshold, which yields a band of points along the
//!   curve; the convex hull of that band traces an ellipse.
//!
//! ## Key concepts
//!
//! * **Discriminant**: `C^2 - 4 A B` is negative for ellipses, zero for
//!   parabolas and positive for hyperbolas.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::f64::consts::PI;
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::math::{from_usize, lit};
use crate::primitives::errors::NumError;
use crate::primitives::grid::{arange, Region};
use crate::primitives::point::Point2;

/// Minimum number of points for a conic fit.
pub const CONIC_MIN_POINTS: usize = 5;

// ============================================================================
// Conic
// ============================================================================

/// Shape class of a conic section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConicKind {
    /// Closed curve, `C^2 - 4AB < 0`.
    Ellipse,
    /// `C^2 - 4AB = 0`.
    Parabola,
    /// `C^2 - 4AB > 0`.
    Hyperbola,
}

/// Conic `a x^2 + b y^2 + c xy + d x + e y = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conic<T> {
    /// Coefficient of `x^2`.
    pub a: T,
    /// Coefficient of `y^2`.
    pub b: T,
    /// Coefficient of `xy`.
    pub c: T,
    /// Coefficient of `x`.
    pub d: T,
    /// Coefficient of `y`.
    pub e: T,
}

impl<T: Float> Conic<T> {
    /// Implicit residual `a x^2 + b y^2 + c xy + d x + e y - 1`.
    #[inline]
    pub fn evaluate(&self, x: T, y: T) -> T {
        self.a * x * x + self.b * y * y + self.c * x * y + self.d * x + self.e * y - T::one()
    }

    /// `c^2 - 4ab`.
    #[inline]
    pub fn discriminant(&self) -> T {
        self.c * self.c - lit::<T>(4.0) * self.a * self.b
    }

    /// Shape class, with `eps` as the tolerance for a zero discriminant.
    pub fn kind(&self, eps: T) -> ConicKind {
        let disc = self.discriminant();
        if disc.abs() <= eps {
            ConicKind::Parabola
        } else if disc < T::zero() {
            ConicKind::Ellipse
        } else {
            ConicKind::Hyperbola
        }
    }

    /// Centre of a central conic (ellipse or hyperbola), where the gradient vanishes.
    pub fn center(&self) -> Option<Point2<T>> {
        // [2a c; c 2b] [x; y] = -[d; e]
        let two = lit::<T>(2.0);
        let det = lit::<T>(4.0) * self.a * self.b - self.c * self.c;
        if det.abs() <= T::epsilon() {
            return None;
        }
        let x = (self.c * self.e - two * self.b * self.d) / det;
        let y = (self.c * self.d - two * self.a * self.e) / det;
        Some(Point2::new(x, y))
    }
}

/// Least-squares conic through `points`.
pub fn fit_conic<T: FloatLinalg>(points: &[Point2<T>]) -> Result<Conic<T>, NumError> {
    Validator::validate_min_points(points.len(), CONIC_MIN_POINTS)?;
    if let Some(i) = points.iter().position(|p| !p.is_finite()) {
        let x: Vec<T> = vec![points[i].x, points[i].y];
        Validator::validate_finite(&x, "point")?;
    }

    let mut design = Vec::with_capacity(points.len() * 5);
    for p in points {
        design.extend_from_slice(&[p.x * p.x, p.y * p.y, p.x * p.y, p.x, p.y]);
    }
    let rhs = vec![T::one(); points.len()];

    let coef =
        T::solve_least_squares(&design, &rhs, points.len(), 5).ok_or(NumError::SingularSystem)?;
    if coef.iter().any(|c| !c.is_finite()) {
        return Err(NumError::SingularSystem);
    }
    debug!(points = points.len(), "conic fit done");
    Ok(Conic {
        a: coef[0],
        b: coef[1],
        c: coef[2],
        d: coef[3],
        e: coef[4],
    })
}

// ============================================================================
// Curve Extraction
// ============================================================================

/// Grid points of `region` (spacing `step`) with `residual^2 < threshold`.
pub fn implicit_curve<T: Float>(
    conic: &Conic<T>,
    region: &Region<T>,
    step: T,
    threshold: T,
) -> Result<Vec<Point2<T>>, NumError> {
    Validator::validate_step(step)?;
    Validator::validate_tolerance(threshold)?;

    let xs = arange(region.x_min, region.x_max + step * lit(0.5), step)?;
    let ys = arange(region.y_min, region.y_max + step * lit(0.5), step)?;

    let mut out = Vec::new();
    for &x in &xs {
        for &y in &ys {
            let z = conic.evaluate(x, y);
            if z * z < threshold {
                out.push(Point2::new(x, y));
            }
        }
    }
    Ok(out)
}

// ============================================================================
// Sample Data
// ============================================================================

/// Shape of the parametric test ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipseShape<T> {
    /// First semi-axis.
    pub a: T,
    /// Second semi-axis.
    pub b: T,
    /// Tilt angle in radians.
    pub theta: T,
    /// Horizontal offset.
    pub x0: T,
    /// Vertical offset.
    pub y0: T,
}

impl<T: Float> Default for EllipseShape<T> {
    /// `a = 2`, `b = 1.5`, `theta = pi / 8`, centred at `(2, 0)`.
    fn default() -> Self {
        Self {
            a: lit(2.0),
            b: lit(1.5),
            theta: lit(PI / 8.0),
            x0: lit(2.0),
            y0: T::zero(),
        }
    }
}

impl<T: Float> EllipseShape<T> {
    /// Point at parameter `t`.
    ///
    /// `x = a cos(th) cos t - b sin(th) sin t + x0`,
    /// `y = a sin(th) sin t + b cos(th) cos t + y0`.
    pub fn at(&self, t: T) -> Point2<T> {
        let (st, ct) = self.theta.sin_cos();
        let (s, c) = t.sin_cos();
        Point2::new(
            self.a * ct * c - self.b * st * s + self.x0,
            self.a * st * s + self.b * ct * c + self.y0,
        )
    }
}

/// `count + 1` points at `t_k = 2 pi k / count`, each displaced by `noise(k)`.
pub fn ellipse_samples<T, N>(shape: &EllipseShape<T>, count: usize, mut noise: N) -> Vec<Point2<T>>
where
    T: Float,
    N: FnMut(usize) -> (T, T),
{
    let two_pi = lit::<T>(2.0 * PI);
    let n = from_usize::<T>(count.max(1));
    (0..=count)
        .map(|k| {
            let p = shape.at(two_pi * from_usize::<T>(k) / n);
            let (dx, dy) = noise(k);
            Point2::new(p.x + dx, p.y + dy)
        })
        .collect()
}
