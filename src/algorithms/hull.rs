//! Convex hull by gift wrapping.
//!
//! ## Purpose
//!
//! This module computes the convex hull of a planar point set with the Jarvis
//! march. It is used to trace the outline of an implicit curve sampled on a
//! grid.
//!
//! ## Design notes
//!
//! * **Orientation test**: `rotation(a, b, c)` is negative for a
//!   counter-clockwise turn `a -> b -> c`.
//! * **Collinear ties**: The farthest candidate wins, so interior collinear
//!   points never appear on the hull.
//!
//! ## Invariants
//!
//! * The hull is counter-clockwise and starts at the leftmost (then lowest) point.
//! * The closing vertex is not repeated.

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
use crate::primitives::point::Point2;

/// Orientation of the turn `a -> b -> c`.
///
/// `(b.y - a.y)(c.x - b.x) - (b.x - a.x)(c.y - b.y)`: negative for a
/// counter-clockwise turn, positive for clockwise, zero when collinear.
#[inline]
pub fn rotation<T: Float>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    (b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y)
}

/// Convex hull of `points`, counter-clockwise.
pub fn convex_hull<T: Float>(points: &[Point2<T>]) -> Result<Vec<Point2<T>>, NumError> {
    for p in points {
        Validator::validate_finite(&[p.x, p.y], "point")?;
    }

    let mut pts: Vec<Point2<T>> = points.to_vec();
    pts.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(core::cmp::Ordering::Equal)
            .then(a.y.partial_cmp(&b.y).unwrap_or(core::cmp::Ordering::Equal))
    });
    pts.dedup();
    Validator::validate_min_points(pts.len(), 3)?;

    // Sorted, so index 0 is leftmost then lowest.
    let start = 0usize;
    let mut hull = Vec::new();
    let mut p = start;
    loop {
        hull.push(pts[p]);
        let mut q = (p + 1) % pts.len();
        for i in 0..pts.len() {
            if i == p {
                continue;
            }
            let r = rotation(&pts[p], &pts[i], &pts[q]);
            // p -> i -> q turns counter-clockwise, or i is farther along the same line
            if r < T::zero() || (r == T::zero() && pts[p].dist2(&pts[i]) > pts[p].dist2(&pts[q]))
            {
                q = i;
            }
        }
        p = q;
        if p == start || hull.len() > pts.len() {
            break;
        }
    }

    if hull.len() < 3 {
        warn!(
            points = pts.len(),
            hull = hull.len(),
            "degenerate hull, all points collinear"
        );
    }
    debug!(points = pts.len(), hull = hull.len(), "convex hull done");
    Ok(hull)
}

/// Signed area of a closed polygon by the shoelace formula.
///
/// Positive for a counter-clockwise vertex order.
pub fn polygon_area<T: Float>(polygon: &[Point2<T>]) -> T {
    if polygon.len() < 3 {
        return T::zero();
    }
    let twice = polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .fold(T::zero(), |acc, (a, b)| acc + a.x * b.y - b.x * a.y);
    twice / (T::one() + T::one())
}
