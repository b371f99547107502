//! # numlab — Classic Numerical Methods for Rust
//!
//! A collection of the classic algorithms of an introductory numerical
//! methods course, each small, generic over the float type and validated at
//! its entry point.
//!
//! ## What is in the box?
//!
//! - **Power and series**: integer powers, factorials, binomials without
//!   overflow, Taylor series of `sin` with range reduction.
//! - **Sequences**: quadratic orbits, fixed-point stability, partial sums.
//! - **Linear systems**: Jacobi and Gauss-Seidel iteration with traces,
//!   direct QR solves as a reference.
//! - **Roots**: Newton-Raphson with pluggable convergence criteria, Heron's
//!   square root.
//! - **Escape time**: Mandelbrot and Julia rasters, colour maps, PPM output.
//! - **Interpolation**: barycentric interpolation on equispaced and Chebyshev
//!   nodes (Runge's phenomenon and its cure).
//! - **Quadrature**: composite and adaptive trapezoidal rules.
//! - **Least squares**: lines, polynomials and implicit conics.
//! - **Geometry**: convex hulls by gift wrapping.
//! - **Optimization**: two-variable linear programs by grid search and by
//!   vertex enumeration.
//! - **ODEs**: explicit Euler for first-order lags and their cascades.
//!
//! ## Quick Start
//!
//! ### Iterating a Linear System
//!
//! ```rust
//! use numlab::prelude::*;
//!
//! // 7 x1 - x2 = 5, 3 x1 - 5 x2 = -7
//! let system = LinearSystem::new(2, vec![7.0_f64, -1.0, 3.0, -5.0], vec![5.0, -7.0])?;
//!
//! let solver = FixedPoint::new()
//!     .method(GaussSeidel)
//!     .max_iterations(9)
//!     .build()?;
//!
//! let result = solver.solve(&system)?;
//! assert!((result.solution[0] - 1.0).abs() < 1e-6);
//! assert!((result.solution[1] - 2.0).abs() < 1e-6);
//!
//! // One row per sweep: k, x1, x2
//! println!("{}", result.trace);
//! # Result::<(), NumError>::Ok(())
//! ```
//!
//! ### Finding a Root
//!
//! ```rust
//! use numlab::prelude::*;
//!
//! // x^x = 100
//! let solver = Newton::new().tolerance(1e-8).build()?;
//! let root = solver.solve(
//!     |x: f64| x.powf(x) - 100.0,
//!     |x: f64| x.powf(x) * (x.ln() + 1.0),
//!     1.0,
//! )?;
//!
//! assert!((root.x.powf(root.x) - 100.0).abs() < 1e-6);
//! # Result::<(), NumError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, NumError>`. Builders report
//! invalid or repeated options from `build()`, before any work is done:
//!
//! ```rust
//! use numlab::prelude::*;
//!
//! let err = Newton::<f64>::new()
//!     .tolerance(1e-6)
//!     .tolerance(1e-9)
//!     .build()
//!     .unwrap_err();
//!
//! assert_eq!(err, NumError::DuplicateParameter { parameter: "tolerance" });
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std + alloc`. Disable default features to remove
//! the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! numlab = { version = "0.1", default-features = false }
//! ```
//!
//! Everything except writing PPM images and tables to `std::io` sinks is
//! available; `encode_ppm` and the `Display` of [`prelude::Table`] still work.
//!
//! ## Features
//!
//! | Feature    | Effect                                               |
//! |------------|------------------------------------------------------|
//! | `std`      | `std::error::Error`, `std::io` writers (default)     |
//! | `parallel` | Row-parallel escape-time rendering with rayon        |
//! | `serde`    | `Serialize`/`Deserialize` for results and configs    |
//! | `cli`      | The `numlab` command-line binary (default)           |
//! | `dev`      | Exposes internal modules for testing                 |

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type, plane points, sample grids and regions.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains powers and factorials, Taylor series, scalar sequences
// and the dense linear-algebra backend.
mod math;

// Layer 3: Algorithms - the numerical methods.
//
// Contains fixed-point and Newton iteration, escape time, interpolation,
// quadrature, least squares, convex hulls, linear programming and
// Euler integration.
mod algorithms;

// Layer 4: Render - turning results into pictures and tables.
//
// Contains colour maps, PPM images, ASCII plots and data tables.
mod render;

// Layer 5: Engine - validation and iteration records.
//
// Contains the parameter validator and iteration traces.
mod engine;

// High-level fluent API.
//
// Provides the `FixedPoint`, `Newton`, `Escape` and `GridSearch` builders.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard numlab prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use numlab::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        alternating_harmonic, arange, barycentric_weights, binomial, chebyshev_nodes,
        convex_hull, ellipse_samples, encode_ppm, equispaced_nodes, escape_depth, euler,
        euler_cascade, factorial, fit_conic, fit_line, fit_polynomial, fixed_point_stability,
        implicit_curve, iterate_to_convergence, julia_depth, lagrange_eval, linspace,
        mandelbrot_depth, mean, partial_sums, polygon_area, quadratic_fixed_points,
        quadratic_orbit, raise_power, raise_power_unsigned, rotation, runge, sin_periodic,
        sin_series, sin_table, sin_taylor, solve_vertices, sqrt_newton, trapezoid,
        trapezoid_refined, trapezoid_samples, AsciiCanvas, BarycentricInterpolant,
        Colormap::{Gradient, Grayscale},
        Conic, ConicKind, Criterion, DeltaX, DepthMap, EllipseShape, EscapeBuilder as Escape,
        EscapeRenderer, FitLinalg, FixedPointBuilder as FixedPoint, FixedPointResult,
        FixedPointSolver, FloatLinalg,
        Fractal::{Julia, Mandelbrot},
        GridSearchBuilder as GridSearch, GridSearchResult, GridSearchSolver, Image,
        IsConverged, Iterated, IterationTrace, LinearConstraint, LinearFit, LinearProgram,
        LinearSystem,
        Method::{GaussSeidel, Jacobi},
        NewtonBuilder as Newton, NewtonSolver,
        NodeFamily::{Chebyshev, Equispaced},
        Nodes, NumError, Optimum, Point2, PolynomialFit, RefinedIntegral, Region, Residual,
        Rgb, RootResult, SinSample, Stability, Table,
    };
    pub use crate::api::{Colormap, ConicKind::*, Fractal, Method, NodeFamily, Tolerance};
    pub use crate::api::{
        DEFAULT_COLUMNS, DEFAULT_MAX_DEPTH, DEFAULT_ROWS, DEFAULT_SIZE, DEFAULT_TERMS,
    };

    #[cfg(feature = "std")]
    pub use crate::api::{write_ppm, write_table};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal numerical methods.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal rendering.
    pub mod render {
        pub use crate::render::*;
    }
    /// Internal validation and traces.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
