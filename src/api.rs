//! High-level builder API.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points for the configurable
//! solvers. Each solver has a fluent builder whose options are all optional;
//! `build()` fills in the defaults, validates everything and returns a
//! ready-to-run solver.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Chain only the options that differ from the defaults.
//! * **Validated**: Parameters are checked once in `build()`, never mid-run.
//! * **Strict**: Setting the same option twice is an error, reported as
//!   `DuplicateParameter` by `build()`.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder, e.g. `Newton::new()`.
//! 2. Chain configuration methods (`.tolerance()`, `.max_iterations()`, ...).
//! 3. Call `.build()` and run the returned solver.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::lit;

// Publicly re-exported types
pub use crate::algorithms::convergence::{
    iterate_to_convergence, Criterion, DeltaX, IsConverged, Iterated, Residual, Tolerance,
};
pub use crate::algorithms::escape::{
    escape_depth, julia_depth, mandelbrot_depth, DepthMap, EscapeRenderer, Fractal,
    DEFAULT_MAX_DEPTH, DEFAULT_SIZE,
};
pub use crate::algorithms::fixed_point::{
    FixedPointResult, FixedPointSolver, LinearSystem, Method,
};
pub use crate::algorithms::hull::{convex_hull, polygon_area, rotation};
pub use crate::algorithms::interpolation::{
    barycentric_weights, chebyshev_nodes, equispaced_nodes, lagrange_eval, runge,
    BarycentricInterpolant, NodeFamily, Nodes,
};
pub use crate::algorithms::least_squares::conic::{
    ellipse_samples, fit_conic, implicit_curve, Conic, ConicKind, EllipseShape,
};
pub use crate::algorithms::least_squares::{
    fit_line, fit_polynomial, FitLinalg, LinearFit, PolynomialFit,
};
pub use crate::algorithms::newton::{sqrt_newton, NewtonSolver, RootResult};
pub use crate::algorithms::ode::{euler, euler_cascade};
pub use crate::algorithms::optimization::{
    solve_vertices, GridSearchResult, GridSearchSolver, LinearConstraint, LinearProgram, Optimum,
};
pub use crate::algorithms::quadrature::{
    trapezoid, trapezoid_refined, trapezoid_samples, RefinedIntegral,
};
pub use crate::engine::trace::IterationTrace;
pub use crate::math::linalg::FloatLinalg;
pub use crate::math::power::{binomial, factorial, raise_power, raise_power_unsigned};
pub use crate::math::sequences::{
    alternating_harmonic, fixed_point_stability, mean, partial_sums, quadratic_fixed_points,
    quadratic_orbit, Stability,
};
pub use crate::math::taylor::{
    sin_periodic, sin_series, sin_table, sin_taylor, SinSample, DEFAULT_TERMS,
};
pub use crate::primitives::errors::NumError;
pub use crate::primitives::grid::{arange, linspace, Region};
pub use crate::primitives::point::Point2;
pub use crate::render::ascii::{AsciiCanvas, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use crate::render::colormap::Colormap;
#[cfg(feature = "std")]
pub use crate::render::ppm::write_ppm;
pub use crate::render::ppm::{encode_ppm, Image, Rgb};
#[cfg(feature = "std")]
pub use crate::render::table::write_table;
pub use crate::render::table::Table;

/// Default Jacobi/Gauss-Seidel sweep count.
pub const DEFAULT_SWEEPS: usize = 9;

/// Default Newton tolerance.
pub const DEFAULT_NEWTON_TOLERANCE: f64 = 1e-8;

/// Default Newton step budget.
pub const DEFAULT_NEWTON_ITERATIONS: usize = 1000;

/// Default grid-search upper bound for both variables.
pub const DEFAULT_GRID_BOUND: f64 = 75.0;

// ============================================================================
// Fixed Point
// ============================================================================

/// Fluent builder for Jacobi and Gauss-Seidel solvers.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPointBuilder<T> {
    /// Update scheme.
    pub method: Option<Method>,

    /// Number of sweeps, or the sweep budget when a tolerance is set.
    pub max_iterations: Option<usize>,

    /// Stop once the largest component change drops below this.
    pub tolerance: Option<T>,

    /// Starting vector (zeros when unset).
    pub initial_guess: Option<Vec<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for FixedPointBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FixedPointBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            method: None,
            max_iterations: None,
            tolerance: None,
            initial_guess: None,
            duplicate_param: None,
        }
    }

    /// Set the update scheme.
    pub fn method(mut self, method: Method) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set the number of sweeps.
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(iterations);
        self
    }

    /// Stop early once `max_i |dx_i| < tol`.
    pub fn tolerance(mut self, tol: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tol);
        self
    }

    /// Set the starting vector.
    pub fn initial_guess(mut self, guess: Vec<T>) -> Self {
        if self.initial_guess.is_some() {
            self.duplicate_param = Some("initial_guess");
        }
        self.initial_guess = Some(guess);
        self
    }

    /// Validate the configuration and create the solver.
    pub fn build(self) -> Result<FixedPointSolver<T>, NumError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let max_iterations = self.max_iterations.unwrap_or(DEFAULT_SWEEPS);
        Validator::validate_iterations(max_iterations)?;

        if let Some(tol) = self.tolerance {
            Validator::validate_tolerance(tol)?;
        }
        if let Some(ref guess) = self.initial_guess {
            Validator::validate_finite(guess, "initial_guess")?;
        }

        Ok(FixedPointSolver {
            method: self.method.unwrap_or_default(),
            max_iterations,
            tolerance: self.tolerance,
            initial_guess: self.initial_guess,
        })
    }
}

// ============================================================================
// Newton
// ============================================================================

/// Fluent builder for Newton-Raphson root finding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonBuilder<T> {
    /// Convergence threshold.
    pub tolerance: Option<T>,

    /// Quantity the threshold applies to.
    pub criterion: Option<Criterion>,

    /// Step budget.
    pub max_iterations: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for NewtonBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> NewtonBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tolerance: None,
            criterion: None,
            max_iterations: None,
            duplicate_param: None,
        }
    }

    /// Set the convergence threshold.
    pub fn tolerance(mut self, tol: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tol);
        self
    }

    /// Choose residual or step-length convergence.
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        if self.criterion.is_some() {
            self.duplicate_param = Some("criterion");
        }
        self.criterion = Some(criterion);
        self
    }

    /// Set the step budget.
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(iterations);
        self
    }

    /// Validate the configuration and create the solver.
    pub fn build(self) -> Result<NewtonSolver<T>, NumError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let eps = self
            .tolerance
            .unwrap_or_else(|| lit(DEFAULT_NEWTON_TOLERANCE));
        Validator::validate_tolerance(eps)?;

        let max_iterations = self.max_iterations.unwrap_or(DEFAULT_NEWTON_ITERATIONS);
        Validator::validate_iterations(max_iterations)?;

        Ok(NewtonSolver {
            tolerance: Tolerance {
                criterion: self.criterion.unwrap_or_default(),
                eps,
            },
            max_iterations,
        })
    }
}

// ============================================================================
// Escape Time
// ============================================================================

/// Fluent builder for Mandelbrot and Julia renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeBuilder<T> {
    /// Set to iterate.
    pub fractal: Option<Fractal<T>>,

    /// Visible part of the complex plane.
    pub region: Option<Region<T>>,

    /// Raster size `(width, height)` in pixels.
    pub resolution: Option<(usize, usize)>,

    /// Iteration limit per pixel.
    pub max_depth: Option<u32>,

    /// Render rows in parallel (needs the `parallel` feature).
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float + Send + Sync> Default for EscapeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Send + Sync> EscapeBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fractal: None,
            region: None,
            resolution: None,
            max_depth: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Choose Mandelbrot or a Julia set.
    pub fn fractal(mut self, fractal: Fractal<T>) -> Self {
        if self.fractal.is_some() {
            self.duplicate_param = Some("fractal");
        }
        self.fractal = Some(fractal);
        self
    }

    /// Set the visible region.
    pub fn region(mut self, region: Region<T>) -> Self {
        if self.region.is_some() {
            self.duplicate_param = Some("region");
        }
        self.region = Some(region);
        self
    }

    /// Set the raster size in pixels.
    pub fn resolution(mut self, width: usize, height: usize) -> Self {
        if self.resolution.is_some() {
            self.duplicate_param = Some("resolution");
        }
        self.resolution = Some((width, height));
        self
    }

    /// Set the iteration limit per pixel.
    pub fn max_depth(mut self, depth: u32) -> Self {
        if self.max_depth.is_some() {
            self.duplicate_param = Some("max_depth");
        }
        self.max_depth = Some(depth);
        self
    }

    /// Render rows in parallel when the `parallel` feature is enabled.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and create the renderer.
    pub fn build(self) -> Result<EscapeRenderer<T>, NumError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let region = self.region.unwrap_or_default();
        Validator::validate_interval(region.x_min, region.x_max)?;
        Validator::validate_interval(region.y_min, region.y_max)?;

        let (width, height) = self.resolution.unwrap_or((DEFAULT_SIZE, DEFAULT_SIZE));
        Validator::validate_resolution(width, height)?;

        let max_depth = self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
        Validator::validate_iterations(max_depth as usize)?;

        if let Some(Fractal::Julia { c }) = self.fractal {
            Validator::validate_finite(&[c.re, c.im], "julia c")?;
        }

        Ok(EscapeRenderer {
            fractal: self.fractal.unwrap_or_default(),
            region,
            width,
            height,
            max_depth,
            parallel: self.parallel.unwrap_or(cfg!(feature = "parallel")),
        })
    }
}

// ============================================================================
// Grid Search
// ============================================================================

/// Fluent builder for the exhaustive linear-program search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSearchBuilder<T> {
    /// Half-open range of `x`.
    pub x_range: Option<(T, T)>,

    /// Half-open range of `y`.
    pub y_range: Option<(T, T)>,

    /// Grid spacing.
    pub step: Option<T>,

    /// Return every feasible grid point.
    pub keep_points: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for GridSearchBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> GridSearchBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            x_range: None,
            y_range: None,
            step: None,
            keep_points: None,
            duplicate_param: None,
        }
    }

    /// Set the `x` range `[start, end)`.
    pub fn x_range(mut self, start: T, end: T) -> Self {
        if self.x_range.is_some() {
            self.duplicate_param = Some("x_range");
        }
        self.x_range = Some((start, end));
        self
    }

    /// Set the `y` range `[start, end)`.
    pub fn y_range(mut self, start: T, end: T) -> Self {
        if self.y_range.is_some() {
            self.duplicate_param = Some("y_range");
        }
        self.y_range = Some((start, end));
        self
    }

    /// Set the grid spacing.
    pub fn step(mut self, step: T) -> Self {
        if self.step.is_some() {
            self.duplicate_param = Some("step");
        }
        self.step = Some(step);
        self
    }

    /// Collect every feasible grid point into the result.
    pub fn keep_points(mut self, keep: bool) -> Self {
        if self.keep_points.is_some() {
            self.duplicate_param = Some("keep_points");
        }
        self.keep_points = Some(keep);
        self
    }

    /// Validate the configuration and create the solver.
    pub fn build(self) -> Result<GridSearchSolver<T>, NumError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let bound = lit::<T>(DEFAULT_GRID_BOUND);
        let x_range = self.x_range.unwrap_or((T::zero(), bound));
        let y_range = self.y_range.unwrap_or((T::zero(), bound));
        Validator::validate_interval(x_range.0, x_range.1)?;
        Validator::validate_interval(y_range.0, y_range.1)?;

        let step = self.step.unwrap_or_else(T::one);
        Validator::validate_step(step)?;

        Ok(GridSearchSolver {
            x_range,
            y_range,
            step,
            keep_points: self.keep_points.unwrap_or(false),
        })
    }
}
