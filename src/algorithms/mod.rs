//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the numerical methods themselves:
//! - Convergence criteria and the scalar iteration driver
//! - Jacobi and Gauss-Seidel iteration for linear systems
//! - Newton-Raphson root finding
//! - Escape-time iteration for Mandelbrot and Julia sets
//! - Barycentric and Lagrange interpolation
//! - Trapezoidal quadrature
//! - Linear, polynomial and conic least squares
//! - Jarvis-march convex hulls
//! - Constrained maximization of linear objectives
//! - Explicit Euler integration
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Convergence criteria and the scalar iteration driver.
pub mod convergence;

/// Jacobi and Gauss-Seidel iteration.
pub mod fixed_point;

/// Newton-Raphson iteration.
pub mod newton;

/// Escape-time fractals.
pub mod escape;

/// Polynomial interpolation.
pub mod interpolation;

/// Numerical integration.
pub mod quadrature;

/// Least-squares curve fitting.
pub mod least_squares;

/// Convex hulls.
pub mod hull;

/// Constrained optimization.
pub mod optimization;

/// Ordinary differential equations.
pub mod ode;
