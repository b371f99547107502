//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data types every other layer builds on:
//! - The crate-wide error type
//! - Plane points
//! - Sample grids and rectangular regions
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error type shared by every fallible operation.
pub mod errors;

/// Points in the plane.
pub mod point;

/// Evenly spaced samples and rectangular regions.
pub mod grid;
