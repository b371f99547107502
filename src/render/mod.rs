//! Layer 4: Render
//!
//! # Purpose
//!
//! This layer turns numeric results into something a person can look at:
//! - Colour maps from escape depths to RGB
//! - Binary PPM images
//! - ASCII plots for the terminal
//! - Whitespace-separated data tables for external plotting
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Render ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Depth-to-colour mappings.
pub mod colormap;

/// RGB rasters and PPM encoding.
pub mod ppm;

/// Character-grid plots.
pub mod ascii;

/// Column tables.
pub mod table;
