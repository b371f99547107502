//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer holds the cross-cutting machinery the solvers share:
//! - Parameter and data validation
//! - Iteration traces with tabular display
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Render
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```
//!
//! Algorithm entry points also call the validator directly, so free
//! functions reject bad input without going through a builder.

/// Input and parameter validation.
pub mod validator;

/// Recorded iterates of vector iterations.
pub mod trace;
