//! Builder API for ergonomic calculator construction.
//!
//! This module provides a fluent builder for configuring and resuming
//! calculators, and the `state_enum!` macro used for named phases.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::CalculatorBuilder;
