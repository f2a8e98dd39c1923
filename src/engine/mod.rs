//! The calculator engine.
//!
//! This module is the thin stateful shell around the pure core:
//!
//! - **Step**: `step(state, token, settings)` computes the next state and
//!   never performs side effects
//! - **Calculator**: owns one state, applies tokens, records the tape and
//!   emits `tracing` events
//!
//! Calculation failures never escape as errors. They turn into the error
//! marker, and the next token resets the engine.

mod machine;
mod step;

pub use crate::core::CalcError;
pub use machine::Calculator;
pub use step::{step, StepResult};
