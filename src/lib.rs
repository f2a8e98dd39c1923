//! Pocketcalc: a pure, button-driven scientific calculator engine
//!
//! Pocketcalc follows the "pure core, imperative shell" approach. Every
//! keypress is a [`Token`](core::Token); a pure transition function turns
//! the current state and a token into the next state. A thin
//! [`Calculator`] wrapper stores the state, records a tape and logs.
//!
//! Rendering, layout and input capture belong to the host. The host maps
//! buttons to tokens and draws [`DisplayState::text`](core::DisplayState).
//!
//! # Core Concepts
//!
//! - **Tokens**: digits, decimal point, `+ - * /`, `=`, `AC`, `+/-`, `%`,
//!   and the scientific functions `sin cos tan log sqrt`
//! - **State**: the readout, the left operand, one pending operator and the
//!   "awaiting new operand" flag
//! - **Errors**: division by zero, domain errors and unreadable input show
//!   the error marker; the next token resets the engine
//! - **Tape**: immutable record of applied tokens
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::core::tokenize;
//! use pocketcalc::Calculator;
//!
//! let mut calc = Calculator::new();
//!
//! let display = calc.apply_all(tokenize("0 . 1 + 0 . 2 =").unwrap());
//! assert_eq!(display.text, "0.3");
//!
//! let display = calc.apply_all(tokenize("9 0 sin").unwrap());
//! assert_eq!(display.text, "1");
//!
//! let display = calc.apply_all(tokenize("8 / 0 =").unwrap());
//! assert_eq!(display.text, "Error");
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod settings;
pub mod snapshot;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use crate::core::{CalcError, CalculatorState, DisplayState, Token};
pub use engine::Calculator;
pub use settings::Settings;
