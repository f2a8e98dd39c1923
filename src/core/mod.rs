//! Core calculator types and logic.
//!
//! This module contains the pure core of the engine:
//! - Input tokens and their keypad categories
//! - The four-field calculator state and its named phases
//! - Numeric parsing, formatting and evaluation rules
//! - The immutable tape of applied tokens
//!
//! Nothing in this module performs I/O or holds mutable shared state.

mod error;
mod number;
mod state;
mod tape;
mod token;

pub use error::CalcError;
pub use number::{
    apply_function, evaluate, format_number, parse_number, round_to, AngleUnit,
    DEFAULT_PRECISION, MAX_PRECISION,
};
pub use state::{CalculatorState, DisplayState, Phase, Readout, State};
pub use tape::{Tape, TapeEntry};
pub use token::{tokenize, Function, Operator, ParseTokenError, Token, TokenCategory};
