//! Calculation errors.

use super::token::Function;
use thiserror::Error;

/// Reasons a calculation cannot produce a number.
///
/// The engine never hands these to the host as failures; it shows the
/// error marker instead. They are kept for diagnostics.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    #[error("Division by zero")]
    DivideByZero,

    #[error("{} is undefined for {value}", .function.name())]
    Domain { function: Function, value: f64 },

    #[error("Cannot read '{0}' as a number")]
    Parse(String),

    #[error("Result is not a finite number")]
    NonFinite,
}

impl CalcError {
    /// Short, stable identifier for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DivideByZero => "divide_by_zero",
            Self::Domain { .. } => "domain",
            Self::Parse(_) => "parse",
            Self::NonFinite => "non_finite",
        }
    }
}
