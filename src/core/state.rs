//! Calculator state and the `State` trait.
//!
//! The engine keeps exactly four fields: the readout, the left operand,
//! the pending operator and the "awaiting new operand" flag. Everything
//! else (phase, host display) is derived from them.

use super::token::Operator;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for inspectable machine states.
///
/// All methods are pure. States are plain values that can be cloned into
/// the tape, compared in tests and serialized into snapshots.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{Phase, State};
///
/// assert_eq!(Phase::Entering.name(), "Entering");
/// assert!(Phase::Error.is_error());
/// assert!(!Phase::Ready.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

crate::state_enum! {
    /// Coarse, named view of a [`CalculatorState`].
    pub enum Phase {
        /// Waiting for a fresh number with nothing queued
        Ready,
        /// A number is being typed
        Entering,
        /// An operator is queued and the right operand is awaited
        Pending,
        /// The error marker is shown
        Error,
    }
    error: [Error]
}

/// The text on the calculator's display.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Readout {
    /// A decimal literal such as `"0"`, `"12."` or `"-0.5"`
    Value(String),
    /// The error marker
    Error,
}

impl Readout {
    pub fn zero() -> Self {
        Self::Value("0".to_string())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// The literal text, or `None` when the error marker is shown.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(text) => Some(text),
            Self::Error => None,
        }
    }

    /// Text for the host to draw, substituting `error_marker` for errors.
    pub fn render<'a>(&'a self, error_marker: &'a str) -> &'a str {
        match self {
            Self::Value(text) => text,
            Self::Error => error_marker,
        }
    }
}

impl Default for Readout {
    fn default() -> Self {
        Self::zero()
    }
}

/// Complete engine state.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{CalculatorState, Phase, Readout};
///
/// let state = CalculatorState::initial();
/// assert_eq!(state.readout, Readout::zero());
/// assert_eq!(state.operand1, 0.0);
/// assert!(state.operator.is_none());
/// assert!(state.awaiting_new_operand);
/// assert_eq!(state.phase(), Phase::Ready);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    /// What the display currently shows
    pub readout: Readout,
    /// Left-hand operand of the pending operation
    pub operand1: f64,
    /// Operator queued against `operand1`
    pub operator: Option<Operator>,
    /// The next digit starts a new number instead of extending the readout
    pub awaiting_new_operand: bool,
}

impl CalculatorState {
    pub fn initial() -> Self {
        Self {
            readout: Readout::zero(),
            operand1: 0.0,
            operator: None,
            awaiting_new_operand: true,
        }
    }

    pub fn is_initial(&self) -> bool {
        *self == Self::initial()
    }

    pub fn phase(&self) -> Phase {
        if self.readout.is_error() {
            Phase::Error
        } else if !self.awaiting_new_operand {
            Phase::Entering
        } else if self.operator.is_some() {
            Phase::Pending
        } else {
            Phase::Ready
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::initial()
    }
}

impl State for CalculatorState {
    fn name(&self) -> &str {
        match self.phase() {
            Phase::Ready => "Ready",
            Phase::Entering => "Entering",
            Phase::Pending => "Pending",
            Phase::Error => "Error",
        }
    }

    fn is_error(&self) -> bool {
        self.readout.is_error()
    }
}

/// What the host renders after each token.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DisplayState {
    /// Display text, with the configured error marker substituted
    pub text: String,
    pub phase: Phase,
    /// Operator waiting for its right operand, if any
    pub pending: Option<Operator>,
}

impl DisplayState {
    pub fn from_state(state: &CalculatorState, error_marker: &str) -> Self {
        Self {
            text: state.readout.render(error_marker).to_string(),
            phase: state.phase(),
            pending: state.operator,
        }
    }

    pub fn is_error(&self) -> bool {
        self.phase.is_error()
    }
}
