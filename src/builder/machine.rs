//! Builder for constructing calculators.

use crate::builder::error::BuildError;
use crate::core::{AngleUnit, CalculatorState, Readout, Tape};
use crate::engine::Calculator;
use crate::settings::Settings;

/// Builder for constructing calculators with a fluent API.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{AngleUnit, Token, Function};
/// use pocketcalc::Calculator;
///
/// let mut calc = Calculator::builder()
///     .precision(4)
///     .angle_unit(AngleUnit::Radians)
///     .build()
///     .unwrap();
///
/// calc.apply(Token::Digit(1));
/// assert_eq!(calc.apply(Token::Function(Function::Sin)).text, "0.8415");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    settings: Settings,
    state: Option<CalculatorState>,
    tape: Tape,
}

impl CalculatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all settings at once.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn precision(mut self, places: u32) -> Self {
        self.settings.precision = places;
        self
    }

    pub fn error_marker(mut self, marker: impl Into<String>) -> Self {
        self.settings.error_marker = marker.into();
        self
    }

    pub fn angle_unit(mut self, unit: AngleUnit) -> Self {
        self.settings.angle_unit = unit;
        self
    }

    pub fn tape_limit(mut self, limit: usize) -> Self {
        self.settings.tape_limit = Some(limit);
        self
    }

    /// Start from a previously captured state instead of the initial one.
    pub fn resume(mut self, state: CalculatorState) -> Self {
        self.state = Some(state);
        self
    }

    /// Start with an existing tape.
    pub fn tape(mut self, tape: Tape) -> Self {
        self.tape = tape;
        self
    }

    /// Build the calculator.
    /// Returns an error if the settings or the resume state are invalid.
    pub fn build(self) -> Result<Calculator, BuildError> {
        let settings = self
            .settings
            .validated()
            .map_err(BuildError::InvalidSettings)?;

        let state = match self.state {
            Some(state) => {
                check_state(&state)?;
                state
            }
            None => CalculatorState::initial(),
        };

        let tape = match settings.tape_limit {
            Some(limit) => self.tape.truncated(limit),
            None => self.tape,
        };

        Ok(Calculator::from_parts(state, settings, tape))
    }
}

fn check_state(state: &CalculatorState) -> Result<(), BuildError> {
    if !state.operand1.is_finite() {
        return Err(BuildError::InvalidState(format!(
            "operand {} is not finite",
            state.operand1
        )));
    }

    let Readout::Value(text) = &state.readout else {
        return Ok(());
    };
    let digits = text.strip_prefix('-').unwrap_or(text);
    let well_formed = !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.chars().filter(|&c| c == '.').count() <= 1
        && digits != ".";
    if well_formed {
        Ok(())
    } else {
        Err(BuildError::InvalidState(format!(
            "readout '{text}' is not a decimal literal"
        )))
    }
}
