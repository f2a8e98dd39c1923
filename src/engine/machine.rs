//! Calculator that applies tokens and keeps its tape.

use crate::builder::CalculatorBuilder;
use crate::core::{
    CalcError, CalculatorState, DisplayState, ParseTokenError, State, Tape, TapeEntry, Token,
};
use crate::engine::step::{step, StepResult};
use crate::settings::Settings;
use chrono::Utc;

/// A calculator engine instance.
///
/// Owns one [`CalculatorState`]. Each call to [`apply`](Self::apply) runs
/// the pure [`step`] function, stores the result and records it on the tape.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{Operator, Token};
/// use pocketcalc::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.apply(Token::Digit(1));
/// calc.apply(Token::Operator(Operator::Add));
/// calc.apply(Token::Digit(2));
/// let display = calc.apply(Token::Equals);
///
/// assert_eq!(display.text, "3");
/// assert_eq!(calc.tape().len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    state: CalculatorState,
    settings: Settings,
    tape: Tape,
    last_error: Option<CalcError>,
}

impl Calculator {
    /// Create a calculator with default settings in the initial state.
    pub fn new() -> Self {
        Self::from_parts(CalculatorState::initial(), Settings::default(), Tape::new())
    }

    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    pub(crate) fn from_parts(state: CalculatorState, settings: Settings, tape: Tape) -> Self {
        Self {
            state,
            settings,
            tape,
            last_error: None,
        }
    }

    /// Apply one token and return what the host should show.
    pub fn apply(&mut self, token: Token) -> DisplayState {
        let result = step(&self.state, token, &self.settings);
        self.apply_result(token, result);
        self.display()
    }

    /// Apply tokens in order, returning the final display.
    pub fn apply_all<I>(&mut self, tokens: I) -> DisplayState
    where
        I: IntoIterator<Item = Token>,
    {
        for token in tokens {
            self.apply(token);
        }
        self.display()
    }

    /// Parse a keypad label and apply it.
    pub fn press(&mut self, label: &str) -> Result<DisplayState, ParseTokenError> {
        let token: Token = label.parse()?;
        Ok(self.apply(token))
    }

    pub fn display(&self) -> DisplayState {
        DisplayState::from_state(&self.state, &self.settings.error_marker)
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Why the most recent token failed, if it did.
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    pub fn clear_tape(&mut self) {
        self.tape = Tape::new();
    }

    fn apply_result(&mut self, token: Token, result: StepResult) {
        let (next, error) = match result {
            StepResult::Ignored => {
                tracing::trace!(token = %token, readout = self.rendered(), "token ignored");
                return;
            }
            StepResult::Transitioned(next) => (next, None),
            StepResult::Failed { error, state } => (state, Some(error)),
        };

        let before = std::mem::replace(&mut self.state, next);

        if let Some(error) = &error {
            tracing::debug!(
                token = %token,
                kind = error.kind(),
                error = %error,
                "calculation failed"
            );
        }
        tracing::debug!(
            token = %token,
            from = before.name(),
            to = self.state.name(),
            readout = self.rendered(),
            "applied token"
        );

        let entry = TapeEntry {
            token,
            before: before.readout,
            after: self.state.readout.clone(),
            phase: self.state.phase(),
            timestamp: Utc::now(),
        };
        self.tape.push(entry, self.settings.tape_limit);
        self.last_error = error;
    }

    fn rendered(&self) -> &str {
        self.state.readout.render(&self.settings.error_marker)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
