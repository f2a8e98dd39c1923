//! The pure transition function.

use crate::core::{
    apply_function, evaluate, format_number, parse_number, round_to, CalcError, CalculatorState,
    Function, Operator, Readout, Token,
};
use crate::settings::Settings;

/// Outcome of applying one token to a state.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// Moved to a new state
    Transitioned(CalculatorState),

    /// The token had no effect (a second decimal point, an invalid digit)
    Ignored,

    /// The calculation failed; `state` shows the error marker
    Failed {
        error: CalcError,
        state: CalculatorState,
    },
}

impl StepResult {
    /// The state the engine ends up in, given the state it started from.
    pub fn into_state(self, current: &CalculatorState) -> CalculatorState {
        match self {
            Self::Transitioned(state) | Self::Failed { state, .. } => state,
            Self::Ignored => current.clone(),
        }
    }
}

/// Apply `token` to `state` without side effects.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{CalculatorState, Readout, Token};
/// use pocketcalc::engine::{step, StepResult};
/// use pocketcalc::settings::Settings;
///
/// let settings = Settings::default();
/// let state = CalculatorState::initial();
///
/// let next = step(&state, Token::Digit(5), &settings).into_state(&state);
/// assert_eq!(next.readout, Readout::Value("5".to_string()));
/// assert!(!next.awaiting_new_operand);
///
/// let next = step(&next, Token::Decimal, &settings).into_state(&next);
/// assert_eq!(step(&next, Token::Decimal, &settings), StepResult::Ignored);
/// ```
pub fn step(state: &CalculatorState, token: Token, settings: &Settings) -> StepResult {
    // Any token shown the error marker is absorbed into a reset.
    if state.readout.is_error() {
        return StepResult::Transitioned(CalculatorState::initial());
    }

    match token {
        Token::Clear => StepResult::Transitioned(CalculatorState::initial()),
        Token::Digit(value) => match char::from_digit(u32::from(value), 10) {
            Some(digit) => enter(state, digit),
            None => StepResult::Ignored,
        },
        Token::Decimal => enter(state, '.'),
        Token::Operator(operator) => binary(state, operator, settings),
        Token::Equals => equals(state, settings),
        Token::Percent => percent(state, settings),
        Token::Negate => negate(state, settings),
        Token::Function(function) => scientific(state, function, settings),
    }
}

fn enter(state: &CalculatorState, symbol: char) -> StepResult {
    let Some(current) = state.readout.as_value() else {
        return StepResult::Transitioned(CalculatorState::initial());
    };

    let readout = if state.awaiting_new_operand || current == "0" {
        if symbol == '.' {
            "0.".to_string()
        } else {
            symbol.to_string()
        }
    } else if symbol == '.' && current.contains('.') {
        return StepResult::Ignored;
    } else {
        format!("{current}{symbol}")
    };

    StepResult::Transitioned(CalculatorState {
        readout: Readout::Value(readout),
        awaiting_new_operand: false,
        ..state.clone()
    })
}

fn binary(state: &CalculatorState, operator: Operator, settings: &Settings) -> StepResult {
    match pending_result(state, settings) {
        Ok((value, text)) => StepResult::Transitioned(CalculatorState {
            readout: Readout::Value(text),
            operand1: value,
            operator: Some(operator),
            awaiting_new_operand: true,
        }),
        Err(error) => StepResult::Failed {
            error,
            state: CalculatorState {
                readout: Readout::Error,
                operand1: 0.0,
                operator: Some(operator),
                awaiting_new_operand: true,
            },
        },
    }
}

fn equals(state: &CalculatorState, settings: &Settings) -> StepResult {
    match pending_result(state, settings) {
        Ok((_, text)) => StepResult::Transitioned(CalculatorState {
            readout: Readout::Value(text),
            ..CalculatorState::initial()
        }),
        Err(error) => failed(error),
    }
}

fn percent(state: &CalculatorState, settings: &Settings) -> StepResult {
    let result = read(state).and_then(|value| format_number(value / 100.0, settings.precision));
    match result {
        Ok(text) => StepResult::Transitioned(CalculatorState {
            readout: Readout::Value(text),
            awaiting_new_operand: true,
            ..state.clone()
        }),
        Err(error) => failed(error),
    }
}

fn negate(state: &CalculatorState, settings: &Settings) -> StepResult {
    match read(state).and_then(|value| format_number(-value, settings.precision)) {
        Ok(text) => StepResult::Transitioned(CalculatorState {
            readout: Readout::Value(text),
            ..state.clone()
        }),
        Err(error) => failed(error),
    }
}

fn scientific(state: &CalculatorState, function: Function, settings: &Settings) -> StepResult {
    let result = read(state)
        .and_then(|value| apply_function(function, value, settings.angle_unit))
        .and_then(|value| format_number(value, settings.precision));

    match result {
        // The result starts a fresh expression with an implied addition.
        Ok(text) => StepResult::Transitioned(CalculatorState {
            readout: Readout::Value(text),
            operand1: 0.0,
            operator: Some(Operator::Add),
            awaiting_new_operand: true,
        }),
        Err(error) => failed(error),
    }
}

/// Evaluate the pending operation against the readout, returning the
/// rounded value and its display text.
fn pending_result(state: &CalculatorState, settings: &Settings) -> Result<(f64, String), CalcError> {
    let rhs = read(state)?;
    let value = evaluate(state.operand1, rhs, state.operator)?;
    let text = format_number(value, settings.precision)?;
    Ok((round_to(value, settings.precision), text))
}

fn read(state: &CalculatorState) -> Result<f64, CalcError> {
    match &state.readout {
        Readout::Value(text) => parse_number(text),
        Readout::Error => Err(CalcError::Parse(String::new())),
    }
}

fn failed(error: CalcError) -> StepResult {
    StepResult::Failed {
        error,
        state: CalculatorState {
            readout: Readout::Error,
            ..CalculatorState::initial()
        },
    }
}
