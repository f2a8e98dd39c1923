//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated keypress sequences.

use pocketcalc::core::{
    format_number, parse_number, CalculatorState, Function, Operator, Phase, Readout, State,
    Token,
};
use pocketcalc::engine::{step, StepResult};
use pocketcalc::settings::Settings;
use pocketcalc::Calculator;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_token()(variant in 0..24usize) -> Token {
        Token::all()[variant]
    }
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..4u8) -> Operator {
        match variant {
            0 => Operator::Add,
            1 => Operator::Subtract,
            2 => Operator::Multiply,
            _ => Operator::Divide,
        }
    }
}

fn digit_or_decimal() -> impl Strategy<Value = Token> {
    prop_oneof![
        (0..=9u8).prop_map(Token::Digit),
        Just(Token::Decimal),
    ]
}

fn digits_of(n: u32) -> Vec<Token> {
    n.to_string()
        .bytes()
        .map(|b| Token::Digit(b - b'0'))
        .collect()
}

/// Value of a typed key sequence, ignoring repeated decimal points.
fn typed_value(keys: &[Token]) -> f64 {
    let mut text = String::new();
    for key in keys {
        match key {
            Token::Digit(d) => text.push(char::from(b'0' + d)),
            Token::Decimal if !text.contains('.') => text.push('.'),
            _ => {}
        }
    }
    if text.is_empty() || text == "." {
        return 0.0;
    }
    text.parse().unwrap()
}

proptest! {
    #[test]
    fn typed_digits_read_back_as_their_value(
        keys in prop::collection::vec(digit_or_decimal(), 1..12)
    ) {
        let mut calc = Calculator::new();
        let display = calc.apply_all(keys.clone());

        let shown = parse_number(&display.text).unwrap();
        prop_assert_eq!(shown, typed_value(&keys));
        prop_assert!(display.text.matches('.').count() <= 1);
    }

    #[test]
    fn clear_always_returns_initial_state(
        keys in prop::collection::vec(arbitrary_token(), 0..30)
    ) {
        let mut calc = Calculator::new();
        calc.apply_all(keys);
        calc.apply(Token::Clear);

        prop_assert!(calc.state().is_initial());
        prop_assert_eq!(calc.display().text, "0");
    }

    #[test]
    fn readout_is_always_number_or_marker(
        keys in prop::collection::vec(arbitrary_token(), 0..40)
    ) {
        let mut calc = Calculator::new();
        for key in keys {
            let display = calc.apply(key);
            if display.phase == Phase::Error {
                prop_assert_eq!(display.text, "Error");
            } else {
                prop_assert!(parse_number(&display.text).is_ok());
                prop_assert!(display.text.matches('.').count() <= 1);
            }
        }
    }

    #[test]
    fn every_token_after_error_resets(token in arbitrary_token()) {
        let broken = CalculatorState {
            readout: Readout::Error,
            ..CalculatorState::initial()
        };
        let result = step(&broken, token, &Settings::default());
        prop_assert_eq!(result, StepResult::Transitioned(CalculatorState::initial()));
    }

    #[test]
    fn repeated_equals_is_stable(
        keys in prop::collection::vec(arbitrary_token(), 0..30),
        repeats in 1..5usize
    ) {
        let mut calc = Calculator::new();
        calc.apply_all(keys);
        let first = calc.apply(Token::Equals);

        if !first.is_error() {
            for _ in 0..repeats {
                prop_assert_eq!(calc.apply(Token::Equals), first.clone());
            }
        }
    }

    #[test]
    fn step_is_deterministic(
        keys in prop::collection::vec(arbitrary_token(), 0..20),
        token in arbitrary_token()
    ) {
        let mut calc = Calculator::new();
        calc.apply_all(keys);
        let settings = Settings::default();

        let first = step(calc.state(), token, &settings);
        let second = step(calc.state(), token, &settings);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn operators_match_float_arithmetic(
        lhs in 0..10_000u32,
        rhs in 1..10_000u32,
        operator in arbitrary_operator()
    ) {
        let mut calc = Calculator::new();
        calc.apply_all(digits_of(lhs));
        calc.apply(Token::Operator(operator));
        calc.apply_all(digits_of(rhs));
        let display = calc.apply(Token::Equals);

        let (a, b) = (f64::from(lhs), f64::from(rhs));
        let expected = match operator {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => a / b,
        };
        prop_assert_eq!(display.text, format_number(expected, 10).unwrap());
    }

    #[test]
    fn sqrt_of_square_is_identity(n in 0..3_000u32) {
        let mut calc = Calculator::new();
        calc.apply_all(digits_of(n * n));
        let display = calc.apply(Token::Function(Function::Sqrt));
        prop_assert_eq!(display.text, n.to_string());
    }

    #[test]
    fn phase_name_matches_state_name(
        keys in prop::collection::vec(arbitrary_token(), 0..30)
    ) {
        let mut calc = Calculator::new();
        let display = calc.apply_all(keys);
        prop_assert_eq!(display.phase.name(), calc.state().name());
    }

    #[test]
    fn tape_never_exceeds_limit(
        keys in prop::collection::vec(arbitrary_token(), 0..40),
        limit in 1..10usize
    ) {
        let mut calc = Calculator::builder().tape_limit(limit).build().unwrap();
        calc.apply_all(keys);
        prop_assert!(calc.tape().len() <= limit);
    }
}
