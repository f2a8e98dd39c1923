//! Pure numeric rules: reading the readout, formatting results and
//! evaluating operators and functions.

use super::error::CalcError;
use super::token::{Function, Operator};
use serde::{Deserialize, Serialize};

/// Decimal places kept when formatting results.
pub const DEFAULT_PRECISION: u32 = 10;

/// Largest precision that still rounds meaningfully in an `f64`.
pub const MAX_PRECISION: u32 = 15;

/// How trigonometric functions interpret their argument.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

/// Read a readout literal as a finite number.
///
/// ```rust
/// use pocketcalc::core::parse_number;
///
/// assert_eq!(parse_number("0.").unwrap(), 0.0);
/// assert_eq!(parse_number("-12.5").unwrap(), -12.5);
/// assert!(parse_number("Error").is_err());
/// assert!(parse_number("inf").is_err());
/// ```
pub fn parse_number(text: &str) -> Result<f64, CalcError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::Parse(text.to_string())),
    }
}

/// Round to `places` decimal places using the exact decimal expansion.
///
/// `places` is capped at [`MAX_PRECISION`].
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", places.min(MAX_PRECISION) as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Render a result for the display.
///
/// The value is rounded to `precision` places. Whole numbers lose their
/// fractional part; negative zero shows as `0`.
///
/// ```rust
/// use pocketcalc::core::format_number;
///
/// assert_eq!(format_number(0.1 + 0.2, 10).unwrap(), "0.3");
/// assert_eq!(format_number(6.0, 10).unwrap(), "6");
/// assert_eq!(format_number(1.0 / 3.0, 10).unwrap(), "0.3333333333");
/// assert_eq!(format_number(-0.0, 10).unwrap(), "0");
/// ```
pub fn format_number(value: f64, precision: u32) -> Result<String, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::NonFinite);
    }
    let mut rounded = round_to(value, precision);
    if rounded == 0.0 {
        rounded = 0.0;
    }
    if rounded.fract() == 0.0 {
        Ok(format!("{rounded:.0}"))
    } else {
        Ok(rounded.to_string())
    }
}

/// Apply a pending operator. With no operator the right operand passes
/// through unchanged.
pub fn evaluate(lhs: f64, rhs: f64, operator: Option<Operator>) -> Result<f64, CalcError> {
    let result = match operator {
        None => rhs,
        Some(Operator::Add) => lhs + rhs,
        Some(Operator::Subtract) => lhs - rhs,
        Some(Operator::Multiply) => lhs * rhs,
        Some(Operator::Divide) => {
            if rhs == 0.0 {
                return Err(CalcError::DivideByZero);
            }
            lhs / rhs
        }
    };
    finite(result)
}

/// Apply a scientific function to `value`.
pub fn apply_function(function: Function, value: f64, unit: AngleUnit) -> Result<f64, CalcError> {
    let angle = match unit {
        AngleUnit::Degrees => value.to_radians(),
        AngleUnit::Radians => value,
    };
    let result = match function {
        Function::Sin => angle.sin(),
        Function::Cos => angle.cos(),
        Function::Tan => angle.tan(),
        Function::Log if value <= 0.0 => return Err(CalcError::Domain { function, value }),
        Function::Log => value.ln(),
        Function::Sqrt if value < 0.0 => return Err(CalcError::Domain { function, value }),
        Function::Sqrt => value.sqrt(),
    };
    finite(result)
}

fn finite(value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64) -> String {
        format_number(value, DEFAULT_PRECISION).unwrap()
    }

    #[test]
    fn format_hides_floating_point_noise() {
        assert_eq!(fmt(0.1 + 0.2), "0.3");
        assert_eq!(fmt(1.1 * 3.0), "3.3");
        assert_eq!(fmt(2.0 / 3.0), "0.6666666667");
    }

    #[test]
    fn format_renders_whole_numbers_as_integers() {
        assert_eq!(fmt(42.0), "42");
        assert_eq!(fmt(-7.0), "-7");
        assert_eq!(fmt(0.99999999999), "1");
        assert_eq!(fmt(1e20), "100000000000000000000");
    }

    #[test]
    fn format_keeps_small_fractions_in_plain_notation() {
        assert_eq!(fmt(0.0000000001), "0.0000000001");
        assert_eq!(fmt(0.00000000001), "0");
    }

    #[test]
    fn format_respects_precision() {
        assert_eq!(format_number(2.0 / 3.0, 2).unwrap(), "0.67");
        assert_eq!(format_number(2.4, 0).unwrap(), "2");
        assert_eq!(format_number(2.6, 0).unwrap(), "3");
    }

    #[test]
    fn oversized_precision_is_capped() {
        assert_eq!(round_to(1.0 / 3.0, u32::MAX), round_to(1.0 / 3.0, MAX_PRECISION));
        assert_eq!(format_number(1.0 / 3.0, 4_000_000_000).unwrap(), "0.333333333333333");
    }

    #[test]
    fn format_rejects_non_finite_values() {
        assert_eq!(format_number(f64::INFINITY, 10), Err(CalcError::NonFinite));
        assert_eq!(format_number(f64::NAN, 10), Err(CalcError::NonFinite));
    }

    #[test]
    fn parse_rejects_non_numbers() {
        assert!(matches!(parse_number("Error"), Err(CalcError::Parse(_))));
        assert!(matches!(parse_number(""), Err(CalcError::Parse(_))));
        assert!(matches!(parse_number("NaN"), Err(CalcError::Parse(_))));
        assert_eq!(parse_number("007").unwrap(), 7.0);
    }

    #[test]
    fn evaluate_applies_each_operator() {
        assert_eq!(evaluate(6.0, 3.0, Some(Operator::Add)), Ok(9.0));
        assert_eq!(evaluate(6.0, 3.0, Some(Operator::Subtract)), Ok(3.0));
        assert_eq!(evaluate(6.0, 3.0, Some(Operator::Multiply)), Ok(18.0));
        assert_eq!(evaluate(6.0, 3.0, Some(Operator::Divide)), Ok(2.0));
    }

    #[test]
    fn evaluate_without_operator_is_identity() {
        assert_eq!(evaluate(99.0, 4.5, None), Ok(4.5));
    }

    #[test]
    fn evaluate_rejects_zero_divisor() {
        assert_eq!(
            evaluate(8.0, 0.0, Some(Operator::Divide)),
            Err(CalcError::DivideByZero)
        );
        assert_eq!(
            evaluate(8.0, -0.0, Some(Operator::Divide)),
            Err(CalcError::DivideByZero)
        );
    }

    #[test]
    fn evaluate_reports_overflow() {
        assert_eq!(
            evaluate(f64::MAX, 10.0, Some(Operator::Multiply)),
            Err(CalcError::NonFinite)
        );
    }

    #[test]
    fn trig_functions_take_degrees_by_default() {
        let sin = apply_function(Function::Sin, 90.0, AngleUnit::Degrees).unwrap();
        assert_eq!(fmt(sin), "1");
        let cos = apply_function(Function::Cos, 60.0, AngleUnit::Degrees).unwrap();
        assert_eq!(fmt(cos), "0.5");
        let tan = apply_function(Function::Tan, 45.0, AngleUnit::Degrees).unwrap();
        assert_eq!(fmt(tan), "1");
    }

    #[test]
    fn trig_functions_accept_radians() {
        let sin = apply_function(Function::Sin, std::f64::consts::FRAC_PI_2, AngleUnit::Radians)
            .unwrap();
        assert_eq!(fmt(sin), "1");
    }

    #[test]
    fn log_is_natural_and_needs_positive_input() {
        let ln_e = apply_function(Function::Log, std::f64::consts::E, AngleUnit::Degrees).unwrap();
        assert_eq!(fmt(ln_e), "1");
        assert_eq!(
            apply_function(Function::Log, 0.0, AngleUnit::Degrees),
            Err(CalcError::Domain {
                function: Function::Log,
                value: 0.0
            })
        );
        assert!(apply_function(Function::Log, -1.0, AngleUnit::Degrees).is_err());
    }

    #[test]
    fn sqrt_needs_non_negative_input() {
        assert_eq!(apply_function(Function::Sqrt, 0.0, AngleUnit::Degrees), Ok(0.0));
        assert_eq!(apply_function(Function::Sqrt, 16.0, AngleUnit::Degrees), Ok(4.0));
        assert!(matches!(
            apply_function(Function::Sqrt, -5.0, AngleUnit::Degrees),
            Err(CalcError::Domain { .. })
        ));
    }
}
