//! Input tokens accepted by the calculator engine.
//!
//! A token is one discrete keypress. Hosts either build tokens directly or
//! parse them from the labels printed on their buttons.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Binary infix operator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Keypad label for this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

/// Scientific function applied to the current readout.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    /// Natural logarithm.
    Log,
    Sqrt,
}

impl Function {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
        }
    }

    /// Whether the function takes an angle argument.
    pub fn is_trigonometric(&self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }
}

/// Button family a token belongs to.
///
/// Hosts use this to style their keypad; the engine does not depend on it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TokenCategory {
    /// Digits and the decimal point
    Digit,
    /// Binary operators and equals
    Action,
    /// Clear, sign toggle and percent
    Extra,
    /// Scientific functions
    Scientific,
}

/// One discrete input to the engine.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{Operator, Token, TokenCategory};
///
/// let token: Token = "+".parse().unwrap();
/// assert_eq!(token, Token::Operator(Operator::Add));
/// assert_eq!(token.category(), TokenCategory::Action);
/// assert_eq!(token.to_string(), "+");
///
/// assert_eq!(Token::digit(7), Some(Token::Digit(7)));
/// assert_eq!(Token::digit(12), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Token {
    /// A decimal digit, 0 through 9
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    /// All clear (`AC`)
    Clear,
    Percent,
    /// Sign toggle (`+/-`)
    Negate,
    Function(Function),
}

impl Token {
    /// Build a digit token, rejecting values above 9.
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self::Digit(value))
    }

    pub fn category(&self) -> TokenCategory {
        match self {
            Self::Digit(_) | Self::Decimal => TokenCategory::Digit,
            Self::Operator(_) | Self::Equals => TokenCategory::Action,
            Self::Clear | Self::Percent | Self::Negate => TokenCategory::Extra,
            Self::Function(_) => TokenCategory::Scientific,
        }
    }

    /// Every label the engine understands, in keypad order.
    pub fn all() -> Vec<Token> {
        let mut tokens: Vec<Token> = (0..=9).map(Token::Digit).collect();
        tokens.extend([
            Token::Decimal,
            Token::Operator(Operator::Add),
            Token::Operator(Operator::Subtract),
            Token::Operator(Operator::Multiply),
            Token::Operator(Operator::Divide),
            Token::Equals,
            Token::Clear,
            Token::Negate,
            Token::Percent,
            Token::Function(Function::Sin),
            Token::Function(Function::Cos),
            Token::Function(Function::Tan),
            Token::Function(Function::Log),
            Token::Function(Function::Sqrt),
        ]);
        tokens
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Decimal => f.write_str("."),
            Self::Operator(op) => f.write_str(op.symbol()),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("AC"),
            Self::Percent => f.write_str("%"),
            Self::Negate => f.write_str("+/-"),
            Self::Function(func) => f.write_str(func.name()),
        }
    }
}

/// Errors produced when reading tokens from host labels
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseTokenError {
    #[error("Unrecognized calculator token '{0}'")]
    Unknown(String),
}

impl FromStr for Token {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let token = match label {
            "." => Self::Decimal,
            "+" => Self::Operator(Operator::Add),
            "-" => Self::Operator(Operator::Subtract),
            "*" => Self::Operator(Operator::Multiply),
            "/" => Self::Operator(Operator::Divide),
            "=" => Self::Equals,
            "AC" => Self::Clear,
            "%" => Self::Percent,
            "+/-" => Self::Negate,
            "sin" => Self::Function(Function::Sin),
            "cos" => Self::Function(Function::Cos),
            "tan" => Self::Function(Function::Tan),
            "log" => Self::Function(Function::Log),
            "sqrt" => Self::Function(Function::Sqrt),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Self::Digit(c as u8 - b'0'),
                    _ => return Err(ParseTokenError::Unknown(label.to_string())),
                }
            }
        };
        Ok(token)
    }
}

/// Split a whitespace-separated sequence of labels into tokens.
///
/// Stops at the first label that is not a token.
///
/// ```rust
/// use pocketcalc::core::{tokenize, Token};
///
/// let tokens = tokenize("1 + 2 =").unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[3], Token::Equals);
/// assert!(tokenize("1 ^ 2").is_err());
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseTokenError> {
    input.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_keypad_label() {
        for label in [
            "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "/", "=", "AC",
            "+/-", "%", "sin", "cos", "tan", "log", "sqrt",
        ] {
            let token: Token = label.parse().unwrap();
            assert_eq!(token.to_string(), label);
        }
    }

    #[test]
    fn rejects_unknown_labels() {
        assert_eq!(
            "ac".parse::<Token>(),
            Err(ParseTokenError::Unknown("ac".to_string()))
        );
        assert!("10".parse::<Token>().is_err());
        assert!("".parse::<Token>().is_err());
        assert!("ln".parse::<Token>().is_err());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(" sqrt ".parse::<Token>(), Ok(Token::Function(Function::Sqrt)));
    }

    #[test]
    fn categories_follow_keypad_families() {
        assert_eq!(Token::Digit(3).category(), TokenCategory::Digit);
        assert_eq!(Token::Decimal.category(), TokenCategory::Digit);
        assert_eq!(Token::Equals.category(), TokenCategory::Action);
        assert_eq!(
            Token::Operator(Operator::Divide).category(),
            TokenCategory::Action
        );
        assert_eq!(Token::Clear.category(), TokenCategory::Extra);
        assert_eq!(Token::Negate.category(), TokenCategory::Extra);
        assert_eq!(Token::Percent.category(), TokenCategory::Extra);
        assert_eq!(
            Token::Function(Function::Log).category(),
            TokenCategory::Scientific
        );
    }

    #[test]
    fn all_lists_each_token_once() {
        let tokens = Token::all();
        assert_eq!(tokens.len(), 24);
        for (i, token) in tokens.iter().enumerate() {
            assert!(!tokens[i + 1..].contains(token));
        }
    }

    #[test]
    fn tokenize_reports_first_bad_label() {
        assert_eq!(
            tokenize("9 0 deg"),
            Err(ParseTokenError::Unknown("deg".to_string()))
        );
        assert_eq!(tokenize("").unwrap(), Vec::<Token>::new());
    }

    #[test]
    fn only_trig_functions_take_angles() {
        assert!(Function::Sin.is_trigonometric());
        assert!(Function::Tan.is_trigonometric());
        assert!(!Function::Log.is_trigonometric());
        assert!(!Function::Sqrt.is_trigonometric());
    }
}
