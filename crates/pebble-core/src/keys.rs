//! # Key Tokens
//!
//! The closed token union the engine dispatches over.
//!
//! ## Token Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Key Token Flow                                  │
//! │                                                                         │
//! │  Frontend button label        Boundary              Engine              │
//! │  ─────────────────────        ────────              ──────              │
//! │                                                                         │
//! │  "7"  "."  "×"  "=" ... ───► Key::from_str ───► CalcState::apply(key)  │
//! │                                   │                                     │
//! │                                   │ (exactly once per key event)        │
//! │                                   ▼                                     │
//! │         Digit(7) | Dot | Op(Multiply) | Equals | Clear |               │
//! │         Backspace | SignToggle | Percent                               │
//! │                                                                         │
//! │  The engine never sees raw strings: labels are translated into this    │
//! │  union once at the boundary, and every match on it is exhaustive.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{KeyParseError, MathError, MathResult};

// =============================================================================
// Operator
// =============================================================================

/// One of the four binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The symbol shown in the expression trace line (`"5 +"`, `"7 × 6 ="`).
    pub const fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Applies the operator to two finite operands.
    ///
    /// ## Failure Cases
    /// - Division by exactly zero → [`MathError::DivisionByZero`]
    ///   (never a signed infinity)
    /// - Overflow to infinity → [`MathError::NonFinite`]
    pub fn apply(&self, a: f64, b: f64) -> MathResult<f64> {
        let raw = match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => {
                if b == 0.0 {
                    return Err(MathError::DivisionByZero);
                }
                a / b
            }
        };

        if raw.is_finite() {
            Ok(raw)
        } else {
            Err(MathError::NonFinite)
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// =============================================================================
// Key
// =============================================================================

/// A single calculator key press.
///
/// The engine switches exhaustively over this union in
/// [`CalcState::apply`](crate::engine::CalcState::apply); adding a variant is
/// a compile error everywhere a key is handled, which is the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A decimal digit, 0 through 9.
    Digit(u8),

    /// The decimal point.
    Dot,

    /// One of the four binary operators.
    Op(Operator),

    /// Evaluate (or repeat the last completed step).
    Equals,

    /// Clear-all: back to the initial state.
    Clear,

    /// Remove the last typed character of the active operand.
    Backspace,

    /// Flip the sign of the active operand.
    SignToggle,

    /// Divide the active operand by 100.
    Percent,
}

/// Translates a raw key label into a [`Key`].
///
/// Accepts the labels a keypad or keyboard handler would naturally produce,
/// including the ASCII stand-ins for the typeset operator glyphs.
///
/// ## Example
/// ```rust
/// use pebble_core::keys::{Key, Operator};
///
/// assert_eq!("7".parse::<Key>().unwrap(), Key::Digit(7));
/// assert_eq!("×".parse::<Key>().unwrap(), Key::Op(Operator::Multiply));
/// assert_eq!("*".parse::<Key>().unwrap(), Key::Op(Operator::Multiply));
/// assert!("F13".parse::<Key>().is_err());
/// ```
impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        if let Some(digit) = single_digit(label) {
            return Ok(Key::Digit(digit));
        }

        match label {
            "." => Ok(Key::Dot),
            "+" => Ok(Key::Op(Operator::Add)),
            "-" | "−" => Ok(Key::Op(Operator::Subtract)),
            "*" | "×" => Ok(Key::Op(Operator::Multiply)),
            "/" | "÷" => Ok(Key::Op(Operator::Divide)),
            "=" | "Enter" => Ok(Key::Equals),
            "C" | "AC" | "Escape" => Ok(Key::Clear),
            "⌫" | "Backspace" => Ok(Key::Backspace),
            "±" | "+/-" => Ok(Key::SignToggle),
            "%" => Ok(Key::Percent),
            _ => Err(KeyParseError::new(label)),
        }
    }
}

/// Returns the digit value if the label is exactly one ASCII digit.
fn single_digit(label: &str) -> Option<u8> {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => ch.to_digit(10).map(|d| d as u8),
        _ => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.to_string(), "+");
        assert_eq!(Operator::Subtract.to_string(), "−");
        assert_eq!(Operator::Multiply.to_string(), "×");
        assert_eq!(Operator::Divide.to_string(), "÷");
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), Ok(8.0));
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(Operator::Multiply.apply(7.0, 6.0), Ok(42.0));
        assert_eq!(Operator::Divide.apply(9.0, 3.0), Ok(3.0));
    }

    #[test]
    fn test_divide_by_zero_is_error_not_infinity() {
        assert_eq!(
            Operator::Divide.apply(5.0, 0.0),
            Err(MathError::DivisionByZero)
        );
        // Negative zero divides the same way
        assert_eq!(
            Operator::Divide.apply(5.0, -0.0),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow_is_error() {
        assert_eq!(
            Operator::Multiply.apply(f64::MAX, 2.0),
            Err(MathError::NonFinite)
        );
    }

    #[test]
    fn test_digit_labels() {
        for d in 0..=9u8 {
            assert_eq!(d.to_string().parse::<Key>().unwrap(), Key::Digit(d));
        }
    }

    #[test]
    fn test_operator_labels_and_ascii_aliases() {
        assert_eq!("+".parse::<Key>().unwrap(), Key::Op(Operator::Add));
        assert_eq!("−".parse::<Key>().unwrap(), Key::Op(Operator::Subtract));
        assert_eq!("-".parse::<Key>().unwrap(), Key::Op(Operator::Subtract));
        assert_eq!("÷".parse::<Key>().unwrap(), Key::Op(Operator::Divide));
        assert_eq!("/".parse::<Key>().unwrap(), Key::Op(Operator::Divide));
    }

    #[test]
    fn test_control_labels() {
        assert_eq!("=".parse::<Key>().unwrap(), Key::Equals);
        assert_eq!("AC".parse::<Key>().unwrap(), Key::Clear);
        assert_eq!("Backspace".parse::<Key>().unwrap(), Key::Backspace);
        assert_eq!("±".parse::<Key>().unwrap(), Key::SignToggle);
        assert_eq!("%".parse::<Key>().unwrap(), Key::Percent);
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        assert!("".parse::<Key>().is_err());
        assert!("10".parse::<Key>().is_err());
        assert!("sqrt".parse::<Key>().is_err());
    }
}
