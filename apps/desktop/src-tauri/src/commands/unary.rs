//! # Unary Commands
//!
//! The caller-side unary layer: square root, square, reciprocal.
//!
//! ## Why Outside the Engine?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The engine knows exactly one evaluation shape: a op b.                 │
//! │                                                                         │
//! │  Unary keys are implemented here by the caller:                         │
//! │                                                                         │
//! │    read display value ──► transform ──► write back through the          │
//! │                                         engine's active-operand slot    │
//! │                                         (set_active_operand)            │
//! │                                                                         │
//! │  √ of a negative and 1/x of zero produce the same terminal Error        │
//! │  display a division by zero does.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pebble_core::{CalcState, DisplaySnapshot, MathError, MathResult};
use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::state::CalculatorState;

/// A unary key on the extended keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnaryOp {
    /// `√x`
    Sqrt,

    /// `x²`
    Square,

    /// `1/x`
    Reciprocal,
}

impl UnaryOp {
    /// Applies the operation to a finite value.
    pub fn apply(&self, value: f64) -> MathResult<f64> {
        let raw = match self {
            UnaryOp::Sqrt => {
                if value < 0.0 {
                    return Err(MathError::NegativeSquareRoot);
                }
                value.sqrt()
            }
            UnaryOp::Square => value * value,
            UnaryOp::Reciprocal => {
                if value == 0.0 {
                    return Err(MathError::DivisionByZero);
                }
                1.0 / value
            }
        };

        if raw.is_finite() {
            Ok(raw)
        } else {
            Err(MathError::NonFinite)
        }
    }
}

/// Applies a unary operation to the current display value and writes the
/// result back into the active operand.
///
/// A display already showing `"Error"` stays untouched; a failing unary
/// operation resets to the error state, exactly like a failing binary one.
#[tauri::command]
pub fn apply_unary(calc: State<'_, CalculatorState>, op: UnaryOp) -> DisplaySnapshot {
    debug!(?op, "apply_unary command");

    let next = calc.transition(|state| {
        let Some(value) = state.display_value() else {
            // Error display: formatting-class transitions are no-ops
            return state.clone();
        };

        match op.apply(value) {
            Ok(result) => state.set_active_operand(&result.to_string()),
            Err(_) => CalcState::error(),
        }
    });

    DisplaySnapshot::from(&next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt() {
        assert_eq!(UnaryOp::Sqrt.apply(9.0), Ok(3.0));
        assert_eq!(UnaryOp::Sqrt.apply(0.0), Ok(0.0));
        assert_eq!(
            UnaryOp::Sqrt.apply(-1.0),
            Err(MathError::NegativeSquareRoot)
        );
    }

    #[test]
    fn test_square() {
        assert_eq!(UnaryOp::Square.apply(-4.0), Ok(16.0));
        assert_eq!(UnaryOp::Square.apply(f64::MAX), Err(MathError::NonFinite));
    }

    #[test]
    fn test_reciprocal() {
        assert_eq!(UnaryOp::Reciprocal.apply(4.0), Ok(0.25));
        assert_eq!(
            UnaryOp::Reciprocal.apply(0.0),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn test_op_deserializes_lowercase() {
        let op: UnaryOp = serde_json::from_str("\"sqrt\"").expect("deserialize op");
        assert_eq!(op, UnaryOp::Sqrt);
    }
}
