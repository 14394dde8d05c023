//! # Error Types
//!
//! Domain-specific error types for pebble-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pebble-core errors (this file)                                        │
//! │  ├── MathError      - Arithmetic failure classification                │
//! │  └── KeyParseError  - Raw key label could not be translated            │
//! │                                                                         │
//! │  Tauri API errors (in app)                                             │
//! │  └── ApiError       - What frontend sees (serialized)                  │
//! │                                                                         │
//! │  IMPORTANT: engine TRANSITIONS never return these. A transition maps   │
//! │  arithmetic failure to the Error display value and carries on; the     │
//! │  typed errors exist for the internal evaluation seam (`compute`) and   │
//! │  for the caller-side boundary (`Key::from_str`, unary layer).          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Arithmetic failure is a VALUE at the state level, not a fault

use thiserror::Error;

// =============================================================================
// Math Error
// =============================================================================

/// Arithmetic failure raised while evaluating a binary or unary operation.
///
/// ## When This Occurs
/// - Division by exactly zero (signed infinity is never surfaced)
/// - Square root of a negative number (caller-side unary layer)
/// - Reciprocal of zero (caller-side unary layer)
/// - Any computation producing a non-finite value
///
/// At the state level every variant collapses to the same terminal display
/// value; variants exist so tests and logs can tell the causes apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Denominator was exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Operand text did not parse as a finite number, or the result
    /// overflowed to infinity / collapsed to NaN.
    #[error("result is not a finite number")]
    NonFinite,

    /// Square root requested for a negative operand.
    #[error("square root of a negative number")]
    NegativeSquareRoot,
}

// =============================================================================
// Key Parse Error
// =============================================================================

/// A raw key label from the shell could not be translated into a [`Key`].
///
/// Raised once at the boundary; the engine itself only ever sees the closed
/// token union and switches exhaustively over it.
///
/// [`Key`]: crate::keys::Key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized key label: {label:?}")]
pub struct KeyParseError {
    /// The label as received from the shell.
    pub label: String,
}

impl KeyParseError {
    /// Creates a parse error for the given label.
    pub fn new(label: impl Into<String>) -> Self {
        KeyParseError {
            label: label.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for evaluation results.
pub type MathResult<T> = Result<T, MathError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_error_messages() {
        assert_eq!(MathError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            MathError::NonFinite.to_string(),
            "result is not a finite number"
        );
    }

    #[test]
    fn test_key_parse_error_message() {
        let err = KeyParseError::new("F13");
        assert_eq!(err.to_string(), "unrecognized key label: \"F13\"");
    }
}
