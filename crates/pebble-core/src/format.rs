//! # Number Formatting Module
//!
//! Canonical display text for calculator values.
//!
//! ## Why Canonical Text?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT DISPLAY PROBLEM                                     │
//! │                                                                         │
//! │  Raw f64 arithmetic:                                                    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ Not what a calculator shows      │
//! │                                                                         │
//! │  OUR SOLUTION: round every RESULT to 12 significant digits and render  │
//! │  the shortest decimal text that round-trips:                           │
//! │    0.1 + 0.2 ──► 0.3                                                    │
//! │    -0        ──► 0                                                      │
//! │    1 ÷ 3     ──► 0.333333333333                                         │
//! │                                                                         │
//! │  Typed INPUT is never rewritten: the display mirrors the keys pressed  │
//! │  (modulo leading-zero collapse, handled by the engine).                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pebble_core::format::{sanitize_number, DisplayValue};
//!
//! assert_eq!(sanitize_number("12.50"), DisplayValue::number("12.5"));
//! assert_eq!(sanitize_number(""), DisplayValue::zero());
//! assert!(sanitize_number("not a number").is_error());
//! ```

use std::fmt;

use crate::error::{MathError, MathResult};
use crate::SIGNIFICANT_DIGITS;

// =============================================================================
// Display Value
// =============================================================================

/// The text shown on the calculator's main display line.
///
/// ## Design Decisions
/// - **Explicit `Error` variant**: the error marker is a tagged state, not a
///   sentinel string, so transitions branch on `is_error()` instead of
///   comparing display text. The rendered text is unchanged: `"Error"`.
/// - **`Value` holds canonical or in-progress text**: a computed result is
///   always canonical; mid-entry text may be `"0."`-style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    /// Numeric display text (an operand being typed, or a computed result).
    Value(String),

    /// Terminal arithmetic failure. Rendered as the literal `"Error"` until
    /// the next reset-class input.
    Error,
}

/// The literal text rendered for [`DisplayValue::Error`].
pub const ERROR_TEXT: &str = "Error";

impl DisplayValue {
    /// Wraps numeric display text.
    pub fn number(text: impl Into<String>) -> Self {
        DisplayValue::Value(text.into())
    }

    /// The initial display: `"0"`.
    pub fn zero() -> Self {
        DisplayValue::Value("0".to_string())
    }

    /// True if this is the terminal error marker.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, DisplayValue::Error)
    }

    /// The exact text to render.
    pub fn as_str(&self) -> &str {
        match self {
            DisplayValue::Value(text) => text,
            DisplayValue::Error => ERROR_TEXT,
        }
    }
}

impl Default for DisplayValue {
    fn default() -> Self {
        DisplayValue::zero()
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MathResult<String>> for DisplayValue {
    fn from(result: MathResult<String>) -> Self {
        match result {
            Ok(text) => DisplayValue::Value(text),
            Err(_) => DisplayValue::Error,
        }
    }
}

// =============================================================================
// Canonicalization
// =============================================================================

/// Converts an arithmetic result or user-entered numeric string into
/// canonical display text.
///
/// ## Rules
/// - `""` or `"-"` → `"0"` (an abandoned entry is just zero)
/// - Text that does not parse as a finite number → the error marker
/// - Otherwise: round to 12 significant digits, normalize `-0` to `"0"`,
///   render the shortest round-tripping decimal representation
///
/// ## Idempotence
/// Canonical text passed back in comes out unchanged, and the error marker
/// stays the error marker, so `sanitize(sanitize(x)) == sanitize(x)`.
///
/// ## Example
/// ```rust
/// use pebble_core::format::{sanitize_number, DisplayValue};
///
/// assert_eq!(sanitize_number("-0"), DisplayValue::number("0"));
/// assert_eq!(sanitize_number("3.1400"), DisplayValue::number("3.14"));
/// ```
pub fn sanitize_number(raw: &str) -> DisplayValue {
    if raw.is_empty() || raw == "-" {
        return DisplayValue::zero();
    }

    match raw.parse::<f64>() {
        // parse() accepts "inf"/"NaN"; canonical_value rejects them below
        Ok(value) => canonical_value(value).into(),
        Err(_) => DisplayValue::Error,
    }
}

/// Renders a computed value as canonical display text.
///
/// Rejects non-finite values instead of ever rendering `inf`/`NaN`.
pub fn canonical_value(value: f64) -> MathResult<String> {
    if !value.is_finite() {
        return Err(MathError::NonFinite);
    }

    let rounded = round_significant(value, SIGNIFICANT_DIGITS);

    // -0.0 == 0.0 in IEEE comparison, so this also normalizes negative zero
    if rounded == 0.0 {
        return Ok("0".to_string());
    }

    // f64 Display is the shortest text that round-trips, with no exponent
    Ok(format!("{rounded}"))
}

/// Rounds to `digits` significant decimal digits.
///
/// Round-trips through scientific-notation text so the rounding happens in
/// decimal, not binary. `10^n` scaling would reintroduce the drift we are
/// trying to remove.
fn round_significant(value: f64, digits: usize) -> f64 {
    if value == 0.0 {
        return 0.0;
    }

    format!("{value:.prec$e}", prec = digits - 1)
        .parse()
        .unwrap_or(value)
}

/// Counts the significant entry characters of operand text: digits only,
/// sign and decimal point excluded. Used for the 16-digit entry cap.
pub fn digit_count(text: &str) -> usize {
    text.chars().filter(char::is_ascii_digit).count()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_lone_minus_are_zero() {
        assert_eq!(sanitize_number(""), DisplayValue::zero());
        assert_eq!(sanitize_number("-"), DisplayValue::zero());
    }

    #[test]
    fn test_garbage_is_error() {
        assert!(sanitize_number("abc").is_error());
        assert!(sanitize_number("1.2.3").is_error());
        assert!(sanitize_number("--5").is_error());
    }

    #[test]
    fn test_non_finite_text_is_error() {
        // f64::from_str happily parses these; the display must not
        assert!(sanitize_number("inf").is_error());
        assert!(sanitize_number("-inf").is_error());
        assert!(sanitize_number("NaN").is_error());
    }

    #[test]
    fn test_negative_zero_normalized() {
        assert_eq!(sanitize_number("-0"), DisplayValue::number("0"));
        assert_eq!(sanitize_number("-0.000"), DisplayValue::number("0"));
    }

    #[test]
    fn test_trailing_zeros_dropped() {
        assert_eq!(sanitize_number("3.1400"), DisplayValue::number("3.14"));
        assert_eq!(sanitize_number("12.50"), DisplayValue::number("12.5"));
        assert_eq!(sanitize_number("042"), DisplayValue::number("42"));
    }

    #[test]
    fn test_float_noise_rounded_away() {
        // The classic: 0.1 + 0.2
        assert_eq!(canonical_value(0.1 + 0.2).unwrap(), "0.3");
        // 1 / 3 keeps exactly 12 significant digits
        assert_eq!(canonical_value(1.0 / 3.0).unwrap(), "0.333333333333");
    }

    #[test]
    fn test_no_exponent_notation() {
        assert_eq!(canonical_value(1.0e15).unwrap(), "1000000000000000");
        assert_eq!(canonical_value(1.0e-8).unwrap(), "0.00000001");
    }

    #[test]
    fn test_non_finite_value_rejected() {
        assert_eq!(canonical_value(f64::INFINITY), Err(MathError::NonFinite));
        assert_eq!(canonical_value(f64::NAN), Err(MathError::NonFinite));
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for raw in ["", "-", "0", "-0", "3.1400", "1e3", "junk", "0.1", "Error"] {
            let once = sanitize_number(raw);
            let twice = sanitize_number(once.as_str());
            assert_eq!(once, twice, "sanitize not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_digit_count_ignores_sign_and_point() {
        assert_eq!(digit_count("-123.45"), 5);
        assert_eq!(digit_count("0."), 1);
        assert_eq!(digit_count(""), 0);
    }
}
