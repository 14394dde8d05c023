//! # Calculator Engine
//!
//! The keypad finite state machine: operand entry, operator chaining,
//! repeated equals, error propagation.
//!
//! ## Transition Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Engine Transition Model                              │
//! │                                                                         │
//! │  Shell holds the current snapshot          Engine (this module)         │
//! │  ────────────────────────────────          ─────────────────────        │
//! │                                                                         │
//! │  key event ──► state.apply(key) ─────────► brand-new CalcState          │
//! │       ▲                                          │                      │
//! │       └────────── replace held snapshot ◄────────┘                      │
//! │                                                                         │
//! │  EVERY transition is (state, input) -> state:                           │
//! │  • never mutates its input                                              │
//! │  • never performs I/O                                                   │
//! │  • never panics or returns a fault - arithmetic failure becomes the     │
//! │    Error display value, recoverable only by a reset-class input         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Entry Phases
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   EnteringFirstOperand ──── operator chosen ────► EnteringSecondOperand │
//! │            ▲                                               │            │
//! │            └───────────── equals / clear ──────────────────┘            │
//! │                                                                         │
//! │  Exactly one operand is "active" for typing at a time, determined by    │
//! │  whether an operator is pending. Digits, dot, sign, percent and         │
//! │  backspace all act on the active operand.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{MathError, MathResult};
use crate::format::{canonical_value, digit_count, sanitize_number, DisplayValue};
use crate::keys::{Key, Operator};
use crate::MAX_ENTRY_DIGITS;

// =============================================================================
// Entry Phase
// =============================================================================

/// Which operand is currently receiving input.
///
/// Derived from whether an operator is pending; modeled as an explicit
/// two-state machine so transition code matches on a phase instead of
/// null-checking the operator everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPhase {
    /// No operator pending: digits go to operand A.
    FirstOperand,

    /// An operator is pending: digits go to operand B.
    SecondOperand,
}

// =============================================================================
// Calculator State
// =============================================================================

/// The complete calculator state.
///
/// ## Immutability Contract
/// An immutable value, replaced wholesale on every transition. Fields are
/// private so the invariants below cannot be broken from outside:
///
/// - `display` always mirrors the active operand's text, a computed result,
///   or the error marker
/// - operand text is canonical decimal (results) or in-progress entry text
/// - operand digit count never exceeds [`MAX_ENTRY_DIGITS`]
///
/// ## Lifecycle
/// Created once via [`CalcState::default`] (`display = "0"`), then replaced
/// on every key event. There is no destruction beyond being discarded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalcState {
    /// First operand, canonical decimal text.
    operand_a: Option<String>,

    /// Pending binary operator.
    operator: Option<Operator>,

    /// Second operand text.
    operand_b: Option<String>,

    /// The text currently shown on the main display line.
    display: DisplayValue,

    /// Expression trace shown above the display (`"5 +"` or `"5 + 3 ="`).
    previous_line: String,

    /// True while the active operand is mid-entry. A non-typing state means
    /// the next digit starts a fresh entry instead of appending.
    is_typing: bool,

    /// Operator remembered from the most recent completed equals.
    last_operator: Option<Operator>,

    /// Second operand remembered from the most recent completed equals.
    last_operand_b: Option<String>,
}

impl CalcState {
    /// The terminal arithmetic-failure state: everything reset, display
    /// shows the error marker until the next reset-class input.
    pub fn error() -> CalcState {
        CalcState {
            display: DisplayValue::Error,
            ..CalcState::default()
        }
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// The main display line.
    pub fn display(&self) -> &DisplayValue {
        &self.display
    }

    /// The expression trace line (empty initially).
    pub fn previous_line(&self) -> &str {
        &self.previous_line
    }

    /// True while the active operand is mid-entry.
    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// Which operand is currently active for typing.
    pub fn phase(&self) -> EntryPhase {
        if self.operator.is_some() {
            EntryPhase::SecondOperand
        } else {
            EntryPhase::FirstOperand
        }
    }

    /// The numeric value of the current display, unless it is the error
    /// marker. This is the read half of the caller-side memory/unary seam.
    pub fn display_value(&self) -> Option<f64> {
        match &self.display {
            DisplayValue::Value(text) => text.parse().ok(),
            DisplayValue::Error => None,
        }
    }

    /// Text of the operand currently receiving input. An unset active
    /// operand reads as `"0"` (nothing typed yet).
    fn active_text(&self) -> &str {
        match self.phase() {
            EntryPhase::FirstOperand => match &self.operand_a {
                Some(text) => text,
                None => self.display.as_str(),
            },
            EntryPhase::SecondOperand => self.operand_b.as_deref().unwrap_or("0"),
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Dispatches one key press. Exhaustive over the closed token union:
    /// adding a `Key` variant will not compile until it is handled here.
    pub fn apply(&self, key: Key) -> CalcState {
        match key {
            Key::Digit(digit) => self.input_digit(digit),
            Key::Dot => self.input_dot(),
            Key::Op(operator) => self.choose_operator(operator),
            Key::Equals => self.equals(),
            Key::Clear => CalcState::default(),
            Key::Backspace => self.backspace(),
            Key::SignToggle => self.toggle_sign(),
            Key::Percent => self.percent(),
        }
    }

    /// Appends a digit (0-9) to the active operand.
    ///
    /// ## Rules
    /// - Out-of-range digits leave the state unchanged
    /// - Error display: full reset, the digit starts a fresh operand A
    /// - Leading-zero collapse: `"0"` + nonzero replaces, `"0"` + `"0"`
    ///   stays `"0"`, `"-0"` + nonzero becomes `"-<digit>"`
    /// - Entry cap: a 17th significant digit is a no-op
    pub fn input_digit(&self, digit: u8) -> CalcState {
        if digit > 9 {
            return self.clone();
        }

        if self.display.is_error() {
            return CalcState::fresh_entry(digit.to_string());
        }

        let base = self.entry_base();
        if digit_count(&base) >= MAX_ENTRY_DIGITS {
            return self.clone();
        }

        self.write_active(append_digit(&base, digit), true)
    }

    /// Appends the decimal point to the active operand.
    ///
    /// An empty entry becomes `"0."`; a second point is a no-op; the error
    /// display resets with `"0."` as the fresh operand A.
    pub fn input_dot(&self) -> CalcState {
        if self.display.is_error() {
            return CalcState::fresh_entry("0.".to_string());
        }

        let base = self.entry_base();
        if base.contains('.') {
            return self.clone();
        }

        let next = if base.is_empty() {
            "0.".to_string()
        } else {
            format!("{base}.")
        };
        self.write_active(next, true)
    }

    /// Records a binary operator, evaluating a completed step first if one
    /// is pending.
    ///
    /// ## Branches
    /// - Error display: no-op
    /// - No operand A yet: promote the display into operand A
    /// - Operator and operand B both present: evaluate, chain the result
    ///   into the new operator, clear the repeated-equals memory
    /// - Otherwise: operator substitution in place (operand B untouched)
    pub fn choose_operator(&self, operator: Operator) -> CalcState {
        if self.display.is_error() {
            return self.clone();
        }

        let Some(operand_a) = self.operand_a.clone() else {
            let promoted = self.display.as_str().to_string();
            let mut next = self.clone();
            next.previous_line = format!("{promoted} {operator}");
            next.operand_a = Some(promoted);
            next.operator = Some(operator);
            next.is_typing = false;
            return next;
        };

        if let (Some(pending), Some(operand_b)) = (self.operator, self.operand_b.as_deref()) {
            // Second operand complete: evaluate now, chain into the new
            // operator. ..Default clears operand B and the repeat memory.
            return match compute(&operand_a, pending, operand_b) {
                Ok(result) => CalcState {
                    previous_line: format!("{result} {operator}"),
                    display: DisplayValue::number(result.clone()),
                    operand_a: Some(result),
                    operator: Some(operator),
                    ..CalcState::default()
                },
                Err(_) => CalcState::error(),
            };
        }

        // Operator pressed again before operand B has digits (or right after
        // equals): substitute the operator in place.
        let mut next = self.clone();
        next.previous_line = format!("{operand_a} {operator}");
        next.operator = Some(operator);
        next.is_typing = false;
        next
    }

    /// Evaluates the pending step, or repeats the last completed one.
    ///
    /// ## Branches
    /// - Error display: no-op
    /// - Operator + both operands: evaluate, remember the operator and
    ///   second operand for repetition
    /// - No operator pending but a remembered pair exists: reapply it to
    ///   the current operand A, leaving the pair in place so a chain of
    ///   `=` presses keeps repeating the same step
    /// - Otherwise: unchanged (e.g. `"5 +"` followed by `=`)
    pub fn equals(&self) -> CalcState {
        if self.display.is_error() {
            return self.clone();
        }

        if let (Some(a), Some(op), Some(b)) = (&self.operand_a, self.operator, &self.operand_b) {
            return CalcState::completed_step(a, op, b);
        }

        if self.operator.is_none() {
            if let (Some(a), Some(op), Some(b)) =
                (&self.operand_a, self.last_operator, &self.last_operand_b)
            {
                return CalcState::completed_step(a, op, b);
            }
        }

        self.clone()
    }

    /// Flips the sign of the active operand. `"0"` stays `"0"`; applying
    /// twice to any non-zero operand restores the original text.
    pub fn toggle_sign(&self) -> CalcState {
        if self.display.is_error() {
            return self.clone();
        }

        let current = self.active_text();
        if current == "0" {
            return self.clone();
        }

        let flipped = match current.strip_prefix('-') {
            Some(positive) => positive.to_string(),
            None => format!("-{current}"),
        };
        self.write_active(flipped, self.is_typing)
    }

    /// Divides the active operand by 100 and re-canonicalizes. Leaves the
    /// typing flag, pending operator and trace line untouched.
    pub fn percent(&self) -> CalcState {
        if self.display.is_error() {
            return self.clone();
        }

        let Ok(value) = self.active_text().parse::<f64>() else {
            return self.clone();
        };

        match canonical_value(value / 100.0) {
            Ok(text) => self.write_active(text, self.is_typing),
            Err(_) => CalcState::error(),
        }
    }

    /// Removes the last typed character of the active operand.
    ///
    /// An empty or lone-`"-"` remainder collapses to `"0"` with the typing
    /// flag cleared; operand B additionally reverts to unset. On the error
    /// display, backspace performs a full reset instead of deleting.
    pub fn backspace(&self) -> CalcState {
        if self.display.is_error() {
            return CalcState::default();
        }

        let mut text = self.active_text().to_string();
        text.pop();

        if text.is_empty() || text == "-" {
            let mut next = self.clone();
            next.display = DisplayValue::zero();
            next.is_typing = false;
            match self.phase() {
                EntryPhase::FirstOperand => next.operand_a = Some("0".to_string()),
                EntryPhase::SecondOperand => next.operand_b = None,
            }
            return next;
        }

        self.write_active(text, true)
    }

    /// Writes a value into the active operand slot through the same path a
    /// completed computation uses: sanitize, update the display, clear the
    /// typing flag. This is the write half of the caller-side memory/unary
    /// seam; a value that fails sanitization yields the error state.
    pub fn set_active_operand(&self, raw: &str) -> CalcState {
        match sanitize_number(raw) {
            DisplayValue::Value(text) => self.write_active(text, false),
            DisplayValue::Error => CalcState::error(),
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// A reset state with `text` as the freshly started operand A. Used by
    /// the reset-class escapes from the error display.
    fn fresh_entry(text: String) -> CalcState {
        CalcState {
            display: DisplayValue::number(text.clone()),
            operand_a: Some(text),
            is_typing: true,
            ..CalcState::default()
        }
    }

    /// The state after a completed equals step `a op b`.
    fn completed_step(a: &str, op: Operator, b: &str) -> CalcState {
        match compute(a, op, b) {
            Ok(result) => CalcState {
                previous_line: format!("{a} {op} {b} ="),
                display: DisplayValue::number(result.clone()),
                operand_a: Some(result),
                last_operator: Some(op),
                last_operand_b: Some(b.to_string()),
                ..CalcState::default()
            },
            Err(_) => CalcState::error(),
        }
    }

    /// Text the next entry character appends to: the active operand while
    /// typing, a fresh entry otherwise.
    fn entry_base(&self) -> String {
        if self.is_typing {
            self.active_text().to_string()
        } else {
            String::new()
        }
    }

    /// Returns a copy with `text` written to the active operand slot and
    /// mirrored on the display.
    fn write_active(&self, text: String, typing: bool) -> CalcState {
        let mut next = self.clone();
        next.display = DisplayValue::number(text.clone());
        match self.phase() {
            EntryPhase::FirstOperand => next.operand_a = Some(text),
            EntryPhase::SecondOperand => next.operand_b = Some(text),
        }
        next.is_typing = typing;
        next
    }
}

/// Collapses leading zeros while appending a digit to entry text.
fn append_digit(base: &str, digit: u8) -> String {
    match base {
        "0" if digit == 0 => "0".to_string(),
        "0" => digit.to_string(),
        "-0" if digit == 0 => "-0".to_string(),
        "-0" => format!("-{digit}"),
        _ => format!("{base}{digit}"),
    }
}

// =============================================================================
// Binary Evaluation
// =============================================================================

/// Evaluates `a op b` over canonical operand text.
///
/// Either operand failing to parse as a finite number, division by exactly
/// zero, or a non-finite result is an arithmetic failure; the raw numeric
/// result passes through canonicalization before being returned.
pub fn compute(a: &str, operator: Operator, b: &str) -> MathResult<String> {
    let a = parse_operand(a)?;
    let b = parse_operand(b)?;
    canonical_value(operator.apply(a, b)?)
}

fn parse_operand(text: &str) -> MathResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(MathError::NonFinite),
    }
}

// =============================================================================
// Display Snapshot
// =============================================================================

/// The two lines of text a shell renders, and nothing else.
///
/// The engine state carries more (operands, flags, repeat memory) but only
/// these fields are meant for direct display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DisplaySnapshot {
    /// Main display line: the active operand, a result, or `"Error"`.
    pub display: String,

    /// Expression trace line shown above the display.
    pub previous_line: String,
}

impl From<&CalcState> for DisplaySnapshot {
    fn from(state: &CalcState) -> Self {
        DisplaySnapshot {
            display: state.display.as_str().to_string(),
            previous_line: state.previous_line.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a sequence of key labels from the given state.
    fn press(state: CalcState, labels: &[&str]) -> CalcState {
        labels.iter().fold(state, |s, label| {
            s.apply(label.parse::<Key>().expect("test key label"))
        })
    }

    fn keyed(labels: &[&str]) -> CalcState {
        press(CalcState::default(), labels)
    }

    #[test]
    fn test_initial_state() {
        let state = CalcState::default();
        assert_eq!(state.display().as_str(), "0");
        assert_eq!(state.previous_line(), "");
        assert!(!state.is_typing());
        assert_eq!(state.phase(), EntryPhase::FirstOperand);
    }

    #[test]
    fn test_transitions_never_mutate_input() {
        let state = keyed(&["1", "2"]);
        let before = state.clone();
        let _ = state.apply(Key::Digit(3));
        let _ = state.equals();
        let _ = state.backspace();
        assert_eq!(state, before);
    }

    #[test]
    fn test_digit_entry_mirrors_keys() {
        let state = keyed(&["1", "2", "3"]);
        assert_eq!(state.display().as_str(), "123");
        assert!(state.is_typing());
    }

    #[test]
    fn test_leading_zero_collapse() {
        assert_eq!(keyed(&["0", "0"]).display().as_str(), "0");
        assert_eq!(keyed(&["0", "7"]).display().as_str(), "7");
        assert_eq!(keyed(&["0", ".", "5"]).display().as_str(), "0.5");
    }

    #[test]
    fn test_negative_zero_continuation() {
        // "-0" is reachable by deleting back through a negative decimal
        let state = keyed(&["0", ".", "5", "±", "⌫", "⌫"]);
        assert_eq!(state.display().as_str(), "-0");

        assert_eq!(press(state.clone(), &["7"]).display().as_str(), "-7");
        assert_eq!(press(state, &["0"]).display().as_str(), "-0");
    }

    #[test]
    fn test_entry_cap_at_16_digits() {
        let mut state = CalcState::default();
        for _ in 0..17 {
            state = state.apply(Key::Digit(9));
        }
        assert_eq!(state.display().as_str(), "9".repeat(16));

        // The point does not count toward the cap, and does not reset it
        let capped = press(state, &[".", "9"]);
        assert_eq!(capped.display().as_str(), format!("{}.", "9".repeat(16)));
    }

    #[test]
    fn test_out_of_range_digit_is_noop() {
        let state = keyed(&["5"]);
        assert_eq!(state.input_digit(10), state);
    }

    #[test]
    fn test_dot_entry() {
        assert_eq!(keyed(&["."]).display().as_str(), "0.");
        assert_eq!(keyed(&["1", ".", "5"]).display().as_str(), "1.5");
        // Second point is a no-op
        assert_eq!(keyed(&["1", ".", ".", "5"]).display().as_str(), "1.5");
    }

    #[test]
    fn test_multiplication_scenario() {
        let state = keyed(&["7", "×", "6", "="]);
        assert_eq!(state.display().as_str(), "42");
        assert_eq!(state.previous_line(), "7 × 6 =");
    }

    #[test]
    fn test_decimal_addition_scenario() {
        let state = keyed(&["1", ".", "5", "+", "2", ".", "5", "="]);
        assert_eq!(state.display().as_str(), "4");
        assert_eq!(state.previous_line(), "1.5 + 2.5 =");
    }

    #[test]
    fn test_float_noise_rounded_in_results() {
        let state = keyed(&["0", ".", "1", "+", "0", ".", "2", "="]);
        assert_eq!(state.display().as_str(), "0.3");
    }

    #[test]
    fn test_operator_promotes_initial_display() {
        // Operator on a fresh state still sets operand A from "0"
        let state = keyed(&["÷"]);
        assert_eq!(state.previous_line(), "0 ÷");
        assert_eq!(state.phase(), EntryPhase::SecondOperand);
    }

    #[test]
    fn test_division_by_zero_is_error() {
        let state = keyed(&["÷", "0", "="]);
        assert_eq!(state.display().as_str(), "Error");

        let state = keyed(&["5", "÷", "0", "="]);
        assert_eq!(state.display().as_str(), "Error");
    }

    #[test]
    fn test_operator_chaining_evaluates_left_to_right() {
        let state = keyed(&["2", "+", "3", "+"]);
        assert_eq!(state.display().as_str(), "5");
        assert_eq!(state.previous_line(), "5 +");

        let state = press(state, &["4", "="]);
        assert_eq!(state.display().as_str(), "9");
        assert_eq!(state.previous_line(), "5 + 4 =");
    }

    #[test]
    fn test_chaining_clears_repeat_memory() {
        // Equals remembers the step for repetition
        let completed = keyed(&["5", "+", "3", "="]);
        assert_eq!(completed.last_operator, Some(Operator::Add));
        assert_eq!(completed.last_operand_b.as_deref(), Some("3"));

        // The chain-evaluate path clears it
        let chained = press(completed, &["+", "2", "+"]);
        assert_eq!(chained.last_operator, None);
        assert_eq!(chained.last_operand_b, None);
    }

    #[test]
    fn test_repeated_equals_repeats_last_step() {
        let state = keyed(&["5", "+", "3", "="]);
        assert_eq!(state.display().as_str(), "8");

        let state = state.equals();
        assert_eq!(state.display().as_str(), "11");
        assert_eq!(state.previous_line(), "8 + 3 =");

        let state = state.equals();
        assert_eq!(state.display().as_str(), "14");
    }

    #[test]
    fn test_repeat_memory_applies_to_fresh_entry() {
        // Typing a new number after equals starts fresh; the remembered
        // step then applies to it
        let state = keyed(&["5", "+", "3", "=", "2", "="]);
        assert_eq!(state.display().as_str(), "5");
        assert_eq!(state.previous_line(), "2 + 3 =");
    }

    #[test]
    fn test_equals_without_second_operand_is_noop() {
        let state = keyed(&["5", "+"]);
        assert_eq!(state.equals(), state);
    }

    #[test]
    fn test_equals_on_fresh_state_is_noop() {
        let state = CalcState::default();
        assert_eq!(state.equals(), state);
    }

    #[test]
    fn test_operator_substitution_in_place() {
        let state = keyed(&["5", "+", "×"]);
        assert_eq!(state.previous_line(), "5 ×");
        assert_eq!(state.display().as_str(), "5");

        let state = press(state, &["3", "="]);
        assert_eq!(state.display().as_str(), "15");
        assert_eq!(state.previous_line(), "5 × 3 =");
    }

    #[test]
    fn test_substitution_path_stays_consistent() {
        // The comment-flagged "pressed twice in a row" branch: digit entry,
        // backspace and equals behave exactly as on the primary path
        let substituted = keyed(&["5", "+", "×"]);

        // Equals with no operand B: no-op
        assert_eq!(substituted.equals(), substituted);

        // Backspace with no operand B: display collapses to "0", phase kept
        let erased = substituted.backspace();
        assert_eq!(erased.display().as_str(), "0");
        assert_eq!(erased.phase(), EntryPhase::SecondOperand);

        // Digit entry lands in operand B as usual
        let state = press(substituted, &["4", "="]);
        assert_eq!(state.display().as_str(), "20");
    }

    #[test]
    fn test_toggle_sign_is_its_own_inverse() {
        let state = keyed(&["5"]);
        assert_eq!(state.toggle_sign().display().as_str(), "-5");
        assert_eq!(state.toggle_sign().toggle_sign(), state);
    }

    #[test]
    fn test_toggle_sign_zero_stays_zero() {
        let state = CalcState::default();
        assert_eq!(state.toggle_sign(), state);
    }

    #[test]
    fn test_percent_divides_by_100() {
        assert_eq!(keyed(&["5", "0", "%"]).display().as_str(), "0.5");
    }

    #[test]
    fn test_percent_keeps_operator_and_trace() {
        let state = keyed(&["2", "0", "0", "+", "5", "0", "%"]);
        assert_eq!(state.display().as_str(), "0.5");
        assert_eq!(state.previous_line(), "200 +");
        assert_eq!(press(state, &["="]).display().as_str(), "200.5");
    }

    #[test]
    fn test_backspace_single_char_collapses_to_zero() {
        let state = keyed(&["5", "⌫"]);
        assert_eq!(state.display().as_str(), "0");
        assert!(!state.is_typing());
    }

    #[test]
    fn test_backspace_mid_entry() {
        let state = keyed(&["1", "2", "3", "⌫"]);
        assert_eq!(state.display().as_str(), "12");
        assert!(state.is_typing());
    }

    #[test]
    fn test_backspace_reverts_operand_b_to_unset() {
        let state = keyed(&["5", "+", "3", "⌫"]);
        assert_eq!(state.display().as_str(), "0");
        // Operand B unset again, so equals has nothing to evaluate
        assert_eq!(state.equals(), state);
    }

    #[test]
    fn test_clear_returns_initial_state() {
        let state = keyed(&["5", "+", "3", "=", "AC"]);
        assert_eq!(state, CalcState::default());
    }

    #[test]
    fn test_error_blocks_formatting_transitions() {
        let error = keyed(&["5", "÷", "0", "="]);
        assert_eq!(error.toggle_sign(), error);
        assert_eq!(error.percent(), error);
        assert_eq!(error.choose_operator(Operator::Add), error);
        assert_eq!(error.equals(), error);
    }

    #[test]
    fn test_error_escapes_through_fresh_entry() {
        let error = keyed(&["5", "÷", "0", "="]);

        let digit = error.input_digit(7);
        assert_eq!(digit.display().as_str(), "7");
        assert_eq!(digit.previous_line(), "");
        assert!(digit.is_typing());

        let dot = error.input_dot();
        assert_eq!(dot.display().as_str(), "0.");

        assert_eq!(error.backspace(), CalcState::default());
        assert_eq!(error.apply(Key::Clear), CalcState::default());
    }

    #[test]
    fn test_digit_after_equals_starts_fresh() {
        let state = keyed(&["5", "+", "3", "=", "2"]);
        assert_eq!(state.display().as_str(), "2");
        assert!(state.is_typing());
    }

    #[test]
    fn test_compute_canonicalizes_result() {
        assert_eq!(compute("0.1", Operator::Add, "0.2").unwrap(), "0.3");
        assert_eq!(compute("1", Operator::Divide, "3").unwrap(), "0.333333333333");
        assert_eq!(
            compute("5", Operator::Divide, "0"),
            Err(MathError::DivisionByZero)
        );
        assert_eq!(
            compute("junk", Operator::Add, "1"),
            Err(MathError::NonFinite)
        );
    }

    #[test]
    fn test_set_active_operand_write_path() {
        let state = keyed(&["5"]).set_active_operand("6.4807407");
        assert_eq!(state.display().as_str(), "6.4807407");
        assert!(!state.is_typing());

        // Writes follow the active slot
        let state = keyed(&["9", "+"]).set_active_operand("3");
        assert_eq!(press(state, &["="]).display().as_str(), "12");

        // A value that fails sanitization yields the error state
        assert!(keyed(&["5"]).set_active_operand("junk").display().is_error());
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let snapshot = DisplaySnapshot::from(&keyed(&["7", "×", "6", "="]));
        let json = serde_json::to_value(&snapshot).expect("serialize snapshot");
        assert_eq!(json["display"], "42");
        assert_eq!(json["previousLine"], "7 × 6 =");
    }
}
