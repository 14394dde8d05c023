//! # Keypad Commands
//!
//! Key-press dispatch and display readout.
//!
//! ## Key Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Button click / keydown                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  invoke('press_key', { label: '×' })                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  label.parse::<Key>()      ◄── the ONE place raw labels are translated  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  calc.transition(|s| s.apply(key))   ◄── pure engine transition         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  { display, previousLine }  rendered verbatim as two lines of text      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pebble_core::{DisplaySnapshot, Key};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::CalculatorState;

/// Applies one key press and returns the updated display lines.
///
/// ## Arguments
/// * `label` - Raw key label (`"0"`-`"9"`, `"."`, `"+"`, `"−"`, `"×"`,
///   `"÷"` and their ASCII aliases, `"="`, `"C"`, `"Backspace"`, `"±"`,
///   `"%"`)
///
/// ## Errors
/// `INVALID_KEY` if the label is not a calculator key. Arithmetic failure
/// is NOT an error: it arrives as `display == "Error"` in a successful
/// response.
#[tauri::command]
pub fn press_key(
    calc: State<'_, CalculatorState>,
    label: String,
) -> Result<DisplaySnapshot, ApiError> {
    debug!(label = %label, "press_key command");

    let key = label.parse::<Key>()?;
    let next = calc.transition(|state| state.apply(key));
    Ok(DisplaySnapshot::from(&next))
}

/// Returns the current display lines without changing anything.
///
/// ## When Used
/// - App startup (initial render)
/// - Window refocus
#[tauri::command]
pub fn get_display(calc: State<'_, CalculatorState>) -> DisplaySnapshot {
    debug!("get_display command");
    calc.with_state(DisplaySnapshot::from)
}
