//! # Memory Commands
//!
//! The memory row: MC, MR, M+, M-, and the `M` indicator.
//!
//! ## Memory Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MS  store the current display value                                    │
//! │  MR  write the cell back into the active operand (no-op when empty)    │
//! │  M+  cell += display value     M-  cell -= display value               │
//! │  MC  empty the cell                                                     │
//! │                                                                         │
//! │  The cell is caller-owned; the engine only sees MR's write through     │
//! │  the same path a completed computation uses. Storing while the         │
//! │  display shows "Error" is rejected.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pebble_core::DisplaySnapshot;
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CalculatorState, MemoryState};

/// Stores the current display value in the memory cell.
#[tauri::command]
pub fn memory_store(
    calc: State<'_, CalculatorState>,
    memory: State<'_, MemoryState>,
) -> Result<(), ApiError> {
    debug!("memory_store command");

    match calc.with_state(|state| state.display_value()) {
        Some(value) => {
            memory.store(value);
            Ok(())
        }
        None => Err(ApiError::memory("cannot store the error display")),
    }
}

/// Adds the current display value into the memory cell.
#[tauri::command]
pub fn memory_add(
    calc: State<'_, CalculatorState>,
    memory: State<'_, MemoryState>,
) -> Result<(), ApiError> {
    debug!("memory_add command");

    match calc.with_state(|state| state.display_value()) {
        Some(value) => {
            memory.add(value);
            Ok(())
        }
        None => Err(ApiError::memory("cannot accumulate the error display")),
    }
}

/// Subtracts the current display value from the memory cell.
#[tauri::command]
pub fn memory_subtract(
    calc: State<'_, CalculatorState>,
    memory: State<'_, MemoryState>,
) -> Result<(), ApiError> {
    debug!("memory_subtract command");

    match calc.with_state(|state| state.display_value()) {
        Some(value) => {
            memory.subtract(value);
            Ok(())
        }
        None => Err(ApiError::memory("cannot accumulate the error display")),
    }
}

/// Recalls the memory cell into the active operand.
///
/// An empty cell is a no-op: the current display lines come back unchanged.
#[tauri::command]
pub fn memory_recall(
    calc: State<'_, CalculatorState>,
    memory: State<'_, MemoryState>,
) -> DisplaySnapshot {
    debug!("memory_recall command");

    match memory.recall() {
        Some(value) => {
            let next = calc.transition(|state| state.set_active_operand(&value.to_string()));
            DisplaySnapshot::from(&next)
        }
        None => calc.with_state(DisplaySnapshot::from),
    }
}

/// Empties the memory cell.
#[tauri::command]
pub fn memory_clear(memory: State<'_, MemoryState>) {
    debug!("memory_clear command");
    memory.clear();
}

/// True if a value is stored (drives the frontend `M` indicator).
#[tauri::command]
pub fn memory_indicator(memory: State<'_, MemoryState>) -> bool {
    memory.is_set()
}
