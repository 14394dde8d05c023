//! # Calculator State
//!
//! Holds the authoritative engine snapshot between key events.
//!
//! ## Thread Safety
//! The engine is trivially race-free: transitions never mutate their input
//! and the engine has no internal state. The mutex here serializes the
//! shell's own read-modify-write cycle so key events apply in order:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Key event ──► lock ──► snapshot.apply(key) ──► replace ──► unlock      │
//! │                                                                         │
//! │  Two concurrent key events can never interleave between the read of    │
//! │  the snapshot and the write of its replacement.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use pebble_core::CalcState;

/// Tauri-managed calculator state.
///
/// ## Why Not RwLock?
/// Almost every command replaces the snapshot; a read/write split would add
/// complexity with no benefit.
#[derive(Debug)]
pub struct CalculatorState {
    snapshot: Arc<Mutex<CalcState>>,
}

impl CalculatorState {
    /// Creates the initial state (`display = "0"`).
    pub fn new() -> Self {
        CalculatorState {
            snapshot: Arc::new(Mutex::new(CalcState::default())),
        }
    }

    /// Executes a function with read access to the current snapshot.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let snapshot = calc.with_state(DisplaySnapshot::from);
    /// ```
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CalcState) -> R,
    {
        let state = self.snapshot.lock().expect("Calculator mutex poisoned");
        f(&state)
    }

    /// Applies a transition and replaces the held snapshot with its result,
    /// returning the replacement.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let next = calc.transition(|state| state.apply(key));
    /// ```
    pub fn transition<F>(&self, f: F) -> CalcState
    where
        F: FnOnce(&CalcState) -> CalcState,
    {
        let mut state = self.snapshot.lock().expect("Calculator mutex poisoned");
        let next = f(&state);
        *state = next.clone();
        next
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}
