//! # Memory State
//!
//! The calculator's memory cell (MC / MR / M+ / M-).
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The memory cell lives OUTSIDE the engine.                              │
//! │                                                                         │
//! │  M+  ──► read display value ──► add into cell                           │
//! │  MR  ──► read cell ──► write into the engine's active operand slot      │
//! │          (same write path a completed computation uses)                 │
//! │                                                                         │
//! │  The engine never knows the cell exists; it only sees the value MR     │
//! │  writes back through CalcState::set_active_operand.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

/// Tauri-managed memory cell.
///
/// `None` means the cell is empty: MR is a no-op and the frontend hides the
/// `M` indicator. An explicit empty state (rather than defaulting to zero)
/// is what lets the indicator exist at all.
#[derive(Debug, Default)]
pub struct MemoryState {
    cell: Arc<Mutex<Option<f64>>>,
}

impl MemoryState {
    /// Creates an empty memory cell.
    pub fn new() -> Self {
        MemoryState::default()
    }

    /// Stores a value, replacing any previous one.
    pub fn store(&self, value: f64) {
        *self.lock() = Some(value);
    }

    /// Adds a value into the cell. An empty cell behaves as zero, so M+ on
    /// empty memory stores the value, matching pocket-calculator behavior.
    pub fn add(&self, value: f64) {
        let mut cell = self.lock();
        *cell = Some(cell.unwrap_or(0.0) + value);
    }

    /// Subtracts a value from the cell (empty behaves as zero).
    pub fn subtract(&self, value: f64) {
        let mut cell = self.lock();
        *cell = Some(cell.unwrap_or(0.0) - value);
    }

    /// The stored value, if any. Does not clear the cell.
    pub fn recall(&self) -> Option<f64> {
        *self.lock()
    }

    /// Empties the cell.
    pub fn clear(&self) {
        *self.lock() = None;
    }

    /// True if a value is stored (drives the frontend `M` indicator).
    pub fn is_set(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<f64>> {
        self.cell.lock().expect("Memory mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let memory = MemoryState::new();
        assert!(!memory.is_set());
        assert_eq!(memory.recall(), None);
    }

    #[test]
    fn test_store_and_recall() {
        let memory = MemoryState::new();
        memory.store(42.0);
        assert!(memory.is_set());
        assert_eq!(memory.recall(), Some(42.0));
        // Recall does not consume
        assert_eq!(memory.recall(), Some(42.0));
    }

    #[test]
    fn test_add_and_subtract_treat_empty_as_zero() {
        let memory = MemoryState::new();
        memory.add(5.0);
        assert_eq!(memory.recall(), Some(5.0));

        memory.subtract(2.0);
        assert_eq!(memory.recall(), Some(3.0));

        let fresh = MemoryState::new();
        fresh.subtract(2.0);
        assert_eq!(fresh.recall(), Some(-2.0));
    }

    #[test]
    fn test_clear_empties_the_cell() {
        let memory = MemoryState::new();
        memory.store(1.0);
        memory.clear();
        assert!(!memory.is_set());
        assert_eq!(memory.recall(), None);
    }
}
