//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: each state type has one job
//! 2. **Clearer Command Signatures**: commands declare exactly what they need
//! 3. **Reduced Contention**: the memory cell does not block key presses
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(calculator_state);                                  │   │
//! │  │  app.manage(memory_state);                                      │   │
//! │  │  app.manage(config_state);                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌────────────────┐  ┌──────────────┐  ┌──────────────────┐            │
//! │  │ CalculatorState│  │ MemoryState  │  │   ConfigState    │            │
//! │  │                │  │              │  │                  │            │
//! │  │  Arc<Mutex<    │  │  Arc<Mutex<  │  │  theme           │            │
//! │  │    CalcState   │  │   Option<f64>│  │  sound_enabled   │            │
//! │  │  >>            │  │  >>          │  │  always_on_top   │            │
//! │  └────────────────┘  └──────────────┘  └──────────────────┘            │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • The engine itself is race-free (pure transitions, no mutation);     │
//! │    the mutex exists to serialize OUR read-modify-write of the held     │
//! │    snapshot, preserving key-event ordering                             │
//! │  • MemoryState: independent cell, protected the same way               │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod calculator;
mod config;
mod memory;

pub use calculator::CalculatorState;
pub use config::{ConfigState, Theme};
pub use memory::MemoryState;
