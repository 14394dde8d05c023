//! # pebble-core: Pure Calculator Engine for Pebble Calc
//!
//! This crate is the **heart** of Pebble Calc. It contains the whole
//! calculator as pure transition functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Pebble Calc Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Frontend (keypad UI)                        │   │
//! │  │    Buttons ──► key labels ──► two display lines                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    press_key, memory_*, apply_unary, get_display                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pebble-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   keys    │  │  format   │  │  engine   │  │   error   │  │   │
//! │  │   │ Key/Op    │  │ canonical │  │ CalcState │  │ MathError │  │   │
//! │  │   │  union    │  │   text    │  │ apply(..) │  │ KeyParse  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO MUTATION • PURE (state, input) -> state          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`keys`] - The closed key-token union and operator type
//! - [`format`] - Canonical display text and the tagged display value
//! - [`engine`] - The state record and every key-press transition
//! - [`error`] - Typed arithmetic and boundary errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every transition is deterministic - same input,
//!    same output, and it never mutates the state it was given
//! 2. **No I/O**: file system, network, clock access is FORBIDDEN here
//! 3. **Failure Is a Value**: arithmetic failure becomes the Error display,
//!    never a panic or a fault the caller must catch
//! 4. **Exhaustive Dispatch**: raw key labels are translated into a closed
//!    token union once, at the boundary
//!
//! ## Example Usage
//!
//! ```rust
//! use pebble_core::{CalcState, Key};
//!
//! let mut state = CalcState::default();
//! for label in ["7", "×", "6", "="] {
//!     state = state.apply(label.parse::<Key>().unwrap());
//! }
//!
//! assert_eq!(state.display().as_str(), "42");
//! assert_eq!(state.previous_line(), "7 × 6 =");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod format;
pub mod keys;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pebble_core::CalcState` instead of
// `use pebble_core::engine::CalcState`

pub use engine::{compute, CalcState, DisplaySnapshot, EntryPhase};
pub use error::{KeyParseError, MathError, MathResult};
pub use format::{sanitize_number, DisplayValue};
pub use keys::{Key, Operator};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Significant decimal digits every computed result is rounded to.
///
/// ## Why 12?
/// Fewer digits than f64 carries, so binary representation noise
/// (`0.1 + 0.2`) rounds away before it reaches the display, while still
/// filling a pocket-calculator-sized screen.
pub const SIGNIFICANT_DIGITS: usize = 12;

/// Maximum digits (sign and decimal point excluded) a single operand entry
/// may hold. Digit input beyond the cap is a no-op.
pub const MAX_ENTRY_DIGITS: usize = 16;
