//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Pebble Calc                            │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('press_key', { label })                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function: Result<DisplaySnapshot, ApiError>             │  │
//! │  │                                                                  │  │
//! │  │  Unknown key label? ── KeyParseError ──► ApiError INVALID_KEY   │  │
//! │  │  Memory misuse?     ──────────────────► ApiError MEMORY_ERROR   │  │
//! │  │                                                                  │  │
//! │  │  NOTE: division by zero is NOT an ApiError. Arithmetic failure  │  │
//! │  │  is a display value ("Error") inside a successful response -    │  │
//! │  │  the calculator keeps running, only the display changes.       │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  catch (e) { e.code === 'INVALID_KEY', e.message for display }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use pebble_core::KeyParseError;
use serde::Serialize;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "INVALID_KEY",
///   "message": "unrecognized key label: \"F13\""
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await invoke('press_key', { label });
/// } catch (e) {
///   if (e.code === 'INVALID_KEY') return; // ignore unmapped keyboard input
///   showError(e.message);
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Key label could not be translated into a calculator key
    InvalidKey,

    /// Memory cell misuse (e.g. storing the error display)
    MemoryError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a memory-cell error.
    pub fn memory(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::MemoryError, message)
    }
}

/// Converts key-boundary parse errors to API errors.
impl From<KeyParseError> for ApiError {
    fn from(err: KeyParseError) -> Self {
        ApiError::new(ErrorCode::InvalidKey, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
