//! # Pebble Desktop Library
//!
//! Core library for the Pebble Calc desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! pebble_desktop_lib/
//! ├── lib.rs            ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── calculator.rs ◄─── Engine snapshot holder
//! │   ├── memory.rs     ◄─── Memory cell
//! │   └── config.rs     ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   ├── keypad.rs     ◄─── Key-press dispatch
//! │   ├── memory.rs     ◄─── Memory commands
//! │   ├── unary.rs      ◄─── Unary layer (√, x², 1/x)
//! │   └── config.rs     ◄─── Config retrieval
//! └── error.rs          ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{CalculatorState, ConfigState, MemoryState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CalculatorState: initial engine snapshot (display "0")            │
/// │     • MemoryState: empty memory cell                                    │
/// │     • ConfigState: defaults + PEBBLE_* environment overrides            │
/// │                                                                         │
/// │  3. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Pebble Calc Desktop Application");

    // Build and run the Tauri app
    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|_app| {
            info!("State initialized");
            Ok(())
        })
        .manage(CalculatorState::new())
        .manage(MemoryState::new())
        .manage(ConfigState::from_env())
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Keypad commands
            commands::keypad::press_key,
            commands::keypad::get_display,
            // Memory commands
            commands::memory::memory_store,
            commands::memory::memory_add,
            commands::memory::memory_subtract,
            commands::memory::memory_recall,
            commands::memory::memory_clear,
            commands::memory::memory_indicator,
            // Unary commands
            commands::unary::apply_unary,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=pebble=trace` - Show trace for pebble crates only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,pebble=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
