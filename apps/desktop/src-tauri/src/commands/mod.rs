//! # Tauri Commands Module
//!
//! All commands exposed to the keypad frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── keypad.rs   ◄─── Key-press dispatch, display readout
//! ├── memory.rs   ◄─── Memory cell (MC / MR / M+ / M-)
//! ├── unary.rs    ◄─── Caller-side unary layer (√, x², 1/x)
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const lines = await invoke('press_key', { label: '7' });               │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  fn press_key(                                                          │
//! │      calc: State<'_, CalculatorState>,  ◄── Injected by Tauri           │
//! │      label: String,                     ◄── From invoke params          │
//! │  ) -> Result<DisplaySnapshot, ApiError>                                 │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: { display: "7", previousLine: "" }                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the engine snapshot
//! fn press_key(calc: State<'_, CalculatorState>, ...)
//!
//! // Needs snapshot and memory cell
//! fn memory_store(calc: State<'_, CalculatorState>, memory: State<'_, MemoryState>)
//!
//! // Only needs config
//! fn get_config(config: State<'_, ConfigState>)
//! ```

pub mod config;
pub mod keypad;
pub mod memory;
pub mod unary;
