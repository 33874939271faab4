//! Hanjie Engine - nonogram builder logic in WASM
//!
//! The browser frontend owns the DOM and raw pointer events; this crate
//! owns everything else:
//! - core/    - Grid storage
//! - domain/  - Cell states and render colors
//! - clues/   - Run-length clue derivation + printable table layout
//! - session/ - Editing session orchestration and the wasm facade

pub mod core;
pub mod domain;
pub mod clues;
pub mod error;
pub mod session;

// Compatibility re-exports (keeps external paths short)
pub use crate::core::grid;
pub use domain::cells;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Hanjie WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::grid::{Grid, GridSnapshot};
pub use clues::{derive_clues, derive_from_cells, Clues, TableLayout};
pub use error::EngineError;
pub use session::Editor;

// Export cell state constants for JS
#[wasm_bindgen]
pub fn cell_empty() -> u8 { domain::cells::CELL_EMPTY }
#[wasm_bindgen]
pub fn cell_filled() -> u8 { domain::cells::CELL_FILLED }

// Render colors the frontend paints cells with (ABGR packed)
#[wasm_bindgen]
pub fn empty_color() -> u32 { domain::cells::EMPTY_COLOR }
#[wasm_bindgen]
pub fn filled_color() -> u32 { domain::cells::FILLED_COLOR }
