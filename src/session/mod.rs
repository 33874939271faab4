//! Editing session - owns the grid and the in-progress paint stroke
//!
//! The frontend forwards raw pointer events; all editing semantics
//! (stroke color selection, drag painting, whole-grid actions) live here.
//! Clue derivation is on demand only, never maintained incrementally.

use crate::clues::{self, Clues, TableLayout};
use crate::core::grid::{Grid, GridSnapshot};
use crate::domain::cells::CellState;
use crate::error::EngineError;

#[path = "commands/commands.rs"]
mod commands;
#[path = "init/random.rs"]
mod random;
mod facade;

pub use facade::Editor;

/// Mouse buttons as the DOM reports them.
pub const BUTTON_LEFT: u8 = 0;
pub const BUTTON_RIGHT: u8 = 2;

/// The editing session
pub struct EditorCore {
    grid: Grid,
    stroke: Option<CellState>,
    filled: u32,
    rng_state: u32,
}

impl EditorCore {
    /// Create a new session with an empty grid of the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            grid: Grid::new(width, height),
            stroke: None,
            filled: 0,
            rng_state: 12345,
        }
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn filled_count(&self) -> u32 { self.filled }

    pub fn grid(&self) -> &Grid { &self.grid }

    /// Seed the scramble RNG (reproducible boards in tests)
    pub fn set_seed(&mut self, seed: u32) {
        // xorshift32 degenerates on zero state
        self.rng_state = if seed == 0 { 1 } else { seed };
    }

    /// Begin a paint stroke; `button` is the DOM mouse button index
    pub fn begin_stroke(&mut self, x: i32, y: i32, button: u8) {
        commands::begin_stroke(self, x, y, button)
    }

    /// Continue the active stroke into another cell
    pub fn stroke_to(&mut self, x: i32, y: i32) {
        commands::stroke_to(self, x, y)
    }

    /// Finish the active stroke (mouse up or leaving the grid)
    pub fn end_stroke(&mut self) {
        commands::end_stroke(self)
    }

    /// Replace the grid with a fresh empty one of the given size
    pub fn resize(&mut self, width: u32, height: u32) {
        commands::resize(self, width, height)
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    /// Flip every cell
    pub fn invert(&mut self) {
        commands::invert(self)
    }

    /// Randomize every cell, filled with probability 0.55
    pub fn scramble(&mut self) {
        commands::scramble(self)
    }

    /// Derive row/column clues for the current grid
    pub fn derive_clues(&self) -> Clues {
        clues::derive_clues(&self.grid)
    }

    /// Printable table layout for the current grid
    pub fn table_layout(&self) -> TableLayout {
        TableLayout::new(&self.derive_clues())
    }

    pub fn clues_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(&self.derive_clues())?)
    }

    pub fn table_layout_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(&self.table_layout())?)
    }

    pub fn snapshot_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(&self.grid.snapshot())?)
    }

    pub fn load_snapshot_json(&mut self, json: &str) -> Result<(), EngineError> {
        let snapshot: GridSnapshot = serde_json::from_str(json)?;
        self.grid = Grid::from_snapshot(snapshot)?;
        self.stroke = None;
        self.filled = self.grid.filled_count();
        Ok(())
    }

    /// Get pointer to the cell array (for JS rendering)
    pub fn cells_ptr(&self) -> *const CellState {
        self.grid.cells_ptr()
    }

    /// Cell array length in bytes
    pub fn cells_len(&self) -> usize {
        self.grid.size()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
