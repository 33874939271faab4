//! Grid - flat cell storage for the puzzle canvas
//!
//! One byte per cell in scan order (y * width + x): linear memory the JS
//! renderer can view directly, no per-cell objects.

use serde::{Deserialize, Serialize};

use crate::domain::cells::{self, CellState, CELL_EMPTY, CELL_FILLED};
use crate::error::EngineError;

pub struct Grid {
    width: u32,
    height: u32,
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);

        Self {
            width,
            height,
            size,
            cells: vec![CELL_EMPTY; size],
        }
    }

    /// Rebuild a grid from an existing cell buffer (snapshot load).
    pub fn from_cells(width: u32, height: u32, cells: Vec<CellState>) -> Result<Self, EngineError> {
        let size = (width as usize) * (height as usize);
        if cells.len() != size {
            return Err(EngineError::InvalidGridShape {
                width,
                height,
                cells: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            size,
            cells,
        })
    }

    pub fn from_snapshot(snapshot: GridSnapshot) -> Result<Self, EngineError> {
        Self::from_cells(snapshot.width, snapshot.height, snapshot.cells)
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
        }
    }

    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    // === Cell access ===
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> CellState {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, state: CellState) {
        let idx = self.index(x, y);
        self.cells[idx] = state;
    }

    #[inline]
    pub fn set_idx(&mut self, idx: usize, state: CellState) {
        self.cells[idx] = state;
    }

    #[inline]
    pub fn is_filled(&self, x: u32, y: u32) -> bool {
        self.cells[self.index(x, y)] == CELL_FILLED
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn filled_count(&self) -> u32 {
        self.cells.iter().filter(|&&c| c == CELL_FILLED).count() as u32
    }

    // === Whole-grid edits ===
    pub fn clear(&mut self) {
        self.cells.fill(CELL_EMPTY);
    }

    pub fn invert(&mut self) {
        for cell in &mut self.cells {
            *cell = cells::inverted(*cell);
        }
    }

    // === Raw pointer for JS interop ===
    pub fn cells_ptr(&self) -> *const CellState {
        self.cells.as_ptr()
    }
}

/// Serialized grid state exchanged with the frontend.
///
/// Cells are in the same y * width + x order as the live grid; the shape
/// invariant is re-checked on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<CellState>,
}
