//! Cell state definitions
//!
//! A cell is either empty or filled. States are raw u8 so the JS side can
//! view the grid straight out of wasm memory as a Uint8Array.

pub type CellState = u8;

pub const CELL_EMPTY: CellState = 0;
pub const CELL_FILLED: CellState = 1;

// Render colors, ABGR packed for canvas ImageData
pub const EMPTY_COLOR: u32 = 0xFFFFFFFF; // white
pub const FILLED_COLOR: u32 = 0xFFC5AF90; // #90AFC5

#[inline]
pub fn is_filled(state: CellState) -> bool {
    state == CELL_FILLED
}

#[inline]
pub fn inverted(state: CellState) -> CellState {
    if state == CELL_FILLED { CELL_EMPTY } else { CELL_FILLED }
}
