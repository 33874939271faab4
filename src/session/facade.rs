use wasm_bindgen::prelude::*;

use super::EditorCore;

#[wasm_bindgen]
pub struct Editor {
    core: EditorCore,
}

#[wasm_bindgen]
impl Editor {
    /// Create a new editor with an empty grid of the given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: EditorCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn filled_count(&self) -> u32 { self.core.filled_count() }

    /// Seed the scramble RNG (reproducible boards)
    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    /// Begin a paint stroke; `button` is the DOM mouse button index
    /// (0 paints, 2 erases, others are ignored)
    pub fn begin_stroke(&mut self, x: i32, y: i32, button: u8) {
        self.core.begin_stroke(x, y, button);
    }

    /// Continue the active stroke into the cell under the cursor
    pub fn stroke_to(&mut self, x: i32, y: i32) {
        self.core.stroke_to(x, y);
    }

    /// Finish the active stroke (mouse up or leaving the grid)
    pub fn end_stroke(&mut self) {
        self.core.end_stroke();
    }

    /// Replace the grid with a fresh empty one of the given size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Flip every cell
    pub fn invert(&mut self) {
        self.core.invert();
    }

    /// Randomize every cell
    pub fn scramble(&mut self) {
        self.core.scramble();
    }

    /// Get pointer to the cell array (for JS rendering)
    pub fn cells_ptr(&self) -> *const u8 {
        self.core.cells_ptr()
    }

    /// Cell array length in bytes
    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }

    /// Copy the cell array out as a fresh Uint8Array (cold paths;
    /// rendering should view wasm memory via cells_ptr/cells_len)
    pub fn cells_copy(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.core.grid().cells())
    }

    /// Row/column clues for the current grid, as JSON
    pub fn clues_json(&self) -> Result<String, JsValue> {
        self.core
            .clues_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Printable table layout for the current grid, as JSON
    pub fn table_layout_json(&self) -> Result<String, JsValue> {
        self.core
            .table_layout_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Serialize the grid for the frontend to stash
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.core
            .snapshot_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Restore a previously serialized grid
    pub fn load_snapshot_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_snapshot_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
