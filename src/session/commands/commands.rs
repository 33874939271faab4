use crate::core::grid::Grid;
use crate::domain::cells::{CellState, CELL_EMPTY, CELL_FILLED};

use super::{random, EditorCore, BUTTON_LEFT, BUTTON_RIGHT};

/// Scramble fill probability.
const SCRAMBLE_FILL_CHANCE: f32 = 0.55;

pub(super) fn begin_stroke(core: &mut EditorCore, x: i32, y: i32, button: u8) {
    let state = match button {
        BUTTON_LEFT => CELL_FILLED,
        BUTTON_RIGHT => CELL_EMPTY,
        // Middle/back/forward buttons do not paint
        _ => return,
    };

    core.stroke = Some(state);
    paint(core, x, y, state);
}

pub(super) fn stroke_to(core: &mut EditorCore, x: i32, y: i32) {
    if let Some(state) = core.stroke {
        paint(core, x, y, state);
    }
}

pub(super) fn end_stroke(core: &mut EditorCore) {
    core.stroke = None;
}

fn paint(core: &mut EditorCore, x: i32, y: i32, state: CellState) {
    if !core.grid.in_bounds(x, y) {
        return;
    }
    let (x, y) = (x as u32, y as u32);

    let prev = core.grid.get(x, y);
    if prev == state {
        return;
    }

    core.grid.set(x, y, state);
    if state == CELL_FILLED {
        core.filled += 1;
    } else if core.filled > 0 {
        core.filled -= 1;
    }
}

pub(super) fn resize(core: &mut EditorCore, width: u32, height: u32) {
    // Dimension changes always start from a fresh canvas; prior cell
    // content is discarded, not resized in place.
    core.grid = Grid::new(width, height);
    core.stroke = None;
    core.filled = 0;
}

pub(super) fn reset(core: &mut EditorCore) {
    core.grid.clear();
    core.filled = 0;
}

pub(super) fn invert(core: &mut EditorCore) {
    core.grid.invert();
    core.filled = core.grid.size() as u32 - core.filled;
}

pub(super) fn scramble(core: &mut EditorCore) {
    let mut filled = 0;
    for idx in 0..core.grid.size() {
        let state = if random::chance(&mut core.rng_state, SCRAMBLE_FILL_CHANCE) {
            filled += 1;
            CELL_FILLED
        } else {
            CELL_EMPTY
        };
        core.grid.set_idx(idx, state);
    }
    core.filled = filled;
}
