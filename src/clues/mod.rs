//! Clue Extractor - row/column run-length derivation
//!
//! Standard nonogram notation: each row/column clue lists the lengths of
//! its maximal filled runs, in scan order (left-to-right, top-to-bottom).
//! An all-empty line gets an empty clue list, never `[0]` - the printed
//! puzzle table relies on that.

use serde::{Deserialize, Serialize};

use crate::core::grid::Grid;
use crate::domain::cells::{CellState, CELL_FILLED};
use crate::error::EngineError;

pub mod layout;

pub use layout::TableLayout;

/// Run lengths for a single row or column.
pub type LineClues = Vec<u32>;

/// Clues for every row and column of a grid.
///
/// `rows.len()` equals the grid height, `cols.len()` the width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clues {
    pub rows: Vec<LineClues>,
    pub cols: Vec<LineClues>,
}

/// Derive row and column clues from a grid.
///
/// Pure and deterministic; the grid's shape invariant guarantees a
/// well-formed result, so this cannot fail.
pub fn derive_clues(grid: &Grid) -> Clues {
    let (width, height) = (grid.width(), grid.height());

    let rows = (0..height)
        .map(|y| scan_line((0..width).map(|x| grid.get(x, y))))
        .collect();
    let cols = (0..width)
        .map(|x| scan_line((0..height).map(|y| grid.get(x, y))))
        .collect();

    Clues { rows, cols }
}

/// Shape-checked derivation over a raw cell buffer in y * width + x order.
///
/// Fails with `InvalidGridShape` before any scanning when the buffer does
/// not hold exactly width * height cells.
pub fn derive_from_cells(
    width: u32,
    height: u32,
    cells: &[CellState],
) -> Result<Clues, EngineError> {
    let expected = (width as usize) * (height as usize);
    if cells.len() != expected {
        return Err(EngineError::InvalidGridShape {
            width,
            height,
            cells: cells.len(),
        });
    }

    let rows = (0..height)
        .map(|y| scan_line((0..width).map(|x| cells[(y * width + x) as usize])))
        .collect();
    let cols = (0..width)
        .map(|x| scan_line((0..height).map(|y| cells[(y * width + x) as usize])))
        .collect();

    Ok(Clues { rows, cols })
}

/// Scan one line and collect its maximal filled-run lengths.
///
/// `current == 0` is the idle state; a run closes on the first empty cell
/// after it, or at end of line. Zero-length runs are never emitted.
fn scan_line(line: impl Iterator<Item = CellState>) -> LineClues {
    let mut runs = LineClues::new();
    let mut current = 0u32;

    for state in line {
        if state == CELL_FILLED {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    if current > 0 {
        runs.push(current);
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cells::{CELL_EMPTY, CELL_FILLED};

    fn line(pattern: &[u8]) -> LineClues {
        scan_line(pattern.iter().copied())
    }

    #[test]
    fn empty_line_yields_no_runs() {
        assert_eq!(line(&[0, 0, 0, 0]), Vec::<u32>::new());
        assert_eq!(line(&[]), Vec::<u32>::new());
    }

    #[test]
    fn full_line_yields_single_run() {
        assert_eq!(line(&[1, 1, 1, 1, 1]), vec![5]);
    }

    #[test]
    fn runs_close_on_gaps() {
        assert_eq!(line(&[1, 1, 0, 1, 1]), vec![2, 2]);
        assert_eq!(line(&[0, 1, 0, 0, 1, 1, 1, 0]), vec![1, 3]);
    }

    #[test]
    fn trailing_run_is_flushed() {
        assert_eq!(line(&[0, 0, 1]), vec![1]);
    }

    #[test]
    fn checkerboard_rows_and_cols() {
        // 3x3 checkerboard, filled at (0,0).
        let mut grid = Grid::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                let state = if (x + y) % 2 == 0 { CELL_FILLED } else { CELL_EMPTY };
                grid.set(x, y, state);
            }
        }

        let clues = derive_clues(&grid);
        assert_eq!(clues.rows, vec![vec![1, 1], vec![1], vec![1, 1]]);
        assert_eq!(clues.cols, vec![vec![1, 1], vec![1], vec![1, 1]]);
    }

    #[test]
    fn collection_lengths_match_dimensions() {
        let grid = Grid::new(7, 4);
        let clues = derive_clues(&grid);
        assert_eq!(clues.rows.len(), 4);
        assert_eq!(clues.cols.len(), 7);
        assert!(clues.rows.iter().all(|r| r.is_empty()));
        assert!(clues.cols.iter().all(|c| c.is_empty()));
    }

    #[test]
    fn zero_sized_grids_yield_empty_collections() {
        let clues = derive_clues(&Grid::new(0, 5));
        assert!(clues.rows.iter().all(|r| r.is_empty()));
        assert_eq!(clues.rows.len(), 5);
        assert_eq!(clues.cols.len(), 0);

        let clues = derive_clues(&Grid::new(5, 0));
        assert_eq!(clues.rows.len(), 0);
        assert_eq!(clues.cols.len(), 5);
    }

    #[test]
    fn derivation_is_idempotent() {
        let mut grid = Grid::new(5, 1);
        for x in [0, 1, 3, 4] {
            grid.set(x, 0, CELL_FILLED);
        }

        let first = derive_clues(&grid);
        let second = derive_clues(&grid);
        assert_eq!(first, second);
        assert_eq!(first.rows, vec![vec![2, 2]]);
    }

    #[test]
    fn shape_mismatch_is_rejected_before_scanning() {
        let err = derive_from_cells(3, 3, &[1, 0, 1]).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidGridShape { width: 3, height: 3, cells: 3 }
        ));
    }

    #[test]
    fn derive_from_cells_matches_grid_derivation() {
        let cells = vec![1, 1, 0, 1, 1];
        let from_buf = derive_from_cells(5, 1, &cells).unwrap();

        let grid = Grid::from_cells(5, 1, cells).unwrap();
        assert_eq!(from_buf, derive_clues(&grid));
        assert_eq!(from_buf.rows, vec![vec![2, 2]]);
        assert_eq!(from_buf.cols, vec![vec![1], vec![1], vec![], vec![1], vec![1]]);
    }
}
