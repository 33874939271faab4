//! Printable puzzle table layout
//!
//! Precomputes what the frontend table renderer needs: row header labels,
//! column header digit stacks, heavy separator positions every 5 lines,
//! and the width of the left header column sized to the longest row label.

use serde::{Deserialize, Serialize};

use super::Clues;

/// Heavy gridline every this many rows/columns.
pub const SEPARATOR_INTERVAL: usize = 5;

// Left header column sizing: px per label character plus fixed padding.
const LABEL_CHAR_PX: usize = 10;
const LABEL_PAD_PX: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableLayout {
    /// Row clue numbers joined with single spaces, one label per row.
    pub row_labels: Vec<String>,
    /// Column clue digits rendered as a top-to-bottom stack, one per column.
    pub col_labels: Vec<Vec<String>>,
    /// Width of the left header column in px.
    pub left_column_px: usize,
    pub separator_interval: usize,
}

impl TableLayout {
    pub fn new(clues: &Clues) -> Self {
        let row_labels: Vec<String> = clues.rows.iter().map(|runs| join_runs(runs)).collect();
        let col_labels = clues
            .cols
            .iter()
            .map(|runs| runs.iter().map(|n| n.to_string()).collect())
            .collect();

        let longest = row_labels.iter().map(|label| label.len()).max().unwrap_or(0);

        Self {
            row_labels,
            col_labels,
            left_column_px: longest * LABEL_CHAR_PX + LABEL_PAD_PX,
            separator_interval: SEPARATOR_INTERVAL,
        }
    }

    /// True when a heavy separator is drawn before interior row/column `idx`
    /// (the outer table border already covers index 0).
    pub fn heavy_line_before(idx: usize) -> bool {
        idx != 0 && idx % SEPARATOR_INTERVAL == 0
    }
}

fn join_runs(runs: &[u32]) -> String {
    runs.iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_join_runs_with_spaces() {
        let clues = Clues {
            rows: vec![vec![2, 2], vec![], vec![10]],
            cols: vec![vec![3], vec![]],
        };

        let layout = TableLayout::new(&clues);
        assert_eq!(layout.row_labels, vec!["2 2", "", "10"]);
        assert_eq!(
            layout.col_labels,
            vec![vec!["3".to_string()], Vec::<String>::new()]
        );
    }

    #[test]
    fn left_column_tracks_longest_label() {
        let clues = Clues {
            rows: vec![vec![1, 1, 1], vec![2]],
            cols: vec![],
        };

        // "1 1 1" is 5 chars: 5 * 10 + 20.
        let layout = TableLayout::new(&clues);
        assert_eq!(layout.left_column_px, 70);
    }

    #[test]
    fn empty_clues_still_get_padding_width() {
        let clues = Clues { rows: vec![], cols: vec![] };
        let layout = TableLayout::new(&clues);
        assert_eq!(layout.left_column_px, 20);
    }

    #[test]
    fn heavy_lines_fall_on_multiples_of_five() {
        assert!(!TableLayout::heavy_line_before(0));
        assert!(!TableLayout::heavy_line_before(4));
        assert!(TableLayout::heavy_line_before(5));
        assert!(!TableLayout::heavy_line_before(7));
        assert!(TableLayout::heavy_line_before(10));
    }
}
