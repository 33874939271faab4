use hanjie_engine::{Clues, Editor, TableLayout};

#[test]
fn editor_smoke_paint_and_derive() {
    let mut editor = Editor::new(15, 15);
    assert_eq!(editor.width(), 15);
    assert_eq!(editor.height(), 15);
    assert_eq!(editor.cells_len(), 225);

    // Paint a 15-long bar across row 0, then knock a hole in it.
    editor.begin_stroke(0, 0, 0);
    for x in 1..15 {
        editor.stroke_to(x, 0);
    }
    editor.end_stroke();
    editor.begin_stroke(7, 0, 2);
    editor.end_stroke();

    assert_eq!(editor.filled_count(), 14);

    let clues: Clues = serde_json::from_str(&editor.clues_json().unwrap()).unwrap();
    assert_eq!(clues.rows[0], vec![7, 7]);
    assert!(clues.rows[1..].iter().all(|r| r.is_empty()));

    let layout: TableLayout =
        serde_json::from_str(&editor.table_layout_json().unwrap()).unwrap();
    assert_eq!(layout.row_labels[0], "7 7");
    assert_eq!(layout.separator_interval, 5);
    // "7 7" is the longest label: 3 * 10 + 20.
    assert_eq!(layout.left_column_px, 50);
    assert_eq!(layout.col_labels.len(), 15);
    assert_eq!(layout.col_labels[0], vec!["1"]);
    assert!(layout.col_labels[7].is_empty());
}

#[test]
fn editor_smoke_snapshot_roundtrip() {
    let mut editor = Editor::new(10, 10);
    editor.set_seed(2024);
    editor.scramble();
    let before = editor.clues_json().unwrap();

    let snapshot = editor.snapshot_json().unwrap();
    let mut restored = Editor::new(3, 3);
    restored.load_snapshot_json(snapshot).unwrap();

    assert_eq!(restored.width(), 10);
    assert_eq!(restored.filled_count(), editor.filled_count());
    assert_eq!(restored.clues_json().unwrap(), before);
}
