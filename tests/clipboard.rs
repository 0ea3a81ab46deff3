//! Cut, copy and paste through the local buffer

mod common;

use common::test_editor;

#[test]
fn test_copy_collects_cursored_rows_top_to_bottom() {
    let mut editor = test_editor("aaa\nbbb\nccc", 0, 2);
    editor.add_cursor(0, 0);

    editor.run_operation("copy");
    assert_eq!(editor.clipboard().get(), vec!["aaa", "ccc"]);
    assert_eq!(
        editor.buffer_contents(),
        vec!["aaa", "bbb", "ccc"],
        "copy must not mutate the buffer"
    );
}

#[test]
fn test_cut_removes_cursored_rows() {
    let mut editor = test_editor("aaa\nbbb\nccc", 0, 1);
    editor.run_operation("cut");
    assert_eq!(editor.clipboard().get(), vec!["bbb"]);
    assert_eq!(editor.buffer_contents(), vec!["aaa", "ccc"]);
    assert_eq!(editor.cursor_positions(), vec![(0, 1)]);
}

#[test]
fn test_cut_every_line_leaves_one_empty_line() {
    let mut editor = test_editor("x\ny\nz", 0, 0);
    editor.add_cursor(0, 1);
    editor.add_cursor(0, 2);

    editor.run_operation("cut");
    assert_eq!(
        editor.clipboard().get(),
        vec!["x", "y", "z"],
        "buffer entries keep document order"
    );
    assert_eq!(editor.buffer_contents(), vec![""]);
    assert_eq!(editor.cursor_positions(), vec![(0, 0)]);
}

#[test]
fn test_paste_multi_line_buffer_above_lone_cursor() {
    let mut editor = test_editor("one\ntwo\ntarget", 0, 0);
    editor.add_cursor(0, 1);
    editor.run_operation("copy");

    editor.set_cursor(3, 2);
    editor.run_operation("insert");
    assert_eq!(
        editor.buffer_contents(),
        vec!["one", "two", "one", "two", "target"]
    );
    assert_eq!(
        editor.cursor_positions(),
        vec![(3, 4)],
        "cursor follows its line down"
    );
}

#[test]
fn test_paste_single_entry_at_every_cursor() {
    let mut editor = test_editor("--\nabcd", 0, 0);
    editor.run_operation("copy");

    editor.set_cursor(1, 1);
    editor.add_cursor(3, 1);
    editor.run_operation("insert");
    assert_eq!(editor.buffer_contents(), vec!["--", "a--bc--d"]);
    assert_eq!(editor.cursor_positions(), vec![(3, 1), (7, 1)]);
}

#[test]
fn test_paste_cycles_entries_across_cursors() {
    let mut editor = test_editor("A\nB\nc d e", 0, 0);
    editor.add_cursor(0, 1);
    editor.run_operation("copy");

    editor.set_cursor(0, 2);
    editor.add_cursor(2, 2);
    editor.add_cursor(4, 2);
    editor.run_operation("insert");
    assert_eq!(editor.buffer_contents(), vec!["A", "B", "Ac Bd Ae"]);
    assert_eq!(
        editor.cursor_positions(),
        vec![(1, 2), (4, 2), (7, 2)],
        "entries deal out in document order, cycling"
    );
}

#[test]
fn test_paste_with_empty_buffer_is_noop() {
    let mut editor = test_editor("abc", 0, 0);
    assert!(!editor.run_operation("insert"));
    assert_eq!(editor.buffer_contents(), vec!["abc"]);
}

#[test]
fn test_cut_then_paste_restores_lines() {
    let mut editor = test_editor("keep\nmove1\nmove2", 0, 1);
    editor.add_cursor(0, 2);

    editor.run_operation("cut");
    assert_eq!(editor.buffer_contents(), vec!["keep"]);

    editor.set_cursor(0, 0);
    editor.run_operation("insert");
    assert_eq!(editor.buffer_contents(), vec!["move1", "move2", "keep"]);
}
