//! Search: spawning cursors, jumping, regex mode, term derivation

mod common;

use common::test_editor;

#[test]
fn test_find_adds_cursor_at_next_occurrence() {
    let mut editor = test_editor("foo bar foo", 0, 0);

    assert!(editor.find("foo", false));
    assert_eq!(
        editor.cursor_positions(),
        vec![(0, 0), (8, 0)],
        "cursor already on a match stays, the next match gains one"
    );
    assert_eq!(editor.last_find(), "foo");
}

#[test]
fn test_find_jumps_lone_cursor_to_first_match() {
    let mut editor = test_editor("bar foo", 0, 0);

    assert!(editor.find("foo", false));
    assert_eq!(editor.cursor_positions(), vec![(4, 0)]);
}

#[test]
fn test_find_without_match_changes_nothing() {
    let mut editor = test_editor("abc", 1, 0);

    assert!(!editor.find("zzz", false));
    assert_eq!(editor.cursor_positions(), vec![(1, 0)]);
    assert_eq!(editor.last_find(), "");
}

#[test]
fn test_find_never_wraps() {
    let mut editor = test_editor("foo\nbar", 0, 1);
    assert!(
        !editor.find("foo", false),
        "matches above the cursor are out of reach"
    );
}

#[test]
fn test_find_scans_from_bottommost_cursor() {
    let mut editor = test_editor("x\nx\nx", 0, 0);
    editor.add_cursor(0, 1);

    assert!(editor.find("x", false));
    let mut positions = editor.cursor_positions();
    positions.sort();
    assert_eq!(positions, vec![(0, 0), (0, 1), (0, 2)]);
}

#[test]
fn test_find_all_spawns_on_every_occurrence() {
    let mut editor = test_editor("a b a b a", 0, 0);

    assert!(editor.find("a", true));
    assert_eq!(editor.cursor_positions(), vec![(0, 0), (4, 0), (8, 0)]);
}

#[test]
fn test_find_spans_lines() {
    let mut editor = test_editor("foo\nnothing\nfoo", 0, 0);

    assert!(editor.find("foo", false));
    assert_eq!(editor.cursor_positions(), vec![(0, 0), (0, 2)]);
}

#[test]
fn test_find_next_derives_term_under_cursor() {
    let mut editor = test_editor("hello hello", 0, 0);

    assert!(editor.run_operation("find_next"));
    assert_eq!(editor.cursor_positions(), vec![(0, 0), (6, 0)]);
    assert_eq!(editor.last_find(), "hello");
}

#[test]
fn test_find_next_reuses_last_term() {
    let mut editor = test_editor("x\nx\nx", 0, 0);
    editor.find("x", false);
    assert_eq!(editor.cursor_positions(), vec![(0, 0), (0, 1)]);

    editor.run_operation("find_next");
    assert_eq!(editor.cursor_positions(), vec![(0, 0), (0, 1), (0, 2)]);
}

#[test]
fn test_find_collects_whole_row_before_stopping() {
    let mut editor = test_editor("x x x\nx", 0, 0);

    assert!(editor.find("x", false));
    assert_eq!(
        editor.cursor_positions(),
        vec![(0, 0), (2, 0), (4, 0)],
        "the first row with a new match is taken whole, the next row is not"
    );
}

#[test]
fn test_derived_term_falls_back_to_single_char() {
    let mut editor = test_editor("+ a + b", 0, 0);

    assert!(editor.run_operation("find_next"));
    assert_eq!(editor.last_find(), "+");
    assert_eq!(editor.cursor_positions(), vec![(0, 0), (4, 0)]);
}

#[test]
fn test_regex_mode_matches_patterns() {
    let mut editor = test_editor("bar ber bor", 0, 0);
    editor.config_mut().regex_find = true;

    assert!(editor.find("b.r", true));
    assert_eq!(editor.cursor_positions(), vec![(0, 0), (4, 0), (8, 0)]);
}

#[test]
fn test_invalid_regex_falls_back_to_literal() {
    let mut editor = test_editor("a ( b", 0, 0);
    editor.config_mut().regex_find = true;

    assert!(editor.find("(", false));
    assert_eq!(editor.cursor_positions(), vec![(2, 0)]);
}

#[test]
fn test_find_is_literal_by_default() {
    let mut editor = test_editor("abc a.c", 0, 0);

    assert!(editor.find("a.c", false));
    assert_eq!(editor.cursor_positions(), vec![(4, 0)]);
}

#[test]
fn test_find_matches_do_not_overlap() {
    let mut editor = test_editor("aaaa", 0, 0);

    assert!(editor.find("aa", true));
    assert_eq!(editor.cursor_positions(), vec![(0, 0), (2, 0)]);
}
