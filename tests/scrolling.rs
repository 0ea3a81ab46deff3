//! Viewport bookkeeping: minimal reveal, primary-cursor tracking

mod common;

use common::test_editor;

#[test]
fn test_viewport_follows_cursor_down() {
    let text = vec!["x"; 100].join("\n");
    let mut editor = test_editor(&text, 0, 0);
    editor.set_viewport_size(80, 10);

    editor.set_cursor(0, 30);
    assert_eq!(
        editor.viewport().y_scroll,
        21,
        "row 30 becomes the last visible row"
    );
}

#[test]
fn test_viewport_follows_cursor_up_minimally() {
    let text = vec!["x"; 100].join("\n");
    let mut editor = test_editor(&text, 0, 0);
    editor.set_viewport_size(80, 10);

    editor.set_cursor(0, 50);
    editor.set_cursor(0, 40);
    assert_eq!(editor.viewport().y_scroll, 40, "target becomes the top row");
}

#[test]
fn test_viewport_does_not_move_while_cursor_visible() {
    let text = vec!["x"; 100].join("\n");
    let mut editor = test_editor(&text, 0, 0);
    editor.set_viewport_size(80, 10);

    editor.set_cursor(0, 30);
    let scrolled = editor.viewport().y_scroll;
    editor.run_operation("arrow_up");
    assert_eq!(
        editor.viewport().y_scroll,
        scrolled,
        "moving within the window must not scroll"
    );
}

#[test]
fn test_horizontal_scroll_reveals_cursor() {
    let mut editor = test_editor(&"x".repeat(200), 0, 0);
    editor.set_viewport_size(10, 5);

    editor.set_cursor(50, 0);
    assert_eq!(editor.viewport().x_scroll, 41);

    editor.set_cursor(5, 0);
    assert_eq!(editor.viewport().x_scroll, 5);
}

#[test]
fn test_viewport_tracks_primary_cursor_only() {
    let text = vec!["x"; 100].join("\n");
    let mut editor = test_editor(&text, 0, 0);
    editor.set_viewport_size(80, 10);

    editor.add_cursor(0, 60);
    assert_eq!(
        editor.viewport().y_scroll,
        0,
        "a secondary cursor off screen does not scroll"
    );
}

#[test]
fn test_undo_restores_scroll_offsets() {
    let text = vec!["x"; 100].join("\n");
    let mut editor = test_editor(&text, 0, 0);
    editor.set_viewport_size(80, 10);

    editor.set_cursor(0, 50);
    editor.type_char('y');
    assert!(editor.viewport().y_scroll > 0);

    editor.run_operation("undo");
    assert_eq!(
        editor.viewport().y_scroll,
        0,
        "the initial checkpoint was taken before any scrolling"
    );
}

#[test]
fn test_find_scrolls_to_the_match() {
    let mut lines = vec!["x".to_string(); 100];
    lines[80] = "needle".to_string();
    let mut editor = test_editor(&lines.join("\n"), 0, 0);
    editor.set_viewport_size(80, 10);

    assert!(editor.find("needle", false));
    assert_eq!(editor.cursor_positions(), vec![(0, 80)]);
    assert_eq!(editor.viewport().y_scroll, 71);
}
