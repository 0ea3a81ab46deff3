//! Shared helpers for integration tests

#![allow(dead_code)]

use caret::{Editor, EditorConfig};

/// Config with the system clipboard disabled so tests stay hermetic
pub fn test_config() -> EditorConfig {
    EditorConfig {
        use_global_buffer: false,
        ..EditorConfig::default()
    }
}

/// Editor with `text` loaded, an 80x25 viewport and one cursor at `(x, y)`
pub fn test_editor(text: &str, x: usize, y: usize) -> Editor {
    let mut editor = Editor::new(test_config());
    editor.set_data(text, "\n");
    editor.set_viewport_size(80, 25);
    editor.set_cursor(x, y);
    editor
}
