//! Operation registry
//!
//! The host resolves key and mouse events to operation names; the registry
//! maps each name to the function implementing it. Parameterized actions
//! (typing a character, searching for a term, jumping to a line) stay
//! outside the registry as plain [`Editor`] methods, since a bare name
//! cannot carry their argument.

use std::collections::HashMap;

use crate::editor::Editor;

/// An editor operation. Acts on the whole editor state and reports whether
/// anything happened.
pub type Operation = fn(&mut Editor) -> bool;

/// Name-to-operation dispatch table, built once at startup.
pub struct OperationRegistry {
    ops: HashMap<&'static str, Operation>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self {
            ops: HashMap::new(),
        }
    }

    /// A registry holding every built-in operation
    pub fn with_defaults() -> Self {
        let mut r = Self::new();

        // Movement
        r.register("arrow_up", Editor::arrow_up);
        r.register("arrow_down", Editor::arrow_down);
        r.register("arrow_left", Editor::arrow_left);
        r.register("arrow_right", Editor::arrow_right);
        r.register("jump_left", Editor::jump_left);
        r.register("jump_right", Editor::jump_right);
        r.register("home", Editor::home);
        r.register("end", Editor::end);
        r.register("page_up", Editor::page_up);
        r.register("page_down", Editor::page_down);

        // Cursor management
        r.register("new_cursor_up", Editor::new_cursor_up);
        r.register("new_cursor_down", Editor::new_cursor_down);
        r.register("new_cursor_left", Editor::new_cursor_left);
        r.register("new_cursor_right", Editor::new_cursor_right);
        r.register("single_cursor", Editor::single_cursor);

        // Editing
        r.register("enter", Editor::enter);
        r.register("backspace", Editor::backspace);
        r.register("delete", Editor::delete);
        r.register("tab", Editor::tab);
        r.register("untab", Editor::untab);
        r.register("duplicate_line", Editor::duplicate_line);
        r.register("push_up", Editor::push_up);
        r.register("push_down", Editor::push_down);
        r.register("toggle_comment", Editor::toggle_comment);
        r.register("uppercase", Editor::uppercase);
        r.register("lowercase", Editor::lowercase);

        // Clipboard
        r.register("cut", Editor::cut);
        r.register("copy", Editor::copy);
        r.register("insert", Editor::insert);

        // History
        r.register("undo", Editor::undo);
        r.register("redo", Editor::redo);

        // Search
        r.register("find_next", Editor::find_next);
        r.register("find_all", Editor::find_all);

        r
    }

    pub fn register(&mut self, name: &'static str, op: Operation) {
        self.ops.insert(name, op);
    }

    pub fn get(&self, name: &str) -> Option<Operation> {
        self.ops.get(name).copied()
    }

    /// Registered operation names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.ops.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
