//! The editor: document, cursors, viewport, history and dispatch
//!
//! [`Editor`] is the single entry point for hosts. Operations are atomic:
//! each one mutates the buffer, re-derives valid cursor positions through
//! the normalization pass, scrolls the viewport to the primary cursor and
//! records an undo checkpoint before returning.

mod edit;
mod find;
mod movement;
mod ops;

pub use ops::{Operation, OperationRegistry};

use crate::clipboard::Clipboard;
use crate::config::EditorConfig;
use crate::history::{EditState, History};
use crate::model::{Cursor, CursorSet, Document, Viewport};
use crate::util::add_signed;

pub struct Editor {
    pub(crate) document: Document,
    pub(crate) cursors: CursorSet,
    pub(crate) viewport: Viewport,
    pub(crate) history: History,
    pub(crate) config: EditorConfig,
    pub(crate) clipboard: Clipboard,
    pub(crate) last_find: String,
    pub(crate) eol: String,
    registry: OperationRegistry,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        let mut editor = Self {
            document: Document::new(),
            cursors: CursorSet::new(),
            viewport: Viewport::default(),
            history: History::new(config.max_history),
            clipboard: Clipboard::new(config.use_global_buffer),
            config,
            last_find: String::new(),
            eol: "\n".to_string(),
            registry: OperationRegistry::with_defaults(),
        };
        let initial = editor.snapshot();
        editor.history.reset(initial);
        editor
    }

    /// Replace the buffer contents, resetting cursors, scroll and history
    pub fn set_data(&mut self, text: &str, eol: &str) {
        self.eol = eol.to_string();
        self.document.set_text(text, eol);
        self.cursors.replace(vec![Cursor::new()]);
        self.viewport.y_scroll = 0;
        self.viewport.x_scroll = 0;
        self.last_find.clear();
        let initial = self.snapshot();
        self.history.reset(initial);
    }

    /// The buffer as a single string, joined with the document's EOL
    pub fn get_data(&self) -> String {
        self.document.to_text(&self.eol)
    }

    pub fn set_viewport_size(&mut self, width: usize, height: usize) {
        self.viewport.resize(width, height);
    }

    /// Dispatch an operation by name. Unknown names are logged and ignored.
    pub fn run_operation(&mut self, name: &str) -> bool {
        match self.registry.get(name) {
            Some(op) => op(self),
            None => {
                tracing::warn!("Unknown operation: {}", name);
                false
            }
        }
    }

    // === Cursor bookkeeping ===

    /// Run the normalization pass and bring the primary cursor into view.
    ///
    /// Every operation ends here: the optional delta is applied uniformly,
    /// cursors are clamped into the document, desired columns restored and
    /// duplicates merged.
    pub fn move_cursors(&mut self, delta: Option<(isize, isize)>) {
        self.cursors.normalize(&self.document, delta);
        let primary = *self.cursors.primary();
        self.viewport.scroll_to(primary.x, primary.y);
    }

    /// Shift cursors on row `y` sitting right of column `col`
    pub(crate) fn move_x_cursors(&mut self, y: usize, col: usize, delta: isize) {
        for cursor in self.cursors.iter_mut() {
            if cursor.y == y && cursor.x > col {
                let x = add_signed(cursor.x, delta);
                cursor.set_x(x);
            }
        }
    }

    /// Shift cursors on rows strictly below `after`
    pub(crate) fn move_y_cursors(&mut self, after: usize, delta: isize) {
        for cursor in self.cursors.iter_mut() {
            if cursor.y > after {
                cursor.y = add_signed(cursor.y, delta);
            }
        }
    }

    /// Collapse to a single cursor at `(x, y)`, clamped into the document
    pub fn set_cursor(&mut self, x: usize, y: usize) {
        self.cursors.replace(vec![Cursor::at(x, y)]);
        self.move_cursors(None);
    }

    /// Add a cursor at `(x, y)` if the position is free
    pub fn add_cursor(&mut self, x: usize, y: usize) -> bool {
        let added = self.cursors.add(Cursor::at(x, y));
        self.move_cursors(None);
        added
    }

    /// Collapse to a single cursor at the start of the given row (clamped)
    pub fn go_to_line(&mut self, line: isize) -> bool {
        let last = self.document.line_count() - 1;
        let row = if line < 0 { 0 } else { (line as usize).min(last) };
        self.cursors.replace(vec![Cursor::at(0, row)]);
        self.move_cursors(None);
        true
    }

    // === History ===

    pub(crate) fn snapshot(&self) -> EditState {
        EditState {
            cursors: self.cursors.positions(),
            lines: self.document.contents(),
            y_scroll: self.viewport.y_scroll,
            x_scroll: self.viewport.x_scroll,
            last_find: self.last_find.clone(),
        }
    }

    /// Record an undo checkpoint for the named action kind
    pub(crate) fn checkpoint(&mut self, kind: &'static str) {
        let state = self.snapshot();
        self.history.store_action(kind, state);
    }

    fn restore_state(&mut self, state: &EditState) {
        self.document.restore(&state.lines);
        self.cursors.replace(
            state
                .cursors
                .iter()
                .map(|&(x, y)| Cursor::at(x, y))
                .collect(),
        );
        self.viewport.y_scroll = state.y_scroll;
        self.viewport.x_scroll = state.x_scroll;
        self.last_find = state.last_find.clone();
        // Snapshot positions were valid when taken; the pass only re-derives
        // desired columns and merges.
        self.cursors.normalize(&self.document, None);
    }

    pub fn undo(&mut self) -> bool {
        let state = self.history.undo().cloned();
        match state {
            Some(s) => {
                self.restore_state(&s);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        let state = self.history.redo().cloned();
        match state {
            Some(s) => {
                self.restore_state(&s);
                true
            }
            None => false,
        }
    }

    // === Accessors ===

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursors(&self) -> &CursorSet {
        &self.cursors
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EditorConfig {
        &mut self.config
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn last_find(&self) -> &str {
        &self.last_find
    }

    pub fn line_count(&self) -> usize {
        self.document.line_count()
    }

    pub fn cursor_positions(&self) -> Vec<(usize, usize)> {
        self.cursors.positions()
    }

    pub fn buffer_contents(&self) -> Vec<String> {
        self.document.contents()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
