//! A single line of text plus transient per-line render metadata

use std::any::Any;
use std::fmt;

/// One line of the document.
///
/// Owns the text plus two view-layer slots: `x_scroll`, the per-line
/// horizontal scroll used only by the render layer, and `render_state`, an
/// opaque attachment point for collaborators (syntax highlighter, linter).
/// The render state is dropped whenever the text changes, so a collaborator
/// can never observe annotations for text that no longer exists.
///
/// Columns are character offsets, not byte offsets.
pub struct Line {
    text: String,
    /// Horizontal scroll position, owned by the view layer
    pub x_scroll: usize,
    render_state: Option<Box<dyn Any>>,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x_scroll: 0,
            render_state: None,
        }
    }

    pub fn empty() -> Self {
        Self::new("")
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters (cursor columns)
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text, invalidating any attached render state
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.render_state = None;
    }

    /// Insert `text` at character column `col` (clamped to the end)
    pub fn insert_text(&mut self, col: usize, text: &str) {
        let at = self.byte_at(col);
        self.text.insert_str(at, text);
        self.render_state = None;
    }

    /// Append `text` to the end of the line
    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
        self.render_state = None;
    }

    /// Remove and return the character at column `col`
    pub fn remove_char(&mut self, col: usize) -> Option<char> {
        let at = self.byte_at(col);
        if at >= self.text.len() {
            return None;
        }
        let ch = self.text.remove(at);
        self.render_state = None;
        Some(ch)
    }

    /// Remove the character range `[from, to)` (columns, clamped)
    pub fn remove_range(&mut self, from: usize, to: usize) {
        let a = self.byte_at(from);
        let b = self.byte_at(to);
        if a < b {
            self.text.replace_range(a..b, "");
            self.render_state = None;
        }
    }

    /// Split the line at column `col`, keeping the head and returning the tail
    pub fn split_off_text(&mut self, col: usize) -> String {
        let at = self.byte_at(col);
        let tail = self.text.split_off(at);
        self.render_state = None;
        tail
    }

    /// Attach collaborator state (highlight tokens, lint results, ...)
    pub fn set_render_state(&mut self, state: Box<dyn Any>) {
        self.render_state = Some(state);
    }

    pub fn render_state(&self) -> Option<&dyn Any> {
        self.render_state.as_deref()
    }

    pub fn take_render_state(&mut self) -> Option<Box<dyn Any>> {
        self.render_state.take()
    }

    /// Byte offset of character column `col`, clamped to the end
    fn byte_at(&self, col: usize) -> usize {
        self.text
            .char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::empty()
    }
}

// Manual Clone: the render state belongs to whichever line it was attached
// to; a copied line starts without one.
impl Clone for Line {
    fn clone(&self) -> Self {
        Self {
            text: self.text.clone(),
            x_scroll: self.x_scroll,
            render_state: None,
        }
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Line")
            .field("text", &self.text)
            .field("x_scroll", &self.x_scroll)
            .field("render_state", &self.render_state.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_counts_characters_not_bytes() {
        let line = Line::new("héllo");
        assert_eq!(line.len(), 5);
    }

    #[test]
    fn test_insert_text_at_column() {
        let mut line = Line::new("ac");
        line.insert_text(1, "b");
        assert_eq!(line.text(), "abc");
    }

    #[test]
    fn test_insert_past_end_clamps() {
        let mut line = Line::new("ab");
        line.insert_text(99, "c");
        assert_eq!(line.text(), "abc");
    }

    #[test]
    fn test_remove_char() {
        let mut line = Line::new("abc");
        assert_eq!(line.remove_char(1), Some('b'));
        assert_eq!(line.text(), "ac");
        assert_eq!(line.remove_char(5), None);
    }

    #[test]
    fn test_split_off_text() {
        let mut line = Line::new("abcdef");
        let tail = line.split_off_text(3);
        assert_eq!(line.text(), "abc");
        assert_eq!(tail, "def");
    }

    #[test]
    fn test_text_change_resets_render_state() {
        let mut line = Line::new("abc");
        line.set_render_state(Box::new(42u32));
        assert!(line.render_state().is_some());

        line.insert_text(0, "x");
        assert!(line.render_state().is_none());

        line.set_render_state(Box::new(42u32));
        line.remove_char(0);
        assert!(line.render_state().is_none());
    }

    #[test]
    fn test_clone_drops_render_state() {
        let mut line = Line::new("abc");
        line.set_render_state(Box::new("tokens".to_string()));
        let copy = line.clone();
        assert_eq!(copy.text(), "abc");
        assert!(copy.render_state().is_none());
    }
}
