//! The document: an ordered, never-empty list of lines

use crate::model::line::Line;

/// The text buffer being edited.
///
/// A document always contains at least one line; a freshly created or fully
/// cleared document holds a single empty line. All coordinates are
/// `(column, row)` character positions. Out-of-range reads return empty
/// defaults and out-of-range mutations are silent no-ops, so callers do not
/// carry bounds checks.
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            lines: vec![Line::empty()],
        }
    }

    pub fn from_text(text: &str, eol: &str) -> Self {
        let mut doc = Self::new();
        doc.set_text(text, eol);
        doc
    }

    /// Replace the whole buffer with `text` split on `eol`
    pub fn set_text(&mut self, text: &str, eol: &str) {
        self.lines = text.split(eol).map(Line::new).collect();
        if self.lines.is_empty() {
            self.lines.push(Line::empty());
        }
    }

    /// Join all lines back into a single string with `eol` separators
    pub fn to_text(&self, eol: &str) -> String {
        self.lines
            .iter()
            .map(|l| l.text())
            .collect::<Vec<_>>()
            .join(eol)
    }

    // === Reads ===

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, y: usize) -> Option<&Line> {
        self.lines.get(y)
    }

    pub fn line_mut(&mut self, y: usize) -> Option<&mut Line> {
        self.lines.get_mut(y)
    }

    /// Text of row `y`, or `""` when out of range
    pub fn line_text(&self, y: usize) -> &str {
        self.lines.get(y).map(|l| l.text()).unwrap_or("")
    }

    /// Character length of row `y`, or 0 when out of range
    pub fn line_length(&self, y: usize) -> usize {
        self.lines.get(y).map(|l| l.len()).unwrap_or(0)
    }

    /// Snapshot of all line texts
    pub fn contents(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.text().to_string()).collect()
    }

    // === Mutations ===

    /// Insert a new line at row `y` (clamped to the end)
    pub fn insert_line(&mut self, y: usize, line: Line) {
        let at = y.min(self.lines.len());
        self.lines.insert(at, line);
    }

    /// Remove row `y`. Refuses to remove the last remaining line.
    pub fn remove_line(&mut self, y: usize) -> Option<Line> {
        if self.lines.len() > 1 && y < self.lines.len() {
            Some(self.lines.remove(y))
        } else {
            None
        }
    }

    pub fn set_line_text(&mut self, y: usize, text: impl Into<String>) {
        if let Some(line) = self.lines.get_mut(y) {
            line.set_text(text);
        }
    }

    pub fn insert_text(&mut self, y: usize, col: usize, text: &str) {
        if let Some(line) = self.lines.get_mut(y) {
            line.insert_text(col, text);
        }
    }

    pub fn remove_char(&mut self, y: usize, col: usize) -> Option<char> {
        self.lines.get_mut(y).and_then(|l| l.remove_char(col))
    }

    pub fn remove_range(&mut self, y: usize, from: usize, to: usize) {
        if let Some(line) = self.lines.get_mut(y) {
            line.remove_range(from, to);
        }
    }

    /// Split row `y` at column `col`, returning the tail that moved to the
    /// new row `y + 1`
    pub fn split_line(&mut self, y: usize, col: usize) -> String {
        let tail = match self.lines.get_mut(y) {
            Some(line) => line.split_off_text(col),
            None => return String::new(),
        };
        self.lines.insert(y + 1, Line::new(tail.clone()));
        tail
    }

    /// Merge row `y` into row `y - 1`, returning the length of the surviving
    /// prefix (the previous line's former length)
    pub fn join_with_previous(&mut self, y: usize) -> usize {
        if y == 0 || y >= self.lines.len() {
            return 0;
        }
        let removed = self.lines.remove(y);
        let prev = &mut self.lines[y - 1];
        let prefix_len = prev.len();
        prev.push_text(removed.text());
        prefix_len
    }

    pub fn swap_lines(&mut self, a: usize, b: usize) {
        if a < self.lines.len() && b < self.lines.len() {
            self.lines.swap(a, b);
        }
    }

    /// Restore the buffer from a history snapshot
    pub fn restore(&mut self, texts: &[String]) {
        self.lines = texts.iter().map(Line::new).collect();
        if self.lines.is_empty() {
            self.lines.push(Line::empty());
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
