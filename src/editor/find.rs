//! Search: forward scan, cursor spawning, term derivation
//!
//! Searching never wraps: the scan starts at the bottommost cursor and runs
//! to the end of the buffer. Matches already holding a cursor are skipped,
//! so repeating a search walks forward through the remaining occurrences.

use regex::Regex;

use crate::editor::Editor;
use crate::model::Cursor;
use crate::util::is_term_char;

/// A compiled search term.
///
/// In regex mode an invalid pattern silently degrades to a literal search,
/// so a half-typed pattern still finds something.
enum Matcher {
    Literal(String),
    Pattern(Regex),
}

impl Matcher {
    fn compile(term: &str, regex_mode: bool) -> Self {
        if regex_mode {
            match Regex::new(term) {
                Ok(re) => return Matcher::Pattern(re),
                Err(e) => {
                    tracing::debug!("Invalid pattern {:?}, searching literally: {}", term, e);
                }
            }
        }
        Matcher::Literal(term.to_string())
    }

    /// Non-overlapping match start columns in `line`, at or after `from_col`
    fn match_columns(&self, line: &str, from_col: usize) -> Vec<usize> {
        let start_byte = line
            .char_indices()
            .nth(from_col)
            .map(|(i, _)| i)
            .unwrap_or(line.len());
        let mut cols = Vec::new();
        match self {
            Matcher::Literal(term) => {
                if term.is_empty() {
                    return cols;
                }
                let mut at = start_byte;
                while let Some(pos) = line[at..].find(term.as_str()) {
                    let abs = at + pos;
                    cols.push(line[..abs].chars().count());
                    at = abs + term.len();
                }
            }
            Matcher::Pattern(re) => {
                for m in re.find_iter(&line[start_byte..]) {
                    // Zero-width matches have no column to land a cursor on
                    if m.start() == m.end() {
                        continue;
                    }
                    let abs = start_byte + m.start();
                    cols.push(line[..abs].chars().count());
                }
            }
        }
        cols
    }
}

impl Editor {
    /// Search forward from the bottommost cursor.
    ///
    /// With `find_all` every remaining occurrence gets a cursor; otherwise
    /// the scan stops after the first row yielding a new one. A lone cursor
    /// sitting somewhere other than the first match jumps instead of
    /// spawning. Returns false, leaving all state untouched, when nothing
    /// new is found.
    pub fn find(&mut self, term: &str, find_all: bool) -> bool {
        if term.is_empty() {
            return false;
        }
        let matcher = Matcher::compile(term, self.config.regex_find);
        let origin = self.cursors.last();
        let lone = self.cursors.len() == 1;

        let mut first_match: Option<(usize, usize)> = None;
        let mut found: Vec<(usize, usize)> = Vec::new();
        for y in origin.y..self.document.line_count() {
            let from = if y == origin.y { origin.x } else { 0 };
            let line = self.document.line_text(y);
            let mut new_on_row = false;
            for col in matcher.match_columns(line, from) {
                if first_match.is_none() {
                    first_match = Some((col, y));
                }
                if self.cursors.contains(col, y) {
                    continue;
                }
                found.push((col, y));
                new_on_row = true;
            }
            if !find_all && new_on_row {
                break;
            }
        }
        if found.is_empty() {
            tracing::debug!(term, "search found nothing new");
            return false;
        }
        tracing::debug!(term, matches = found.len(), "search succeeded");

        if lone && first_match != Some(origin.tuple()) {
            // Jump: the lone cursor is replaced by the matches
            self.cursors
                .replace(found.iter().map(|&(x, y)| Cursor::at(x, y)).collect());
        } else {
            for &(x, y) in &found {
                self.cursors.add(Cursor::at(x, y));
            }
        }

        let focus = *found.last().unwrap_or(&(origin.x, origin.y));
        self.last_find = term.to_string();
        self.move_cursors(None);
        self.viewport.scroll_to(focus.0, focus.1);
        self.checkpoint("find");
        true
    }

    /// Repeat the last search, or search for the word under the primary
    /// cursor when there is none
    pub fn find_next(&mut self) -> bool {
        let term = if self.last_find.is_empty() {
            self.derive_term()
        } else {
            self.last_find.clone()
        };
        self.find(&term, false)
    }

    /// Spawn cursors on every remaining occurrence of the last search term
    /// (or the word under the primary cursor)
    pub fn find_all(&mut self) -> bool {
        let term = if self.last_find.is_empty() {
            self.derive_term()
        } else {
            self.last_find.clone()
        };
        self.find(&term, true)
    }

    /// The word-like run starting at the primary cursor, or the single next
    /// character when the cursor sits on punctuation
    fn derive_term(&self) -> String {
        let c = *self.cursors.primary();
        let chars: Vec<char> = self.document.line_text(c.y).chars().collect();
        if c.x >= chars.len() {
            return String::new();
        }
        let run: String = chars[c.x..]
            .iter()
            .take_while(|&&ch| is_term_char(ch))
            .collect();
        if run.is_empty() {
            chars[c.x].to_string()
        } else {
            run
        }
    }
}
