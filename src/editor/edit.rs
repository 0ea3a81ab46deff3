//! Text editing operations
//!
//! Structural edits (enter, backspace, delete) walk cursors bottom-to-top
//! so an edit never shifts the position of a cursor still waiting its turn.
//! Line-wise operations act once per row holding a cursor, no matter how
//! many cursors share it. Every operation ends with the normalization pass
//! and an undo checkpoint.

use crate::editor::Editor;
use crate::model::Line;
use crate::util::leading_whitespace;

impl Editor {
    /// Insert one character at every cursor. `'\n'` routes to [`enter`].
    ///
    /// [`enter`]: Editor::enter
    pub fn type_char(&mut self, ch: char) -> bool {
        if ch == '\n' {
            return self.enter();
        }
        let mut buf = [0u8; 4];
        let text = ch.encode_utf8(&mut buf);
        self.insert_at_all_cursors(text);
        self.move_cursors(None);
        self.checkpoint("type");
        true
    }

    /// Indent: insert a tab's worth of spaces at every cursor
    pub fn tab(&mut self) -> bool {
        let indent = " ".repeat(self.config.tab_width);
        self.insert_at_all_cursors(&indent);
        self.move_cursors(None);
        self.checkpoint("tab");
        true
    }

    /// Dedent: strip up to one tab's worth of leading spaces from every row
    /// holding a cursor
    pub fn untab(&mut self) -> bool {
        let width = self.config.tab_width;
        let mut changed = false;
        for y in self.cursors.rows() {
            let spaces = self
                .document
                .line_text(y)
                .chars()
                .take_while(|&ch| ch == ' ')
                .count()
                .min(width);
            if spaces == 0 {
                continue;
            }
            self.document.remove_range(y, 0, spaces);
            for cursor in self.cursors.iter_mut() {
                if cursor.y == y {
                    let x = cursor.x.saturating_sub(spaces);
                    cursor.set_x(x);
                }
            }
            changed = true;
        }
        self.move_cursors(None);
        if changed {
            self.checkpoint("untab");
        }
        changed
    }

    /// Split the line at every cursor, carrying leading whitespace onto the
    /// new line when auto-indent is on
    pub fn enter(&mut self) -> bool {
        let auto_indent = self.config.auto_indent_newline;
        for i in self.cursors.indices_by_position() {
            let c = self.cursors[i];
            let indent: String = if auto_indent {
                let line = self.document.line_text(c.y);
                let width = leading_whitespace(line).min(c.x);
                line.chars().take(width).collect()
            } else {
                String::new()
            };
            let indent_len = indent.chars().count();

            self.document.split_line(c.y, c.x);
            if !indent.is_empty() {
                self.document.insert_text(c.y + 1, 0, &indent);
            }

            // Rows below the split shift down, then cursors at or right of
            // the split column follow the tail onto the new line.
            self.move_y_cursors(c.y, 1);
            for cursor in self.cursors.iter_mut() {
                if cursor.y == c.y && cursor.x >= c.x {
                    let x = indent_len + (cursor.x - c.x);
                    cursor.set_y(c.y + 1);
                    cursor.set_x(x);
                }
            }
        }
        self.move_cursors(None);
        self.checkpoint("enter");
        true
    }

    /// Delete one character left of every cursor; at column 0 the line is
    /// merged into the previous one. A cursor at the origin is left alone.
    pub fn backspace(&mut self) -> bool {
        let width = self.config.tab_width;
        let unindent = self.config.backspace_unindent && width > 1;
        let mut changed = false;
        for i in self.cursors.indices_by_position() {
            let c = self.cursors[i];
            if c.x == 0 && c.y == 0 {
                continue;
            }
            changed = true;
            if c.x == 0 {
                let prefix = self.document.join_with_previous(c.y);
                for cursor in self.cursors.iter_mut() {
                    if cursor.y == c.y {
                        let x = cursor.x + prefix;
                        cursor.set_y(c.y - 1);
                        cursor.set_x(x);
                    }
                }
                self.move_y_cursors(c.y, -1);
                continue;
            }

            let only_spaces_before = self
                .document
                .line_text(c.y)
                .chars()
                .take(c.x)
                .all(|ch| ch == ' ');
            if unindent && c.x >= width && only_spaces_before {
                self.document.remove_range(c.y, c.x - width, c.x);
                self.move_x_cursors(c.y, c.x - width, -(width as isize));
            } else {
                self.document.remove_char(c.y, c.x - 1);
                self.move_x_cursors(c.y, c.x - 1, -1);
            }
        }
        self.move_cursors(None);
        if changed {
            self.checkpoint("backspace");
        }
        changed
    }

    /// Delete the character under every cursor; at a line end the next line
    /// is merged up. A cursor at the very end of the buffer is left alone.
    pub fn delete(&mut self) -> bool {
        let mut changed = false;
        for i in self.cursors.indices_by_position() {
            let c = self.cursors[i];
            let len = self.document.line_length(c.y);
            if c.x >= len {
                if c.y + 1 >= self.document.line_count() {
                    continue;
                }
                changed = true;
                let prefix = self.document.join_with_previous(c.y + 1);
                for cursor in self.cursors.iter_mut() {
                    if cursor.y == c.y + 1 {
                        let x = cursor.x + prefix;
                        cursor.set_y(c.y);
                        cursor.set_x(x);
                    }
                }
                self.move_y_cursors(c.y + 1, -1);
            } else {
                self.document.remove_char(c.y, c.x);
                self.move_x_cursors(c.y, c.x, -1);
                changed = true;
            }
        }
        self.move_cursors(None);
        if changed {
            self.checkpoint("delete");
        }
        changed
    }

    /// Duplicate every row holding a cursor, placing the copy below
    pub fn duplicate_line(&mut self) -> bool {
        let rows = self.cursors.rows();
        for &y in rows.iter().rev() {
            let text = self.document.line_text(y).to_string();
            self.document.insert_line(y + 1, Line::new(text));
            self.move_y_cursors(y, 1);
        }
        self.move_cursors(None);
        self.checkpoint("duplicate_line");
        true
    }

    /// Swap every row holding a cursor with the row above it
    pub fn push_up(&mut self) -> bool {
        let rows = self.cursors.rows();
        if rows.first() == Some(&0) {
            return false;
        }
        for &y in &rows {
            self.document.swap_lines(y - 1, y);
            for cursor in self.cursors.iter_mut() {
                if cursor.y == y {
                    cursor.set_y(y - 1);
                }
            }
        }
        self.move_cursors(None);
        self.checkpoint("push_up");
        true
    }

    /// Swap every row holding a cursor with the row below it
    pub fn push_down(&mut self) -> bool {
        let rows = self.cursors.rows();
        let last_row = self.document.line_count() - 1;
        if rows.last() == Some(&last_row) {
            return false;
        }
        for &y in rows.iter().rev() {
            self.document.swap_lines(y, y + 1);
            for cursor in self.cursors.iter_mut() {
                if cursor.y == y {
                    cursor.set_y(y + 1);
                }
            }
        }
        self.move_cursors(None);
        self.checkpoint("push_down");
        true
    }

    /// Comment or uncomment every row holding a cursor.
    ///
    /// If every non-blank cursored row already starts with the comment
    /// prefix (after its indent), the prefix is stripped; otherwise it is
    /// inserted. Blank rows are skipped either way.
    pub fn toggle_comment(&mut self) -> bool {
        let prefix = self.config.comment_prefix.clone();
        if prefix.is_empty() {
            return false;
        }
        let prefix_len = prefix.chars().count() as isize;

        let rows: Vec<usize> = self
            .cursors
            .rows()
            .into_iter()
            .filter(|&y| !self.document.line_text(y).trim().is_empty())
            .collect();
        if rows.is_empty() {
            return false;
        }

        let all_commented = rows.iter().all(|&y| {
            let line = self.document.line_text(y);
            let ws = leading_whitespace(line);
            line.chars().skip(ws).collect::<String>().starts_with(&prefix)
        });

        for &y in &rows {
            let ws = leading_whitespace(self.document.line_text(y));
            let delta = if all_commented {
                self.document
                    .remove_range(y, ws, ws + prefix.chars().count());
                -prefix_len
            } else {
                self.document.insert_text(y, ws, &prefix);
                prefix_len
            };
            for cursor in self.cursors.iter_mut() {
                if cursor.y == y && cursor.x >= ws {
                    let x = crate::util::add_signed(cursor.x, delta);
                    cursor.set_x(x);
                }
            }
        }
        self.move_cursors(None);
        self.checkpoint("toggle_comment");
        true
    }

    pub fn uppercase(&mut self) -> bool {
        self.transform_lines(|s| s.to_uppercase());
        self.checkpoint("uppercase");
        true
    }

    pub fn lowercase(&mut self) -> bool {
        self.transform_lines(|s| s.to_lowercase());
        self.checkpoint("lowercase");
        true
    }

    fn transform_lines(&mut self, f: impl Fn(&str) -> String) {
        for y in self.cursors.rows() {
            let text = f(self.document.line_text(y));
            self.document.set_line_text(y, text);
        }
        self.move_cursors(None);
    }

    // === Clipboard operations ===

    /// Cut every row holding a cursor into the buffer, top-to-bottom.
    /// Cutting the only remaining line empties it instead.
    pub fn cut(&mut self) -> bool {
        let rows = self.cursors.rows();
        let mut entries = Vec::with_capacity(rows.len());
        for &y in rows.iter().rev() {
            entries.push(self.document.line_text(y).to_string());
            if self.document.line_count() > 1 {
                self.document.remove_line(y);
                self.move_y_cursors(y, -1);
            } else {
                self.document.set_line_text(y, "");
            }
        }
        entries.reverse();
        self.clipboard.set(entries);
        self.move_cursors(None);
        self.checkpoint("cut");
        true
    }

    /// Copy every row holding a cursor into the buffer, top-to-bottom
    pub fn copy(&mut self) -> bool {
        let entries: Vec<String> = self
            .cursors
            .rows()
            .into_iter()
            .map(|y| self.document.line_text(y).to_string())
            .collect();
        self.clipboard.set(entries);
        true
    }

    /// Paste the buffer.
    ///
    /// With several cursors (or a single-entry buffer) the entries are
    /// dealt out one per cursor in document order, cycling when cursors
    /// outnumber entries. A lone cursor pasting a multi-entry buffer gets
    /// the entries as whole lines above its row.
    pub fn insert(&mut self) -> bool {
        let buffer = self.clipboard.get();
        if buffer.is_empty() {
            return false;
        }

        if self.cursors.len() > 1 || buffer.len() == 1 {
            let mut order = self.cursors.indices_by_position();
            order.reverse();
            for (n, i) in order.into_iter().enumerate() {
                let c = self.cursors[i];
                let text = buffer[n % buffer.len()].clone();
                let len = text.chars().count();
                self.document.insert_text(c.y, c.x, &text);
                self.move_x_cursors(c.y, c.x, len as isize);
                self.cursors[i].move_right(len);
            }
        } else {
            let y = self.cursors.primary().y;
            for (k, entry) in buffer.iter().enumerate() {
                self.document.insert_line(y + k, Line::new(entry.clone()));
            }
            for cursor in self.cursors.iter_mut() {
                if cursor.y >= y {
                    cursor.y += buffer.len();
                }
            }
        }
        self.move_cursors(None);
        self.checkpoint("insert");
        true
    }

    /// Insert text at every cursor, keeping same-row cursors consistent
    fn insert_at_all_cursors(&mut self, text: &str) {
        let len = text.chars().count();
        for i in 0..self.cursors.len() {
            let c = self.cursors[i];
            self.document.insert_text(c.y, c.x, text);
            self.move_x_cursors(c.y, c.x, len as isize);
            self.cursors[i].move_right(len);
        }
    }
}
