//! Cursor movement operations
//!
//! Every motion here moves all cursors at once and funnels through
//! [`Editor::move_cursors`], so converging cursors merge and the viewport
//! tracks the primary cursor.

use crate::editor::Editor;
use crate::model::Cursor;
use crate::util::{char_type, CharType};

impl Editor {
    pub fn arrow_up(&mut self) -> bool {
        for cursor in self.cursors.iter_mut() {
            cursor.move_up();
        }
        self.move_cursors(None);
        true
    }

    pub fn arrow_down(&mut self) -> bool {
        for cursor in self.cursors.iter_mut() {
            cursor.move_down();
        }
        self.move_cursors(None);
        true
    }

    /// Move every cursor one column left; cursors at column 0 wrap to the
    /// end of the previous line.
    ///
    /// A wrapping cursor parks one column past the previous line's end so
    /// that the shared -1 step below lands it exactly on the end. The park
    /// and the delta are two halves of one motion.
    pub fn arrow_left(&mut self) -> bool {
        for i in 0..self.cursors.len() {
            let c = self.cursors[i];
            if c.x == 0 && c.y > 0 {
                let prev_len = self.document.line_length(c.y - 1);
                let cursor = &mut self.cursors[i];
                cursor.move_up();
                cursor.set_x(prev_len + 1);
            }
        }
        self.move_cursors(Some((-1, 0)));
        true
    }

    /// Move every cursor one column right; cursors at a line end wrap to
    /// the start of the next line.
    pub fn arrow_right(&mut self) -> bool {
        for i in 0..self.cursors.len() {
            let c = self.cursors[i];
            let len = self.document.line_length(c.y);
            if c.x >= len {
                if c.y + 1 < self.document.line_count() {
                    let cursor = &mut self.cursors[i];
                    cursor.move_down();
                    cursor.set_x(0);
                }
            } else {
                self.cursors[i].move_right(1);
            }
        }
        self.move_cursors(None);
        true
    }

    /// Jump left to the start of the previous word-like run; at column 0
    /// the cursor wraps to the end of the previous line
    pub fn jump_left(&mut self) -> bool {
        let punctuation = self.config.punctuation.clone();
        for i in 0..self.cursors.len() {
            let c = self.cursors[i];
            if c.x == 0 {
                if c.y > 0 {
                    let prev_len = self.document.line_length(c.y - 1);
                    let cursor = &mut self.cursors[i];
                    cursor.move_up();
                    cursor.set_x(prev_len);
                }
                continue;
            }
            let chars: Vec<char> = self.document.line_text(c.y).chars().collect();
            let mut x = c.x.min(chars.len());
            while x > 0 && char_type(chars[x - 1], &punctuation) == CharType::Whitespace {
                x -= 1;
            }
            if x > 0 {
                let t = char_type(chars[x - 1], &punctuation);
                while x > 0 && char_type(chars[x - 1], &punctuation) == t {
                    x -= 1;
                }
            }
            self.cursors[i].set_x(x);
        }
        self.move_cursors(None);
        true
    }

    /// Jump right past the next word-like run; at the line end the cursor
    /// wraps to the start of the next line
    pub fn jump_right(&mut self) -> bool {
        let punctuation = self.config.punctuation.clone();
        for i in 0..self.cursors.len() {
            let c = self.cursors[i];
            let chars: Vec<char> = self.document.line_text(c.y).chars().collect();
            if c.x >= chars.len() {
                if c.y + 1 < self.document.line_count() {
                    let cursor = &mut self.cursors[i];
                    cursor.move_down();
                    cursor.set_x(0);
                }
                continue;
            }
            let mut x = c.x;
            while x < chars.len() && char_type(chars[x], &punctuation) == CharType::Whitespace {
                x += 1;
            }
            if x < chars.len() {
                let t = char_type(chars[x], &punctuation);
                while x < chars.len() && char_type(chars[x], &punctuation) == t {
                    x += 1;
                }
            }
            self.cursors[i].set_x(x);
        }
        self.move_cursors(None);
        true
    }

    /// Smart home: first press goes to the indent edge, second to column 0
    pub fn home(&mut self) -> bool {
        for i in 0..self.cursors.len() {
            let c = self.cursors[i];
            let indent = crate::util::leading_whitespace(self.document.line_text(c.y));
            let target = if c.x == indent { 0 } else { indent };
            self.cursors[i].set_x(target);
        }
        self.move_cursors(None);
        true
    }

    pub fn end(&mut self) -> bool {
        for i in 0..self.cursors.len() {
            let len = self.document.line_length(self.cursors[i].y);
            self.cursors[i].set_x(len);
        }
        self.move_cursors(None);
        true
    }

    pub fn page_up(&mut self) -> bool {
        let step = self.viewport.height as isize;
        self.move_cursors(Some((0, -step)));
        true
    }

    pub fn page_down(&mut self) -> bool {
        let step = self.viewport.height as isize;
        self.move_cursors(Some((0, step)));
        true
    }

    // === Cursor spawning ===

    /// Add a cursor one row above the topmost cursor
    pub fn new_cursor_up(&mut self) -> bool {
        let top = self.cursors.first();
        if top.y == 0 {
            return false;
        }
        let added = self.cursors.add(Cursor::at(top.x, top.y - 1));
        self.move_cursors(None);
        added
    }

    /// Add a cursor one row below the bottommost cursor
    pub fn new_cursor_down(&mut self) -> bool {
        let bottom = self.cursors.last();
        if bottom.y + 1 >= self.document.line_count() {
            return false;
        }
        let added = self.cursors.add(Cursor::at(bottom.x, bottom.y + 1));
        self.move_cursors(None);
        added
    }

    /// Add a cursor one column left of each existing cursor
    pub fn new_cursor_left(&mut self) -> bool {
        let spawns: Vec<(usize, usize)> = self
            .cursors
            .iter()
            .filter(|c| c.x > 0)
            .map(|c| (c.x - 1, c.y))
            .collect();
        let mut added = false;
        for (x, y) in spawns {
            added |= self.cursors.add(Cursor::at(x, y));
        }
        self.move_cursors(None);
        added
    }

    /// Add a cursor one column right of each existing cursor
    pub fn new_cursor_right(&mut self) -> bool {
        let spawns: Vec<(usize, usize)> = self
            .cursors
            .iter()
            .filter(|c| c.x < self.document.line_length(c.y))
            .map(|c| (c.x + 1, c.y))
            .collect();
        let mut added = false;
        for (x, y) in spawns {
            added |= self.cursors.add(Cursor::at(x, y));
        }
        self.move_cursors(None);
        added
    }

    /// Collapse to the primary cursor
    pub fn single_cursor(&mut self) -> bool {
        let primary = *self.cursors.primary();
        self.cursors.replace(vec![primary]);
        self.move_cursors(None);
        true
    }
}
