//! Cursors and the ordered cursor set

use std::collections::HashSet;
use std::ops::{Index, IndexMut};

use crate::model::document::Document;
use crate::util::add_signed;

/// A single edit point.
///
/// `persistent_x` is the desired column: it records where the cursor wants
/// to be horizontally, so vertical movement through short lines can restore
/// the column once a long enough line is reached. It changes only on
/// explicit horizontal movement, never when clamping.
///
/// Equality compares position only; two cursors at the same `(x, y)` are the
/// same cursor regardless of their desired columns.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
    pub persistent_x: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::at(0, 0)
    }

    pub fn at(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            persistent_x: x,
        }
    }

    pub fn tuple(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Set the column, remembering it as the desired column
    pub fn set_x(&mut self, x: usize) {
        self.x = x;
        self.persistent_x = x;
    }

    pub fn set_y(&mut self, y: usize) {
        self.y = y;
    }

    pub fn move_left(&mut self, n: usize) {
        self.set_x(self.x.saturating_sub(n));
    }

    pub fn move_right(&mut self, n: usize) {
        self.set_x(self.x + n);
    }

    /// Move up without touching the desired column
    pub fn move_up(&mut self) {
        self.y = self.y.saturating_sub(1);
    }

    /// Move down without touching the desired column
    pub fn move_down(&mut self) {
        self.y += 1;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Cursor {}

/// The set of active cursors.
///
/// Never empty; collapsing to a single cursor keeps the first one. Iteration
/// order is insertion order until a normalization pass deduplicates.
#[derive(Debug, Clone)]
pub struct CursorSet {
    cursors: Vec<Cursor>,
}

impl CursorSet {
    pub fn new() -> Self {
        Self {
            cursors: vec![Cursor::new()],
        }
    }

    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// The primary cursor (viewport follows this one)
    pub fn primary(&self) -> &Cursor {
        &self.cursors[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cursor> {
        self.cursors.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cursor> {
        self.cursors.iter_mut()
    }

    pub fn get(&self, i: usize) -> Option<&Cursor> {
        self.cursors.get(i)
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.cursors.iter().any(|c| c.x == x && c.y == y)
    }

    /// Add a cursor unless one already sits at that position
    pub fn add(&mut self, cursor: Cursor) -> bool {
        if self.contains(cursor.x, cursor.y) {
            return false;
        }
        self.cursors.push(cursor);
        true
    }

    /// Topmost-leftmost cursor
    pub fn first(&self) -> Cursor {
        self.cursors
            .iter()
            .min_by_key(|c| (c.y, c.x))
            .copied()
            .unwrap_or_default()
    }

    /// Bottommost-rightmost cursor
    pub fn last(&self) -> Cursor {
        self.cursors
            .iter()
            .max_by_key(|c| (c.y, c.x))
            .copied()
            .unwrap_or_default()
    }

    /// Cursor indices ordered bottom-to-top, right-to-left. Structural edits
    /// walk this order so earlier edits cannot shift later targets.
    pub fn indices_by_position(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.cursors.len()).collect();
        indices.sort_by_key(|&i| std::cmp::Reverse((self.cursors[i].y, self.cursors[i].x)));
        indices
    }

    /// Sorted, deduplicated list of rows holding at least one cursor
    pub fn rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.cursors.iter().map(|c| c.y).collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }

    pub fn positions(&self) -> Vec<(usize, usize)> {
        self.cursors.iter().map(|c| c.tuple()).collect()
    }

    /// Replace the whole set; an empty replacement falls back to one cursor
    /// at the origin
    pub fn replace(&mut self, cursors: Vec<Cursor>) {
        self.cursors = cursors;
        if self.cursors.is_empty() {
            self.cursors.push(Cursor::new());
        }
        self.dedup();
    }

    /// Drop coincident cursors, keeping the first occurrence of each position
    pub fn dedup(&mut self) {
        let mut seen = HashSet::new();
        self.cursors.retain(|c| seen.insert((c.x, c.y)));
    }

    /// Re-derive valid cursor positions after a mutation.
    ///
    /// Applies the optional uniform `(dx, dy)` delta, clamps each cursor into
    /// the document, restores desired columns where the current line allows,
    /// and merges cursors that converged onto the same position. Idempotent:
    /// running it twice with no delta changes nothing.
    pub fn normalize(&mut self, document: &Document, delta: Option<(isize, isize)>) {
        if let Some((dx, dy)) = delta {
            for cursor in self.cursors.iter_mut() {
                if dx != 0 {
                    cursor.set_x(add_signed(cursor.x, dx));
                }
                if dy != 0 {
                    cursor.y = add_signed(cursor.y, dy);
                }
            }
        }
        let last_row = document.line_count() - 1;
        for cursor in self.cursors.iter_mut() {
            if cursor.y > last_row {
                cursor.y = last_row;
            }
            let line_len = document.line_length(cursor.y);
            if cursor.x > line_len {
                // Clamp without forgetting where the cursor wants to be
                cursor.x = line_len;
            } else if cursor.persistent_x != cursor.x {
                cursor.x = cursor.persistent_x.min(line_len);
            }
        }
        self.dedup();
    }
}

impl Default for CursorSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for CursorSet {
    type Output = Cursor;

    fn index(&self, i: usize) -> &Cursor {
        &self.cursors[i]
    }
}

impl IndexMut<usize> for CursorSet {
    fn index_mut(&mut self, i: usize) -> &mut Cursor {
        &mut self.cursors[i]
    }
}
