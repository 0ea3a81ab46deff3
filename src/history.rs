//! Checkpointed undo/redo history

/// A full snapshot of editor state at a checkpoint.
///
/// Snapshots are deep copies: restoring one replaces the buffer, cursor
/// positions, scroll offsets and the remembered search term wholesale.
/// Per-line render state and desired columns are deliberately not captured;
/// both are re-derived after a restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub cursors: Vec<(usize, usize)>,
    pub lines: Vec<String>,
    pub y_scroll: usize,
    pub x_scroll: usize,
    pub last_find: String,
}

/// A bounded timeline of [`EditState`] snapshots.
///
/// `current` points at the snapshot matching the live editor state. Undo
/// moves the pointer back, redo forward; storing while the pointer is not at
/// the tail discards the abandoned redo branch. Consecutive checkpoints of
/// the same action kind overwrite the tail entry instead of appending, so a
/// typing burst costs one entry.
#[derive(Debug)]
pub struct History {
    states: Vec<EditState>,
    current: usize,
    last_kind: Option<&'static str>,
    max_states: usize,
}

impl History {
    pub fn new(max_states: usize) -> Self {
        Self {
            states: Vec::new(),
            current: 0,
            last_kind: None,
            max_states: max_states.max(1),
        }
    }

    /// Clear the timeline and seed it with the initial state
    pub fn reset(&mut self, initial: EditState) {
        self.states = vec![initial];
        self.current = 0;
        self.last_kind = None;
    }

    /// Append a snapshot, truncating any redo branch and evicting the oldest
    /// entry when full
    pub fn store(&mut self, state: EditState) {
        self.states.truncate(self.current + 1);
        let was_empty = self.states.is_empty();
        self.states.push(state);
        // An unseeded history's first entry is the live state itself
        if !was_empty {
            self.current += 1;
        }
        if self.states.len() > self.max_states {
            tracing::debug!(max = self.max_states, "history full, dropping oldest state");
            self.states.remove(0);
            self.current -= 1;
        }
    }

    /// Record a checkpoint for the named action kind.
    ///
    /// A repeat of the previous kind updates the tail entry in place, so an
    /// unbroken run of one action undoes as a single step.
    pub fn store_action(&mut self, kind: &'static str, state: EditState) {
        let at_tail = self.current + 1 == self.states.len();
        if at_tail && self.last_kind == Some(kind) && !self.states.is_empty() {
            self.states[self.current] = state;
        } else {
            self.store(state);
        }
        self.last_kind = Some(kind);
    }

    /// Step back one checkpoint, returning the state to restore
    pub fn undo(&mut self) -> Option<&EditState> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        self.last_kind = None;
        self.states.get(self.current)
    }

    /// Step forward one checkpoint, returning the state to restore
    pub fn redo(&mut self) -> Option<&EditState> {
        if self.current + 1 >= self.states.len() {
            return None;
        }
        self.current += 1;
        self.last_kind = None;
        self.states.get(self.current)
    }

    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.states.len()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }
}
