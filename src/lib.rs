//! caret - the editing core of a terminal text editor
//!
//! This crate provides a multi-cursor text buffer: any number of simultaneous
//! edit points can move, insert, delete and search within a document while
//! staying mutually consistent, backed by a checkpointed undo/redo history
//! and viewport bookkeeping that keeps the visible window aligned with the
//! cursors.
//!
//! Rendering, input decoding, file persistence and syntax highlighting are
//! the host application's job. The host resolves a key or mouse event to an
//! operation name and calls [`Editor::run_operation`]; every operation is
//! atomic and re-derives valid, deduplicated cursor positions before it
//! returns.

pub mod clipboard;
pub mod config;
pub mod config_paths;
pub mod editor;
pub mod history;
pub mod model;
pub mod util;

// Re-export commonly used types
pub use clipboard::Clipboard;
pub use config::EditorConfig;
pub use editor::{Editor, Operation, OperationRegistry};
pub use history::{EditState, History};
pub use model::{Cursor, CursorSet, Document, Line, Viewport};
