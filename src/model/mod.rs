//! Core data model: lines, document, cursors, viewport

pub mod cursor;
pub mod document;
pub mod line;
pub mod viewport;

pub use cursor::{Cursor, CursorSet};
pub use document::Document;
pub use line::Line;
pub use viewport::Viewport;
