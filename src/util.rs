//! Utility functions for text editing

/// Default punctuation set for word navigation.
///
/// Overridable through `EditorConfig::punctuation`; a character outside this
/// set that is not whitespace counts as a word character.
pub const DEFAULT_PUNCTUATION: &str = "/:,.-(){}[];\"'<>=+*&|!@#$%^~`\\?";

/// Character type for word navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharType {
    /// Whitespace characters
    Whitespace,
    /// Punctuation and symbols (from the configured set)
    Punctuation,
    /// Everything else (word characters)
    Word,
}

/// Classify a character against the configured punctuation set
pub fn char_type(ch: char, punctuation: &str) -> CharType {
    if ch.is_whitespace() {
        CharType::Whitespace
    } else if punctuation.contains(ch) {
        CharType::Punctuation
    } else {
        CharType::Word
    }
}

/// Width of the leading whitespace run, in characters
pub fn leading_whitespace(text: &str) -> usize {
    text.chars().take_while(|c| c.is_whitespace()).count()
}

/// Check if a character can be part of a search term derived from the text
/// under the cursor (word characters and hyphens)
pub fn is_term_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '-'
}

/// Offset a `usize` coordinate by a signed delta, saturating at zero
pub(crate) fn add_signed(base: usize, delta: isize) -> usize {
    if delta < 0 {
        base.saturating_sub(delta.unsigned_abs())
    } else {
        base + delta as usize
    }
}
