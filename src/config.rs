//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/caret/config.yaml`

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::util::DEFAULT_PUNCTUATION;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Spaces inserted per tab press, and removed per untab
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    /// Characters treated as punctuation by word navigation
    #[serde(default = "default_punctuation")]
    pub punctuation: String,

    /// Carry the current line's leading whitespace onto the new line on enter
    #[serde(default = "default_true")]
    pub auto_indent_newline: bool,

    /// Interpret search terms as regular expressions
    #[serde(default)]
    pub regex_find: bool,

    /// Maximum number of undo states kept in memory
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// Backspace inside leading whitespace removes a whole indent level
    #[serde(default = "default_true")]
    pub backspace_unindent: bool,

    /// Mirror cut/copy to the system clipboard instead of the local buffer
    #[serde(default)]
    pub use_global_buffer: bool,

    /// Prefix inserted/stripped by the comment toggle
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,
}

fn default_tab_width() -> usize {
    4
}

fn default_punctuation() -> String {
    DEFAULT_PUNCTUATION.to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_history() -> usize {
    50
}

fn default_comment_prefix() -> String {
    "// ".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_width: default_tab_width(),
            punctuation: default_punctuation(),
            auto_indent_newline: true,
            regex_find: false,
            max_history: default_max_history(),
            backspace_unindent: true,
            use_global_buffer: false,
            comment_prefix: default_comment_prefix(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from an explicit path, or return defaults if unreadable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        crate::config_paths::ensure_config_dir().map_err(anyhow::Error::msg)?;
        let path = crate::config_paths::config_file()
            .context("No config directory available")?;

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
