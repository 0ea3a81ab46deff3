//! Cut/copy buffer, optionally mirrored to the system clipboard

/// The editor's cut/copy buffer: one string per cut or copied line.
///
/// In local mode the buffer lives inside the process. In global mode it is
/// mirrored to the system clipboard (lines joined with `\n`), and reads go
/// through the system clipboard first so content copied in other
/// applications pastes here. System clipboard failures fall back to the
/// local buffer silently; the local copy is always kept.
#[derive(Debug, Default)]
pub struct Clipboard {
    use_global: bool,
    local: Vec<String>,
}

impl Clipboard {
    pub fn new(use_global: bool) -> Self {
        Self {
            use_global,
            local: Vec::new(),
        }
    }

    pub fn set(&mut self, entries: Vec<String>) {
        if self.use_global {
            if let Ok(mut cb) = arboard::Clipboard::new() {
                if let Err(e) = cb.set_text(entries.join("\n")) {
                    tracing::debug!("System clipboard write failed: {}", e);
                }
            }
        }
        self.local = entries;
    }

    pub fn get(&self) -> Vec<String> {
        if self.use_global {
            if let Ok(mut cb) = arboard::Clipboard::new() {
                if let Ok(text) = cb.get_text() {
                    return text.split('\n').map(str::to_string).collect();
                }
            }
        }
        self.local.clone()
    }

    pub fn is_empty(&self) -> bool {
        if self.use_global {
            return self.get().iter().all(|s| s.is_empty());
        }
        self.local.is_empty()
    }
}
