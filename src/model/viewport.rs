//! Viewport bookkeeping

/// The visible window over the document.
///
/// The editor core tracks only scroll offsets and dimensions; drawing is the
/// host's job. Scrolling is minimal: the viewport moves just far enough to
/// reveal the target position and never recenters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub y_scroll: usize,
    pub x_scroll: usize,
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            y_scroll: 0,
            x_scroll: 0,
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Scroll just far enough that `(x, y)` is inside the window
    pub fn scroll_to(&mut self, x: usize, y: usize) {
        if y < self.y_scroll {
            self.y_scroll = y;
        } else if self.height > 0 && y >= self.y_scroll + self.height {
            self.y_scroll = y - self.height + 1;
        }
        if x < self.x_scroll {
            self.x_scroll = x;
        } else if self.width > 0 && x >= self.x_scroll + self.width {
            self.x_scroll = x - self.width + 1;
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 25)
    }
}
