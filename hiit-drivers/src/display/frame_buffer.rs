//! Display frame buffer
//!
//! Holds the six cells and the separator the session last sent, and
//! remembers whether they changed since the transport last picked them
//! up. The transport (segment controller, serial mirror, log) calls
//! [`FrameBuffer::take_dirty`] after each dispatch pass and pushes the
//! frame out only when something changed.

use hiit_core::output::DISPLAY_CELLS;
use hiit_core::traits::SegmentDisplay;
use hiit_core::{DisplayFrame, DisplayText};

/// Buffered segment display
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    frame: DisplayFrame,
    dirty: bool,
}

impl FrameBuffer {
    /// Create a blank buffer
    pub const fn new() -> Self {
        Self {
            frame: DisplayFrame {
                text: DisplayText::BLANK,
                separator: false,
            },
            dirty: false,
        }
    }

    /// Get the current cells
    pub fn cells(&self) -> &[u8; DISPLAY_CELLS] {
        self.frame.text.cells()
    }

    /// Check if the frame changed since the last pick-up
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return the frame if it changed, clearing the dirty flag
    pub fn take_dirty(&mut self) -> Option<DisplayFrame> {
        if self.dirty {
            self.dirty = false;
            Some(self.frame)
        } else {
            None
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentDisplay for FrameBuffer {
    fn render(&mut self, text: &DisplayText) {
        if self.frame.text != *text {
            self.frame.text = *text;
            self.dirty = true;
        }
    }

    fn set_separator(&mut self, visible: bool) {
        if self.frame.separator != visible {
            self.frame.separator = visible;
            self.dirty = true;
        }
    }
}
