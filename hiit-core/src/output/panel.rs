//! Output device bundle

use super::lamps::LampPattern;
use super::text::DisplayFrame;
use crate::traits::{Lamp, SegmentDisplay};

/// The two indicator lamps and the display
///
/// The session is handed a `&mut Panel` by the dispatcher and is the only
/// component that issues commands through it.
pub struct Panel<W, R, D> {
    /// Work indicator lamp
    pub work: W,
    /// Rest indicator lamp
    pub rest: R,
    /// Six-cell segment display
    pub display: D,
}

impl<W: Lamp, R: Lamp, D: SegmentDisplay> Panel<W, R, D> {
    /// Bundle the output devices
    pub fn new(work: W, rest: R, display: D) -> Self {
        Self {
            work,
            rest,
            display,
        }
    }

    /// Drive both lamps
    pub fn apply(&mut self, pattern: LampPattern) {
        self.work.set(pattern.work);
        self.rest.set(pattern.rest);
    }

    /// Render a frame: text first, then the separator
    pub fn show(&mut self, frame: &DisplayFrame) {
        self.display.render(&frame.text);
        self.display.set_separator(frame.separator);
    }
}
