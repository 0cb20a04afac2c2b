//! Segment display trait

use crate::output::DisplayText;

/// Six-cell character display with a minutes/seconds separator
///
/// Character rendering is left to the implementation; the session only
/// hands over whole six-cell strings.
pub trait SegmentDisplay {
    /// Show six cells of text
    fn render(&mut self, text: &DisplayText);

    /// Show or hide the separator between the minutes and seconds fields
    fn set_separator(&mut self, visible: bool);
}
