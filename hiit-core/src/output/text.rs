//! Display text and frames
//!
//! The display always receives exactly six character cells. Clock
//! frames use the layout `"  MMSS"` with the separator lit between the
//! minutes and seconds fields; the minutes field is blank below one
//! minute.

use core::fmt::Write;

use heapless::String;

use crate::state::Phase;

/// Number of character cells on the display
pub const DISPLAY_CELLS: usize = 6;

/// Largest value the clock layout can show (99:59)
pub const CLOCK_MAX_S: i32 = 99 * 60 + 59;

/// In Cooling, the label replaces the clock whenever the total is a
/// multiple of this
pub const COOL_LABEL_PERIOD_S: i32 = 20;

/// Errors building display text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextError {
    /// More than six characters
    TooLong,
    /// Character outside printable ASCII
    NonAscii,
}

/// Exactly six printable ASCII cells, space padded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayText([u8; DISPLAY_CELLS]);

impl DisplayText {
    /// Start prompt shown once the length is confirmed
    pub const START: DisplayText = DisplayText(*b" START");
    /// Cool-down label
    pub const COOL: DisplayText = DisplayText(*b" COOL ");
    /// End-of-session label
    pub const DONE: DisplayText = DisplayText(*b" DONE ");
    /// All cells blank
    pub const BLANK: DisplayText = DisplayText([b' '; DISPLAY_CELLS]);

    /// Build display text, padding with spaces on the right
    pub fn new(text: &str) -> Result<Self, TextError> {
        let bytes = text.as_bytes();
        if bytes.len() > DISPLAY_CELLS {
            return Err(TextError::TooLong);
        }

        let mut cells = [b' '; DISPLAY_CELLS];
        for (cell, &byte) in cells.iter_mut().zip(bytes) {
            if !(b' '..=b'~').contains(&byte) {
                return Err(TextError::NonAscii);
            }
            *cell = byte;
        }

        Ok(Self(cells))
    }

    /// Raw cells, left to right
    pub fn cells(&self) -> &[u8; DISPLAY_CELLS] {
        &self.0
    }

    /// Cells as a string slice
    pub fn as_str(&self) -> &str {
        // Cells are printable ASCII by construction
        core::str::from_utf8(&self.0).unwrap_or("")
    }
}

impl Default for DisplayText {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Text plus separator state for one display refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayFrame {
    /// Six cells of text
    pub text: DisplayText,
    /// Whether the minutes/seconds separator is lit
    pub separator: bool,
}

/// Frame for a fixed label; the separator is always hidden
pub const fn label_frame(text: DisplayText) -> DisplayFrame {
    DisplayFrame {
        text,
        separator: false,
    }
}

/// Frame showing `seconds` as minutes and seconds
///
/// Values outside `0..=99:59` are clamped to fit the six cells.
pub fn clock_frame(seconds: i32, separator: bool) -> DisplayFrame {
    let seconds = seconds.clamp(0, CLOCK_MAX_S);
    let minutes = seconds / 60;
    let secs = seconds % 60;

    let mut buf: String<DISPLAY_CELLS> = String::new();
    let written = if minutes > 0 {
        write!(buf, "  {:2}{:02}", minutes, secs)
    } else {
        write!(buf, "    {:02}", secs)
    };

    let text = match written {
        Ok(()) => DisplayText::new(buf.as_str()).unwrap_or(DisplayText::BLANK),
        Err(_) => DisplayText::BLANK,
    };

    DisplayFrame { text, separator }
}

/// Derive the per-tick display frame for a phase
///
/// - Cooling with the total a multiple of 20: the cool-down label
/// - Done: the end label
/// - otherwise: the phase countdown, separator lit on the whole second
///
/// Returns `None` in Programming and Waiting, which are not refreshed by
/// ticks.
pub fn display_frame(
    phase: Phase,
    total_remaining: i32,
    phase_remaining: i32,
    whole_second: bool,
) -> Option<DisplayFrame> {
    match phase {
        Phase::Programming | Phase::Waiting => None,
        Phase::Cooling if total_remaining % COOL_LABEL_PERIOD_S == 0 => {
            Some(label_frame(DisplayText::COOL))
        }
        Phase::Done => Some(label_frame(DisplayText::DONE)),
        Phase::WarmUp | Phase::Working | Phase::Recovering | Phase::Cooling => {
            Some(clock_frame(phase_remaining, whole_second))
        }
    }
}
