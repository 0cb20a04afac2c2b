//! Output derivation
//!
//! Lamp patterns and display frames are pure functions of the session
//! state. The session issues them through a [`Panel`], which is the only
//! path to the output devices.

pub mod lamps;
pub mod panel;
pub mod text;

pub use lamps::{lamp_pattern, LampCommand, LampPattern};
pub use panel::Panel;
pub use text::{
    clock_frame, display_frame, label_frame, DisplayFrame, DisplayText, TextError, DISPLAY_CELLS,
};
