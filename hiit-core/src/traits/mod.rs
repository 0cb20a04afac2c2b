//! Output device traits
//!
//! These traits define the interface between the session logic and
//! the hardware-specific lamp and display implementations. Devices are
//! write-only from the session's point of view.

pub mod display;
pub mod lamp;

pub use display::SegmentDisplay;
pub use lamp::Lamp;
