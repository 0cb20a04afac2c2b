//! Workout phases and input events
//!
//! The phase set is explicit and finite; every handler matches on it
//! exhaustively so an unhandled (phase, event) pair cannot compile.

pub mod events;
pub mod phase;

pub use events::Event;
pub use phase::Phase;
