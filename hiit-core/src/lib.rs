//! Board-agnostic core logic for the interval workout timer
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Output device traits (lamps, segment display)
//! - Workout phases and input events
//! - Session state machine (countdowns, pause, segment pairs)
//! - Lamp pattern and display text derivation
//! - Coalescing event flags shared with interrupt context
//! - Dispatcher that drains the flags into the session
//! - Workout length configuration

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod dispatch;
pub mod flags;
pub mod output;
pub mod session;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testing;

pub use config::{ConfigError, WorkoutConfig};
pub use dispatch::{Dispatcher, Handled};
pub use flags::EventFlags;
pub use output::{DisplayFrame, DisplayText, LampCommand, LampPattern, Panel, TextError};
pub use session::Session;
pub use state::{Event, Phase};
