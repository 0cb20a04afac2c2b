//! Indicator lamp trait

use crate::output::LampCommand;

/// Single-bit indicator lamp
///
/// Implementations drive an LED directly from a GPIO pin or through any
/// other single-bit output.
pub trait Lamp {
    /// Apply a command (off, on or toggle)
    fn set(&mut self, command: LampCommand);
}
