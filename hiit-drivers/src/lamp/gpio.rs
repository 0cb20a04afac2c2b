//! GPIO indicator lamp
//!
//! Drives an LED from an `embedded-hal` output pin, either directly or
//! through a transistor. The pin can be wired active-high or active-low.

use core::convert::Infallible;

use embedded_hal::digital::StatefulOutputPin;
use hiit_core::traits::Lamp;
use hiit_core::LampCommand;

/// GPIO lamp
///
/// Only pins whose operations cannot fail are accepted, which covers the
/// on-chip GPIO of the supported HALs.
pub struct GpioLamp<P> {
    pin: P,
    /// If true, lamp ON = pin LOW
    inverted: bool,
    /// Current logical state (true = lit)
    lit: bool,
}

impl<P> GpioLamp<P>
where
    P: StatefulOutputPin<Error = Infallible>,
{
    /// Create a new GPIO lamp, initially off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the lamp is lit when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut lamp = Self {
            pin,
            inverted,
            lit: false,
        };
        lamp.drive(false);
        lamp
    }

    /// Create a new lamp lit by a HIGH pin
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a new lamp lit by a LOW pin
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Check if the lamp is lit
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    fn drive(&mut self, lit: bool) {
        self.lit = lit;

        let result = if lit != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        settle(result);
    }
}

impl<P> Lamp for GpioLamp<P>
where
    P: StatefulOutputPin<Error = Infallible>,
{
    fn set(&mut self, command: LampCommand) {
        match command {
            LampCommand::Off => self.drive(false),
            LampCommand::On => self.drive(true),
            LampCommand::Toggle => {
                self.lit = !self.lit;
                settle(self.pin.toggle());
            }
        }
    }
}

fn settle(result: Result<(), Infallible>) {
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}
