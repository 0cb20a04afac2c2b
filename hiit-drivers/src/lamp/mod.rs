//! Indicator lamp drivers

pub mod gpio;

pub use gpio::GpioLamp;
