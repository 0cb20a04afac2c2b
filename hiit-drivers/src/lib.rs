//! Output device implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in hiit-core:
//!
//! - Indicator lamps on `embedded-hal` output pins
//! - A frame buffer standing in for the segment display controller

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod lamp;

pub use display::FrameBuffer;
pub use lamp::GpioLamp;
