//! Hiit Firmware
//!
//! Interval workout timer for RP2040-based boards.
//!
//! - GPIO14: work lamp
//! - GPIO15: recovery lamp
//! - GPIO16: button 1 (lengthen / pause)
//! - GPIO17: button 2 (confirm / start)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use hiit_core::{Event, Panel, WorkoutConfig};
use hiit_drivers::{FrameBuffer, GpioLamp};

mod channels;
mod tasks;

/// Compiled-in phase lengths
#[cfg(not(feature = "standard-timings"))]
const WORKOUT: WorkoutConfig = WorkoutConfig::DEMO;
#[cfg(feature = "standard-timings")]
const WORKOUT: WorkoutConfig = WorkoutConfig::STANDARD;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Hiit firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_workout_config();

    // Lamps, driven directly from GPIO
    let work_lamp = GpioLamp::new_active_high(Output::new(p.PIN_14, Level::Low));
    let rest_lamp = GpioLamp::new_active_high(Output::new(p.PIN_15, Level::Low));
    let panel = Panel::new(work_lamp, rest_lamp, FrameBuffer::new());
    info!("Lamps initialized");

    // Buttons pull to ground when pressed
    let button1 = Input::new(p.PIN_16, Pull::Up);
    let button2 = Input::new(p.PIN_17, Pull::Up);
    info!("Buttons initialized");

    spawner.spawn(tasks::dispatch_task(config, panel)).unwrap();
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner
        .spawn(tasks::button_task(button1, Event::Button1))
        .unwrap();
    spawner
        .spawn(tasks::button_task(button2, Event::Button2))
        .unwrap();

    info!("All tasks spawned");
}

/// Validate the compiled-in configuration, falling back to the demo
/// lengths if it cannot run
fn load_workout_config() -> WorkoutConfig {
    match WORKOUT.validate() {
        Ok(()) => {
            info!("Workout config loaded");
            WORKOUT
        }
        Err(e) => {
            error!("Workout config invalid: {:?}", e);
            warn!("Using demo timings");
            WorkoutConfig::DEMO
        }
    }
}
