//! Tick task
//!
//! Raises the tick event twice a second. The session counts down on
//! every other tick, so the half-second period also drives the lamp
//! flashing and the separator blink.

use defmt::*;
use embassy_time::{Duration, Ticker};

use hiit_core::Event;

use crate::channels::post;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 500;

/// Tick task - posts a tick event every interval
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;
        post(Event::Tick);
    }
}
