//! Push-button tasks
//!
//! One task per button. Buttons pull the pin low when pressed; a press
//! is reported once, on the falling edge, after the contacts settle.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};

use hiit_core::Event;

use crate::channels::post;

/// Contact settle time after the falling edge
const DEBOUNCE_MS: u64 = 20;

/// Quiet time after release before the next press is accepted
const RELEASE_HOLDOFF_MS: u64 = 50;

/// Button task - posts `event` for every debounced press
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut btn: Input<'static>, event: Event) {
    info!("Button task started: {:?}", event);

    loop {
        btn.wait_for_falling_edge().await;

        // Debounce
        Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;

        if btn.is_low() {
            post(event);
            debug!("Button: {:?}", event);

            btn.wait_for_high().await;
            Timer::after(Duration::from_millis(RELEASE_HOLDOFF_MS)).await;
        }
    }
}
