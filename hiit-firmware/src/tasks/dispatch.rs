//! Dispatch task
//!
//! Owns the session and its output devices. Sleeps until a flag is
//! raised, drains every pending flag, then pushes the display frame out
//! if it changed.

use defmt::*;
use embassy_rp::gpio::Output;

use hiit_core::{Dispatcher, Phase, WorkoutConfig};
use hiit_drivers::{FrameBuffer, GpioLamp};

use crate::channels::{EVENT_FLAGS, WAKE};

/// Lamp wired to an RP2040 GPIO
pub type BoardLamp = GpioLamp<Output<'static>>;

/// Work lamp, recovery lamp and display buffer
pub type BoardPanel = hiit_core::Panel<BoardLamp, BoardLamp, FrameBuffer>;

/// Dispatch task - runs the session handlers for raised flags
#[embassy_executor::task]
pub async fn dispatch_task(config: WorkoutConfig, panel: BoardPanel) {
    info!("Dispatch task started");

    let mut dispatcher = Dispatcher::new(config, panel);
    let cfg = dispatcher.session().config();
    info!(
        "Session: {}s, {} pairs of {}s work / {}s rest",
        cfg.default_session_s, cfg.default_pairs, cfg.work_s, cfg.rest_s
    );
    publish_display(&mut dispatcher);

    loop {
        WAKE.wait().await;

        let before = dispatcher.session().phase();
        let handled = dispatcher.dispatch(&EVENT_FLAGS);

        if handled.button1 || handled.button2 {
            debug!("Buttons handled: {:?}", handled);
        } else if handled.tick {
            trace!("Tick");
        }

        let after = dispatcher.session().phase();
        if after != before {
            log_phase_change(before, after, dispatcher.session().remaining_pairs());
        }

        publish_display(&mut dispatcher);
    }
}

fn log_phase_change(from: Phase, to: Phase, pairs: i32) {
    if to.is_terminal() {
        info!("Phase: {:?} -> {:?}, workout complete", from, to);
        return;
    }

    match to {
        Phase::Working | Phase::Recovering => {
            info!("Phase: {:?} -> {:?} ({} pairs left)", from, to, pairs)
        }
        _ => info!("Phase: {:?} -> {:?}", from, to),
    }
}

/// Push the display frame out if it changed
///
/// The board has no segment controller fitted; the frame is mirrored to
/// the debug log.
fn publish_display(dispatcher: &mut Dispatcher<BoardLamp, BoardLamp, FrameBuffer>) {
    if let Some(frame) = dispatcher.panel_mut().display.take_dirty() {
        debug!(
            "Display: [{}] colon={}",
            frame.text.as_str(),
            frame.separator
        );
    }
}
