//! Inter-task communication
//!
//! The tick and button tasks raise an event flag and then wake the
//! dispatch task. Flags coalesce, so a burst of raises before the
//! dispatch task runs is handled once.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use hiit_core::{Event, EventFlags};

/// Pending events, one flag each
pub static EVENT_FLAGS: EventFlags = EventFlags::new();

/// Signal that at least one flag was raised since the last dispatch pass
pub static WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Raise the flag for `event` and wake the dispatch task
pub fn post(event: Event) {
    EVENT_FLAGS.raise(event);
    WAKE.signal(());
}
