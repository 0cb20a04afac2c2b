//! Coalescing event flags
//!
//! One flag per [`Event`]. Interrupt handlers (or the tasks standing in
//! for them) raise flags; the dispatcher takes them. A flag is a single
//! bit, not a queue: several raises before the next take collapse into
//! one handler call.
//!
//! `take` is an atomic swap, so a raise that lands between the read and
//! the clear is never lost. `portable-atomic` provides the swap on cores
//! without native read-modify-write atomics (thumbv6m) when the
//! `critical-section` feature is enabled by the firmware.

use portable_atomic::{AtomicBool, Ordering};

use crate::state::Event;

/// Pending-event flags shared between interrupt and main context
#[derive(Debug)]
pub struct EventFlags {
    button1: AtomicBool,
    button2: AtomicBool,
    tick: AtomicBool,
}

impl EventFlags {
    /// Create a flag set with nothing pending
    pub const fn new() -> Self {
        Self {
            button1: AtomicBool::new(false),
            button2: AtomicBool::new(false),
            tick: AtomicBool::new(false),
        }
    }

    fn flag(&self, event: Event) -> &AtomicBool {
        match event {
            Event::Button1 => &self.button1,
            Event::Button2 => &self.button2,
            Event::Tick => &self.tick,
        }
    }

    /// Mark an event as pending
    pub fn raise(&self, event: Event) {
        self.flag(event).store(true, Ordering::Release);
    }

    /// Clear an event, returning whether it was pending
    pub fn take(&self, event: Event) -> bool {
        self.flag(event).swap(false, Ordering::AcqRel)
    }

    /// Check if an event is pending without clearing it
    pub fn is_raised(&self, event: Event) -> bool {
        self.flag(event).load(Ordering::Acquire)
    }

    /// Check if any event is pending
    pub fn is_pending(&self) -> bool {
        Event::ALL.iter().any(|&event| self.is_raised(event))
    }
}

impl Default for EventFlags {
    fn default() -> Self {
        Self::new()
    }
}
