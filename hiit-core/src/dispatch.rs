//! Event dispatch
//!
//! Drains the [`EventFlags`] into the [`Session`]. Each flag is taken at
//! most once per pass, in the order button 1, button 2, tick. The session
//! and the output panel are owned here and never shared.

use crate::config::WorkoutConfig;
use crate::flags::EventFlags;
use crate::output::Panel;
use crate::session::Session;
use crate::state::Event;
use crate::traits::{Lamp, SegmentDisplay};

/// Handlers run during one dispatch pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Handled {
    pub button1: bool,
    pub button2: bool,
    pub tick: bool,
}

impl Handled {
    /// Check if any handler ran
    pub fn any(&self) -> bool {
        self.button1 || self.button2 || self.tick
    }

    fn mark(&mut self, event: Event) {
        match event {
            Event::Button1 => self.button1 = true,
            Event::Button2 => self.button2 = true,
            Event::Tick => self.tick = true,
        }
    }
}

/// Owner of the session and its output devices
pub struct Dispatcher<W, R, D> {
    session: Session,
    panel: Panel<W, R, D>,
}

impl<W: Lamp, R: Lamp, D: SegmentDisplay> Dispatcher<W, R, D> {
    /// Create the session and show the programmed length
    pub fn new(config: WorkoutConfig, mut panel: Panel<W, R, D>) -> Self {
        let session = Session::new(config);
        session.power_on(&mut panel);
        Self { session, panel }
    }

    /// Get the session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Get the output devices
    pub fn panel(&self) -> &Panel<W, R, D> {
        &self.panel
    }

    /// Get the output devices mutably (for transport-level housekeeping)
    pub fn panel_mut(&mut self) -> &mut Panel<W, R, D> {
        &mut self.panel
    }

    /// Run the handler for a single event
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Button1 => self.session.on_button1(&mut self.panel),
            Event::Button2 => self.session.on_button2(&mut self.panel),
            Event::Tick => self.session.on_tick(&mut self.panel),
        }
    }

    /// Take every pending flag once and run its handler
    pub fn dispatch(&mut self, flags: &EventFlags) -> Handled {
        let mut handled = Handled::default();

        for event in Event::ALL {
            if flags.take(event) {
                self.handle(event);
                handled.mark(event);
            }
        }

        handled
    }
}
