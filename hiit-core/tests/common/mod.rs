//! Shared test devices for integration tests

#![allow(dead_code)]

use hiit_core::traits::{Lamp, SegmentDisplay};
use hiit_core::{
    Dispatcher, DisplayText, Event, LampCommand, Panel, Phase, Session, WorkoutConfig,
};

/// Lamp that records every command and tracks its lit state
#[derive(Debug, Default)]
pub struct RecordingLamp {
    pub lit: bool,
    pub commands: Vec<LampCommand>,
}

impl Lamp for RecordingLamp {
    fn set(&mut self, command: LampCommand) {
        self.lit = match command {
            LampCommand::Off => false,
            LampCommand::On => true,
            LampCommand::Toggle => !self.lit,
        };
        self.commands.push(command);
    }
}

/// Display that records every rendered text
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub renders: Vec<DisplayText>,
    pub separator: bool,
}

impl RecordingDisplay {
    pub fn shown(&self) -> &str {
        self.renders.last().map(|t| t.as_str()).unwrap_or("")
    }
}

impl SegmentDisplay for RecordingDisplay {
    fn render(&mut self, text: &DisplayText) {
        self.renders.push(*text);
    }

    fn set_separator(&mut self, visible: bool) {
        self.separator = visible;
    }
}

pub type TestPanel = Panel<RecordingLamp, RecordingLamp, RecordingDisplay>;

pub fn panel() -> TestPanel {
    Panel::new(
        RecordingLamp::default(),
        RecordingLamp::default(),
        RecordingDisplay::default(),
    )
}

pub fn dispatcher(config: WorkoutConfig) -> Dispatcher<RecordingLamp, RecordingLamp, RecordingDisplay> {
    Dispatcher::new(config, panel())
}

/// Confirm the length and start the warm-up
pub fn start(session: &mut Session, panel: &mut TestPanel) {
    session.on_button2(panel);
    session.on_button2(panel);
}

/// Tick until the session reaches Done, collecting each phase entered
///
/// Gives up after `max_ticks` so a broken transition cannot hang the test.
pub fn run_to_done(session: &mut Session, panel: &mut TestPanel, max_ticks: usize) -> Vec<Phase> {
    let mut phases = vec![session.phase()];
    for _ in 0..max_ticks {
        if session.phase().is_terminal() {
            break;
        }
        session.on_tick(panel);
        if phases.last() != Some(&session.phase()) {
            phases.push(session.phase());
        }
    }
    phases
}

/// Dispatch one event through the flags, as the firmware does
pub fn feed<W, R, D>(dispatcher: &mut Dispatcher<W, R, D>, event: Event)
where
    W: Lamp,
    R: Lamp,
    D: SegmentDisplay,
{
    let flags = hiit_core::EventFlags::new();
    flags.raise(event);
    dispatcher.dispatch(&flags);
}
