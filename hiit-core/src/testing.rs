//! Recording output devices for unit tests

use heapless::Vec;

use crate::output::{DisplayText, LampCommand, Panel};
use crate::traits::{Lamp, SegmentDisplay};

/// Lamp that tracks its lit state and the last command
#[derive(Debug, Default)]
pub struct MockLamp {
    pub lit: bool,
    pub last: Option<LampCommand>,
    pub commands: usize,
}

impl Lamp for MockLamp {
    fn set(&mut self, command: LampCommand) {
        self.lit = match command {
            LampCommand::Off => false,
            LampCommand::On => true,
            LampCommand::Toggle => !self.lit,
        };
        self.last = Some(command);
        self.commands += 1;
    }
}

/// Display that keeps the current cells and a short render history
#[derive(Debug, Default)]
pub struct MockDisplay {
    pub text: DisplayText,
    pub separator: bool,
    pub history: Vec<DisplayText, 16>,
}

impl MockDisplay {
    pub fn shown(&self) -> &str {
        self.text.as_str()
    }
}

impl SegmentDisplay for MockDisplay {
    fn render(&mut self, text: &DisplayText) {
        self.text = *text;
        if self.history.is_full() {
            self.history.remove(0);
        }
        let _ = self.history.push(*text);
    }

    fn set_separator(&mut self, visible: bool) {
        self.separator = visible;
    }
}

pub type MockPanel = Panel<MockLamp, MockLamp, MockDisplay>;

pub fn panel() -> MockPanel {
    Panel::new(MockLamp::default(), MockLamp::default(), MockDisplay::default())
}
