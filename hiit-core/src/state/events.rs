//! Input events consumed by the session

/// Events delivered to the session by the dispatcher
///
/// Each event carries no payload. Several physical occurrences of the
/// same event between two dispatcher passes collapse into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Button 1 pressed (lengthen session / pause toggle)
    Button1,
    /// Button 2 pressed (confirm / start)
    Button2,
    /// Periodic timer tick (half a second)
    Tick,
}

impl Event {
    /// All events, in dispatch order
    pub const ALL: [Event; 3] = [Event::Button1, Event::Button2, Event::Tick];
}
