//! Workout phase definition

/// Workout phases
///
/// Exactly one phase is active at a time. Phases only move forward,
/// with Programming -> Waiting -> WarmUp driven by button 2 and the rest
/// driven by the per-phase countdown reaching zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Session length can be adjusted with button 1
    Programming,
    /// Length confirmed, waiting for button 2 to start
    Waiting,
    /// Warm-up countdown
    WarmUp,
    /// Work segment of a work/recovery pair
    Working,
    /// Recovery segment of a work/recovery pair
    Recovering,
    /// Cool-down countdown
    Cooling,
    /// Session finished; terminal until power-cycle
    Done,
}

impl Phase {
    /// Phase entered at power-on
    pub const INITIAL: Phase = Phase::Programming;

    /// Check if ticks count down in this phase
    ///
    /// These are also the phases in which button 1 toggles pause.
    pub fn is_counting(&self) -> bool {
        matches!(
            self,
            Phase::WarmUp | Phase::Working | Phase::Recovering | Phase::Cooling
        )
    }

    /// Check if the session length may still be changed
    pub fn is_configurable(&self) -> bool {
        matches!(self, Phase::Programming)
    }

    /// Check if this is the terminal phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Done)
    }
}
