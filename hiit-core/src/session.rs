//! Workout session state machine
//!
//! Owns the current phase, the two countdowns (whole session and current
//! phase), the pause flag and the number of work/recovery pairs left.
//! Button and tick handlers mutate the session and issue lamp and display
//! commands through a [`Panel`].
//!
//! # Timekeeping
//!
//! Ticks arrive every half second. A parity bit flips on every tick and
//! both countdowns decrement only when it flips back to `true`, giving a
//! one second logical clock while the lamps still blink at tick rate.
//!
//! The per-phase countdown is checked for zero *before* the decrement,
//! so a phase transition happens on the tick after the countdown shows
//! `00` and the countdown never goes below zero.

use crate::config::WorkoutConfig;
use crate::output::{clock_frame, display_frame, label_frame, lamp_pattern, DisplayText, Panel};
use crate::state::Phase;
use crate::traits::{Lamp, SegmentDisplay};

/// Workout session
#[derive(Debug, Clone)]
pub struct Session {
    config: WorkoutConfig,
    phase: Phase,
    /// Seconds left in the whole session
    total_remaining: i32,
    /// Seconds left in the current phase
    phase_remaining: i32,
    /// Work/recovery pairs left before cool-down
    remaining_pairs: i32,
    paused: bool,
    /// Flips every tick; `true` right after a whole second
    parity: bool,
}

impl Session {
    /// Create a session in Programming with the configured defaults
    pub fn new(config: WorkoutConfig) -> Self {
        Self {
            config,
            phase: Phase::INITIAL,
            total_remaining: config.default_session_s,
            phase_remaining: config.warmup_s,
            remaining_pairs: config.default_pairs,
            paused: false,
            parity: true,
        }
    }

    /// Get the configuration the session runs with
    pub fn config(&self) -> &WorkoutConfig {
        &self.config
    }

    /// Get the current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get the seconds left in the whole session
    pub fn total_remaining(&self) -> i32 {
        self.total_remaining
    }

    /// Get the seconds left in the current phase
    pub fn phase_remaining(&self) -> i32 {
        self.phase_remaining
    }

    /// Get the number of work/recovery pairs left
    ///
    /// Drops to -1 once the last work segment hands over to cool-down.
    pub fn remaining_pairs(&self) -> i32 {
        self.remaining_pairs
    }

    /// Check if the countdown is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Get the half-second parity bit
    pub fn parity(&self) -> bool {
        self.parity
    }

    /// Show the programmed session length at start-up
    pub fn power_on<W, R, D>(&self, panel: &mut Panel<W, R, D>)
    where
        W: Lamp,
        R: Lamp,
        D: SegmentDisplay,
    {
        panel.show(&clock_frame(self.total_remaining, true));
    }

    /// Handle a button 1 press
    ///
    /// - Programming: lengthen the session, wrapping to the defaults past
    ///   the ceiling, and show the new length
    /// - counting phases: toggle pause
    /// - Waiting, Done: ignored
    pub fn on_button1<W, R, D>(&mut self, panel: &mut Panel<W, R, D>)
    where
        W: Lamp,
        R: Lamp,
        D: SegmentDisplay,
    {
        if self.phase.is_configurable() {
            self.lengthen();
            panel.show(&clock_frame(self.total_remaining, true));
        } else if self.phase.is_counting() {
            self.paused = !self.paused;
        }
    }

    /// Handle a button 2 press
    ///
    /// Confirms the length (Programming -> Waiting) and starts the
    /// warm-up (Waiting -> WarmUp). Ignored in every other phase.
    pub fn on_button2<W, R, D>(&mut self, panel: &mut Panel<W, R, D>)
    where
        W: Lamp,
        R: Lamp,
        D: SegmentDisplay,
    {
        match self.phase {
            Phase::Programming => {
                self.phase = Phase::Waiting;
                panel.show(&label_frame(DisplayText::START));
            }
            Phase::Waiting => {
                self.enter(Phase::WarmUp, self.config.warmup_s);
            }
            Phase::WarmUp | Phase::Working | Phase::Recovering | Phase::Cooling | Phase::Done => {}
        }
    }

    /// Handle a timer tick
    ///
    /// Ticks are ignored in Programming, Waiting and Done. Otherwise:
    /// 1. advance the phase if its countdown has reached zero
    /// 2. drive the lamps for the (possibly new) phase
    /// 3. flip the parity; on a whole second, count down unless paused
    /// 4. refresh the display
    pub fn on_tick<W, R, D>(&mut self, panel: &mut Panel<W, R, D>)
    where
        W: Lamp,
        R: Lamp,
        D: SegmentDisplay,
    {
        if !self.phase.is_counting() {
            return;
        }

        if self.phase_remaining == 0 {
            self.advance(panel);
        }

        if let Some(pattern) = lamp_pattern(self.phase, self.phase_remaining, self.parity) {
            panel.apply(pattern);
        }

        self.parity = !self.parity;
        if self.parity && !self.paused && self.phase.is_counting() {
            self.total_remaining -= 1;
            self.phase_remaining -= 1;
        }

        if let Some(frame) = display_frame(
            self.phase,
            self.total_remaining,
            self.phase_remaining,
            self.parity,
        ) {
            panel.show(&frame);
        }
    }

    /// Add one programming step, wrapping back to the defaults
    fn lengthen(&mut self) {
        self.total_remaining += self.config.session_step_s;
        self.remaining_pairs += self.config.pairs_step;

        if self.total_remaining > self.config.session_ceiling_s {
            self.total_remaining = self.config.default_session_s;
            self.remaining_pairs = self.config.default_pairs;
        }
    }

    /// Move to the next phase once the current countdown has expired
    fn advance<W, R, D>(&mut self, panel: &mut Panel<W, R, D>)
    where
        W: Lamp,
        R: Lamp,
        D: SegmentDisplay,
    {
        let cfg = self.config;

        match self.phase {
            Phase::WarmUp => self.enter(Phase::Working, cfg.work_s),
            Phase::Working => {
                if self.remaining_pairs == 0 {
                    self.enter(Phase::Cooling, cfg.cool_s);
                } else {
                    self.enter(Phase::Recovering, cfg.rest_s);
                }
                self.remaining_pairs -= 1;
            }
            Phase::Recovering => {
                if self.remaining_pairs == 0 {
                    self.enter(Phase::Cooling, cfg.cool_s);
                    panel.show(&label_frame(DisplayText::COOL));
                } else {
                    self.enter(Phase::Working, cfg.work_s);
                }
            }
            Phase::Cooling => self.enter(Phase::Done, 0),
            Phase::Programming | Phase::Waiting | Phase::Done => {}
        }
    }

    fn enter(&mut self, phase: Phase, length_s: i32) {
        self.phase = phase;
        self.phase_remaining = length_s;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(WorkoutConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::LampCommand;
    use crate::testing::{panel, MockPanel};

    fn started(panel: &mut MockPanel) -> Session {
        let mut session = Session::default();
        session.on_button2(panel);
        session.on_button2(panel);
        session
    }

    fn tick_n(session: &mut Session, panel: &mut MockPanel, n: usize) {
        for _ in 0..n {
            session.on_tick(panel);
        }
    }

    #[test]
    fn test_new_session() {
        let session = Session::default();
        assert_eq!(session.phase(), Phase::Programming);
        assert_eq!(session.total_remaining(), 120);
        assert_eq!(session.remaining_pairs(), 2);
        assert!(!session.is_paused());
        assert!(session.parity());
    }

    #[test]
    fn test_power_on_shows_total() {
        let mut panel = panel();
        Session::default().power_on(&mut panel);
        assert_eq!(panel.display.shown(), "   200");
        assert!(panel.display.separator);
    }

    #[test]
    fn test_button1_lengthens_session() {
        let mut panel = panel();
        let mut session = Session::default();

        session.on_button1(&mut panel);

        assert_eq!(session.total_remaining(), 360);
        assert_eq!(session.remaining_pairs(), 4);
        assert_eq!(panel.display.shown(), "   600");
    }

    #[test]
    fn test_button1_wraps_past_ninety_minutes() {
        let mut panel = panel();
        let mut session = Session::default();

        // 120 + 22 * 240 = 5400, exactly the ceiling
        for _ in 0..22 {
            session.on_button1(&mut panel);
        }
        assert_eq!(session.total_remaining(), 5400);
        assert_eq!(session.remaining_pairs(), 46);

        session.on_button1(&mut panel);
        assert_eq!(session.total_remaining(), 120);
        assert_eq!(session.remaining_pairs(), 2);
        assert_eq!(panel.display.shown(), "   200");
    }

    #[test]
    fn test_button2_confirms_then_starts() {
        let mut panel = panel();
        let mut session = Session::default();

        session.on_button2(&mut panel);
        assert_eq!(session.phase(), Phase::Waiting);
        assert_eq!(panel.display.shown(), " START");
        assert!(!panel.display.separator);

        session.on_button2(&mut panel);
        assert_eq!(session.phase(), Phase::WarmUp);
        assert_eq!(session.phase_remaining(), 60);
    }

    #[test]
    fn test_button1_ignored_while_waiting() {
        let mut panel = panel();
        let mut session = Session::default();
        session.on_button2(&mut panel);

        session.on_button1(&mut panel);

        assert_eq!(session.phase(), Phase::Waiting);
        assert_eq!(session.total_remaining(), 120);
        assert!(!session.is_paused());
    }

    #[test]
    fn test_button2_ignored_once_started() {
        let mut panel = panel();
        let mut session = started(&mut panel);

        session.on_button2(&mut panel);
        assert_eq!(session.phase(), Phase::WarmUp);
    }

    #[test]
    fn test_ticks_ignored_before_start() {
        let mut panel = panel();
        let mut session = Session::default();

        tick_n(&mut session, &mut panel, 10);
        session.on_button2(&mut panel);
        tick_n(&mut session, &mut panel, 10);

        assert_eq!(session.total_remaining(), 120);
        assert!(session.parity());
        assert_eq!(panel.work.commands, 0);
        assert_eq!(panel.rest.commands, 0);
    }

    #[test]
    fn test_two_ticks_per_second() {
        let mut panel = panel();
        let mut session = started(&mut panel);

        session.on_tick(&mut panel);
        assert_eq!(session.phase_remaining(), 60);
        assert!(!session.parity());

        session.on_tick(&mut panel);
        assert_eq!(session.phase_remaining(), 59);
        assert_eq!(session.total_remaining(), 119);
        assert_eq!(panel.display.shown(), "    59");
        assert!(panel.display.separator);

        session.on_tick(&mut panel);
        assert!(!panel.display.separator);
    }

    #[test]
    fn test_pause_freezes_countdown_not_lamps() {
        let mut panel = panel();
        let mut session = started(&mut panel);
        tick_n(&mut session, &mut panel, 4);

        session.on_button1(&mut panel);
        assert!(session.is_paused());

        let before = (session.total_remaining(), session.phase_remaining());
        let work_commands = panel.work.commands;
        let lit = panel.rest.lit;

        session.on_tick(&mut panel);
        assert_ne!(panel.rest.lit, lit);
        tick_n(&mut session, &mut panel, 9);

        assert_eq!((session.total_remaining(), session.phase_remaining()), before);
        assert_eq!(panel.work.commands, work_commands + 10);

        session.on_button1(&mut panel);
        assert!(!session.is_paused());
    }

    #[test]
    fn test_warmup_hands_over_to_work() {
        let mut panel = panel();
        let mut session = started(&mut panel);

        tick_n(&mut session, &mut panel, 120);
        assert_eq!(session.phase(), Phase::WarmUp);
        assert_eq!(session.phase_remaining(), 0);
        assert_eq!(panel.display.shown(), "    00");

        session.on_tick(&mut panel);
        assert_eq!(session.phase(), Phase::Working);
        assert_eq!(session.phase_remaining(), 12);
        assert_eq!(panel.work.last, Some(LampCommand::Toggle));
        assert_eq!(panel.rest.last, Some(LampCommand::Off));
    }

    #[test]
    fn test_working_decrements_pairs() {
        let mut panel = panel();
        let mut session = started(&mut panel);

        // warm-up, then the first work segment counted down to zero
        tick_n(&mut session, &mut panel, 120 + 24);
        assert_eq!(session.phase(), Phase::Working);
        assert_eq!(session.phase_remaining(), 0);
        assert_eq!(session.remaining_pairs(), 2);

        session.on_tick(&mut panel);
        assert_eq!(session.phase(), Phase::Recovering);
        assert_eq!(session.phase_remaining(), 7);
        assert_eq!(session.remaining_pairs(), 1);
    }

    #[test]
    fn test_last_five_seconds_flash_together() {
        let mut panel = panel();
        let mut session = started(&mut panel);

        // 55 whole seconds into the warm-up
        tick_n(&mut session, &mut panel, 110);
        assert_eq!(session.phase_remaining(), 5);

        session.on_tick(&mut panel);
        assert_eq!(panel.work.lit, panel.rest.lit);
        session.on_tick(&mut panel);
        assert_eq!(panel.work.lit, panel.rest.lit);
    }
}
