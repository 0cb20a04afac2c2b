//! Lamp pattern derivation

use crate::state::Phase;

/// Seconds left in a phase below which both lamps flash together
pub const FINAL_COUNTDOWN_S: i32 = 6;

/// Command for a single lamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LampCommand {
    /// Lamp off
    Off,
    /// Lamp on
    On,
    /// Invert the current lamp state
    Toggle,
}

impl LampCommand {
    /// On for `true`, off for `false`
    pub const fn level(on: bool) -> Self {
        if on {
            LampCommand::On
        } else {
            LampCommand::Off
        }
    }
}

/// Commands for both lamps, issued together on each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LampPattern {
    /// Work indicator (flashes while working)
    pub work: LampCommand,
    /// Rest indicator (flashes while recovering)
    pub rest: LampCommand,
}

impl LampPattern {
    /// Both lamps follow the parity together
    pub const fn unison(parity: bool) -> Self {
        Self {
            work: LampCommand::level(parity),
            rest: LampCommand::level(parity),
        }
    }

    /// One lamp on while the other is off, swapping with the parity
    pub const fn alternating(parity: bool) -> Self {
        Self {
            work: LampCommand::level(!parity),
            rest: LampCommand::level(parity),
        }
    }

    /// Both lamps held on
    pub const fn steady() -> Self {
        Self {
            work: LampCommand::On,
            rest: LampCommand::On,
        }
    }
}

/// Derive the lamp pattern for a phase
///
/// Rules are checked in order, first match wins:
/// - Done: both lamps steady on
/// - last five seconds of a counting phase: both flash together
/// - WarmUp, Cooling: lamps alternate
/// - Working: work lamp toggles, rest lamp off
/// - Recovering: rest lamp toggles, work lamp off
///
/// Returns `None` in Programming and Waiting, where the lamps are not
/// driven.
pub fn lamp_pattern(phase: Phase, phase_remaining: i32, parity: bool) -> Option<LampPattern> {
    match phase {
        Phase::Programming | Phase::Waiting => None,
        Phase::Done => Some(LampPattern::steady()),
        _ if phase_remaining < FINAL_COUNTDOWN_S => Some(LampPattern::unison(parity)),
        Phase::WarmUp | Phase::Cooling => Some(LampPattern::alternating(parity)),
        Phase::Working => Some(LampPattern {
            work: LampCommand::Toggle,
            rest: LampCommand::Off,
        }),
        Phase::Recovering => Some(LampPattern {
            work: LampCommand::Off,
            rest: LampCommand::Toggle,
        }),
    }
}
