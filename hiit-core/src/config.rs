//! Workout configuration
//!
//! Phase lengths and the session-length adjustment rules. Configuration
//! is compiled in; the only runtime adjustment is the session length
//! stepped with button 1 while programming.

/// Errors found when validating a [`WorkoutConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A phase length is zero
    ZeroLength,
    /// The session or pair step is zero
    ZeroStep,
    /// The default session length is above the ceiling
    DefaultAboveCeiling,
    /// The default pair count is negative; cool-down would never start
    NegativePairs,
}

/// Phase lengths and programming rules, all times in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WorkoutConfig {
    /// Session length at power-on and after wrapping past the ceiling
    pub default_session_s: i32,
    /// Warm-up phase length
    pub warmup_s: i32,
    /// Work segment length
    pub work_s: i32,
    /// Recovery segment length
    pub rest_s: i32,
    /// Cool-down phase length
    pub cool_s: i32,
    /// Work/recovery pairs at power-on and after wrapping
    pub default_pairs: i32,
    /// Session length added per button 1 press
    pub session_step_s: i32,
    /// Pairs added per button 1 press
    pub pairs_step: i32,
    /// Longest programmable session
    pub session_ceiling_s: i32,
}

impl WorkoutConfig {
    /// Short lengths for demonstrating a full session in a few minutes
    pub const DEMO: WorkoutConfig = WorkoutConfig {
        default_session_s: 2 * 60,
        warmup_s: 60,
        work_s: 12,
        rest_s: 7,
        cool_s: 15,
        default_pairs: 2,
        session_step_s: 4 * 60,
        pairs_step: 2,
        session_ceiling_s: 90 * 60,
    };

    /// Training lengths: 10 min warm-up, 90 s work, 30 s rest, 5 min cool-down
    pub const STANDARD: WorkoutConfig = WorkoutConfig {
        default_session_s: 2 * 60,
        warmup_s: 10 * 60,
        work_s: 90,
        rest_s: 30,
        cool_s: 5 * 60,
        default_pairs: 2,
        session_step_s: 4 * 60,
        pairs_step: 2,
        session_ceiling_s: 90 * 60,
    };

    /// Check the configuration for values the session cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lengths = [self.warmup_s, self.work_s, self.rest_s, self.cool_s];
        if lengths.iter().any(|&len| len <= 0) || self.default_session_s <= 0 {
            return Err(ConfigError::ZeroLength);
        }

        if self.session_step_s <= 0 || self.pairs_step <= 0 {
            return Err(ConfigError::ZeroStep);
        }

        if self.default_session_s > self.session_ceiling_s {
            return Err(ConfigError::DefaultAboveCeiling);
        }

        if self.default_pairs < 0 {
            return Err(ConfigError::NegativePairs);
        }

        Ok(())
    }
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self::DEMO
    }
}
