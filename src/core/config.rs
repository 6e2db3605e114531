//! Game configuration: player limits and phase timings.
//!
//! The defaults come from the named constants below. Sessions that want
//! different limits or timings build a `RulesConfig` (or deserialize one)
//! and pass it to setup; the kernel never reads files or the environment.
//!
//! Durations are data only. The session's scheduler owns the clock.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Minimum number of players required to start a game.
pub const MIN_PLAYERS: usize = 4;

/// Maximum number of players allowed in a game.
pub const MAX_PLAYERS: usize = 16;

/// Duration of the day phase in seconds.
pub const DAY_PHASE_DURATION: u32 = 120;

/// Duration of the night phase in seconds.
pub const NIGHT_PHASE_DURATION: u32 = 30;

/// Duration of the discussion phase in seconds.
pub const DISCUSSION_DURATION: u32 = 60;

/// Duration of the voting phase in seconds.
pub const VOTING_DURATION: u32 = 30;

/// Timed game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Day,
    Night,
    Discussion,
    Voting,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Day, Phase::Night, Phase::Discussion, Phase::Voting];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Day => write!(f, "Day"),
            Phase::Night => write!(f, "Night"),
            Phase::Discussion => write!(f, "Discussion"),
            Phase::Voting => write!(f, "Voting"),
        }
    }
}

/// Length of each phase in whole seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseTimings {
    pub day_secs: u32,
    pub night_secs: u32,
    pub discussion_secs: u32,
    pub voting_secs: u32,
}

impl Default for PhaseTimings {
    fn default() -> Self {
        Self {
            day_secs: DAY_PHASE_DURATION,
            night_secs: NIGHT_PHASE_DURATION,
            discussion_secs: DISCUSSION_DURATION,
            voting_secs: VOTING_DURATION,
        }
    }
}

impl PhaseTimings {
    /// Length of `phase` in seconds.
    #[must_use]
    pub const fn seconds(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Day => self.day_secs,
            Phase::Night => self.night_secs,
            Phase::Discussion => self.discussion_secs,
            Phase::Voting => self.voting_secs,
        }
    }

    /// Length of `phase` as a `Duration`.
    #[must_use]
    pub fn duration(&self, phase: Phase) -> Duration {
        Duration::from_secs(u64::from(self.seconds(phase)))
    }

    /// Set the length of one phase.
    #[must_use]
    pub fn with_seconds(mut self, phase: Phase, secs: u32) -> Self {
        match phase {
            Phase::Day => self.day_secs = secs,
            Phase::Night => self.night_secs = secs,
            Phase::Discussion => self.discussion_secs = secs,
            Phase::Voting => self.voting_secs = secs,
        }
        self
    }
}

/// Complete rules configuration.
///
/// ## Example
///
/// ```
/// use mafia_rules::core::{Phase, RulesConfig};
///
/// let config = RulesConfig::default()
///     .with_player_range(5, 12)
///     .with_phase_seconds(Phase::Night, 45);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.timings.seconds(Phase::Night), 45);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Fewest seats a game may start with.
    pub min_players: usize,

    /// Most seats a game may start with.
    pub max_players: usize,

    pub timings: PhaseTimings,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            timings: PhaseTimings::default(),
        }
    }
}

impl RulesConfig {
    /// Set the allowed player range (inclusive).
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the length of one phase.
    #[must_use]
    pub fn with_phase_seconds(mut self, phase: Phase, secs: u32) -> Self {
        self.timings = self.timings.with_seconds(phase, secs);
        self
    }

    /// Whether `count` seats fall inside the configured range.
    #[must_use]
    pub fn accepts_player_count(&self, count: usize) -> bool {
        (self.min_players..=self.max_players).contains(&count)
    }

    /// Check the configuration is internally consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players == 0 {
            return Err(ConfigError::ZeroMinPlayers);
        }
        if self.min_players > self.max_players {
            return Err(ConfigError::InvertedPlayerRange {
                min: self.min_players,
                max: self.max_players,
            });
        }
        if let Some(phase) = Phase::ALL.into_iter().find(|&p| self.timings.seconds(p) == 0) {
            return Err(ConfigError::ZeroDuration(phase));
        }
        Ok(())
    }
}
