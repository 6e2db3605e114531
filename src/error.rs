//! Error types for role parsing, game setup, and configuration.
//!
//! The win-condition evaluator itself is infallible; these errors come
//! from the edges where untyped input enters the kernel.

use crate::core::PlayerId;
use crate::roles::Role;

/// A role name that does not match any entry in the registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: '{0}'")]
pub struct UnknownRole(pub String);

/// Errors raised while validating a role deck or assigning it to seats.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("{count} roles is below the minimum of {min} players")]
    TooFewPlayers { count: usize, min: usize },

    #[error("{count} roles exceeds the maximum of {max} players")]
    TooManyPlayers { count: usize, max: usize },

    #[error("{role} appears {count} times but at most {max} are allowed")]
    RoleLimitExceeded {
        role: Role,
        count: usize,
        max: u8,
    },

    #[error("deck contains no Mafia")]
    NoMafia,

    #[error("deck has {roles} roles for {seats} seats")]
    SeatMismatch { roles: usize, seats: usize },

    #[error("{0} is seated more than once")]
    DuplicateSeat(PlayerId),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A serialized verdict whose winner disagrees with its ended flag.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("has_ended is {has_ended} but winning_faction is {winning_faction:?}")]
pub struct InconsistentVerdict {
    pub has_ended: bool,
    pub winning_faction: Option<crate::roles::Faction>,
}

/// Errors raised by `RulesConfig::validate`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("min_players must be at least 1")]
    ZeroMinPlayers,

    #[error("min_players ({min}) is greater than max_players ({max})")]
    InvertedPlayerRange { min: usize, max: usize },

    #[error("{0} phase has zero duration")]
    ZeroDuration(crate::core::Phase),
}
