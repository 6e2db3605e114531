//! Core types: players, configuration, phases, RNG.
//!
//! These are the pieces a session hands to the kernel. Nothing here knows
//! about win conditions.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{
    Phase, PhaseTimings, RulesConfig, DAY_PHASE_DURATION, DISCUSSION_DURATION, MAX_PLAYERS,
    MIN_PLAYERS, NIGHT_PHASE_DURATION, VOTING_DURATION,
};
pub use player::{Player, PlayerId, PlayerRecord};
pub use rng::{GameRng, GameRngState};
