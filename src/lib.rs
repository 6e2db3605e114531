//! # mafia-rules
//!
//! Rules kernel for a Mafia-style social deduction game.
//!
//! The kernel owns two things: the catalog of roles (faction, night
//! ability label, holder limits, visibility) and the decision of when a
//! game is over and which faction won. Sessions, networking, timers, and
//! night-action resolution live elsewhere and feed roster snapshots in.
//!
//! ## Design Principles
//!
//! 1. **Closed role set**: `Role` is an enum and the registry is a
//!    compile-time table, so a role lookup cannot fail.
//!
//! 2. **Pure evaluation**: `check_game_end` reads a roster slice and
//!    returns a verdict. No hidden state, no I/O, safe to call from any
//!    number of sessions at once.
//!
//! 3. **Ordered rules**: win conditions are a first-match-wins list of
//!    named predicates, so new terminal conditions slot in without
//!    touching the evaluator.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, phase timings, RNG
//! - `roles`: Role definitions and the static registry
//! - `rules`: Faction tally, win conditions, evaluator
//! - `setup`: Role decks, dealing, roster ingestion
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod roles;
pub mod rules;
pub mod setup;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState, Phase, PhaseTimings, Player, PlayerId, PlayerRecord, RulesConfig,
    DAY_PHASE_DURATION, DISCUSSION_DURATION, MAX_PLAYERS, MIN_PLAYERS, NIGHT_PHASE_DURATION,
    VOTING_DURATION,
};

pub use crate::error::{ConfigError, InconsistentVerdict, SetupError, UnknownRole};

pub use crate::roles::{
    can_perform_night_action, role_config, roles_by_faction, Faction, NightAbility, Role,
    RoleConfig, RoleRegistry, REGISTRY,
};

pub use crate::rules::{
    check_game_end, check_game_end_after, Elimination, EliminationCause, EvaluationContext,
    FactionTally, GameEndResult, WinConditions, WinRule,
};

pub use crate::setup::{assign_roles, ingest_roster, IngestedRoster, RoleDeck, RosterDiagnostic};
