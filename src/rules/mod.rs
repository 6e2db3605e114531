//! Win-condition evaluation.
//!
//! - `FactionTally`: living players partitioned by faction
//! - `WinRule` / `WinConditions`: ordered, first-match-wins terminal conditions
//! - `Elimination`: the event that just happened, for cause-dependent rules
//! - `check_game_end`: evaluate the standard rules against a roster
//!
//! The kernel never interprets night abilities; it only reads the roster
//! the session hands it.

pub mod conditions;
pub mod elimination;
pub mod evaluator;
pub mod tally;

pub use conditions::{
    EvaluationContext, WinConditions, WinPredicate, WinRule, JESTER_DAY_VOTE, MAFIA_MAJORITY,
    STANDARD_RULES, VILLAGE_CLEAR,
};
pub use elimination::{Elimination, EliminationCause};
pub use evaluator::{check_game_end, check_game_end_after, GameEndResult};
pub use tally::FactionTally;
