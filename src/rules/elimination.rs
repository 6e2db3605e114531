//! Elimination events supplied by the session.
//!
//! Some win conditions depend on how a player died, not just on who is
//! still alive. The session passes the most recent elimination alongside
//! the roster so those rules can be decided.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// How a player left the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EliminationCause {
    /// Voted out during the day.
    DayVote,
    /// Killed at night (Mafia, Serial Killer).
    NightKill,
    /// Killed by the Witch's potion.
    Potion,
    /// Died because their Lover died.
    LoverHeartbreak,
    Other,
}

impl fmt::Display for EliminationCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EliminationCause::DayVote => write!(f, "day vote"),
            EliminationCause::NightKill => write!(f, "night kill"),
            EliminationCause::Potion => write!(f, "potion"),
            EliminationCause::LoverHeartbreak => write!(f, "lover heartbreak"),
            EliminationCause::Other => write!(f, "other"),
        }
    }
}

/// The elimination that just happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elimination {
    pub player: PlayerId,
    pub cause: EliminationCause,
}

impl Elimination {
    #[must_use]
    pub const fn new(player: PlayerId, cause: EliminationCause) -> Self {
        Self { player, cause }
    }

    /// Shorthand for a day-vote elimination.
    #[must_use]
    pub const fn day_vote(player: PlayerId) -> Self {
        Self::new(player, EliminationCause::DayVote)
    }

    #[must_use]
    pub fn is_day_vote(&self) -> bool {
        self.cause == EliminationCause::DayVote
    }
}
