//! Game-end evaluation.
//!
//! The session calls `check_game_end` after every elimination or phase
//! change. Evaluation is a pure, single pass over the roster: it holds
//! no state between calls and performs no I/O, so any number of sessions
//! may evaluate concurrently.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::error::InconsistentVerdict;
use crate::roles::Faction;

use super::conditions::{first_match, EvaluationContext, WinConditions, WinRule, STANDARD_RULES};
use super::elimination::Elimination;
use super::tally::FactionTally;

/// Verdict of one evaluation.
///
/// A winning faction is present exactly when the game has ended.
/// Deserialization rejects records that break this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameEndResult")]
pub struct GameEndResult {
    has_ended: bool,
    winning_faction: Option<Faction>,
}

impl GameEndResult {
    /// The game continues.
    #[must_use]
    pub const fn ongoing() -> Self {
        Self {
            has_ended: false,
            winning_faction: None,
        }
    }

    /// The game is over and `faction` won.
    #[must_use]
    pub const fn won_by(faction: Faction) -> Self {
        Self {
            has_ended: true,
            winning_faction: Some(faction),
        }
    }

    #[must_use]
    pub const fn has_ended(&self) -> bool {
        self.has_ended
    }

    /// Winning faction, `None` while the game continues.
    #[must_use]
    pub const fn winning_faction(&self) -> Option<Faction> {
        self.winning_faction
    }

    /// Check if a faction won.
    #[must_use]
    pub fn is_winner(&self, faction: Faction) -> bool {
        self.winning_faction == Some(faction)
    }
}

/// Unchecked wire form of `GameEndResult`.
#[derive(Deserialize)]
struct RawGameEndResult {
    has_ended: bool,
    #[serde(default)]
    winning_faction: Option<Faction>,
}

impl TryFrom<RawGameEndResult> for GameEndResult {
    type Error = InconsistentVerdict;

    fn try_from(raw: RawGameEndResult) -> Result<Self, Self::Error> {
        match (raw.has_ended, raw.winning_faction) {
            (false, None) => Ok(Self::ongoing()),
            (true, Some(faction)) => Ok(Self::won_by(faction)),
            (has_ended, winning_faction) => Err(InconsistentVerdict {
                has_ended,
                winning_faction,
            }),
        }
    }
}

impl From<Option<&WinRule>> for GameEndResult {
    fn from(rule: Option<&WinRule>) -> Self {
        rule.map_or_else(Self::ongoing, |r| Self::won_by(r.winner))
    }
}

/// Evaluate the standard rules against a roster snapshot.
///
/// Without an elimination signal the Jester rule cannot fire; use
/// `check_game_end_after` when the triggering event is known.
///
/// ```
/// use mafia_rules::core::{Player, PlayerId};
/// use mafia_rules::roles::{Faction, Role};
/// use mafia_rules::rules::check_game_end;
///
/// let players = vec![
///     Player::new(PlayerId::new(0), "a", Role::Villager),
///     Player::new(PlayerId::new(1), "b", Role::Mafia),
/// ];
/// let result = check_game_end(&players);
/// assert!(result.has_ended());
/// assert_eq!(result.winning_faction(), Some(Faction::Mafia));
/// ```
#[must_use]
pub fn check_game_end(players: &[Player]) -> GameEndResult {
    evaluate(&STANDARD_RULES, players, None)
}

/// Evaluate the standard rules, knowing which elimination just happened.
#[must_use]
pub fn check_game_end_after(players: &[Player], elimination: &Elimination) -> GameEndResult {
    evaluate(&STANDARD_RULES, players, Some(elimination))
}

impl WinConditions {
    /// Evaluate this rule list against a roster snapshot.
    #[must_use]
    pub fn check(&self, players: &[Player], elimination: Option<&Elimination>) -> GameEndResult {
        evaluate(self.as_slice(), players, elimination)
    }
}

fn evaluate(
    rules: &[WinRule],
    players: &[Player],
    elimination: Option<&Elimination>,
) -> GameEndResult {
    let tally = FactionTally::from_players(players);
    let ctx = EvaluationContext {
        players,
        tally: &tally,
        last_elimination: elimination,
    };
    let rule = first_match(rules, &ctx);
    if let Some(rule) = rule {
        tracing::debug!(
            rule = rule.name,
            winner = %rule.winner,
            village = tally.alive(Faction::Village),
            mafia = tally.alive(Faction::Mafia),
            neutral = tally.alive(Faction::Neutral),
            "game over"
        );
    }
    GameEndResult::from(rule)
}
