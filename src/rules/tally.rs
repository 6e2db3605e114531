//! Alive buckets: living players partitioned by faction.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Player, PlayerId};
use crate::roles::Faction;

type Bucket = SmallVec<[PlayerId; 8]>;

/// Living players grouped by faction, recomputed on every evaluation.
///
/// ```
/// use mafia_rules::core::{Player, PlayerId};
/// use mafia_rules::roles::{Faction, Role};
/// use mafia_rules::rules::FactionTally;
///
/// let players = vec![
///     Player::new(PlayerId::new(0), "a", Role::Doctor),
///     Player::new(PlayerId::new(1), "b", Role::Mafia),
///     Player::new(PlayerId::new(2), "c", Role::Villager).eliminated(),
/// ];
/// let tally = FactionTally::from_players(&players);
/// assert_eq!(tally.alive(Faction::Village), 1);
/// assert_eq!(tally.alive(Faction::Mafia), 1);
/// assert_eq!(tally.total_alive(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionTally {
    buckets: [Bucket; 3],
}

impl FactionTally {
    /// Partition the living players of a roster. Dead players are skipped.
    #[must_use]
    pub fn from_players(players: &[Player]) -> Self {
        let mut tally = Self::default();
        for player in players.iter().filter(|p| p.is_alive) {
            tally.buckets[player.faction().index()].push(player.id);
        }
        tally
    }

    /// Number of living players in `faction`.
    #[must_use]
    pub fn alive(&self, faction: Faction) -> usize {
        self.buckets[faction.index()].len()
    }

    /// Ids of living players in `faction`, in roster order.
    #[must_use]
    pub fn members(&self, faction: Faction) -> &[PlayerId] {
        &self.buckets[faction.index()]
    }

    #[must_use]
    pub fn total_alive(&self) -> usize {
        self.buckets.iter().map(SmallVec::len).sum()
    }
}
