//! Role decks: the multiset of roles dealt at game start.
//!
//! A deck is checked against the rules configuration (player range) and
//! the registry (per-role holder limits) before it is dealt.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Player, PlayerId, RulesConfig};
use crate::error::SetupError;
use crate::roles::{Faction, Role};

/// Roles to deal, one per seat.
///
/// ## Example
///
/// ```
/// use mafia_rules::core::RulesConfig;
/// use mafia_rules::roles::Role;
/// use mafia_rules::setup::RoleDeck;
///
/// let deck = RoleDeck::new()
///     .with(Role::Villager, 3)
///     .with(Role::Mafia, 2)
///     .with(Role::Doctor, 1);
///
/// assert_eq!(deck.len(), 6);
/// assert!(deck.validate(&RulesConfig::default()).is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDeck {
    roles: Vec<Role>,
}

impl RoleDeck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` copies of a role (builder pattern).
    #[must_use]
    pub fn with(mut self, role: Role, count: usize) -> Self {
        self.roles.extend(std::iter::repeat(role).take(count));
        self
    }

    /// How many copies of `role` the deck holds.
    #[must_use]
    pub fn count(&self, role: Role) -> usize {
        self.roles.iter().filter(|&&r| r == role).count()
    }

    /// Copies per role, for roles present in the deck.
    #[must_use]
    pub fn counts(&self) -> FxHashMap<Role, usize> {
        let mut counts = FxHashMap::default();
        for &role in &self.roles {
            *counts.entry(role).or_insert(0) += 1;
        }
        counts
    }

    /// Roles belonging to `faction`, counting duplicates.
    #[must_use]
    pub fn faction_size(&self, faction: Faction) -> usize {
        self.roles.iter().filter(|r| r.faction() == faction).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.iter().copied()
    }

    /// Check the deck can start a game under `config`.
    pub fn validate(&self, config: &RulesConfig) -> Result<(), SetupError> {
        config.validate()?;

        let count = self.len();
        if count < config.min_players {
            return Err(SetupError::TooFewPlayers {
                count,
                min: config.min_players,
            });
        }
        if count > config.max_players {
            return Err(SetupError::TooManyPlayers {
                count,
                max: config.max_players,
            });
        }

        // Role::ALL order keeps the reported violation stable.
        let counts = self.counts();
        for role in Role::ALL {
            let held = counts.get(&role).copied().unwrap_or(0);
            let config = role.config();
            if let Some(max) = config.max_count.filter(|_| !config.allows(held)) {
                return Err(SetupError::RoleLimitExceeded {
                    role,
                    count: held,
                    max,
                });
            }
        }

        if self.faction_size(Faction::Mafia) == 0 {
            return Err(SetupError::NoMafia);
        }
        Ok(())
    }
}

impl FromIterator<Role> for RoleDeck {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self {
            roles: iter.into_iter().collect(),
        }
    }
}

/// Deal a validated deck to the given seats.
///
/// The deck is shuffled with `rng`, so the same seed, seats, and deck
/// always produce the same assignment. Every player starts alive and
/// unrevealed.
pub fn assign_roles<S>(
    seats: S,
    deck: &RoleDeck,
    config: &RulesConfig,
    rng: &mut GameRng,
) -> Result<Vec<Player>, SetupError>
where
    S: IntoIterator<Item = (PlayerId, String)>,
{
    let seats: Vec<_> = seats.into_iter().collect();

    let mut seen = FxHashSet::default();
    if let Some(&(dup, _)) = seats.iter().find(|(id, _)| !seen.insert(*id)) {
        return Err(SetupError::DuplicateSeat(dup));
    }

    deck.validate(config)?;
    if deck.len() != seats.len() {
        return Err(SetupError::SeatMismatch {
            roles: deck.len(),
            seats: seats.len(),
        });
    }

    let mut roles = deck.roles.clone();
    rng.shuffle(&mut roles);

    tracing::debug!(seats = seats.len(), seed = rng.seed(), "dealt roles");

    Ok(seats
        .into_iter()
        .zip(roles)
        .map(|((id, name), role)| Player::new(id, name, role))
        .collect())
}
