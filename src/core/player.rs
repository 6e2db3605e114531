//! Player identification and per-game player state.
//!
//! ## PlayerId
//!
//! Session-scoped player identifier. The kernel only compares ids; the
//! session decides how they are allocated.
//!
//! ## Player
//!
//! A snapshot of one seat: assigned role plus alive/revealed flags. The
//! session owns and mutates players; the kernel only reads them.
//!
//! ## PlayerRecord
//!
//! Wire form of a player with the role as a string, for rosters that
//! arrive from outside the process. See `setup::ingest_roster`.

use serde::{Deserialize, Serialize};

use crate::roles::{Faction, Role};

/// Player identifier, unique within one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One seat in a game.
///
/// ## Example
///
/// ```
/// use mafia_rules::core::{Player, PlayerId};
/// use mafia_rules::roles::{Faction, Role};
///
/// let p = Player::new(PlayerId::new(3), "Vito", Role::Mafia);
/// assert!(p.is_alive);
/// assert_eq!(p.faction(), Faction::Mafia);
///
/// let dead = p.eliminated();
/// assert!(!dead.is_alive);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    pub name: String,

    /// Assigned at game start and never changed afterwards.
    pub role: Role,

    pub is_alive: bool,

    /// Whether the role is public knowledge for this player.
    pub is_revealed: bool,
}

impl Player {
    /// Create a living, unrevealed player.
    pub fn new(id: PlayerId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            is_alive: true,
            is_revealed: false,
        }
    }

    /// This player marked dead.
    #[must_use]
    pub fn eliminated(mut self) -> Self {
        self.is_alive = false;
        self
    }

    /// This player with their role made public.
    #[must_use]
    pub fn revealed(mut self) -> Self {
        self.is_revealed = true;
        self
    }

    /// Faction of the assigned role.
    #[must_use]
    pub fn faction(&self) -> Faction {
        self.role.faction()
    }

    /// Role as seen by other players.
    ///
    /// Known when the player has been revealed or the role is visible
    /// by definition (Villager).
    #[must_use]
    pub fn public_role(&self) -> Option<Role> {
        (self.is_revealed || self.role.config().is_visible).then_some(self.role)
    }
}

/// Untyped player record as it arrives from a session or a save file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub role: String,
    #[serde(default = "default_alive")]
    pub is_alive: bool,
    #[serde(default)]
    pub is_revealed: bool,
}

fn default_alive() -> bool {
    true
}

impl From<&Player> for PlayerRecord {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            role: player.role.ident().to_string(),
            is_alive: player.is_alive,
            is_revealed: player.is_revealed,
        }
    }
}

impl TryFrom<PlayerRecord> for Player {
    type Error = crate::error::UnknownRole;

    fn try_from(record: PlayerRecord) -> Result<Self, Self::Error> {
        let role = record.role.parse()?;
        Ok(Self {
            id: record.id,
            name: record.name,
            role,
            is_alive: record.is_alive,
            is_revealed: record.is_revealed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnknownRole;

    #[test]
    fn test_player_id_basics() {
        let id = PlayerId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Player 7");
    }

    #[test]
    fn test_public_role() {
        let villager = Player::new(PlayerId::new(0), "Ann", Role::Villager);
        assert_eq!(villager.public_role(), Some(Role::Villager));

        let doctor = Player::new(PlayerId::new(1), "Bob", Role::Doctor);
        assert_eq!(doctor.public_role(), None);
        assert_eq!(doctor.revealed().public_role(), Some(Role::Doctor));
    }

    #[test]
    fn test_record_conversion() {
        let player = Player::new(PlayerId::new(2), "Cid", Role::SerialKiller).eliminated();
        let record = PlayerRecord::from(&player);
        assert_eq!(record.role, "SerialKiller");
        assert!(!record.is_alive);

        let back = Player::try_from(record).unwrap();
        assert_eq!(back, player);
    }

    #[test]
    fn test_record_with_unknown_role() {
        let record = PlayerRecord {
            id: PlayerId::new(4),
            name: "Dee".into(),
            role: "Vampire".into(),
            is_alive: true,
            is_revealed: false,
        };
        assert_eq!(Player::try_from(record), Err(UnknownRole("Vampire".into())));
    }

    #[test]
    fn test_record_defaults_from_json() {
        let record: PlayerRecord =
            serde_json::from_str(r#"{"id": 9, "name": "Eve", "role": "Jester"}"#).unwrap();
        assert!(record.is_alive);
        assert!(!record.is_revealed);
        assert_eq!(record.id, PlayerId::new(9));
    }
}
