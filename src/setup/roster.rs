//! Roster ingestion from untyped player records.
//!
//! Records that cannot be classified are dropped and reported back to the
//! caller as diagnostics. Ingestion itself never fails, so a bad record
//! degrades to "game continues" instead of aborting evaluation.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, PlayerRecord};
use crate::rules::{check_game_end, check_game_end_after, Elimination, GameEndResult};

/// Why a record was left out of the roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum RosterDiagnostic {
    #[error("{player} has unknown role '{role}'")]
    UnknownRole { player: PlayerId, role: String },

    #[error("{0} appears more than once; later record dropped")]
    DuplicateId(PlayerId),
}

impl RosterDiagnostic {
    /// Player the diagnostic is about.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            RosterDiagnostic::UnknownRole { player, .. } => *player,
            RosterDiagnostic::DuplicateId(player) => *player,
        }
    }
}

/// Typed roster plus everything that was dropped on the way in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IngestedRoster {
    pub players: Vec<Player>,
    pub diagnostics: Vec<RosterDiagnostic>,
}

impl IngestedRoster {
    /// Whether every record made it into the roster.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Evaluate the standard rules against the classified players.
    #[must_use]
    pub fn check_game_end(&self) -> GameEndResult {
        check_game_end(&self.players)
    }

    /// Evaluate the standard rules, knowing which elimination just happened.
    #[must_use]
    pub fn check_game_end_after(&self, elimination: &Elimination) -> GameEndResult {
        check_game_end_after(&self.players, elimination)
    }
}

/// Convert wire records into typed players.
///
/// ```
/// use mafia_rules::core::{PlayerId, PlayerRecord};
/// use mafia_rules::setup::{ingest_roster, RosterDiagnostic};
///
/// let records: Vec<PlayerRecord> = serde_json::from_str(r#"[
///     {"id": 1, "name": "Ann", "role": "Villager"},
///     {"id": 2, "name": "Bob", "role": "Necromancer"}
/// ]"#).unwrap();
///
/// let roster = ingest_roster(records);
/// assert_eq!(roster.players.len(), 1);
/// assert_eq!(roster.diagnostics[0].player(), PlayerId::new(2));
/// ```
pub fn ingest_roster<I>(records: I) -> IngestedRoster
where
    I: IntoIterator<Item = PlayerRecord>,
{
    let mut roster = IngestedRoster::default();
    let mut seen = FxHashSet::default();

    for record in records {
        let id = record.id;
        if !seen.insert(id) {
            tracing::warn!(player = %id, "dropping duplicate roster record");
            roster.diagnostics.push(RosterDiagnostic::DuplicateId(id));
            continue;
        }

        let role = record.role.clone();
        match Player::try_from(record) {
            Ok(player) => roster.players.push(player),
            Err(err) => {
                tracing::warn!(player = %id, %err, "dropping roster record");
                roster.diagnostics.push(RosterDiagnostic::UnknownRole { player: id, role });
            }
        }
    }

    roster
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::{Faction, Role};

    fn record(id: u32, role: &str, alive: bool) -> PlayerRecord {
        PlayerRecord {
            id: PlayerId::new(id),
            name: format!("p{id}"),
            role: role.to_string(),
            is_alive: alive,
            is_revealed: false,
        }
    }

    #[test]
    fn test_clean_roster() {
        let roster = ingest_roster(vec![
            record(0, "Villager", true),
            record(1, "Serial Killer", true),
            record(2, "mafia", false),
        ]);

        assert!(roster.is_clean());
        assert_eq!(roster.players.len(), 3);
        assert_eq!(roster.players[1].role, Role::SerialKiller);
        assert!(!roster.players[2].is_alive);
    }

    #[test]
    fn test_unknown_role_is_dropped() {
        let roster = ingest_roster(vec![
            record(0, "Villager", true),
            record(1, "Mafia", true),
            record(2, "Vampire", true),
        ]);

        assert_eq!(roster.players.len(), 2);
        assert_eq!(
            roster.diagnostics,
            vec![RosterDiagnostic::UnknownRole {
                player: PlayerId::new(2),
                role: "Vampire".into(),
            }]
        );
        // The vampire does not count toward any faction.
        assert_eq!(roster.check_game_end(), GameEndResult::won_by(Faction::Mafia));
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let roster = ingest_roster(vec![
            record(0, "Doctor", true),
            record(0, "Mafia", true),
        ]);

        assert_eq!(roster.players.len(), 1);
        assert_eq!(roster.players[0].role, Role::Doctor);
        assert_eq!(roster.diagnostics, vec![RosterDiagnostic::DuplicateId(PlayerId::new(0))]);
        assert_eq!(roster.check_game_end(), GameEndResult::won_by(Faction::Village));
    }

    #[test]
    fn test_all_records_bad() {
        let roster = ingest_roster(vec![record(0, "", true), record(1, "???", true)]);
        assert!(roster.players.is_empty());
        assert_eq!(roster.diagnostics.len(), 2);
        assert_eq!(roster.check_game_end(), GameEndResult::ongoing());
    }

    #[test]
    fn test_diagnostic_messages() {
        let d = RosterDiagnostic::UnknownRole {
            player: PlayerId::new(3),
            role: "Ghost".into(),
        };
        assert_eq!(d.to_string(), "Player 3 has unknown role 'Ghost'");
    }
}
