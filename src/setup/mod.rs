//! Game setup: dealing roles and ingesting rosters.
//!
//! - `RoleDeck` / `assign_roles`: validate a role composition and deal it
//!   deterministically to seats
//! - `ingest_roster`: turn wire records into typed players, reporting the
//!   ones that could not be classified

pub mod deck;
pub mod roster;

pub use deck::{assign_roles, RoleDeck};
pub use roster::{ingest_roster, IngestedRoster, RosterDiagnostic};
