//! Role system: definitions and the static registry.
//!
//! ## Key Types
//!
//! - `Role`: Closed set of playable roles
//! - `Faction`: Village, Mafia, or Neutral
//! - `NightAbility`: Opaque label for a role's night action
//! - `RoleConfig`: Static per-role data
//! - `RoleRegistry`: Compile-time table, shared through `REGISTRY`

pub mod definition;
pub mod registry;

pub use definition::{Faction, NightAbility, Role, RoleConfig};
pub use registry::{can_perform_night_action, role_config, roles_by_faction, RoleRegistry, REGISTRY};
