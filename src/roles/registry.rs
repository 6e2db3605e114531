//! Role registry for configuration lookup.
//!
//! The registry is a compile-time table indexed by `Role`, so every lookup
//! succeeds and no mutation path exists. It is shared process-wide through
//! `REGISTRY` and safe for any number of concurrent readers.

use rustc_hash::FxHashSet;

use super::definition::{Faction, NightAbility, Role, RoleConfig};

/// Process-wide role table.
pub static REGISTRY: RoleRegistry = RoleRegistry {
    configs: [
        RoleConfig::new(
            Role::Villager,
            "Villager",
            Faction::Village,
            "A regular villager with no special abilities. Vote during the day to eliminate suspects.",
        )
        .unlimited()
        .visible(),
        RoleConfig::new(
            Role::Mafia,
            "Mafia",
            Faction::Mafia,
            "Member of the Mafia. Eliminate villagers at night. Know other Mafia members.",
        )
        .with_night_ability(NightAbility::Kill)
        .unlimited(),
        RoleConfig::new(
            Role::Doctor,
            "Doctor",
            Faction::Village,
            "Protects one player each night from elimination. Cannot protect self.",
        )
        .with_night_ability(NightAbility::Protect),
        RoleConfig::new(
            Role::Detective,
            "Detective",
            Faction::Village,
            "Investigates one player each night to learn their alignment (Village/Mafia/Neutral).",
        )
        .with_night_ability(NightAbility::Investigate),
        RoleConfig::new(
            Role::Jester,
            "Jester",
            Faction::Neutral,
            "Wins alone by getting voted out during the day phase.",
        ),
        RoleConfig::new(
            Role::SerialKiller,
            "Serial Killer",
            Faction::Neutral,
            "Eliminates one player each night. Wins if they are the last player alive.",
        )
        .with_night_ability(NightAbility::Kill),
        RoleConfig::new(
            Role::Lover,
            "Lover",
            Faction::Village,
            "Paired with another player. If one lover dies, the other dies too.",
        )
        .with_max_count(2),
        RoleConfig::new(
            Role::Bodyguard,
            "Bodyguard",
            Faction::Village,
            "Protects one player each night, blocking their special abilities as well.",
        )
        .with_night_ability(NightAbility::Guard),
        RoleConfig::new(
            Role::Witch,
            "Witch",
            Faction::Village,
            "Has two potions: one to save and one to kill. Can use during night.",
        )
        .with_night_ability(NightAbility::Potion),
        RoleConfig::new(
            Role::Accountant,
            "Accountant",
            Faction::Village,
            "Each night, learns how many Mafia members remain alive.",
        )
        .with_night_ability(NightAbility::Count),
    ],
};

/// Registry of role configurations.
///
/// Entries are stored in `Role::ALL` order.
///
/// ## Example
///
/// ```
/// use mafia_rules::roles::{Faction, Role, REGISTRY};
///
/// let neutral = REGISTRY.roles_by_faction(Faction::Neutral);
/// assert!(neutral.contains(&Role::Jester));
/// assert!(neutral.contains(&Role::SerialKiller));
/// assert_eq!(neutral.len(), 2);
/// ```
#[derive(Debug)]
pub struct RoleRegistry {
    configs: [RoleConfig; Role::COUNT],
}

impl RoleRegistry {
    /// Get the configuration for a role.
    #[must_use]
    pub fn get(&self, role: Role) -> &RoleConfig {
        &self.configs[role.index()]
    }

    /// Every role whose faction matches.
    #[must_use]
    pub fn roles_by_faction(&self, faction: Faction) -> FxHashSet<Role> {
        self.find(|c| c.faction == faction).map(|c| c.role).collect()
    }

    /// Whether the role acts during the night.
    #[must_use]
    pub fn can_perform_night_action(&self, role: Role) -> bool {
        self.get(role).has_night_ability()
    }

    /// Roles that have a night ability.
    pub fn night_roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.find(RoleConfig::has_night_ability).map(|c| c.role)
    }

    /// Number of registered roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Always false; the table is total over `Role`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Iterate over all role configurations.
    pub fn iter(&self) -> impl Iterator<Item = &RoleConfig> {
        self.configs.iter()
    }

    /// Find roles matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &RoleConfig>
    where
        F: Fn(&RoleConfig) -> bool,
    {
        self.configs.iter().filter(move |c| predicate(c))
    }
}

/// Get the configuration for a role from the global registry.
#[must_use]
pub fn role_config(role: Role) -> &'static RoleConfig {
    REGISTRY.get(role)
}

/// Every role in `faction`, from the global registry.
#[must_use]
pub fn roles_by_faction(faction: Faction) -> FxHashSet<Role> {
    REGISTRY.roles_by_faction(faction)
}

/// Whether `role` has a night ability, from the global registry.
#[must_use]
pub fn can_perform_night_action(role: Role) -> bool {
    REGISTRY.can_perform_night_action(role)
}
