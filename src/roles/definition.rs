//! Role definitions - static role data.
//!
//! `RoleConfig` holds the immutable properties of a role: its faction,
//! its night ability label, and how many players may hold it at once.
//! Per-game data (who holds the role, whether they are alive) lives on
//! `Player` instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownRole;

use super::registry::role_config;

/// Playable role identifier.
///
/// The set is closed: every variant has exactly one `RoleConfig` in the
/// registry, so lookups by `Role` cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Villager,
    Mafia,
    Doctor,
    Detective,
    Jester,
    SerialKiller,
    Lover,
    Bodyguard,
    Witch,
    Accountant,
}

impl Role {
    /// Number of roles.
    pub const COUNT: usize = 10;

    /// Every role in declaration order.
    pub const ALL: [Role; Role::COUNT] = [
        Role::Villager,
        Role::Mafia,
        Role::Doctor,
        Role::Detective,
        Role::Jester,
        Role::SerialKiller,
        Role::Lover,
        Role::Bodyguard,
        Role::Witch,
        Role::Accountant,
    ];

    /// Position of this role in `Role::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Identifier form, matching the variant name (`"SerialKiller"`).
    #[must_use]
    pub const fn ident(self) -> &'static str {
        match self {
            Role::Villager => "Villager",
            Role::Mafia => "Mafia",
            Role::Doctor => "Doctor",
            Role::Detective => "Detective",
            Role::Jester => "Jester",
            Role::SerialKiller => "SerialKiller",
            Role::Lover => "Lover",
            Role::Bodyguard => "Bodyguard",
            Role::Witch => "Witch",
            Role::Accountant => "Accountant",
        }
    }

    /// Registry entry for this role.
    #[must_use]
    pub fn config(self) -> &'static RoleConfig {
        role_config(self)
    }

    /// Display name (`"Serial Killer"`).
    #[must_use]
    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// Faction this role wins with.
    #[must_use]
    pub fn faction(self) -> Faction {
        self.config().faction
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    /// Accepts either the identifier or the display name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| {
                s.eq_ignore_ascii_case(role.ident()) || s.eq_ignore_ascii_case(role.name())
            })
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Win-condition group a role belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Faction {
    /// Wins by eliminating all Mafia.
    Village,
    /// Wins by equaling or outnumbering the Village.
    Mafia,
    /// Special win conditions.
    Neutral,
}

impl Faction {
    pub const ALL: [Faction; 3] = [Faction::Village, Faction::Mafia, Faction::Neutral];

    /// Position of this faction in `Faction::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Faction::Village => write!(f, "Village"),
            Faction::Mafia => write!(f, "Mafia"),
            Faction::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Label of a role's night ability.
///
/// The kernel treats these as opaque tags; resolving what a kill or a
/// protection actually does happens outside this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NightAbility {
    Kill,
    Protect,
    Investigate,
    Guard,
    Potion,
    Count,
}

impl NightAbility {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            NightAbility::Kill => "Kill",
            NightAbility::Protect => "Protect",
            NightAbility::Investigate => "Investigate",
            NightAbility::Guard => "Guard",
            NightAbility::Potion => "Potion",
            NightAbility::Count => "Count",
        }
    }
}

impl fmt::Display for NightAbility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static role definition.
///
/// ## Example
///
/// ```
/// use mafia_rules::roles::{Faction, NightAbility, Role};
///
/// let doctor = Role::Doctor.config();
/// assert_eq!(doctor.faction, Faction::Village);
/// assert_eq!(doctor.night_ability, Some(NightAbility::Protect));
/// assert_eq!(doctor.max_count, Some(1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoleConfig {
    /// Role this entry describes.
    pub role: Role,

    /// Display name.
    pub name: &'static str,

    pub faction: Faction,

    /// Human-readable rules text.
    pub description: &'static str,

    pub can_vote_during_day: bool,

    pub can_vote_to_eliminate: bool,

    /// Night ability label. `None` for roles that sleep through the night.
    pub night_ability: Option<NightAbility>,

    /// Maximum simultaneous holders in one game. `None` for unlimited.
    pub max_count: Option<u8>,

    /// Whether holding this role is public knowledge.
    pub is_visible: bool,
}

impl RoleConfig {
    /// Create a hidden, unique role with no night ability that may vote.
    #[must_use]
    pub const fn new(
        role: Role,
        name: &'static str,
        faction: Faction,
        description: &'static str,
    ) -> Self {
        Self {
            role,
            name,
            faction,
            description,
            can_vote_during_day: true,
            can_vote_to_eliminate: true,
            night_ability: None,
            max_count: Some(1),
            is_visible: false,
        }
    }

    /// Give the role a night ability.
    #[must_use]
    pub const fn with_night_ability(mut self, ability: NightAbility) -> Self {
        self.night_ability = Some(ability);
        self
    }

    /// Set how many players may hold the role.
    #[must_use]
    pub const fn with_max_count(mut self, max: u8) -> Self {
        self.max_count = Some(max);
        self
    }

    /// Remove the holder limit.
    #[must_use]
    pub const fn unlimited(mut self) -> Self {
        self.max_count = None;
        self
    }

    /// Make the role publicly known.
    #[must_use]
    pub const fn visible(mut self) -> Self {
        self.is_visible = true;
        self
    }

    #[must_use]
    pub const fn has_night_ability(&self) -> bool {
        self.night_ability.is_some()
    }

    /// Night ability label as a string, if any.
    #[must_use]
    pub fn night_ability_name(&self) -> Option<&'static str> {
        self.night_ability.map(NightAbility::name)
    }

    /// Whether `count` holders stay within the limit.
    #[must_use]
    pub fn allows(&self, count: usize) -> bool {
        self.max_count.map_or(true, |max| count <= usize::from(max))
    }
}
