//! Win conditions as an ordered list of named predicates.
//!
//! Rules are checked top to bottom and the first match decides the
//! winner. New terminal conditions are added by inserting a rule at the
//! right position; the evaluator loop itself never changes.
//!
//! Standard order:
//!
//! 1. `mafia_majority`: Mafia alive and at least as many as the Village.
//!    Neutral survivors are not counted.
//! 2. `village_clear`: no Mafia alive and at least one villager alive.
//! 3. `jester_day_vote`: the last elimination was a Jester voted out
//!    during the day. Requires an `Elimination` from the session.

use crate::core::Player;
use crate::roles::{Faction, Role};

use super::elimination::Elimination;
use super::tally::FactionTally;

/// Everything a win rule may inspect.
#[derive(Clone, Copy, Debug)]
pub struct EvaluationContext<'a> {
    pub players: &'a [Player],
    pub tally: &'a FactionTally,
    pub last_elimination: Option<&'a Elimination>,
}

impl<'a> EvaluationContext<'a> {
    /// Player named by the last elimination, if it is in the roster.
    #[must_use]
    pub fn eliminated_player(&self) -> Option<&'a Player> {
        let elimination = self.last_elimination?;
        self.players.iter().find(|p| p.id == elimination.player)
    }
}

/// Predicate signature for a win rule.
pub type WinPredicate = fn(&EvaluationContext<'_>) -> bool;

/// A named terminal condition and the faction it crowns.
#[derive(Clone, Copy)]
pub struct WinRule {
    pub name: &'static str,
    pub winner: Faction,
    predicate: WinPredicate,
}

impl WinRule {
    #[must_use]
    pub const fn new(name: &'static str, winner: Faction, predicate: WinPredicate) -> Self {
        Self {
            name,
            winner,
            predicate,
        }
    }

    /// Whether this rule fires for the given context.
    #[must_use]
    pub fn matches(&self, ctx: &EvaluationContext<'_>) -> bool {
        (self.predicate)(ctx)
    }
}

impl std::fmt::Debug for WinRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WinRule")
            .field("name", &self.name)
            .field("winner", &self.winner)
            .finish_non_exhaustive()
    }
}

fn mafia_majority(ctx: &EvaluationContext<'_>) -> bool {
    let mafia = ctx.tally.alive(Faction::Mafia);
    mafia > 0 && mafia >= ctx.tally.alive(Faction::Village)
}

fn village_clear(ctx: &EvaluationContext<'_>) -> bool {
    ctx.tally.alive(Faction::Mafia) == 0 && ctx.tally.alive(Faction::Village) > 0
}

fn jester_day_vote(ctx: &EvaluationContext<'_>) -> bool {
    match (ctx.last_elimination, ctx.eliminated_player()) {
        (Some(elimination), Some(player)) => {
            elimination.is_day_vote() && player.role == Role::Jester && !player.is_alive
        }
        _ => false,
    }
}

pub const MAFIA_MAJORITY: WinRule =
    WinRule::new("mafia_majority", Faction::Mafia, mafia_majority);
pub const VILLAGE_CLEAR: WinRule =
    WinRule::new("village_clear", Faction::Village, village_clear);
pub const JESTER_DAY_VOTE: WinRule =
    WinRule::new("jester_day_vote", Faction::Neutral, jester_day_vote);

/// The standard rule order.
pub const STANDARD_RULES: [WinRule; 3] = [MAFIA_MAJORITY, VILLAGE_CLEAR, JESTER_DAY_VOTE];

/// Ordered, first-match-wins rule list.
///
/// ## Example
///
/// ```
/// use mafia_rules::roles::Faction;
/// use mafia_rules::rules::{WinConditions, WinRule};
///
/// let mut rules = WinConditions::standard();
/// rules.push(WinRule::new("nobody_left", Faction::Neutral, |ctx| ctx.tally.total_alive() == 0));
///
/// assert_eq!(
///     rules.rule_names().collect::<Vec<_>>(),
///     vec!["mafia_majority", "village_clear", "jester_day_vote", "nobody_left"],
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct WinConditions {
    rules: Vec<WinRule>,
}

impl WinConditions {
    /// An empty list. No game ever ends under it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mafia majority, then village clear, then jester day vote.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES.to_vec(),
        }
    }

    /// Append a rule with the lowest priority.
    pub fn push(&mut self, rule: WinRule) {
        self.rules.push(rule);
    }

    /// Insert a rule directly ahead of the rule called `before`.
    ///
    /// Returns false (and leaves the list unchanged) if no such rule exists.
    pub fn insert_before(&mut self, before: &str, rule: WinRule) -> bool {
        match self.rules.iter().position(|r| r.name == before) {
            Some(idx) => {
                self.rules.insert(idx, rule);
                true
            }
            None => false,
        }
    }

    /// Remove the rule called `name`, returning it.
    pub fn remove(&mut self, name: &str) -> Option<WinRule> {
        let idx = self.rules.iter().position(|r| r.name == name)?;
        Some(self.rules.remove(idx))
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name)
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn as_slice(&self) -> &[WinRule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule that fires, if any.
    #[must_use]
    pub fn first_match(&self, ctx: &EvaluationContext<'_>) -> Option<&WinRule> {
        first_match(&self.rules, ctx)
    }
}

pub(crate) fn first_match<'r>(
    rules: &'r [WinRule],
    ctx: &EvaluationContext<'_>,
) -> Option<&'r WinRule> {
    rules.iter().find(|rule| rule.matches(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::rules::EliminationCause;

    fn ctx<'a>(
        players: &'a [Player],
        tally: &'a FactionTally,
        last_elimination: Option<&'a Elimination>,
    ) -> EvaluationContext<'a> {
        EvaluationContext {
            players,
            tally,
            last_elimination,
        }
    }

    #[test]
    fn test_mafia_majority_ignores_neutrals() {
        let players = vec![
            Player::new(PlayerId::new(0), "m", Role::Mafia),
            Player::new(PlayerId::new(1), "v", Role::Villager),
            Player::new(PlayerId::new(2), "j", Role::Jester),
            Player::new(PlayerId::new(3), "s", Role::SerialKiller),
        ];
        let tally = FactionTally::from_players(&players);
        assert!(MAFIA_MAJORITY.matches(&ctx(&players, &tally, None)));
    }

    #[test]
    fn test_village_clear_needs_a_villager() {
        let players = vec![Player::new(PlayerId::new(0), "j", Role::Jester)];
        let tally = FactionTally::from_players(&players);
        assert!(!VILLAGE_CLEAR.matches(&ctx(&players, &tally, None)));
    }

    #[test]
    fn test_jester_rule_needs_day_vote() {
        let players = vec![
            Player::new(PlayerId::new(0), "j", Role::Jester).eliminated(),
            Player::new(PlayerId::new(1), "m", Role::Mafia),
        ];
        let tally = FactionTally::from_players(&players);

        let vote = Elimination::day_vote(PlayerId::new(0));
        assert!(JESTER_DAY_VOTE.matches(&ctx(&players, &tally, Some(&vote))));

        let kill = Elimination::new(PlayerId::new(0), EliminationCause::NightKill);
        assert!(!JESTER_DAY_VOTE.matches(&ctx(&players, &tally, Some(&kill))));

        assert!(!JESTER_DAY_VOTE.matches(&ctx(&players, &tally, None)));
    }

    #[test]
    fn test_jester_rule_rejects_living_or_other_roles() {
        let players = vec![
            Player::new(PlayerId::new(0), "j", Role::Jester),
            Player::new(PlayerId::new(1), "d", Role::Doctor).eliminated(),
        ];
        let tally = FactionTally::from_players(&players);

        let living_jester = Elimination::day_vote(PlayerId::new(0));
        assert!(!JESTER_DAY_VOTE.matches(&ctx(&players, &tally, Some(&living_jester))));

        let doctor = Elimination::day_vote(PlayerId::new(1));
        assert!(!JESTER_DAY_VOTE.matches(&ctx(&players, &tally, Some(&doctor))));

        let stranger = Elimination::day_vote(PlayerId::new(42));
        assert!(!JESTER_DAY_VOTE.matches(&ctx(&players, &tally, Some(&stranger))));
    }

    #[test]
    fn test_insert_before_and_remove() {
        let mut rules = WinConditions::standard();
        let lone = WinRule::new("lone_neutral", Faction::Neutral, |c| {
            c.tally.total_alive() == 1 && c.tally.alive(Faction::Neutral) == 1
        });

        assert!(rules.insert_before("village_clear", lone));
        assert!(!rules.insert_before("missing", lone));
        assert_eq!(
            rules.rule_names().collect::<Vec<_>>(),
            vec!["mafia_majority", "lone_neutral", "village_clear", "jester_day_vote"]
        );

        let removed = rules.remove("jester_day_vote").unwrap();
        assert_eq!(removed.winner, Faction::Neutral);
        assert_eq!(rules.len(), 3);
        assert!(rules.remove("jester_day_vote").is_none());
    }

    #[test]
    fn test_empty_list_never_matches() {
        let players = vec![Player::new(PlayerId::new(0), "m", Role::Mafia)];
        let tally = FactionTally::from_players(&players);
        let rules = WinConditions::new();
        assert!(rules.is_empty());
        assert!(rules.first_match(&ctx(&players, &tally, None)).is_none());
    }
}
