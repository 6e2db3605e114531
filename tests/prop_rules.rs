//! Property-based tests for the win-condition evaluator.

use proptest::prelude::*;

use mafia_rules::core::{Player, PlayerId};
use mafia_rules::roles::{Faction, Role};
use mafia_rules::rules::{check_game_end, check_game_end_after, Elimination, FactionTally};

fn any_role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

fn roster() -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec((any_role(), any::<bool>()), 0..20).prop_map(|seats| {
        seats
            .into_iter()
            .enumerate()
            .map(|(i, (role, alive))| {
                let p = Player::new(PlayerId::new(i as u32), format!("p{i}"), role);
                if alive { p } else { p.eliminated() }
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// A verdict carries a winner exactly when the game has ended.
    #[test]
    fn prop_winner_iff_ended(players in roster()) {
        let result = check_game_end(&players);
        prop_assert_eq!(result.has_ended(), result.winning_faction().is_some());
    }

    /// Same snapshot, same verdict.
    #[test]
    fn prop_idempotent(players in roster()) {
        prop_assert_eq!(check_game_end(&players), check_game_end(&players));
    }

    /// Without an elimination signal the verdict follows the two faction
    /// rules alone, in order.
    #[test]
    fn prop_matches_faction_rules(players in roster()) {
        let tally = FactionTally::from_players(&players);
        let mafia = tally.alive(Faction::Mafia);
        let village = tally.alive(Faction::Village);

        let expected = if mafia > 0 && mafia >= village {
            Some(Faction::Mafia)
        } else if mafia == 0 && village > 0 {
            Some(Faction::Village)
        } else {
            None
        };
        prop_assert_eq!(check_game_end(&players).winning_faction(), expected);
    }

    /// Dead players never change the verdict.
    #[test]
    fn prop_dead_players_ignored(players in roster()) {
        let living: Vec<_> = players.iter().filter(|p| p.is_alive).cloned().collect();
        prop_assert_eq!(check_game_end(&players), check_game_end(&living));
    }

    /// Neutral survivors never decide a faction win.
    #[test]
    fn prop_neutrals_do_not_count(players in roster(), extra in 0usize..5) {
        let mut padded = players.clone();
        let base = padded.len() as u32;
        for i in 0..extra as u32 {
            padded.push(Player::new(PlayerId::new(base + i), "sk", Role::SerialKiller));
        }
        prop_assert_eq!(check_game_end(&players), check_game_end(&padded));
    }

    /// An elimination signal can only add a Neutral win on top of an
    /// ongoing game; it never overrides a faction verdict.
    #[test]
    fn prop_elimination_only_adds_neutral_win(players in roster(), target in 0u32..20) {
        let plain = check_game_end(&players);
        let after = check_game_end_after(&players, &Elimination::day_vote(PlayerId::new(target)));

        if plain.has_ended() {
            prop_assert_eq!(plain, after);
        } else if after.has_ended() {
            prop_assert_eq!(after.winning_faction(), Some(Faction::Neutral));
        }
    }
}
