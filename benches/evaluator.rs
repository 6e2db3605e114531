use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mafia_rules::core::{Player, PlayerId};
use mafia_rules::roles::Role;
use mafia_rules::rules::{check_game_end, check_game_end_after, Elimination};

fn full_table() -> Vec<Player> {
    let roles = [
        Role::Villager,
        Role::Villager,
        Role::Villager,
        Role::Villager,
        Role::Villager,
        Role::Mafia,
        Role::Mafia,
        Role::Mafia,
        Role::Doctor,
        Role::Detective,
        Role::Jester,
        Role::SerialKiller,
        Role::Lover,
        Role::Lover,
        Role::Bodyguard,
        Role::Witch,
    ];
    roles
        .iter()
        .enumerate()
        .map(|(i, &role)| {
            let p = Player::new(PlayerId::new(i as u32), format!("p{i}"), role);
            if i % 3 == 0 { p.eliminated() } else { p }
        })
        .collect()
}

fn bench_check_game_end(c: &mut Criterion) {
    let players = full_table();
    c.bench_function("check_game_end_16_players", |b| {
        b.iter(|| check_game_end(black_box(&players)))
    });
}

fn bench_check_game_end_after(c: &mut Criterion) {
    let players = full_table();
    let vote = Elimination::day_vote(PlayerId::new(9));
    c.bench_function("check_game_end_after_day_vote", |b| {
        b.iter(|| check_game_end_after(black_box(&players), black_box(&vote)))
    });
}

criterion_group!(benches, bench_check_game_end, bench_check_game_end_after);
criterion_main!(benches);
