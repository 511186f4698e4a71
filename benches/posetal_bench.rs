use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use posetal::equilibrium::find_admissible_nash_equilibria_with_preferences;
use posetal::order::{all_partial_orders, Preorder};
use posetal::{ActionProfile, Metric, PartialOrder, Player, PosetalGame, PreferenceProfile};

fn random_relations(n: u32, seed: u64) -> Vec<(u32, u32)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n * 2)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

fn bench_closure(c: &mut Criterion) {
    let relations = random_relations(64, 3);
    c.bench_function("preorder_closure_64", |b| {
        b.iter(|| Preorder::new(0..64u32, black_box(relations.iter().copied())).unwrap())
    });
}

fn bench_universe(c: &mut Criterion) {
    let mut group = c.benchmark_group("universe");
    group.sample_size(10);
    group.bench_function("all_partial_orders_5", |b| {
        b.iter(|| all_partial_orders(black_box(0u8..5)).unwrap())
    });
    group.finish();
}

/// Three players, four actions each, two metrics per player.
fn bench_game() -> PosetalGame {
    let ids = ["P1", "P2", "P3"];
    let players = ids
        .iter()
        .enumerate()
        .map(|(k, &id)| {
            let own = move |ap: &ActionProfile| ap[id].as_bytes()[0] as f64;
            let spread = move |ap: &ActionProfile| {
                let total: u32 = ap.iter().map(|(_, a)| a.as_bytes()[0] as u32).sum();
                ((total as usize + k) % 5) as f64
            };
            let names = ["own".to_string(), "spread".to_string()];
            Player::new(
                id,
                ["a", "b", "c", "d"],
                [Metric::new("own", own), Metric::new("spread", spread)],
                PartialOrder::new(names, []).unwrap(),
            )
            .unwrap()
        })
        .collect();
    PosetalGame::new(players).unwrap()
}

fn bench_admissible(c: &mut Criterion) {
    let game = bench_game();
    let prefs: PreferenceProfile = ["P1", "P2", "P3"]
        .iter()
        .map(|id| {
            let order = PartialOrder::total_order(["own".to_string(), "spread".to_string()]).unwrap();
            (id.to_string(), order)
        })
        .collect();
    c.bench_function("admissible_3x4", |b| {
        b.iter(|| find_admissible_nash_equilibria_with_preferences(black_box(&game), &prefs).unwrap())
    });
}

criterion_group!(benches, bench_closure, bench_universe, bench_admissible);
criterion_main!(benches);
