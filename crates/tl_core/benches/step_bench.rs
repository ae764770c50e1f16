use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

use tl_core::engine::match_modifiers::HiddenImpactTable;
use tl_core::{
    advance, Attributes, EngineConfig, MatchSetup, Position, Simulation, SquadPlayer, StepInputs,
    Team,
};

fn bench_team(name: &str, prefix: &str) -> Team {
    let positions = [
        Position::GK,
        Position::DEF,
        Position::DEF,
        Position::DEF,
        Position::DEF,
        Position::MID,
        Position::MID,
        Position::MID,
        Position::FWD,
        Position::FWD,
        Position::FWD,
    ];
    let squad = positions
        .iter()
        .enumerate()
        .map(|(i, &position)| SquadPlayer {
            id: format!("{}{}", prefix, i + 1),
            name: format!("{} {}", name, i + 1),
            position,
            rating: 75,
            morale: 80,
            fitness: 100,
            traits: Vec::new(),
            attributes: Attributes { pac: 60 + i as u8 * 3, ..Attributes::default() },
        })
        .collect();

    Team {
        id: prefix.to_string(),
        name: name.to_string(),
        short_name: name.to_uppercase(),
        primary_color: String::new(),
        secondary_color: String::new(),
        stadium: String::new(),
        squad,
    }
}

fn bench_setup() -> MatchSetup {
    MatchSetup::new(bench_team("Reds", "r"), bench_team("Blues", "b"))
}

fn bench_advance(c: &mut Criterion) {
    let mut sim = Simulation::new(bench_setup(), EngineConfig::with_seed(1)).expect("bench setup");
    for _ in 0..200 {
        sim.tick();
    }
    let state = sim.state().clone();
    let table = HiddenImpactTable::default();
    let inputs = StepInputs {
        frame_ms: 16,
        game_speed: 1.0,
        match_minutes: 90,
        goal_freeze_ms: 3000,
        impacts: &table,
        home_name: "Reds",
        away_name: "Blues",
    };

    c.bench_function("advance_single_tick", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        b.iter(|| {
            let result = advance(black_box(&state), &inputs, &mut rng);
            black_box(result.updates.len());
        })
    });
}

fn bench_full_match(c: &mut Criterion) {
    c.bench_function("full_match_speed_4", |b| {
        b.iter_batched(
            || Simulation::new(bench_setup(), EngineConfig::quick_sim(3)).expect("bench setup"),
            |mut sim| {
                let updates = sim.run_to_full_time();
                black_box((updates.len(), sim.state().home_score));
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_advance, bench_full_match);
criterion_main!(benches);
