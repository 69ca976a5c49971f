use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rpsls::{resolve, Element, Engine, GameRng};

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_all_pairs", |b| {
        b.iter(|| {
            for player in Element::ALL {
                for computer in Element::ALL {
                    black_box(resolve(black_box(player), black_box(computer)));
                }
            }
        })
    });

    c.bench_function("gen_element", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| black_box(rng.gen_element()))
    });

    c.bench_function("engine_resolve_round", |b| {
        let engine = Engine::with_seed(42);
        b.iter(|| black_box(engine.resolve_round(Element::Spock)))
    });
}

fn bench_simulate(c: &mut Criterion) {
    c.bench_function("simulate_10k", |b| {
        let engine = Engine::with_seed(42);
        b.iter(|| black_box(engine.simulate_blocking(10_000, true)))
    });
}

criterion_group!(benches, bench_resolve, bench_simulate);
criterion_main!(benches);
