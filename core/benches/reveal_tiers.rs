use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use sweeper_core::*;

fn generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for difficulty in Difficulty::ALL {
        group.bench_function(difficulty.name(), |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                Board::with_generator(difficulty.config(), RandomMineGenerator::new(seed)).unwrap()
            })
        });
    }
    group.finish();
}

fn cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade");
    for size in [16, 64, Coord::MAX] {
        let layout = MineLayout::from_mine_coords((size, size), &[(0, 0)]).unwrap();
        group.bench_function(format!("empty_{size}x{size}"), |b| {
            b.iter_batched(
                || Board::from_layout(layout.clone()).unwrap(),
                |mut board| black_box(board.reveal((size - 1, size - 1)).unwrap()),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, generate, cascade);
criterion_main!(benches);
