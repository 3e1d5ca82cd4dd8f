use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{fits, standard_catalog, GameConfig, GameEngine, Grid, Mask};
use blockfall::types::Cell;

fn bench_tick(c: &mut Criterion) {
    let config = GameConfig::new(10, 20, standard_catalog()).with_seed(12345);
    let mut engine = GameEngine::new(config).unwrap();

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            if !engine.tick() {
                engine.reset();
            }
            while engine.poll_event().is_some() {}
        })
    });
}

fn bench_clear_four_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new(10, 20);
            for y in 16..20 {
                for x in 0..10 {
                    grid.set(x, y, Cell::Filled);
                }
            }
            let complete = grid.find_complete_rows();
            grid.clear_rows(black_box(&complete));
        })
    });
}

fn bench_fits(c: &mut Criterion) {
    let grid = Grid::new(10, 20);
    let mask = Mask::from_bits(&[&[0, 1, 0], &[1, 1, 1]]).unwrap();

    c.bench_function("fits_empty_grid", |b| {
        b.iter(|| fits(black_box(&mask), black_box(3), black_box(10), &grid))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mask = Mask::from_bits(&[&[1, 1], &[1, 0], &[1, 0]]).unwrap();

    c.bench_function("mask_rotated", |b| b.iter(|| black_box(&mask).rotated()));
}

fn bench_snapshot(c: &mut Criterion) {
    let config = GameConfig::new(10, 20, standard_catalog()).with_seed(1);
    let engine = GameEngine::new(config).unwrap();
    let mut snap = blockfall::core::GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| engine.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_clear_four_rows,
    bench_fits,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
