use std::hint::black_box;

use blasting_core::*;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const SIDES: [Side; 4] = [9, 16, 64, 255];

fn generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for side in SIDES {
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &side| {
            let mut generator = RandomBoardGenerator::from_seed(0xB1A57);
            b.iter(|| generator.generate(black_box(side), mine_count_for(side)))
        });
    }
    group.finish();
}

fn flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for side in SIDES {
        // a single corner mine, so one reveal opens the whole board
        let board = Board::from_mine_indices(side, &[0]).expect("board");
        group.bench_with_input(BenchmarkId::from_parameter(side), &board, |b, board| {
            b.iter_batched(
                || GameEngine::from_board(board.clone(), RandomBoardGenerator::from_seed(0)).expect("engine"),
                |mut engine| engine.reveal(black_box(tile_total(side) - 1)),
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, generation, flood_fill);
criterion_main!(benches);
