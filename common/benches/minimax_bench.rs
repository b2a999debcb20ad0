use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::tictactoe::{Board, Difficulty, Move, Player, search_with_stats};

fn mid_game_board() -> Board {
    let mut board = Board::new();
    let moves = [
        (Move::new(1, 1), Player::Human),
        (Move::new(0, 0), Player::Computer),
        (Move::new(2, 2), Player::Human),
    ];
    for (mv, player) in moves {
        board.apply_move(mv, player);
    }
    board
}

fn bench_search(board: &Board, difficulty: Difficulty) {
    let mut scratch = *board;
    let depth = scratch.empty_count();
    black_box(search_with_stats(&mut scratch, depth, Player::Computer, difficulty));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(20);

    let empty = Board::new();
    let mid_game = mid_game_board();

    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let name = format!("{:?}", difficulty).to_lowercase();

        group.bench_function(format!("{}_empty", name), |b| {
            b.iter(|| bench_search(&empty, difficulty))
        });

        group.bench_function(format!("{}_mid_game", name), |b| {
            b.iter(|| bench_search(&mid_game, difficulty))
        });
    }

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
