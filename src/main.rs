// Headless match harness.
//
// Plays one game of isolation between the search agent and the random
// baseline under a per-move wall-clock budget, logging every ply. A side
// forfeits by returning the no-move sentinel while moves remain, playing
// an illegal move, or overdrawing its budget.

use isolation_engine::agent::{Player, RandomPlayer, SearchConfig, SearchPlayer};
use isolation_engine::game_repr::{Board, Side};
use std::time::Instant;

/// Budget handed to each player per move, in milliseconds.
const MOVE_BUDGET_MS: f64 = 150.0;

fn player_index(side: Side) -> usize {
    match side {
        Side::One => 0,
        Side::Two => 1,
    }
}

fn main() {
    env_logger::init();

    let mut board = Board::default();
    let mut players: [Box<dyn Player>; 2] = [
        Box::new(SearchPlayer::with_config(SearchConfig::default())),
        Box::new(RandomPlayer::new()),
    ];

    log::info!(
        "{} (player one) vs {} (player two) on a {}x{} board",
        players[0].name(),
        players[1].name(),
        board.width(),
        board.height()
    );

    loop {
        let side = board.active_player();
        let idx = player_index(side);
        let legal = board.legal_moves(side);

        if legal.is_empty() {
            let winner = &players[player_index(side.opponent())];
            println!(
                "{} wins after {} moves: opponent has no legal move",
                winner.name(),
                board.move_count()
            );
            break;
        }

        let start = Instant::now();
        let time_left = move || MOVE_BUDGET_MS - start.elapsed().as_secs_f64() * 1000.0;
        let mv = players[idx].get_move(&board, &legal, &time_left);
        let remaining = time_left();

        if remaining < 0.0 {
            println!(
                "{} forfeits: returned {:.1} ms over budget",
                players[idx].name(),
                -remaining
            );
            break;
        }
        if mv.is_none() || !legal.contains(&mv) {
            println!(
                "{} forfeits: returned {:?} with {} legal moves available",
                players[idx].name(),
                mv,
                legal.len()
            );
            break;
        }

        log::info!(
            "ply {}: {} plays ({}, {}) with {:.1} ms to spare",
            board.move_count() + 1,
            players[idx].name(),
            mv.row,
            mv.col,
            remaining
        );
        board.apply_move(mv);
    }
}
