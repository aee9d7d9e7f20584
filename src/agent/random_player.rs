//! RandomPlayer - uniform-random baseline opponent.
//!
//! Picks any legal move with equal probability. Useful as the weakest
//! tournament baseline and for exercising the harness without search
//! costs.

use crate::agent::player::Player;
use crate::game_repr::{Board, Move};
use rand::seq::SliceRandom;

pub struct RandomPlayer {
    name: String,
}

impl RandomPlayer {
    pub fn new() -> RandomPlayer {
        RandomPlayer {
            name: "Random".to_string(),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        RandomPlayer::new()
    }
}

impl Player for RandomPlayer {
    fn get_move(
        &mut self,
        _board: &Board,
        legal_moves: &[Move],
        _time_left: &dyn Fn() -> f64,
    ) -> Move {
        legal_moves
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(Move::NONE)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
