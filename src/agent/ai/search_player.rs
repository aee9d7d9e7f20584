//! SearchPlayer - game-tree search agent with a deadline.
//!
//! Implements the `Player` trait by delegating to the move controller in
//! the `search` module: iterative deepening (or a single fixed-depth run)
//! over minimax or alpha-beta, with a pluggable heuristic. Configuration
//! is validated once at construction and immutable afterwards.

use super::config::SearchConfig;
use super::evaluation::{Heuristic, PhasedScore};
use super::search::select_move;
use crate::agent::player::Player;
use crate::game_repr::{Board, Move};

/// Deadline-bounded adversarial-search player.
pub struct SearchPlayer {
    config: SearchConfig,
    heuristic: Box<dyn Heuristic>,
    name: String,
}

impl SearchPlayer {
    /// Build a player from a validated configuration and a heuristic.
    pub fn new(
        config: SearchConfig,
        heuristic: Box<dyn Heuristic>,
        name: String,
    ) -> SearchPlayer {
        SearchPlayer {
            config,
            heuristic,
            name,
        }
    }

    /// Player with the given configuration and the phased reference
    /// heuristic, named after its algorithm.
    pub fn with_config(config: SearchConfig) -> SearchPlayer {
        let name = format!("AI ({})", config.algorithm.name());
        SearchPlayer::new(config, Box::new(PhasedScore::default()), name)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Player for SearchPlayer {
    fn get_move(
        &mut self,
        board: &Board,
        legal_moves: &[Move],
        time_left: &dyn Fn() -> f64,
    ) -> Move {
        let side = board.active_player();
        let chosen = select_move(
            board,
            side,
            legal_moves,
            &*self.heuristic,
            &self.config,
            time_left,
        );
        log::debug!("{} plays {:?}", self.name, chosen);
        chosen
    }

    fn name(&self) -> &str {
        &self.name
    }
}
