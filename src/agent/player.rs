//! Player trait for game agents.
//!
//! A player is any entity that can be asked for a move: a search agent, a
//! random baseline, or in principle a human or a remote peer. The match
//! harness only speaks through this trait.
//!
//! # Synchronous Design
//!
//! `get_move()` is intentionally synchronous: the harness calls it and
//! waits. The deadline contract is carried by the `time_left` closure -
//! it reports the milliseconds remaining in the current turn, and a player
//! returning after it reaches zero forfeits the game, so implementations
//! must return strictly before the budget is exhausted.

use crate::game_repr::{Board, Move};

/// Trait for entities that can provide moves.
///
/// # Method Behavior
///
/// ## `get_move()`
/// - `legal_moves` lists the active player's options in the board's
///   canonical enumeration order; an empty slice means no move exists.
/// - Returns a move drawn from `legal_moves`, or `Move::NONE` to
///   pass/forfeit when the list is empty.
/// - `time_left` is re-read by the player as often as needed; the value
///   counts down in real time while the player thinks.
///
/// ## `name()`
/// - Defaults to `"Player"`; override for logging and match reports.
pub trait Player {
    /// Request the next move for the active player of `board`.
    fn get_move(
        &mut self,
        board: &Board,
        legal_moves: &[Move],
        time_left: &dyn Fn() -> f64,
    ) -> Move;

    /// Display name used in logs and match reports.
    fn name(&self) -> &str {
        "Player"
    }
}
