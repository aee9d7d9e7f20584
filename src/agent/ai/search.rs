// Move-selection controller.
//
// Orchestrates the fixed-depth searches in `minimax.rs` and `alphabeta.rs`:
// opening-move shortcut, evaluator-best seeding, iterative deepening with a
// hard deadline, and the fallback to the deepest fully-completed answer
// when the clock runs out. The deadline is consulted through a caller
// supplied closure threaded into every recursive call; running out of time
// is signalled as an ordinary `Result` and short-circuited with `?`, never
// by unwinding.

use super::config::{Algorithm, SearchConfig};
use super::evaluation::Heuristic;
use crate::game_repr::{Board, Move, Side};

/// Signal that the remaining budget dropped below the abort threshold.
///
/// Not a failure: the controller recovers by returning the best move of the
/// last depth that completed. It must never reach the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeExceeded;

/// Remaining-budget query plus the configured abort threshold.
///
/// The closure is owned by the caller and re-read on every check, so an
/// externally advancing clock is observed promptly.
#[derive(Clone, Copy)]
pub struct DeadlineClock<'a> {
    time_left: &'a dyn Fn() -> f64,
    threshold_ms: f64,
}

impl<'a> DeadlineClock<'a> {
    pub fn new(time_left: &'a dyn Fn() -> f64, threshold_ms: f64) -> DeadlineClock<'a> {
        DeadlineClock {
            time_left,
            threshold_ms,
        }
    }

    /// Err once the remaining budget falls below the threshold.
    pub fn check(&self) -> Result<(), TimeExceeded> {
        if (self.time_left)() < self.threshold_ms {
            Err(TimeExceeded)
        } else {
            Ok(())
        }
    }
}

/// Score and best immediate move of one fixed-depth search.
///
/// `best_move` is a legal move of the searched node, or `None` at leaves,
/// terminals, and nodes where every line is already decided against the
/// mover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    pub score: f64,
    pub best_move: Option<Move>,
}

impl SearchOutcome {
    pub(super) fn leaf(score: f64) -> SearchOutcome {
        SearchOutcome {
            score,
            best_move: None,
        }
    }
}

/// One search run: the heuristic, the player searched for, the deadline,
/// and a visited-node counter.
///
/// The algorithms themselves live in `minimax.rs` and `alphabeta.rs`.
pub struct Searcher<'a> {
    pub(super) heuristic: &'a dyn Heuristic,
    pub(super) side: Side,
    pub(super) clock: DeadlineClock<'a>,
    /// States visited, counting direct leaf evaluations. Pruning shows up
    /// here: alpha-beta never visits more than minimax at equal depth.
    pub nodes: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(heuristic: &'a dyn Heuristic, side: Side, clock: DeadlineClock<'a>) -> Searcher<'a> {
        Searcher {
            heuristic,
            side,
            clock,
            nodes: 0,
        }
    }

    /// Dispatch on the configured algorithm with full-width root bounds.
    pub fn run(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        algorithm: Algorithm,
    ) -> Result<SearchOutcome, TimeExceeded> {
        match algorithm {
            Algorithm::Minimax => self.minimax(board, depth, maximizing),
            Algorithm::AlphaBeta => self.alphabeta(
                board,
                depth,
                f64::NEG_INFINITY,
                f64::INFINITY,
                maximizing,
            ),
        }
    }
}

/// The legal move whose immediate successor the heuristic likes best, ties
/// going to the earliest move. `None` only for an empty move list.
pub(super) fn best_immediate_move(
    board: &Board,
    legal_moves: &[Move],
    heuristic: &dyn Heuristic,
    side: Side,
) -> Option<Move> {
    let mut best: Option<(f64, Move)> = None;
    for &mv in legal_moves {
        let score = heuristic.score(&board.forecast(mv), side);
        if best.map_or(true, |(top, _)| score > top) {
            best = Some((score, mv));
        }
    }
    best.map(|(_, mv)| mv)
}

/// Pick a move for `side` on `board` before the deadline.
///
/// Always returns a move drawn from `legal_moves` (or `Move::NONE` when
/// that list is empty), strictly before the caller's budget is exhausted.
pub fn select_move(
    board: &Board,
    side: Side,
    legal_moves: &[Move],
    heuristic: &dyn Heuristic,
    config: &SearchConfig,
    time_left: &dyn Fn() -> f64,
) -> Move {
    if legal_moves.is_empty() {
        return Move::NONE;
    }

    // Opening ply: positional play dominates lookahead. Take the centre if
    // it is still free, otherwise the evaluator's immediate pick.
    if board.move_count() <= 1 {
        let center = board.center();
        if legal_moves.contains(&center) {
            return center;
        }
        return best_immediate_move(board, legal_moves, heuristic, side)
            .unwrap_or(Move::NONE);
    }

    let maximizing = board.active_player() == side;
    let clock = DeadlineClock::new(time_left, config.timeout_ms);

    // Seed with the evaluator-best immediate move so an interruption before
    // the first depth completes still yields a validated legal move.
    let mut best = match best_immediate_move(board, legal_moves, heuristic, side) {
        Some(mv) => mv,
        None => return Move::NONE,
    };

    let mut searcher = Searcher::new(heuristic, side, clock);

    if config.iterative {
        // No upper bound on depth: the loop ends on the deadline or once
        // the remaining tree cannot be deeper than the searched depth.
        let solved_depth = board.blank_cells().len() as u32;
        for depth in 1.. {
            if clock.check().is_err() {
                break;
            }
            match searcher.run(board, depth, maximizing, config.algorithm) {
                Ok(outcome) => {
                    if let Some(mv) = outcome.best_move {
                        best = mv;
                    }
                    log::debug!(
                        "{} depth {} score {} best {:?} nodes {}",
                        config.algorithm.name(),
                        depth,
                        outcome.score,
                        best,
                        searcher.nodes
                    );
                    // A decided score or a fully explored tree cannot be
                    // improved by deeper iterations.
                    if outcome.score.is_infinite() || depth >= solved_depth {
                        break;
                    }
                }
                Err(TimeExceeded) => break,
            }
        }
    } else {
        match searcher.run(board, config.depth, maximizing, config.algorithm) {
            Ok(outcome) => {
                if let Some(mv) = outcome.best_move {
                    best = mv;
                }
            }
            // A single fixed-depth run has no shallower result to fall
            // back to; keep the evaluator seed.
            Err(TimeExceeded) => {}
        }
    }

    best
}
