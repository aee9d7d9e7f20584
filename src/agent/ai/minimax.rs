// Fixed-depth minimax.
//
// Explores the game tree to an exact ply budget, alternating maximizing
// and minimizing layers, and reports the best score together with the
// immediate child move that achieves it. Scores are always taken from the
// perspective of the player the `Searcher` was built for; the deadline is
// re-checked on entry to every invocation and aborts the whole run.

use super::search::{SearchOutcome, Searcher, TimeExceeded};
use crate::game_repr::Board;

impl Searcher<'_> {
    /// Minimax to exactly `depth` plies below `board`.
    ///
    /// The returned move is one of `board`'s own legal moves, never one
    /// from deeper in the tree; deeper moves are discarded once their
    /// scores have been folded upward. Equal scores keep the earliest move
    /// in enumeration order.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing: bool,
    ) -> Result<SearchOutcome, TimeExceeded> {
        self.clock.check()?;
        self.nodes += 1;

        let moves = board.legal_moves(board.active_player());
        if depth == 0 || moves.is_empty() {
            return Ok(SearchOutcome::leaf(self.heuristic.score(board, self.side)));
        }

        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        for &mv in &moves {
            let child = board.forecast(mv);
            let score = if depth == 1 {
                // The children are the leaves; evaluate them directly
                // instead of recursing into a depth-0 call.
                self.nodes += 1;
                self.heuristic.score(&child, self.side)
            } else {
                self.minimax(&child, depth - 1, !maximizing)?.score
            };

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_move = Some(mv);
            }
        }

        Ok(SearchOutcome {
            score: best_score,
            best_move,
        })
    }
}
