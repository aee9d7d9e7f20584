// Fixed-depth minimax with alpha-beta pruning.
//
// Identical contract and tie-breaks to `minimax.rs`: the two bounds only
// let the search skip siblings that provably cannot change the chosen
// move. Alpha carries the best score the maximizer has proven, beta the
// best the minimizer has; a node stops expanding children as soon as the
// window closes.

use super::search::{SearchOutcome, Searcher, TimeExceeded};
use crate::game_repr::Board;

impl Searcher<'_> {
    /// Alpha-beta search to exactly `depth` plies below `board`.
    ///
    /// Callers start with the full window `(-inf, +inf)`; recursive calls
    /// receive the node's current bounds, which are narrowed after each
    /// child and never widened. With no pruning in effect the outcome is
    /// bit-identical to `minimax` at the same depth.
    pub fn alphabeta(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
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
            let score = self
                .alphabeta(&child, depth - 1, alpha, beta, !maximizing)?
                .score;

            // Strict improvement only: ties keep the earlier move, the
            // same rule minimax applies.
            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_move = Some(mv);
            }

            if maximizing {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
            if beta <= alpha {
                // Remaining siblings cannot move the score past the
                // opponent's proven bound.
                break;
            }
        }

        Ok(SearchOutcome {
            score: best_score,
            best_move,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ai::evaluation::{Heuristic, MobilityScore, PhasedScore};
    use crate::agent::ai::search::DeadlineClock;
    use crate::game_repr::{Move, Side};

    fn unlimited() -> f64 {
        f64::INFINITY
    }

    fn searcher<'a>(heuristic: &'a dyn Heuristic, side: Side) -> Searcher<'a> {
        Searcher::new(heuristic, side, DeadlineClock::new(&unlimited, 10.0))
    }

    fn full_window(
        search: &mut Searcher<'_>,
        board: &Board,
        depth: u32,
    ) -> SearchOutcome {
        search
            .alphabeta(board, depth, f64::NEG_INFINITY, f64::INFINITY, true)
            .unwrap()
    }

    #[test]
    fn test_matches_minimax_at_shallow_depths() {
        let mut board = Board::default();
        board.apply_move(Move::new(3, 3));
        board.apply_move(Move::new(1, 5));

        let heuristic = PhasedScore::default();
        for depth in 1..=3 {
            let mut plain = searcher(&heuristic, Side::One);
            let mut pruned = searcher(&heuristic, Side::One);

            let expected = plain.minimax(&board, depth, true).unwrap();
            let actual = full_window(&mut pruned, &board, depth);

            assert_eq!(actual.score, expected.score, "depth {}", depth);
            assert_eq!(actual.best_move, expected.best_move, "depth {}", depth);
        }
    }

    #[test]
    fn test_prunes_no_more_than_minimax_explores() {
        let mut board = Board::default();
        board.apply_move(Move::new(3, 3));
        board.apply_move(Move::new(1, 5));

        let heuristic = MobilityScore;
        let mut plain = searcher(&heuristic, Side::One);
        let mut pruned = searcher(&heuristic, Side::One);

        plain.minimax(&board, 3, true).unwrap();
        full_window(&mut pruned, &board, 3);

        assert!(
            pruned.nodes <= plain.nodes,
            "alpha-beta visited {} nodes, minimax {}",
            pruned.nodes,
            plain.nodes
        );
    }

    #[test]
    fn test_forced_win_found_at_depth_two() {
        let mut board = Board::new(4, 1);
        board.apply_move(Move::new(0, 1));
        board.apply_move(Move::new(0, 3));

        let heuristic = PhasedScore::default();
        let mut search = searcher(&heuristic, Side::One);
        let outcome = full_window(&mut search, &board, 2);

        assert_eq!(outcome.score, f64::INFINITY);
        assert_eq!(outcome.best_move, Some(Move::new(0, 2)));
    }

    #[test]
    fn test_timeout_propagates_from_any_frame() {
        let mut board = Board::default();
        board.apply_move(Move::new(3, 3));
        board.apply_move(Move::new(0, 0));

        let heuristic = PhasedScore::default();
        let expired = || 0.0;
        let mut search = Searcher::new(
            &heuristic,
            Side::One,
            DeadlineClock::new(&expired, 10.0),
        );
        assert_eq!(
            search.alphabeta(&board, 3, f64::NEG_INFINITY, f64::INFINITY, true),
            Err(TimeExceeded)
        );
    }

    #[test]
    fn test_narrow_window_cuts_off_immediately() {
        let mut board = Board::default();
        board.apply_move(Move::new(3, 3));
        board.apply_move(Move::new(0, 0));

        let heuristic = MobilityScore;

        // A closed window proves the first child is enough.
        let mut narrow = searcher(&heuristic, Side::One);
        narrow.alphabeta(&board, 2, 0.0, 0.0, true).unwrap();

        let mut wide = searcher(&heuristic, Side::One);
        wide.alphabeta(&board, 2, f64::NEG_INFINITY, f64::INFINITY, true)
            .unwrap();

        assert!(narrow.nodes < wide.nodes);
    }
}
