// Heuristic board evaluation.
//
// Scores are real-valued from the point of view of one player, with
// +inf / -inf reserved for decided positions. Finite scores grow with the
// player's mobility advantage; positional bonuses stay below one full move
// of mobility so they only break ties.

use crate::game_repr::{Board, Side};

// Phase boundaries, as the fraction of the board still blank. Empirically
// tuned values, overridable through `PhasedScore::new`.
pub const CENTER_PHASE_FRACTION: f64 = 0.8;
pub const CHASE_PHASE_FRACTION: f64 = 0.1;

// Positional bonus weights (sub-mobility tie-breakers).
const CENTERED_BONUS: f64 = 0.75;
const CENTER_WEIGHT: f64 = 0.5;
const CHASE_WEIGHT: f64 = 0.5;

/// Static evaluation function the search calls at leaves and terminals.
///
/// Implementations must be deterministic and side-effect free: the two
/// search algorithms only pick identical moves because repeated evaluation
/// of the same state yields the same score.
pub trait Heuristic {
    /// Value of `board` for `player`: `-inf` when `player` has lost,
    /// `+inf` when `player` has won, otherwise finite and strictly
    /// increasing in `player`'s mobility advantage.
    fn score(&self, board: &Board, player: Side) -> f64;
}

/// `-inf` / `+inf` for decided positions, `None` otherwise.
fn terminal_score(board: &Board, player: Side) -> Option<f64> {
    if board.is_loser(player) {
        return Some(f64::NEG_INFINITY);
    }
    if board.is_winner(player) {
        return Some(f64::INFINITY);
    }
    None
}

fn mobility(board: &Board, player: Side) -> f64 {
    let own = board.legal_moves(player).len() as f64;
    let opp = board.legal_moves(player.opponent()).len() as f64;
    own - opp
}

/// Plain mobility differential: own moves minus opponent moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobilityScore;

impl Heuristic for MobilityScore {
    fn score(&self, board: &Board, player: Side) -> f64 {
        if let Some(score) = terminal_score(board, player) {
            return score;
        }
        mobility(board, player)
    }
}

/// Mobility differential refined by a game-phase positional bonus.
///
/// While more than `center_phase` of the board is still blank the bonus
/// rewards proximity to the centre; while more than `chase_phase` is blank
/// it rewards proximity to the opponent; afterwards the score is pure
/// mobility.
#[derive(Debug, Clone, Copy)]
pub struct PhasedScore {
    center_phase: f64,
    chase_phase: f64,
}

impl PhasedScore {
    pub fn new(center_phase: f64, chase_phase: f64) -> PhasedScore {
        PhasedScore {
            center_phase,
            chase_phase,
        }
    }
}

impl Default for PhasedScore {
    fn default() -> Self {
        PhasedScore::new(CENTER_PHASE_FRACTION, CHASE_PHASE_FRACTION)
    }
}

impl Heuristic for PhasedScore {
    fn score(&self, board: &Board, player: Side) -> f64 {
        if let Some(score) = terminal_score(board, player) {
            return score;
        }

        let mobility = mobility(board, player);
        let Some(location) = board.player_location(player) else {
            return mobility;
        };

        let blanks = board.blank_cells().len() as f64;
        let total = f64::from(board.width()) * f64::from(board.height());

        if blanks > self.center_phase * total {
            let distance = location.distance(board.center());
            if distance == 0 {
                mobility + CENTERED_BONUS
            } else {
                mobility + CENTER_WEIGHT / f64::from(distance)
            }
        } else if blanks > self.chase_phase * total {
            match board.player_location(player.opponent()) {
                Some(opponent) => {
                    let distance = location.distance(opponent);
                    // Coincident positions cannot happen, but a zero
                    // distance must never turn into a division error.
                    if distance == 0 {
                        mobility + CHASE_WEIGHT
                    } else {
                        mobility + CHASE_WEIGHT / f64::from(distance)
                    }
                }
                None => mobility,
            }
        } else {
            mobility
        }
    }
}
