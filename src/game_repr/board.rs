// Isolation board state.
//
// Two players share a grid of cells. A player's first move places them on
// any blank cell; afterwards they slide like a chess queen through blank
// cells. Every cell a move touches (the vacated cell, the cells passed
// over, and the destination) is blocked for the rest of the game. A player
// who is to move and has no legal move has lost.
//
// State transitions go through `forecast`, which returns a fresh snapshot
// and never mutates the receiver, so sibling branches of a search tree
// cannot observe each other's moves.

use super::moves::{Move, Side};
use smallvec::SmallVec;

/// Default board edge used by the tournament rules.
const DEFAULT_WIDTH: i16 = 7;
const DEFAULT_HEIGHT: i16 = 7;

/// Queen ray directions, fixed because legal-move enumeration order decides
/// search tie-breaks and must stay reproducible.
const DIRECTIONS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One snapshot of a game of isolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i16,
    height: i16,
    /// Row-major blocked flags; a cell is blocked once any move touches it.
    blocked: Vec<bool>,
    /// Current cell of each player, `None` until first placement.
    players: [Option<Move>; 2],
    active: Side,
    move_count: u32,
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Board {
    /// Create an empty board with player one to move.
    pub fn new(width: i16, height: i16) -> Board {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        Board {
            width,
            height,
            blocked: vec![false; (width as usize) * (height as usize)],
            players: [None, None],
            active: Side::One,
            move_count: 0,
        }
    }

    pub fn width(&self) -> i16 {
        self.width
    }

    pub fn height(&self) -> i16 {
        self.height
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn active_player(&self) -> Side {
        self.active
    }

    /// Current cell of the given player, `None` before their first move.
    pub fn player_location(&self, side: Side) -> Option<Move> {
        self.players[side.index()]
    }

    /// The central cell, preferred by the opening rule.
    pub fn center(&self) -> Move {
        Move::new(self.height / 2, self.width / 2)
    }

    fn cell_index(&self, row: i16, col: i16) -> usize {
        (row as usize) * (self.width as usize) + (col as usize)
    }

    fn in_bounds(&self, row: i16, col: i16) -> bool {
        row >= 0 && row < self.height && col >= 0 && col < self.width
    }

    /// A cell no move has touched yet.
    pub fn is_blank(&self, row: i16, col: i16) -> bool {
        self.in_bounds(row, col) && !self.blocked[self.cell_index(row, col)]
    }

    /// All blank cells in row-major order.
    pub fn blank_cells(&self) -> SmallVec<[Move; 64]> {
        let mut cells = SmallVec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if !self.blocked[self.cell_index(row, col)] {
                    cells.push(Move::new(row, col));
                }
            }
        }
        cells
    }

    /// Legal moves for `side` in a fixed, reproducible order: every blank
    /// cell (row-major) before placement, afterwards each queen ray of
    /// `DIRECTIONS` walked outward until the first blocked cell or edge.
    pub fn legal_moves(&self, side: Side) -> SmallVec<[Move; 64]> {
        let Some(origin) = self.players[side.index()] else {
            return self.blank_cells();
        };

        let mut moves = SmallVec::new();
        for (dr, dc) in DIRECTIONS {
            let mut row = origin.row + dr;
            let mut col = origin.col + dc;
            while self.is_blank(row, col) {
                moves.push(Move::new(row, col));
                row += dr;
                col += dc;
            }
        }
        moves
    }

    /// Apply a legal move for the active player in place: block every cell
    /// the move touches, relocate the player, bump the move count, and pass
    /// the turn. Callers are expected to supply moves drawn from
    /// `legal_moves`.
    pub fn apply_move(&mut self, mv: Move) {
        debug_assert!(
            self.legal_moves(self.active).contains(&mv),
            "illegal move {:?} for {:?}",
            mv,
            self.active
        );

        if let Some(origin) = self.players[self.active.index()] {
            // Slide along the ray, blocking the cells passed over and the
            // destination. The origin was blocked when it was first
            // occupied.
            let dr = (mv.row - origin.row).signum();
            let dc = (mv.col - origin.col).signum();
            let mut row = origin.row;
            let mut col = origin.col;
            while (row, col) != (mv.row, mv.col) {
                row += dr;
                col += dc;
                let idx = self.cell_index(row, col);
                self.blocked[idx] = true;
            }
        } else {
            // Opening placement occupies a single cell.
            let idx = self.cell_index(mv.row, mv.col);
            self.blocked[idx] = true;
        }

        self.players[self.active.index()] = Some(mv);
        self.move_count += 1;
        self.active = self.active.opponent();
    }

    /// Successor state after `mv`, leaving `self` untouched.
    pub fn forecast(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }

    /// A player has lost when it is their turn and they cannot move.
    pub fn is_loser(&self, side: Side) -> bool {
        self.active == side && self.legal_moves(side).is_empty()
    }

    /// A player has won when the opponent is to move and cannot.
    pub fn is_winner(&self, side: Side) -> bool {
        self.is_loser(side.opponent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_moves_are_all_blank_cells() {
        let board = Board::default();
        let moves = board.legal_moves(Side::One);
        assert_eq!(moves.len(), 49);
        // Row-major enumeration, starting at the origin corner.
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[1], Move::new(0, 1));
        assert_eq!(moves[48], Move::new(6, 6));
    }

    #[test]
    fn test_placement_blocks_cell_and_passes_turn() {
        let mut board = Board::default();
        board.apply_move(Move::new(3, 3));

        assert_eq!(board.player_location(Side::One), Some(Move::new(3, 3)));
        assert!(!board.is_blank(3, 3));
        assert_eq!(board.active_player(), Side::Two);
        assert_eq!(board.move_count(), 1);
        // The opponent may place anywhere still blank.
        assert_eq!(board.legal_moves(Side::Two).len(), 48);
    }

    #[test]
    fn test_queen_rays_stop_at_blocked_cells() {
        let mut board = Board::default();
        board.apply_move(Move::new(3, 3)); // player one
        board.apply_move(Move::new(3, 5)); // player two

        // Player one's eastward ray ends before the opponent's cell.
        let moves = board.legal_moves(Side::One);
        assert!(moves.contains(&Move::new(3, 4)));
        assert!(!moves.contains(&Move::new(3, 5)));
        assert!(!moves.contains(&Move::new(3, 6)));
        // Other rays run to the edge.
        assert!(moves.contains(&Move::new(3, 0)));
        assert!(moves.contains(&Move::new(0, 0)));
        assert!(moves.contains(&Move::new(6, 6)));
    }

    #[test]
    fn test_sliding_blocks_the_whole_path() {
        let mut board = Board::default();
        board.apply_move(Move::new(3, 0)); // player one
        board.apply_move(Move::new(6, 6)); // player two
        board.apply_move(Move::new(3, 4)); // player one slides east

        // Vacated cell, intervening cells, and destination are all gone.
        for col in 0..=4 {
            assert!(!board.is_blank(3, col), "cell (3, {}) should be blocked", col);
        }
        assert!(board.is_blank(3, 5));
        assert_eq!(board.move_count(), 3);
    }

    #[test]
    fn test_forecast_leaves_original_untouched() {
        let mut board = Board::default();
        board.apply_move(Move::new(3, 3));
        board.apply_move(Move::new(0, 0));

        let snapshot = board.clone();
        let next = board.forecast(Move::new(5, 5));

        assert_eq!(board, snapshot);
        assert_eq!(next.move_count(), board.move_count() + 1);
        assert_eq!(next.player_location(Side::One), Some(Move::new(5, 5)));
    }

    #[test]
    fn test_enumeration_order_is_stable() {
        let mut board = Board::default();
        board.apply_move(Move::new(2, 2));
        board.apply_move(Move::new(4, 4));

        let first = board.legal_moves(Side::One);
        let second = board.legal_moves(Side::One);
        assert_eq!(first, second);
    }

    #[test]
    fn test_trapped_player_loses() {
        // 1x3 strip: player one on the left end, player two in the middle.
        let mut board = Board::new(3, 1);
        board.apply_move(Move::new(0, 0)); // player one
        board.apply_move(Move::new(0, 1)); // player two walls them in

        assert!(board.legal_moves(Side::One).is_empty());
        assert!(board.is_loser(Side::One));
        assert!(board.is_winner(Side::Two));
        assert!(!board.is_loser(Side::Two));
    }

    #[test]
    fn test_no_false_terminals_before_placement() {
        let board = Board::default();
        assert!(!board.is_loser(Side::One));
        assert!(!board.is_winner(Side::One));
        assert!(!board.is_loser(Side::Two));
        assert!(!board.is_winner(Side::Two));
    }

    #[test]
    fn test_center_cell() {
        assert_eq!(Board::default().center(), Move::new(3, 3));
        assert_eq!(Board::new(3, 3).center(), Move::new(1, 1));
    }
}
