//! Game state module - the engine
//!
//! Owns the board, the active piece, the score and the game-over latch. Key
//! presses and the gravity timer go through the same validated-move pathway:
//! every move is checked with [`Board::is_valid_move`] before it is written, and
//! rejected moves are silent no-ops.

use tracing::{debug, info};

use crate::board::Board;
use crate::pieces::{get_shape, MinoOffset, Shape};
use crate::rng::PieceRandomizer;
use crate::scoring::calculate_line_score;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, PieceKind, SPAWN_X, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Shape in its current rotation
    pub shape: Shape,
    /// Board column of the shape's top-left anchor
    pub x: i8,
    /// Board row of the shape's top-left anchor
    pub y: i8,
}

impl ActivePiece {
    /// Create a new piece at spawn position with its canonical shape
    pub fn new(kind: PieceKind) -> Self {
        Self::with_shape(kind, get_shape(kind), SPAWN_X, SPAWN_Y)
    }

    /// Create a piece with an arbitrary shape and position
    pub fn with_shape(kind: PieceKind, shape: Shape, x: i8, y: i8) -> Self {
        Self { kind, shape, x, y }
    }

    /// Absolute board coordinates of the occupied cells.
    ///
    /// Cells whose coordinates fall outside the `i8` range are skipped.
    pub fn minos(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        self.shape
            .minos()
            .filter_map(move |(dx, dy)| Some((self.x.checked_add(dx)?, self.y.checked_add(dy)?)))
    }

    /// Whether the piece's shape has an occupied cell at board (x, y)
    pub fn covers(&self, x: i8, y: i8) -> bool {
        let col = i16::from(x) - i16::from(self.x);
        let row = i16::from(y) - i16::from(self.y);
        match (i8::try_from(col), i8::try_from(row)) {
            (Ok(col), Ok(row)) => self.shape.is_filled(col, row),
            _ => false,
        }
    }

    /// Check the piece fits the board at its own position
    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_valid_move(&self.shape, self.x, self.y)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: ActivePiece,
    randomizer: PieceRandomizer,
    /// Monotonic id for spawned pieces (the first piece is 1).
    piece_id: u32,
    score: u32,
    lines: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed and spawn the first piece
    pub fn new(seed: u64) -> Self {
        Self::with_board(PieceRandomizer::new(seed), Board::new())
    }

    /// Create a new game on a prepared board
    pub fn with_board(mut randomizer: PieceRandomizer, board: Board) -> Self {
        let kind = randomizer.draw();
        let mut state = Self {
            board,
            active: ActivePiece::new(kind),
            randomizer,
            piece_id: 1,
            score: 0,
            lines: 0,
            game_over: false,
        };
        debug!(kind = kind.as_str(), seed = state.randomizer.seed(), "game started");
        state.check_game_over();
        state
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn seed(&self) -> u64 {
        self.randomizer.seed()
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = Some(self.active);
        out.piece_id = self.piece_id;
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Replace the active piece with a fresh random one at the spawn origin.
    ///
    /// No validation happens here beyond the post-mutation game-over check.
    pub fn spawn_piece(&mut self) -> PieceKind {
        let kind = self.randomizer.draw();
        self.active = ActivePiece::new(kind);
        self.piece_id = self.piece_id.wrapping_add(1);
        debug!(kind = kind.as_str(), piece_id = self.piece_id, "spawned piece");
        self.check_game_over();
        kind
    }

    /// Swap in a specific active piece (scripted setups, puzzles).
    ///
    /// Counts as a piece update: the game-over check runs afterwards.
    pub fn replace_active(&mut self, piece: ActivePiece) {
        if self.game_over {
            return;
        }
        self.active = piece;
        self.check_game_over();
    }

    /// Latch game over if the active piece does not fit where it is.
    fn check_game_over(&mut self) {
        if !self.game_over && !self.active.is_valid(&self.board) {
            self.set_game_over();
        }
    }

    fn set_game_over(&mut self) {
        self.game_over = true;
        info!(
            score = self.score,
            lines = self.lines,
            pieces = self.piece_id,
            "game over"
        );
    }

    /// Try to move the active piece
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let (Some(x), Some(y)) = (self.active.x.checked_add(dx), self.active.y.checked_add(dy))
        else {
            return false;
        };
        if !self.board.is_valid_move(&self.active.shape, x, y) {
            return false;
        }
        self.active.x = x;
        self.active.y = y;
        true
    }

    /// Move the active piece one row down, or settle it.
    ///
    /// Returns true if the piece moved. When it cannot, it is merged into the
    /// board and a replacement spawns; the call then returns false.
    pub fn move_down(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if self.try_move(0, 1) {
            return true;
        }
        self.settle();
        false
    }

    /// Move the active piece horizontally by `dx` columns if it fits
    pub fn move_horizontal(&mut self, dx: i8) -> bool {
        if self.game_over {
            return false;
        }
        self.try_move(dx, 0)
    }

    /// Rotate the active piece clockwise in place (no wall kicks)
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let rotated = self.active.shape.rotate_cw();
        if !self
            .board
            .is_valid_move(&rotated, self.active.x, self.active.y)
        {
            return false;
        }
        self.active.shape = rotated;
        true
    }

    /// Merge the active piece into the board and spawn the next one
    fn settle(&mut self) {
        let piece = self.active;
        if !self.board.merge(&piece) {
            // Part of the piece is still above the top row: the stack overflowed.
            debug!(x = piece.x, y = piece.y, "merge refused");
            self.set_game_over();
            return;
        }
        debug!(
            kind = piece.kind.as_str(),
            x = piece.x,
            y = piece.y,
            "piece settled"
        );
        self.spawn_piece();
    }

    /// Remove completed rows and add their score. Returns the number of rows cleared.
    pub fn clear_lines(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }
        let cleared = self.board.clear_full_rows();
        if cleared.is_empty() {
            return 0;
        }
        let n = cleared.len();
        self.score = self.score.saturating_add(calculate_line_score(n));
        self.lines = self.lines.saturating_add(n as u32);
        debug!(rows = ?cleared.as_slice(), score = self.score, "cleared lines");
        // Rows above the cleared ones shift down and may land on the active piece.
        self.check_game_over();
        n as u32
    }

    /// One gravity step: move down (or settle), then clear completed rows.
    ///
    /// Line clearing runs every tick whether or not a piece settled.
    /// Returns false once the game is over.
    pub fn tick(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.move_down();
        self.clear_lines();
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::MoveDown => self.move_down(),
            GameAction::Rotate => self.rotate(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_board(PieceRandomizer::from_entropy(), Board::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

    /// Seed whose first draw is `kind`.
    fn state_with_first(kind: PieceKind) -> GameState {
        (0u64..)
            .map(GameState::new)
            .find(|s| s.active.kind == kind)
            .unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.piece_id, 1);
        assert_eq!(state.active.x, SPAWN_X);
        assert_eq!(state.active.y, SPAWN_Y);
        assert_eq!(state.active.shape, get_shape(state.active.kind));
    }

    #[test]
    fn test_active_piece_new() {
        let piece = ActivePiece::new(PieceKind::T);
        assert_eq!(piece.kind, PieceKind::T);
        assert_eq!(piece.x, 4);
        assert_eq!(piece.y, 0);
        let minos: Vec<_> = piece.minos().collect();
        assert_eq!(minos, vec![(5, 0), (4, 1), (5, 1), (6, 1)]);
    }

    #[test]
    fn test_active_piece_covers() {
        let piece = ActivePiece::new(PieceKind::T);
        assert!(piece.covers(5, 0));
        assert!(!piece.covers(4, 0)); // inside bounding box, empty
        assert!(!piece.covers(7, 1)); // outside bounding box
    }

    #[test]
    fn test_try_move() {
        let mut state = GameState::new(12345);
        let initial_x = state.active.x;

        assert!(state.try_move(1, 0));
        assert_eq!(state.active.x, initial_x + 1);

        assert!(state.try_move(-1, 0));
        assert_eq!(state.active.x, initial_x);

        // Moving up is legal: rows above the board never collide.
        assert!(state.try_move(0, -1));
    }

    #[test]
    fn test_move_down_settles_and_spawns() {
        let mut state = state_with_first(PieceKind::O);
        while state.move_down() {}

        assert!(!state.game_over);
        assert_eq!(state.piece_id, 2);
        assert_eq!(state.active.x, SPAWN_X);
        assert_eq!(state.active.y, SPAWN_Y);
        assert_eq!(state.board.filled_count(), 4);
        for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
            assert_eq!(state.board.get(x, y), Some(Some(PieceKind::O)));
        }
    }

    #[test]
    fn test_rotate_rejected_at_wall() {
        let mut state = state_with_first(PieceKind::I);
        // Vertical I against the right wall: rotating back to horizontal
        // would stick out, and there is no kick.
        assert!(state.rotate());
        while state.move_horizontal(1) {}
        assert_eq!(state.active.x, BOARD_WIDTH as i8 - 1);

        let before = state.active;
        assert!(!state.rotate());
        assert_eq!(state.active, before);
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        let mut state = state_with_first(PieceKind::L);
        state.move_down();
        state.move_down();
        let original = state.active.shape;
        for _ in 0..4 {
            assert!(state.rotate());
        }
        assert_eq!(state.active.shape, original);
    }

    #[test]
    fn test_clear_lines_scores_linearly() {
        let mut state = GameState::new(1);
        for y in [BOARD_HEIGHT as i8 - 1, BOARD_HEIGHT as i8 - 3] {
            for x in 0..BOARD_WIDTH as i8 {
                state.board.set(x, y, Some(PieceKind::J));
            }
        }
        assert_eq!(state.clear_lines(), 2);
        assert_eq!(state.score, 200);
        assert_eq!(state.lines, 2);
        assert_eq!(state.board.filled_count(), 0);
        // Nothing left to clear.
        assert_eq!(state.clear_lines(), 0);
        assert_eq!(state.score, 200);
    }

    #[test]
    fn test_clear_shifting_stack_into_piece_is_game_over() {
        let mut state = GameState::new(9);
        state.board_mut().set(3, 0, Some(PieceKind::Z));
        for x in 0..BOARD_WIDTH as i8 {
            state.board_mut().set(x, BOARD_HEIGHT as i8 - 1, Some(PieceKind::J));
        }
        // T at (3, 0) covers (4,0) (3,1) (4,1) (5,1); (3,0) is free in its box.
        let t = ActivePiece::with_shape(PieceKind::T, get_shape(PieceKind::T), 3, 0);
        state.replace_active(t);
        assert!(!state.game_over);

        assert_eq!(state.clear_lines(), 1);
        assert_eq!(state.board.get(3, 1), Some(Some(PieceKind::Z)));
        assert!(state.active.covers(3, 1));
        assert!(!state.active.is_valid(&state.board));
        assert!(state.game_over);
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_clear_away_from_piece_keeps_playing() {
        let mut state = GameState::new(9);
        for x in 0..BOARD_WIDTH as i8 {
            state.board_mut().set(x, BOARD_HEIGHT as i8 - 1, Some(PieceKind::J));
        }
        state.board_mut().set(0, BOARD_HEIGHT as i8 - 2, Some(PieceKind::O));
        assert_eq!(state.clear_lines(), 1);
        assert!(!state.game_over);
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let mut state = GameState::new(4);
        let vertical_i = get_shape(PieceKind::I).rotate_cw();

        // Far above the board: fits, and nothing of it is visible.
        state.replace_active(ActivePiece::with_shape(PieceKind::I, vertical_i, 0, i8::MIN));
        assert!(!state.game_over);
        assert!(state.snapshot().project().iter().flatten().all(|c| c.is_none()));
        assert!(!state.move_horizontal(-1));
        assert!(state.move_horizontal(1));
        assert!(state.tick());

        // Cells past i8::MAX never fit.
        let far_right = ActivePiece::with_shape(PieceKind::I, vertical_i, i8::MAX, i8::MAX);
        assert!(!far_right.covers(0, 0));
        assert_eq!(far_right.minos().count(), 1);
        state.replace_active(far_right);
        assert!(state.game_over);
        assert!(state.snapshot().project().iter().flatten().all(|c| c.is_none()));
    }

    #[test]
    fn test_tick_moves_piece_down() {
        let mut state = GameState::new(3);
        let y = state.active.y;
        assert!(state.tick());
        assert_eq!(state.active.y, y + 1);
    }

    #[test]
    fn test_spawn_into_blocked_area_is_game_over() {
        let mut state = GameState::new(12345);
        for x in 0..BOARD_WIDTH as i8 {
            state.board_mut().set(x, 0, Some(PieceKind::I));
            state.board_mut().set(x, 1, Some(PieceKind::I));
        }
        state.spawn_piece();
        assert!(state.game_over);
    }

    #[test]
    fn test_merge_above_top_is_game_over() {
        let mut state = GameState::new(5);
        state.board_mut().set(0, 0, Some(PieceKind::Z));
        // A one-row piece hanging above the top, resting on the stack.
        let bar = Shape::from_rows(&[&[true, true]]).unwrap();
        let piece = ActivePiece::with_shape(PieceKind::S, bar, 0, -1);
        state.replace_active(piece);
        assert!(!state.game_over);

        let board_before = state.board.clone();
        assert!(!state.move_down());
        assert!(state.game_over);
        // Refused merge leaves the board as it was.
        assert_eq!(state.board, board_before);
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = GameState::new(12345);
        state.game_over = true;

        let board = state.board.clone();
        let active = state.active;
        let score = state.score;

        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::MoveRight));
        assert!(!state.apply_action(GameAction::MoveDown));
        assert!(!state.apply_action(GameAction::Rotate));
        assert!(!state.tick());
        assert_eq!(state.clear_lines(), 0);

        assert_eq!(state.board, board);
        assert_eq!(state.active, active);
        assert_eq!(state.score, score);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(12345);
        state.board_mut().set(0, 19, Some(PieceKind::L));
        let snap = state.snapshot();
        assert_eq!(snap.board[19][0], Some(PieceKind::L));
        assert_eq!(snap.active, Some(state.active));
        assert_eq!(snap.score, 0);
        assert!(!snap.game_over);
    }
}
