//! Read-only snapshot of the game and the per-cell render projection.

use crate::game_state::ActivePiece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

pub type Grid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Grid,
    pub active: Option<ActivePiece>,
    pub piece_id: u32,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Color shown at board cell (x, y).
    ///
    /// Settled cells win; otherwise the active piece's color if its shape
    /// covers the cell; otherwise empty.
    pub fn cell_at(&self, x: usize, y: usize) -> Cell {
        let settled = self.board.get(y).and_then(|row| row.get(x)).copied().flatten();
        if settled.is_some() {
            return settled;
        }
        match self.active {
            Some(active) if active.covers(x as i8, y as i8) => Some(active.kind),
            _ => None,
        }
    }

    /// Project the whole board, active piece included
    pub fn project(&self) -> Grid {
        let mut out = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (y, row) in out.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = self.cell_at(x, y);
            }
        }
        out
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            piece_id: 0,
            score: 0,
            lines: 0,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn projection_prefers_settled_cells() {
        let mut snap = GameSnapshot::default();
        snap.board[1][5] = Some(PieceKind::Z);
        snap.active = Some(ActivePiece::new(PieceKind::T));

        // T at (4, 0): (5,0) (4,1) (5,1) (6,1)
        assert_eq!(snap.cell_at(5, 0), Some(PieceKind::T));
        assert_eq!(snap.cell_at(5, 1), Some(PieceKind::Z));
        assert_eq!(snap.cell_at(4, 0), None);
        assert_eq!(snap.cell_at(9, 19), None);
    }

    #[test]
    fn project_matches_cell_at() {
        let mut snap = GameSnapshot::default();
        snap.active = Some(ActivePiece::new(PieceKind::O));
        let grid = snap.project();
        let filled = grid.iter().flatten().filter(|c| c.is_some()).count();
        assert_eq!(filled, 4);
        assert_eq!(grid[0][4], Some(PieceKind::O));
    }
}
