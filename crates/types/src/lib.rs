//! Core types shared across the workspace
//!
//! Pure data types and game constants with no external dependencies. Every
//! other crate (core rules, input mapping, terminal view) builds on these.
//!
//! # Example
//!
//! ```
//! use blockfall_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Short lowercase names, as used in log fields
//! assert_eq!(PieceKind::T.as_str(), "t");
//! assert_eq!(PieceKind::ALL.len(), 7);
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity period in milliseconds (one row down every 500ms)
pub const TICK_MS: u32 = 500;

/// Points awarded per cleared row. Multi-row clears are strictly linear.
pub const LINE_CLEAR_SCORE: u32 = 100;

/// Spawn column for new pieces: the shape's top-left anchor lands here.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Spawn row for new pieces.
pub const SPAWN_Y: i8 = 0;


/// The seven piece kinds
///
/// Each kind doubles as the color marker stored in settled board cells:
/// - **I**: Cyan, 1x4 bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Position in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Key presses are mapped onto these; the gravity timer uses `MoveDown`
/// through the same pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, settling it if it cannot move
    MoveDown,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell settled by a piece of the given kind (its color)
pub type Cell = Option<PieceKind>;
