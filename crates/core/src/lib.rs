//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management.
//! It has **no dependencies** on UI or terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with collision detection, merging and line clearing
//! - [`game_state`]: The engine: active piece, movement, rotation, score, game over
//! - [`pieces`]: Shape matrices and clockwise rotation
//! - [`rng`]: Uniform random piece selection
//! - [`scoring`]: Flat per-row scoring
//! - [`snapshot`]: Read-only snapshot and per-cell render projection
//!
//! # Game Rules
//!
//! - **Random pieces**: Each spawn is an independent uniform draw over the seven kinds
//! - **Rotation**: 90° clockwise around the shape's bounding box, no wall kicks
//! - **Gravity**: One row per tick; a piece that cannot move down settles immediately
//! - **Scoring**: 100 points per cleared row
//! - **Game over**: Latched when the active piece no longer fits where it is
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.tick();
//!
//! assert!(!game.game_over());
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{ActivePiece, GameState};
pub use pieces::{get_shape, Shape};
pub use rng::PieceRandomizer;
pub use scoring::calculate_line_score;
pub use snapshot::{GameSnapshot, Grid};
