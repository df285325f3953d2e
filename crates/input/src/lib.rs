//! Input module - keyboard to game action mapping
//!
//! Only arrow-key presses drive the game:
//!
//! | key | action |
//! |-----|--------|
//! | `Left` | [`GameAction::MoveLeft`] |
//! | `Right` | [`GameAction::MoveRight`] |
//! | `Down` | [`GameAction::MoveDown`] |
//! | `Up` | [`GameAction::Rotate`] |
//!
//! Every other key is ignored by the game. `q`, `Esc` and `Ctrl+C` quit the program.
//!
//! [`GameAction::MoveLeft`]: blockfall_types::GameAction::MoveLeft
//! [`GameAction::MoveRight`]: blockfall_types::GameAction::MoveRight
//! [`GameAction::MoveDown`]: blockfall_types::GameAction::MoveDown
//! [`GameAction::Rotate`]: blockfall_types::GameAction::Rotate

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
