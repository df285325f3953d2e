//! Terminal presentation layer
//!
//! - [`fb`]: framebuffer of styled character cells
//! - [`game_view`]: pure projection of a [`GameSnapshot`](crate::core::GameSnapshot) into a framebuffer
//! - [`renderer`]: terminal session and diffed output via crossterm

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
