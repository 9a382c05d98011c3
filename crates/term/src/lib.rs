//! Terminal presentation surface.
//!
//! The core never touches the terminal. It hands over a
//! [`RenderBatch`](crate::core::RenderBatch) each tick and this crate draws it:
//!
//! - [`sprites`]: one drawable per entity kind, loaded up front
//! - [`game_view`]: one block-sized rectangle per renderable, in batch order
//! - [`renderer`]: raw mode, alternate screen, title, diff flushing
//!
//! Each maze block is 2 terminal columns by 1 row to compensate for the usual
//! glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sprites;

pub use tui_pacman_core as core;
pub use tui_pacman_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Origin, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sprites::{AssetLoadError, Sprite, SpriteSheet, DEFAULT_SHEET};
