//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and drains the
//! terminal event queue once per tick into a fixed-capacity batch. The batch is
//! handed to the core unchanged; resolving which move wins is the core's job.

pub mod events;
pub mod map;

pub use tui_pacman_types as types;

pub use events::{collect_event, drain_pending, ActionBatch, MAX_ACTIONS_PER_TICK};
pub use map::{handle_key_event, should_quit};
