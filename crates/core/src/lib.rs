//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the maze model, entity storage, collision queries, enemy
//! behavior and the tick orchestrator. It has **zero dependencies** on terminal
//! I/O, which makes it:
//!
//! - **Deterministic**: Same seed produces identical enemy wandering
//! - **Testable**: Small custom mazes exercise every rule directly
//! - **Portable**: The host only feeds actions in and draws the render batch out
//!
//! # Module Structure
//!
//! - [`maze`]: maze text parsing and the built-in 27x21 maze
//! - [`entity`]: per-kind entity arenas addressed by [`EntityId`]
//! - [`collision`]: wall bitmap and occupancy queries
//! - [`enemy`]: per-tick enemy wandering rule
//! - [`game_state`]: tick orchestration and render batch production
//! - [`snapshot`]: the render batch handed to the presentation surface
//!
//! # Game Rules
//!
//! - **Player**: moves one whole block per directional input; walls and the grid
//!   edge block the move
//! - **Collectibles**: dots and powerups are eaten when the player lands on them
//!   and never come back
//! - **Enemies**: glide one pixel per qualifying tick and pick a random open
//!   direction when the block ahead is a wall
//!
//! # Example
//!
//! ```
//! use tui_pacman_core::GameState;
//! use tui_pacman_types::{GameAction, TickStatus};
//!
//! let mut game = GameState::new(12345).unwrap();
//! let start = game.player().pos;
//!
//! // The default maze has a dot to the left of the player spawn.
//! assert_eq!(game.tick(&[GameAction::MoveLeft]), TickStatus::Running);
//! assert_ne!(game.player().pos, start);
//!
//! let batch = game.render_batch();
//! assert_eq!(batch.entities[0].pos, game.player().pos);
//!
//! assert_eq!(game.tick(&[GameAction::Quit]), TickStatus::Quit);
//! ```
//!
//! # Timing
//!
//! The host calls [`GameState::tick`](game_state::GameState::tick) once per
//! 16ms frame. There is no accumulator or catch-up; a slow frame simply delays
//! the next tick.

pub mod collision;
pub mod enemy;
pub mod entity;
pub mod game_state;
pub mod maze;
pub mod snapshot;

pub use tui_pacman_types as types;

// Re-export commonly used types for convenience
pub use collision::{first_alive_occupant, WallMap};
pub use enemy::{open_directions, EnemyStep};
pub use entity::{Collectible, Enemy, Entity, EntityId, EntityStore, Player, Wall};
pub use game_state::GameState;
pub use maze::{MazeFormatError, DEFAULT_MAZE};
pub use snapshot::{RenderBatch, Renderable};
