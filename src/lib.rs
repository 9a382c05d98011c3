//! TUI Pacman (workspace facade crate).
//!
//! Re-exports `tui_pacman::{core,input,term,types}` so integration tests and the
//! binary share one import path while the implementation lives in `crates/`.

pub use tui_pacman_core as core;
pub use tui_pacman_input as input;
pub use tui_pacman_term as term;
pub use tui_pacman_types as types;
