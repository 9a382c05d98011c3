//! Maze module - turns maze text into the initial entity store
//!
//! The maze is a rectangular block of characters, one per grid cell, scanned in
//! row-major order. Cell `(col, row)` spawns at pixel position
//! `(col * block, row * block)`.
//!
//! | Char | Spawns |
//! |------|--------|
//! | `#` | wall |
//! | `.` | dot |
//! | `o` | powerup |
//! | `P` | player (last one wins) |
//! | `<` | enemy (each one is independent) |
//! | anything else | open floor |
//!
//! Dimensions are checked before anything is spawned, so a malformed maze never
//! yields a partial store.

use thiserror::Error;
use tracing::info;

use crate::entity::{Collectible, Enemy, EntityStore, Player, Wall};
use crate::types::{GridConfig, Position, GRID_ROWS};

/// The built-in 27 x 21 maze.
///
/// `[` / `]` mark the tunnel row and capital `O` is decoration; both are floor.
pub const DEFAULT_MAZE: [&str; GRID_ROWS as usize] = [
    "###########################",
    "#o..........P#...........o#",
    "#.####.#####.#.####.#####.#",
    "#.........................#",
    "#.####.#.#########.#.####.#",
    "#......#.....#.....#......#",
    "######.#####.#.#####.######",
    "     #.#           #.#     ",
    "######.#           #.######",
    "[     .             .     ]",
    "######.#           #.######",
    "     #.#           #.#     ",
    "######.#..#######..#.######",
    "#............#............#",
    "#.####.#####.#.#####.####.#",
    "#O...#.......<.......#...O#",
    "####.#.#.#########.#.#.####",
    "#......#.....#.....#......#",
    "#.####.#####.#.#####.####.#",
    "#o.......................o#",
    "###########################",
];

/// Maze text does not match the grid dimensions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeFormatError {
    #[error("maze has {found} rows, expected {expected}")]
    RowCount { expected: usize, found: usize },
    #[error("maze row {row} has {found} columns, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Check row count and every row length against `grid`
pub fn validate<S: AsRef<str>>(rows: &[S], grid: &GridConfig) -> Result<(), MazeFormatError> {
    let expected_rows = grid.rows().max(0) as usize;
    let expected_cols = grid.cols().max(0) as usize;

    if rows.len() != expected_rows {
        return Err(MazeFormatError::RowCount {
            expected: expected_rows,
            found: rows.len(),
        });
    }

    for (row, text) in rows.iter().enumerate() {
        let found = text.as_ref().chars().count();
        if found != expected_cols {
            return Err(MazeFormatError::RowLength {
                row,
                expected: expected_cols,
                found,
            });
        }
    }

    Ok(())
}

/// Parse maze text into a fresh entity store.
///
/// The player defaults to `(0, 0)` when the maze has no `P`.
pub fn parse<S: AsRef<str>>(rows: &[S], grid: &GridConfig) -> Result<EntityStore, MazeFormatError> {
    validate(rows, grid)?;

    let block = grid.block();
    let mut store = EntityStore {
        player: Player {
            pos: Position::default(),
        },
        enemies: Vec::new(),
        dots: Vec::new(),
        powerups: Vec::new(),
        walls: Vec::new(),
    };

    for (row, text) in rows.iter().enumerate() {
        for (col, ch) in text.as_ref().chars().enumerate() {
            let pos = Position::new(col as i32 * block, row as i32 * block);
            match ch {
                '#' => store.walls.push(Wall::new(pos)),
                '.' => store.dots.push(Collectible::new(pos)),
                'o' => store.powerups.push(Collectible::new(pos)),
                'P' => store.player = Player { pos },
                '<' => store.enemies.push(Enemy::new(pos, grid.enemy_speed_divisor)),
                _ => {}
            }
        }
    }

    info!(
        walls = store.walls.len(),
        dots = store.dots.len(),
        powerups = store.powerups.len(),
        enemies = store.enemies.len(),
        player_x = store.player.pos.x,
        player_y = store.player.pos.y,
        "maze parsed"
    );

    Ok(store)
}
