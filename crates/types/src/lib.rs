//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Entity positions are expressed in pixel units. Everything spawned from the
//! maze sits on multiples of [`BLOCK_SIZE`]; enemies glide one pixel per
//! qualifying tick between aligned cells.
//!
//! - **Screen**: 865 x 675 pixels
//! - **Block**: 32 pixels
//! - **Grid**: 27 columns x 21 rows (screen / block, truncated)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed tick interval (~60 Hz) |
//! | `ENEMY_SPEED_DIVISOR` | 1 | Enemies move on every Nth tick |
//!
//! # Examples
//!
//! ```
//! use tui_pacman_types::{Direction, GameAction, GridConfig, Position, BLOCK_SIZE};
//!
//! let grid = GridConfig::default();
//! assert_eq!(grid.cols(), 27);
//! assert_eq!(grid.rows(), 21);
//!
//! let start = Position::new(2 * BLOCK_SIZE, BLOCK_SIZE);
//! assert!(start.is_aligned(BLOCK_SIZE));
//! assert_eq!(start.step(Direction::Left, BLOCK_SIZE), Position::new(BLOCK_SIZE, BLOCK_SIZE));
//!
//! assert_eq!(GameAction::MoveUp.direction(), Some(Direction::Up));
//! assert_eq!(GameAction::Quit.direction(), None);
//! ```

/// Screen width in pixels
pub const SCREEN_WIDTH: i32 = 865;

/// Screen height in pixels
pub const SCREEN_HEIGHT: i32 = 675;

/// Grid cell size in pixels, used for placement and player movement
pub const BLOCK_SIZE: i32 = 32;

/// Number of maze columns (27)
pub const GRID_COLS: i32 = SCREEN_WIDTH / BLOCK_SIZE;

/// Number of maze rows (21)
pub const GRID_ROWS: i32 = SCREEN_HEIGHT / BLOCK_SIZE;

/// Fixed tick interval in milliseconds (16ms ≈ 60 Hz)
pub const TICK_MS: u32 = 16;

/// Enemies advance on ticks where `counter % divisor == 0`
pub const ENEMY_SPEED_DIVISOR: u32 = 1;

/// Window title shown by the presentation surface
pub const WINDOW_TITLE: &str = "Pacman";


/// Pixel-space position of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when both axes are exact multiples of `block`
    pub fn is_aligned(&self, block: i32) -> bool {
        self.x.rem_euclid(block) == 0 && self.y.rem_euclid(block) == 0
    }

    /// Offset by `dir` scaled by `distance`
    pub fn step(&self, dir: Direction, distance: i32) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx * distance,
            y: self.y + dy * distance,
        }
    }
}

/// The four cardinal movement directions
///
/// The declaration order matches the reroll table used by enemies:
/// left, right, up, down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All cardinal directions
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit vector `(dx, dy)`, with y growing downwards
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pacman_types::Direction;
    ///
    /// assert_eq!(Direction::Left.delta(), (-1, 0));
    /// assert_eq!(Direction::Down.delta(), (0, 1));
    /// ```
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Inverse of [`Direction::delta`]; `None` for anything but a unit cardinal
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Closed set of entity kinds
///
/// Dispatch is always a `match` on this tag; only enemies carry behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Enemy,
    Dot,
    Powerup,
    Wall,
}

impl EntityKind {
    /// Every kind, in render order
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Player,
        EntityKind::Dot,
        EntityKind::Powerup,
        EntityKind::Enemy,
        EntityKind::Wall,
    ];

    /// Parse kind name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pacman_types::EntityKind;
    ///
    /// assert_eq!(EntityKind::from_str("ghost"), Some(EntityKind::Enemy));
    /// assert_eq!(EntityKind::from_str("Wall"), Some(EntityKind::Wall));
    /// assert_eq!(EntityKind::from_str("cherry"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "player" | "pacman" => Some(EntityKind::Player),
            "enemy" | "ghost" => Some(EntityKind::Enemy),
            "dot" => Some(EntityKind::Dot),
            "powerup" => Some(EntityKind::Powerup),
            "wall" => Some(EntityKind::Wall),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Player => "player",
            EntityKind::Enemy => "enemy",
            EntityKind::Dot => "dot",
            EntityKind::Powerup => "powerup",
            EntityKind::Wall => "wall",
        }
    }

    /// Dots and powerups can be consumed
    pub fn is_collectible(&self) -> bool {
        matches!(self, EntityKind::Dot | EntityKind::Powerup)
    }
}

/// Input actions understood by the tick orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the player one block up
    MoveUp,
    /// Move the player one block down
    MoveDown,
    /// Move the player one block left
    MoveLeft,
    /// Move the player one block right
    MoveRight,
    /// End the session
    Quit,
}

impl GameAction {
    /// Movement direction, or `None` for non-movement actions
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::Quit => None,
        }
    }

    pub fn from_direction(dir: Direction) -> Self {
        match dir {
            Direction::Up => GameAction::MoveUp,
            Direction::Down => GameAction::MoveDown,
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
        }
    }
}

/// Result of one orchestrator tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    /// Session continues; a new render batch is available
    Running,
    /// A quit signal was seen; the host should tear down
    Quit,
}

/// Screen and grid geometry for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub block_size: i32,
    pub enemy_speed_divisor: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            block_size: BLOCK_SIZE,
            enemy_speed_divisor: ENEMY_SPEED_DIVISOR,
        }
    }
}

impl GridConfig {
    /// Config for a grid of exactly `cols` x `rows` blocks (block size at least 1)
    pub fn with_grid(cols: i32, rows: i32, block_size: i32) -> Self {
        let block_size = block_size.max(1);
        Self {
            screen_width: cols * block_size,
            screen_height: rows * block_size,
            block_size,
            enemy_speed_divisor: ENEMY_SPEED_DIVISOR,
        }
    }

    pub fn with_enemy_speed_divisor(mut self, divisor: u32) -> Self {
        self.enemy_speed_divisor = divisor.max(1);
        self
    }

    /// Block size clamped to at least 1 pixel
    pub fn block(&self) -> i32 {
        self.block_size.max(1)
    }

    /// Maze columns (`screen_width / block_size`)
    pub fn cols(&self) -> i32 {
        self.screen_width / self.block()
    }

    /// Maze rows (`screen_height / block_size`)
    pub fn rows(&self) -> i32 {
        self.screen_height / self.block()
    }

    /// Grid cell `(col, row)` containing `pos`, or `None` outside the grid
    pub fn cell_of(&self, pos: Position) -> Option<(i32, i32)> {
        let col = pos.x.div_euclid(self.block());
        let row = pos.y.div_euclid(self.block());
        if col < 0 || col >= self.cols() || row < 0 || row >= self.rows() {
            return None;
        }
        Some((col, row))
    }
}
