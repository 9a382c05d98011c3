//! Game state module - the tick orchestrator
//!
//! Owns the entity store, the wall map and the session RNG. One call to
//! [`GameState::tick`] drains an input batch, resolves player movement and
//! pickups, then advances every enemy in spawn order.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::collision::{first_alive_occupant, WallMap};
use crate::enemy::{self, EnemyStep};
use crate::entity::{Collectible, Enemy, EntityStore, Player, Wall};
use crate::maze::{self, MazeFormatError, DEFAULT_MAZE};
use crate::snapshot::RenderBatch;
use crate::types::*;

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    grid: GridConfig,
    entities: EntityStore,
    walls: WallMap,
    rng: ChaCha8Rng,
    seed: u64,
    /// Completed ticks.
    tick: u64,
    quit: bool,
}

impl GameState {
    /// New session on the built-in maze
    pub fn new(seed: u64) -> Result<Self, MazeFormatError> {
        Self::with_config(&DEFAULT_MAZE, GridConfig::default(), seed)
    }

    /// New session on custom maze text and geometry
    pub fn with_config<S: AsRef<str>>(
        rows: &[S],
        grid: GridConfig,
        seed: u64,
    ) -> Result<Self, MazeFormatError> {
        let entities = maze::parse(rows, &grid)?;
        let walls = WallMap::new(&entities, grid);
        Ok(Self {
            grid,
            entities,
            walls,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            tick: 0,
            quit: false,
        })
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    pub fn entities(&self) -> &EntityStore {
        &self.entities
    }

    pub fn wall_map(&self) -> &WallMap {
        &self.walls
    }

    pub fn player(&self) -> &Player {
        self.entities.player()
    }

    pub fn enemies(&self) -> &[Enemy] {
        self.entities.enemies()
    }

    pub fn dots(&self) -> &[Collectible] {
        self.entities.dots()
    }

    pub fn powerups(&self) -> &[Collectible] {
        self.entities.powerups()
    }

    pub fn walls(&self) -> &[Wall] {
        self.entities.walls()
    }

    pub fn dots_left(&self) -> usize {
        self.entities.alive_dots()
    }

    pub fn powerups_left(&self) -> usize {
        self.entities.alive_powerups()
    }

    /// Wall query against this session's maze
    pub fn is_wall(&self, pos: Position) -> bool {
        self.walls.is_wall(pos)
    }

    /// Raise the termination flag; every later tick returns [`TickStatus::Quit`].
    pub fn request_quit(&mut self) {
        if !self.quit {
            info!(tick = self.tick, "quit requested");
        }
        self.quit = true;
    }

    /// Run one tick over a batch of input actions.
    ///
    /// A `Quit` anywhere in the batch ends the session before anything moves.
    /// Otherwise only the last movement action in the batch is attempted.
    pub fn tick(&mut self, actions: &[GameAction]) -> TickStatus {
        if self.quit {
            return TickStatus::Quit;
        }

        let mut pending = None;
        for action in actions {
            match action {
                GameAction::Quit => {
                    self.request_quit();
                    return TickStatus::Quit;
                }
                _ => pending = action.direction().or(pending),
            }
        }

        if let Some(dir) = pending {
            self.try_move_player(dir);
        }

        self.advance_enemies();
        self.tick += 1;
        TickStatus::Running
    }

    /// Tick, then refresh `batch` if the session is still running.
    pub fn step(&mut self, actions: &[GameAction], batch: &mut RenderBatch) -> TickStatus {
        let status = self.tick(actions);
        if status == TickStatus::Running {
            self.render_into(batch);
        }
        status
    }

    /// Move the player one block in `dir`.
    ///
    /// Returns `false` (position untouched) when the target is exactly a wall
    /// position. The grid edge does not block the player, so it can walk out
    /// through the tunnel row. On success any live dot and any live powerup at
    /// the new position are consumed.
    pub fn try_move_player(&mut self, dir: Direction) -> bool {
        let target = self.entities.player.pos.step(dir, self.grid.block());
        if self.walls.is_wall_position(target) {
            return false;
        }

        self.entities.player.pos = target;
        self.consume_at(target);
        true
    }

    fn consume_at(&mut self, pos: Position) {
        for kind in [EntityKind::Dot, EntityKind::Powerup] {
            if let Some(id) = first_alive_occupant(&self.entities, pos, kind) {
                if self.entities.consume(id) {
                    debug!(
                        kind = kind.as_str(),
                        index = id.index,
                        x = pos.x,
                        y = pos.y,
                        "collectible eaten"
                    );
                }
            }
        }
    }

    fn advance_enemies(&mut self) {
        let block = self.grid.block();
        for e in self.entities.enemies.iter_mut() {
            if enemy::advance(e, &self.walls, block, &mut self.rng) == EnemyStep::Boxed {
                debug!(tick = self.tick, "enemy held in place");
            }
        }
    }

    /// Fill `batch` with the current frame in draw order.
    pub fn render_into(&self, batch: &mut RenderBatch) {
        batch.clear();
        batch.tick = self.tick;
        batch.dots_left = self.dots_left();
        batch.powerups_left = self.powerups_left();

        batch.push(EntityKind::Player, self.entities.player.pos);
        for d in self.entities.dots.iter().filter(|d| d.alive()) {
            batch.push(EntityKind::Dot, d.pos());
        }
        for p in self.entities.powerups.iter().filter(|p| p.alive()) {
            batch.push(EntityKind::Powerup, p.pos());
        }
        for e in &self.entities.enemies {
            batch.push(EntityKind::Enemy, e.pos);
        }
        for w in &self.entities.walls {
            batch.push(EntityKind::Wall, w.pos());
        }
    }

    /// Convenience helper that allocates a new batch.
    pub fn render_batch(&self) -> RenderBatch {
        let capacity = 1
            + self.entities.dots.len()
            + self.entities.powerups.len()
            + self.entities.enemies.len()
            + self.entities.walls.len();
        let mut batch = RenderBatch::with_capacity(capacity);
        self.render_into(&mut batch);
        batch
    }

    #[cfg(test)]
    pub(crate) fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.entities.enemies
    }
}
