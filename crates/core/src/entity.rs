//! Entity module - per-kind entity arenas
//!
//! Every entity lives in a contiguous store owned by the session. Entities are
//! addressed by [`EntityId`] (kind + index) rather than by reference, and the
//! whole store is dropped in one go when the session ends.
//!
//! State transitions are deliberately narrow:
//! - the player and enemies only change position (enemies also direction)
//! - collectibles only go from alive to consumed, never back
//! - walls never change after the maze is parsed

use crate::types::{Direction, EntityKind, Position};

/// Stable handle to an entity inside an [`EntityStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId {
    pub kind: EntityKind,
    pub index: usize,
}

impl EntityId {
    pub const PLAYER: EntityId = EntityId {
        kind: EntityKind::Player,
        index: 0,
    };

    pub fn new(kind: EntityKind, index: usize) -> Self {
        Self { kind, index }
    }
}

/// The player-controlled avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub pos: Position,
}

/// A wandering enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    pub pos: Position,
    pub dir: Direction,
    /// Incremented once per tick before the speed gate is evaluated
    pub tick_counter: u32,
    /// The enemy moves on ticks where `tick_counter % speed_divisor == 0`
    pub speed_divisor: u32,
}

impl Enemy {
    /// New enemy heading right
    pub fn new(pos: Position, speed_divisor: u32) -> Self {
        Self {
            pos,
            dir: Direction::Right,
            tick_counter: 0,
            speed_divisor: speed_divisor.max(1),
        }
    }
}

/// A dot or powerup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collectible {
    pos: Position,
    alive: bool,
}

impl Collectible {
    pub fn new(pos: Position) -> Self {
        Self { pos, alive: true }
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn alive(&self) -> bool {
        self.alive
    }

    /// Mark as eaten. Returns `true` only on the alive -> consumed transition.
    pub fn consume(&mut self) -> bool {
        let was_alive = self.alive;
        self.alive = false;
        was_alive
    }
}

/// An immutable wall block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    pos: Position,
}

impl Wall {
    pub fn new(pos: Position) -> Self {
        Self { pos }
    }

    pub fn pos(&self) -> Position {
        self.pos
    }
}

/// Tagged view of a single entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Player(Player),
    Enemy(Enemy),
    Dot(Collectible),
    Powerup(Collectible),
    Wall(Wall),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Player(_) => EntityKind::Player,
            Entity::Enemy(_) => EntityKind::Enemy,
            Entity::Dot(_) => EntityKind::Dot,
            Entity::Powerup(_) => EntityKind::Powerup,
            Entity::Wall(_) => EntityKind::Wall,
        }
    }

    pub fn pos(&self) -> Position {
        match self {
            Entity::Player(p) => p.pos,
            Entity::Enemy(e) => e.pos,
            Entity::Dot(c) | Entity::Powerup(c) => c.pos(),
            Entity::Wall(w) => w.pos(),
        }
    }

    /// Only collectibles can be dead
    pub fn is_alive(&self) -> bool {
        match self {
            Entity::Dot(c) | Entity::Powerup(c) => c.alive(),
            _ => true,
        }
    }
}

/// Session-owned storage, one arena per entity kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityStore {
    pub(crate) player: Player,
    pub(crate) enemies: Vec<Enemy>,
    pub(crate) dots: Vec<Collectible>,
    pub(crate) powerups: Vec<Collectible>,
    pub(crate) walls: Vec<Wall>,
}

impl EntityStore {
    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn dots(&self) -> &[Collectible] {
        &self.dots
    }

    pub fn powerups(&self) -> &[Collectible] {
        &self.powerups
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Number of entities of `kind` (dead collectibles included)
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Player => 1,
            EntityKind::Enemy => self.enemies.len(),
            EntityKind::Dot => self.dots.len(),
            EntityKind::Powerup => self.powerups.len(),
            EntityKind::Wall => self.walls.len(),
        }
    }

    /// Look up an entity by id
    pub fn get(&self, id: EntityId) -> Option<Entity> {
        match id.kind {
            EntityKind::Player => (id.index == 0).then_some(Entity::Player(self.player)),
            EntityKind::Enemy => self.enemies.get(id.index).copied().map(Entity::Enemy),
            EntityKind::Dot => self.dots.get(id.index).copied().map(Entity::Dot),
            EntityKind::Powerup => self.powerups.get(id.index).copied().map(Entity::Powerup),
            EntityKind::Wall => self.walls.get(id.index).copied().map(Entity::Wall),
        }
    }

    /// Consume the collectible behind `id`.
    ///
    /// Returns `false` for non-collectible ids, unknown indices, and
    /// collectibles that were already eaten.
    pub fn consume(&mut self, id: EntityId) -> bool {
        let slot = match id.kind {
            EntityKind::Dot => self.dots.get_mut(id.index),
            EntityKind::Powerup => self.powerups.get_mut(id.index),
            _ => None,
        };
        slot.map(Collectible::consume).unwrap_or(false)
    }

    pub fn alive_dots(&self) -> usize {
        self.dots.iter().filter(|d| d.alive()).count()
    }

    pub fn alive_powerups(&self) -> usize {
        self.powerups.iter().filter(|p| p.alive()).count()
    }
}
