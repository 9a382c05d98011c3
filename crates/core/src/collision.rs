//! Collision module - wall and occupancy queries
//!
//! Walls are baked into a flat row-major bitmap once per session. A wall query
//! succeeds only for block-aligned coordinates that land exactly on a wall, or
//! for anything outside the grid. The player uses the stricter
//! [`WallMap::is_wall_position`], which never treats the grid edge as a wall.

use crate::entity::{EntityId, EntityStore};
use crate::types::{EntityKind, GridConfig, Position};

/// Immutable wall lookup built from the parsed maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallMap {
    grid: GridConfig,
    cells: Vec<bool>,
}

impl WallMap {
    pub fn new(store: &EntityStore, grid: GridConfig) -> Self {
        let len = (grid.cols().max(0) as usize) * (grid.rows().max(0) as usize);
        let mut cells = vec![false; len];
        for wall in store.walls() {
            if let Some(i) = Self::index(&grid, wall.pos()) {
                cells[i] = true;
            }
        }
        Self { grid, cells }
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    #[inline(always)]
    fn index(grid: &GridConfig, pos: Position) -> Option<usize> {
        if !pos.is_aligned(grid.block()) {
            return None;
        }
        let (col, row) = grid.cell_of(pos)?;
        Some((row as usize) * (grid.cols() as usize) + (col as usize))
    }

    /// Out of bounds counts as a wall; otherwise exact match against a wall position
    pub fn is_wall(&self, pos: Position) -> bool {
        if self.grid.cell_of(pos).is_none() {
            return true;
        }
        match Self::index(&self.grid, pos) {
            Some(i) => self.cells[i],
            None => false,
        }
    }

    /// Exact match against a wall position only; off-grid is open.
    ///
    /// This is the player's rule, which lets it leave through the tunnel row.
    pub fn is_wall_position(&self, pos: Position) -> bool {
        Self::index(&self.grid, pos).is_some_and(|i| self.cells[i])
    }

    /// Convenience for `is_wall(Position::new(x, y))`
    pub fn is_wall_at(&self, x: i32, y: i32) -> bool {
        self.is_wall(Position::new(x, y))
    }
}

/// First live entity of `kind` sitting exactly at `pos`.
///
/// Iteration follows arena order. Consumed collectibles are skipped; all other
/// kinds are always live.
pub fn first_alive_occupant(
    store: &EntityStore,
    pos: Position,
    kind: EntityKind,
) -> Option<EntityId> {
    let index = match kind {
        EntityKind::Player => (store.player().pos == pos).then_some(0),
        EntityKind::Enemy => store.enemies().iter().position(|e| e.pos == pos),
        EntityKind::Dot => store
            .dots()
            .iter()
            .position(|d| d.alive() && d.pos() == pos),
        EntityKind::Powerup => store
            .powerups()
            .iter()
            .position(|p| p.alive() && p.pos() == pos),
        EntityKind::Wall => store.walls().iter().position(|w| w.pos() == pos),
    }?;
    Some(EntityId::new(kind, index))
}
