//! Enemy module - random wandering behavior
//!
//! Each qualifying tick an enemy glides one pixel along its direction. Direction
//! decisions only happen when the enemy sits exactly on a block boundary and the
//! next block ahead is a wall; the new direction is drawn uniformly from the
//! directions whose next block is open.

use arrayvec::ArrayVec;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{trace, warn};

use crate::collision::WallMap;
use crate::entity::Enemy;
use crate::types::{Direction, Position};

/// Outcome of advancing one enemy by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyStep {
    /// Speed gate skipped this tick
    Idle,
    /// Moved one pixel, possibly after picking a new direction
    Moved { rerolled: bool },
    /// Aligned with walls on all four sides; stayed put
    Boxed,
}

/// Directions whose next block from `pos` is not a wall
pub fn open_directions(pos: Position, walls: &WallMap, block: i32) -> ArrayVec<Direction, 4> {
    Direction::ALL
        .into_iter()
        .filter(|dir| !walls.is_wall(pos.step(*dir, block)))
        .collect()
}

/// Advance `enemy` by one tick.
pub fn advance<R: Rng + ?Sized>(
    enemy: &mut Enemy,
    walls: &WallMap,
    block: i32,
    rng: &mut R,
) -> EnemyStep {
    enemy.tick_counter = enemy.tick_counter.wrapping_add(1);
    if enemy.tick_counter % enemy.speed_divisor.max(1) != 0 {
        return EnemyStep::Idle;
    }

    let mut rerolled = false;
    if enemy.pos.is_aligned(block) && walls.is_wall(enemy.pos.step(enemy.dir, block)) {
        let open = open_directions(enemy.pos, walls, block);
        match open.choose(rng) {
            Some(&dir) => {
                trace!(
                    x = enemy.pos.x,
                    y = enemy.pos.y,
                    from = enemy.dir.as_str(),
                    to = dir.as_str(),
                    "enemy reroll"
                );
                enemy.dir = dir;
                rerolled = true;
            }
            None => {
                warn!(x = enemy.pos.x, y = enemy.pos.y, "enemy boxed in by walls");
                return EnemyStep::Boxed;
            }
        }
    }

    enemy.pos = enemy.pos.step(enemy.dir, 1);
    EnemyStep::Moved { rerolled }
}
