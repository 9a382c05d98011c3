use crate::types::{EntityKind, Position};

/// One drawable entity: a block-sized rectangle of `kind` at `pos`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Renderable {
    pub kind: EntityKind,
    pub pos: Position,
}

/// Everything the presentation surface needs for one frame.
///
/// `entities` is always in draw order: player, live dots, live powerups,
/// enemies, walls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderBatch {
    pub entities: Vec<Renderable>,
    pub tick: u64,
    pub dots_left: usize,
    pub powerups_left: usize,
}

impl RenderBatch {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Reset for reuse, keeping the allocation.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.tick = 0;
        self.dots_left = 0;
        self.powerups_left = 0;
    }

    pub fn push(&mut self, kind: EntityKind, pos: Position) {
        self.entities.push(Renderable { kind, pos });
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Renderable> {
        self.entities.iter()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|r| r.kind == kind).count()
    }

    pub fn contains(&self, kind: EntityKind, pos: Position) -> bool {
        self.entities.iter().any(|r| r.kind == kind && r.pos == pos)
    }
}
