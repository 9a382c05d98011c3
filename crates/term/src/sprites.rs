//! Sprite sheet: one drawable per entity kind.
//!
//! A sheet is plain text, one `kind=glyph rrggbb` entry per line. The glyph is
//! one or two characters (a single character is doubled to fill a 2-column
//! block). Blank lines and lines starting with `#` are skipped. Every entity
//! kind must be present; there is no fallback drawable.

use thiserror::Error;

use crate::fb::Rgb;
use crate::types::EntityKind;

/// The sheet the game ships with.
pub const DEFAULT_SHEET: &str = "\
# kind=glyph color
player=() ffe000
enemy=/\\ ff4040
dot=· ffb8ae
powerup=● ffb8ff
wall=█ 2121de
";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetLoadError {
    #[error("no drawable for {0}")]
    MissingDrawable(&'static str),
    #[error("unknown drawable kind {name:?} on line {line}")]
    UnknownDrawable { line: usize, name: String },
    #[error("malformed drawable on line {line}: {text:?}")]
    MalformedLine { line: usize, text: String },
}

/// A block-sized drawable: two glyph columns in one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub glyph: [char; 2],
    pub fg: Rgb,
}

impl Sprite {
    pub const fn new(glyph: [char; 2], fg: Rgb) -> Self {
        Self { glyph, fg }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheet {
    player: Sprite,
    enemy: Sprite,
    dot: Sprite,
    powerup: Sprite,
    wall: Sprite,
}

impl SpriteSheet {
    /// Parse a sheet, requiring a drawable for every entity kind.
    pub fn load(source: &str) -> Result<Self, AssetLoadError> {
        let mut slots: [Option<Sprite>; 5] = [None; 5];

        for (i, raw) in source.lines().enumerate() {
            let line = i + 1;
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let malformed = || AssetLoadError::MalformedLine {
                line,
                text: text.to_string(),
            };
            let (name, rest) = text.split_once('=').ok_or_else(malformed)?;
            let (glyph, color) = rest.trim().rsplit_once(' ').ok_or_else(malformed)?;
            let kind = EntityKind::from_str(name.trim()).ok_or_else(|| {
                AssetLoadError::UnknownDrawable {
                    line,
                    name: name.trim().to_string(),
                }
            })?;
            let fg = Rgb::from_hex(color.trim()).ok_or_else(malformed)?;

            let mut chars = glyph.trim().chars();
            let glyph = match (chars.next(), chars.next(), chars.next()) {
                (Some(a), None, _) => [a, a],
                (Some(a), Some(b), None) => [a, b],
                _ => return Err(malformed()),
            };

            slots[slot(kind)] = Some(Sprite::new(glyph, fg));
        }

        let take = |kind: EntityKind| slots[slot(kind)].ok_or(AssetLoadError::MissingDrawable(kind.as_str()));
        Ok(Self {
            player: take(EntityKind::Player)?,
            enemy: take(EntityKind::Enemy)?,
            dot: take(EntityKind::Dot)?,
            powerup: take(EntityKind::Powerup)?,
            wall: take(EntityKind::Wall)?,
        })
    }

    pub fn get(&self, kind: EntityKind) -> Sprite {
        match kind {
            EntityKind::Player => self.player,
            EntityKind::Enemy => self.enemy,
            EntityKind::Dot => self.dot,
            EntityKind::Powerup => self.powerup,
            EntityKind::Wall => self.wall,
        }
    }
}

fn slot(kind: EntityKind) -> usize {
    match kind {
        EntityKind::Player => 0,
        EntityKind::Enemy => 1,
        EntityKind::Dot => 2,
        EntityKind::Powerup => 3,
        EntityKind::Wall => 4,
    }
}
