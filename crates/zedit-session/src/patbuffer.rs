#![forbid(unsafe_code)]

//! Pattern buffers.
//!
//! Plotting stamps the current pattern tile onto the board. Two buffers
//! exist: a fixed set of standard patterns and a backbuffer filled by
//! acquiring tiles from the board. [`AcquireMode`] controls whether an
//! acquire may grow the backbuffer.

use zedit_world::{Tile, TileKind};

/// How acquiring a tile from the board treats the backbuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AcquireMode {
    /// Acquiring is disabled.
    #[default]
    Off,
    /// Overwrite the current slot; never grow.
    NoResize,
    /// Grow the buffer when the acquired tile is not already present.
    Resize,
}

impl AcquireMode {
    /// Cyclic successor, for the toggle key.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Off => Self::NoResize,
            Self::NoResize => Self::Resize,
            Self::Resize => Self::Off,
        }
    }
}

/// A ring of pattern tiles with a current position.
#[derive(Debug, Clone)]
pub struct PatternBuffer {
    patterns: Vec<Tile>,
    pos: usize,
}

impl PatternBuffer {
    /// A buffer over the given tiles.
    ///
    /// # Panics
    ///
    /// Panics if `patterns` is empty; a buffer always has a current tile.
    #[must_use]
    pub fn new(patterns: Vec<Tile>) -> Self {
        assert!(!patterns.is_empty(), "pattern buffer may not be empty");
        Self { patterns, pos: 0 }
    }

    /// The standard pattern set offered at session start.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Tile::new(TileKind::SolidWall, 0x0f),
            Tile::new(TileKind::NormalWall, 0x0f),
            Tile::new(TileKind::BreakableWall, 0x0f),
            Tile::new(TileKind::Water, 0x1f),
            Tile::new(TileKind::Empty, 0x00),
            Tile::new(TileKind::Line, 0x0f),
        ])
    }

    /// Number of patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// A pattern buffer is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the current pattern.
    #[inline]
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// The current pattern tile.
    #[must_use]
    pub fn current(&self) -> &Tile {
        &self.patterns[self.pos]
    }

    /// Advance to the next pattern, wrapping.
    pub fn advance(&mut self) {
        self.pos = (self.pos + 1) % self.patterns.len();
    }

    /// Step back to the previous pattern, wrapping.
    pub fn retreat(&mut self) {
        self.pos = self.pos.checked_sub(1).unwrap_or(self.patterns.len() - 1);
    }

    /// Sample a tile from the board into this buffer.
    ///
    /// `Off` ignores the tile. `NoResize` overwrites the current slot.
    /// `Resize` moves to the tile if an equal one is already present,
    /// otherwise appends it and selects it. Returns whether the buffer
    /// changed (contents or position).
    pub fn acquire(&mut self, tile: &Tile, mode: AcquireMode) -> bool {
        match mode {
            AcquireMode::Off => false,
            AcquireMode::NoResize => {
                if self.patterns[self.pos] == *tile {
                    return false;
                }
                self.patterns[self.pos] = tile.clone();
                true
            }
            AcquireMode::Resize => {
                if let Some(idx) = self.patterns.iter().position(|p| p == tile) {
                    let moved = idx != self.pos;
                    self.pos = idx;
                    moved
                } else {
                    self.patterns.push(tile.clone());
                    self.pos = self.patterns.len() - 1;
                    true
                }
            }
        }
    }
}
