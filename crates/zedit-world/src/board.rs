#![forbid(unsafe_code)]

//! Board grid storage.
//!
//! A `Board` is a 2D grid of [`Tile`]s in row-major order:
//! `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `tiles.len() == width * height`
//! 2. Width and height never change after creation
//! 3. Out-of-range access is a caller bug and panics; the editor always
//!    derives coordinates from this board's own bounds.

use crate::tile::Tile;

/// Classic board width in tiles.
pub const BOARD_WIDTH: u16 = 60;
/// Classic board height in tiles.
pub const BOARD_HEIGHT: u16 = 25;

/// A 2D grid of tiles with a title.
#[derive(Debug, Clone)]
pub struct Board {
    width: u16,
    height: u16,
    title: String,
    tiles: Vec<Tile>,
}

impl Board {
    /// Create an empty board with the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    #[must_use]
    pub fn new(width: u16, height: u16, title: impl Into<String>) -> Self {
        assert!(width > 0, "board width must be > 0");
        assert!(height > 0, "board height must be > 0");
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            title: title.into(),
            tiles: vec![Tile::default(); size],
        }
    }

    /// An empty board at the classic 60x25 size.
    #[must_use]
    pub fn classic(title: impl Into<String>) -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT, title)
    }

    /// Board width in tiles.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Board height in tiles.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Board title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rename the board.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Whether the coordinate lies on the board.
    #[inline]
    #[must_use]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        assert!(
            self.contains(x, y),
            "coordinate ({x}, {y}) outside {}x{} board",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// The tile at (x, y).
    ///
    /// # Panics
    ///
    /// Panics when the coordinate is off the board.
    #[inline]
    #[must_use]
    pub fn tile(&self, x: u16, y: u16) -> &Tile {
        &self.tiles[self.index(x, y)]
    }

    /// Mutable access to the tile at (x, y).
    ///
    /// # Panics
    ///
    /// Panics when the coordinate is off the board.
    #[inline]
    pub fn tile_mut(&mut self, x: u16, y: u16) -> &mut Tile {
        let idx = self.index(x, y);
        &mut self.tiles[idx]
    }

    /// Replace the tile at (x, y).
    ///
    /// # Panics
    ///
    /// Panics when the coordinate is off the board.
    #[inline]
    pub fn set_tile(&mut self, x: u16, y: u16, tile: Tile) {
        let idx = self.index(x, y);
        self.tiles[idx] = tile;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileKind;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(10, 5, "test");
        assert_eq!(board.width(), 10);
        assert_eq!(board.height(), 5);
        assert_eq!(board.tile(9, 4).kind, TileKind::Empty);
    }

    #[test]
    fn set_and_get() {
        let mut board = Board::classic("title");
        board.set_tile(3, 3, Tile::new(TileKind::SolidWall, 0x0e));
        assert_eq!(board.tile(3, 3).kind, TileKind::SolidWall);
        assert_eq!(board.tile(3, 3).color, 0x0e);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_range_access_panics() {
        let board = Board::new(10, 5, "test");
        let _ = board.tile(10, 0);
    }

    #[test]
    #[should_panic(expected = "width must be > 0")]
    fn zero_width_panics() {
        let _ = Board::new(0, 5, "test");
    }
}
