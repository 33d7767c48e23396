#![forbid(unsafe_code)]

//! The world store contract.
//!
//! The editor core never touches the on-disk world container; it sees the
//! current board and the board list through this trait. [`MemoryWorld`] is
//! the reference implementation used by tests and demos.

use crate::board::Board;
use crate::tile::Tile;

/// Read/write access to the world being edited.
///
/// All coordinates refer to the current board. Out-of-range coordinates
/// are a caller bug and panic, matching [`Board`] semantics.
pub trait World {
    /// Current board width in tiles.
    fn board_width(&self) -> u16;

    /// Current board height in tiles.
    fn board_height(&self) -> u16;

    /// The tile at (x, y) on the current board.
    fn tile(&self, x: u16, y: u16) -> &Tile;

    /// Mutable access to the tile at (x, y) on the current board.
    fn tile_mut(&mut self, x: u16, y: u16) -> &mut Tile;

    /// Replace the tile at (x, y) on the current board.
    fn set_tile(&mut self, x: u16, y: u16, tile: Tile);

    /// Title of the current board.
    fn board_title(&self) -> &str;

    /// Title of the world.
    fn world_title(&self) -> &str;

    /// Number of boards in the world.
    fn board_count(&self) -> u8;

    /// Title of the board at `index`, if it exists.
    ///
    /// Used to decode passage destinations for display.
    fn board_name(&self, index: u8) -> Option<&str>;
}

/// A self-contained in-memory world: one editable board plus the titles
/// of the other boards (enough to resolve passage destinations).
#[derive(Debug, Clone)]
pub struct MemoryWorld {
    title: String,
    board: Board,
    board_names: Vec<String>,
}

impl MemoryWorld {
    /// A world holding a single empty classic board.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let board = Board::classic(title.clone());
        let board_names = vec![board.title().to_owned()];
        Self {
            title,
            board,
            board_names,
        }
    }

    /// A world around an existing board.
    #[must_use]
    pub fn with_board(title: impl Into<String>, board: Board) -> Self {
        let board_names = vec![board.title().to_owned()];
        Self {
            title: title.into(),
            board,
            board_names,
        }
    }

    /// Register an additional board title (passage destination target).
    pub fn push_board_name(&mut self, name: impl Into<String>) {
        self.board_names.push(name.into());
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the current board.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl World for MemoryWorld {
    fn board_width(&self) -> u16 {
        self.board.width()
    }

    fn board_height(&self) -> u16 {
        self.board.height()
    }

    fn tile(&self, x: u16, y: u16) -> &Tile {
        self.board.tile(x, y)
    }

    fn tile_mut(&mut self, x: u16, y: u16) -> &mut Tile {
        self.board.tile_mut(x, y)
    }

    fn set_tile(&mut self, x: u16, y: u16, tile: Tile) {
        self.board.set_tile(x, y, tile);
    }

    fn board_title(&self) -> &str {
        self.board.title()
    }

    fn world_title(&self) -> &str {
        &self.title
    }

    fn board_count(&self) -> u8 {
        self.board_names.len().min(u8::MAX as usize) as u8
    }

    fn board_name(&self, index: u8) -> Option<&str> {
        self.board_names.get(index as usize).map(String::as_str)
    }
}
