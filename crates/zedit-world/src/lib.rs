#![forbid(unsafe_code)]

//! World model: boards, tiles, parameter blocks, and the direction codec.
//!
//! This crate is the data layer of the zedit board editor. It owns no file
//! format; the on-disk container lives behind the [`World`] trait.

pub mod board;
pub mod direction;
pub mod param;
pub mod tile;
pub mod world;

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, Board};
pub use direction::{AmbiguousDirection, DirFlags, Direction};
pub use param::{DATA_SLOTS, Param};
pub use tile::{COLOR_NAMES, Tile, TileKind, color_background, color_blink, color_foreground, color_name};
pub use world::{MemoryWorld, World};
