#![forbid(unsafe_code)]

//! Tile parameter blocks.
//!
//! A param carries everything a live element needs beyond its kind and
//! color: facing, cycle timing, three small data slots, centipede linkage,
//! and an optional embedded program. The program is a raw byte buffer in
//! the board's native dialect; its length is the buffer length.

use crate::direction::{AmbiguousDirection, Direction};

/// Number of small data slots in a parameter block.
pub const DATA_SLOTS: usize = 3;

/// Per-tile structured data.
///
/// Fields mirror the packed on-board layout, minus the stored position
/// (the grid coordinate is authoritative here).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Param {
    /// Signed x velocity component.
    pub xstep: i16,
    /// Signed y velocity component.
    pub ystep: i16,
    /// Ticks between updates.
    pub cycle: i16,
    /// Kind-specific small values (intelligence, rate, destination...).
    pub data: [u8; DATA_SLOTS],
    /// Index of the segment ahead, for centipedes. -1 when none.
    pub leader: i16,
    /// Index of the segment behind, for centipedes. -1 when none.
    pub follower: i16,
    /// Saved program counter.
    pub instruction: i16,
    /// Embedded program bytes; empty when the tile has none.
    pub program: Vec<u8>,
}

impl Param {
    /// A zeroed param with no linkage and no program.
    #[must_use]
    pub fn new() -> Self {
        Self {
            leader: -1,
            follower: -1,
            ..Self::default()
        }
    }

    /// A param facing the given direction.
    #[must_use]
    pub fn facing(dir: Direction) -> Self {
        let (xstep, ystep) = dir.step();
        Self {
            xstep,
            ystep,
            ..Self::new()
        }
    }

    /// Decode the step pair as a compass direction.
    ///
    /// # Errors
    ///
    /// Returns [`AmbiguousDirection`] when the param is idle or moving
    /// diagonally; callers supply their own default.
    pub fn direction(&self) -> Result<Direction, AmbiguousDirection> {
        Direction::from_step(self.xstep, self.ystep)
    }

    /// Point the param in the given direction.
    pub fn set_direction(&mut self, dir: Direction) {
        let (xstep, ystep) = dir.step();
        self.xstep = xstep;
        self.ystep = ystep;
    }

    /// Program length in bytes.
    #[must_use]
    pub fn program_len(&self) -> usize {
        self.program.len()
    }

    /// Whether the param carries a program.
    #[must_use]
    pub fn has_program(&self) -> bool {
        !self.program.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_round_trips() {
        for dir in [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ] {
            assert_eq!(Param::facing(dir).direction(), Ok(dir));
        }
    }

    #[test]
    fn set_direction_overwrites_both_axes() {
        let mut param = Param::facing(Direction::East);
        param.set_direction(Direction::North);
        assert_eq!((param.xstep, param.ystep), (0, -1));
    }

    #[test]
    fn new_param_is_idle_and_unlinked() {
        let param = Param::new();
        assert!(param.direction().is_err());
        assert_eq!(param.leader, -1);
        assert_eq!(param.follower, -1);
        assert!(!param.has_program());
    }
}
