#![forbid(unsafe_code)]

//! Compass direction codec.
//!
//! Tile parameters store movement as a signed `(xstep, ystep)` pair where
//! exactly one axis is non-zero. The external 4-bit representation
//! ([`DirFlags`]) is always normalized to a single active bit.
//!
//! # Invariants
//!
//! 1. `Direction::from_step(d.step())` is the identity for all four `d`.
//! 2. `next()` cycles North → South → East → West → North, visiting each
//!    direction exactly once per four applications.
//! 3. `DirFlags` produced from a `Direction` has exactly one bit set.

use bitflags::bitflags;
use core::fmt;

/// One of the four compass directions a tile can face or move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Negative y step.
    North,
    /// Positive y step.
    South,
    /// Positive x step.
    East,
    /// Negative x step.
    West,
}

bitflags! {
    /// The packed 4-bit direction representation used by tile parameters.
    ///
    /// Normalized values carry exactly one bit; [`DirFlags::direction`]
    /// rejects anything else.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirFlags: u8 {
        /// Facing north.
        const NORTH = 0x01;
        /// Facing south.
        const SOUTH = 0x02;
        /// Facing east.
        const EAST  = 0x04;
        /// Facing west.
        const WEST  = 0x08;
    }
}

/// A step pair that does not describe exactly one compass direction.
///
/// Raised when both axes are zero (idle) or both are non-zero (diagonal).
/// Callers must supply a fallback direction of their own choosing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbiguousDirection {
    /// The offending x step.
    pub xstep: i16,
    /// The offending y step.
    pub ystep: i16,
}

impl fmt::Display for AmbiguousDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "step pair ({}, {}) is not a single compass direction",
            self.xstep, self.ystep
        )
    }
}

impl std::error::Error for AmbiguousDirection {}

impl Direction {
    /// Decode a direction from a signed step pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmbiguousDirection`] unless exactly one axis is non-zero.
    pub fn from_step(xstep: i16, ystep: i16) -> Result<Self, AmbiguousDirection> {
        match (xstep, ystep) {
            (0, y) if y < 0 => Ok(Self::North),
            (0, y) if y > 0 => Ok(Self::South),
            (x, 0) if x > 0 => Ok(Self::East),
            (x, 0) if x < 0 => Ok(Self::West),
            _ => Err(AmbiguousDirection { xstep, ystep }),
        }
    }

    /// Encode this direction as a unit step pair. Total inverse of
    /// [`Direction::from_step`].
    #[must_use]
    pub const fn step(self) -> (i16, i16) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// Cyclic successor, wrapping after West.
    ///
    /// Drives "rotate on keypress" interactions in the param dialog.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::East,
            Self::East => Self::West,
            Self::West => Self::North,
        }
    }

    /// The normalized single-bit flag form.
    #[must_use]
    pub const fn flags(self) -> DirFlags {
        match self {
            Self::North => DirFlags::NORTH,
            Self::South => DirFlags::SOUTH,
            Self::East => DirFlags::EAST,
            Self::West => DirFlags::WEST,
        }
    }

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

impl DirFlags {
    /// Decode a normalized flag set back into a direction.
    ///
    /// Returns `None` unless exactly one bit is set.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::NORTH => Some(Direction::North),
            Self::SOUTH => Some(Direction::South),
            Self::EAST => Some(Direction::East),
            Self::WEST => Some(Direction::West),
            _ => None,
        }
    }
}

impl From<Direction> for DirFlags {
    fn from(dir: Direction) -> Self {
        dir.flags()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_round_trip() {
        for dir in [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ] {
            let (dx, dy) = dir.step();
            assert_eq!(Direction::from_step(dx, dy), Ok(dir));
        }
    }

    #[test]
    fn cycle_closes_after_four() {
        let start = Direction::North;
        let mut seen = Vec::new();
        let mut dir = start;
        for _ in 0..4 {
            seen.push(dir);
            dir = dir.next();
        }
        assert_eq!(dir, start);
        seen.sort_by_key(|d| d.flags().bits());
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn idle_and_diagonal_are_ambiguous() {
        assert!(Direction::from_step(0, 0).is_err());
        assert!(Direction::from_step(1, 1).is_err());
        assert!(Direction::from_step(-1, 2).is_err());
    }

    #[test]
    fn flags_are_single_bit() {
        for dir in [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ] {
            let flags = dir.flags();
            assert_eq!(flags.bits().count_ones(), 1);
            assert_eq!(flags.direction(), Some(dir));
        }
        assert_eq!((DirFlags::NORTH | DirFlags::EAST).direction(), None);
        assert_eq!(DirFlags::empty().direction(), None);
    }
}
