#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::IVec2;

pub const NORTH: IVec2 = IVec2 { x: 0, y: -1 };
pub const NORTH_EAST: IVec2 = IVec2 { x: 1, y: -1 };
pub const NORTH_WEST: IVec2 = IVec2 { x: -1, y: -1 };
pub const EAST: IVec2 = IVec2 { x: 1, y: 0 };
pub const SOUTH: IVec2 = IVec2 { x: 0, y: 1 };
pub const SOUTH_EAST: IVec2 = IVec2 { x: 1, y: 1 };
pub const SOUTH_WEST: IVec2 = IVec2 { x: -1, y: 1 };
pub const WEST: IVec2 = IVec2 { x: -1, y: 0 };

/// A direction from a [`crate::Cell`] to one of its neighbors.
///
/// Variants are declared in the crate's canonical iteration order: N, E, S, W,
/// NW, NE, SE, SW. `y` grows downward, matching the pixel coordinate
/// convention used throughout this crate (origin top-left).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// All eight directions, in the crate's canonical deterministic order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// The four cardinal directions, in order N, E, S, W.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The four diagonal directions, in order NW, NE, SE, SW.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Iterate the eight directions in canonical order.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Direction> {
        Self::ALL.into_iter()
    }

    /// Iterate the four cardinal directions in canonical order.
    #[inline]
    pub fn iter_cardinal() -> impl Iterator<Item = Direction> {
        Self::CARDINAL.into_iter()
    }

    /// Iterate the four diagonal directions in canonical order.
    #[inline]
    pub fn iter_diagonal() -> impl Iterator<Item = Direction> {
        Self::DIAGONAL.into_iter()
    }

    /// Returns the unit vector for this direction, in pixel coordinates
    /// (`y` grows downward).
    #[inline]
    #[must_use]
    pub fn unit(&self) -> IVec2 {
        match self {
            Direction::North => NORTH,
            Direction::NorthEast => NORTH_EAST,
            Direction::NorthWest => NORTH_WEST,
            Direction::East => EAST,
            Direction::South => SOUTH,
            Direction::SouthEast => SOUTH_EAST,
            Direction::SouthWest => SOUTH_WEST,
            Direction::West => WEST,
        }
    }

    /// Move a point in this direction by the given amount.
    #[inline]
    #[must_use]
    pub fn move_point(&self, point: IVec2, by: i32) -> IVec2 {
        point + self.unit() * by
    }

    /// Returns true if this direction is cardinal (N, E, S, W).
    #[inline]
    #[must_use]
    pub fn is_cardinal(&self) -> bool {
        matches!(
            self,
            Direction::North | Direction::East | Direction::South | Direction::West
        )
    }

    /// Returns true if this direction is diagonal (NW, NE, SE, SW).
    #[inline]
    #[must_use]
    pub fn is_diagonal(&self) -> bool {
        !self.is_cardinal()
    }

    /// The `(row, col)` delta this direction moves by in a row-major grid.
    #[inline]
    #[must_use]
    pub fn row_col_delta(&self) -> (i32, i32) {
        let u = self.unit();
        (u.y, u.x)
    }

    /// The direction directly opposite this one.
    #[inline]
    #[must_use]
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_opposite_is_involutive() {
        for d in Direction::iter() {
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn test_cardinal_diagonal_partition() {
        for d in Direction::iter() {
            assert_ne!(d.is_cardinal(), d.is_diagonal());
        }
    }

    #[test]
    fn test_all_order() {
        let order: Vec<_> = Direction::iter().collect();
        assert_eq!(
            order,
            vec![
                Direction::North,
                Direction::East,
                Direction::South,
                Direction::West,
                Direction::NorthWest,
                Direction::NorthEast,
                Direction::SouthEast,
                Direction::SouthWest,
            ]
        );
    }
}
