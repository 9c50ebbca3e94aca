//! Direction enum for snake movement

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Direction of movement, one of the four cardinal unit vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Moving up, (0, -1)
    North,
    /// Moving down, (0, 1)
    South,
    /// Moving left, (-1, 0)
    West,
    /// Moving right, (1, 0)
    #[default]
    East,
}

impl Direction {
    /// All four directions
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Parse direction from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "up" => Some(Direction::North),
            "south" | "down" => Some(Direction::South),
            "west" | "left" => Some(Direction::West),
            "east" | "right" => Some(Direction::East),
            _ => None,
        }
    }

    /// Movement delta `(dx, dy)` applied to the head each tick
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    /// Check if this direction is opposite to another
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::North, Direction::South)
                | (Direction::South, Direction::North)
                | (Direction::East, Direction::West)
                | (Direction::West, Direction::East)
        )
    }
}

impl TryFrom<(i32, i32)> for Direction {
    type Error = GameError;

    fn try_from((dx, dy): (i32, i32)) -> Result<Self, Self::Error> {
        match (dx, dy) {
            (0, -1) => Ok(Direction::North),
            (0, 1) => Ok(Direction::South),
            (-1, 0) => Ok(Direction::West),
            (1, 0) => Ok(Direction::East),
            _ => Err(GameError::InvalidDirection { dx, dy }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Direction::from_str("north"), Some(Direction::North));
        assert_eq!(Direction::from_str("SOUTH"), Some(Direction::South));
        assert_eq!(Direction::from_str("Left"), Some(Direction::West));
        assert_eq!(Direction::from_str("right"), Some(Direction::East));
        assert_eq!(Direction::from_str("none"), None);
        assert_eq!(Direction::from_str("invalid"), None);
    }

    #[test]
    fn test_default_is_east() {
        assert_eq!(Direction::default(), Direction::East);
        assert_eq!(Direction::default().delta(), (1, 0));
    }

    #[test]
    fn test_delta_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::try_from(dir.delta()), Ok(dir));
        }
    }

    #[test]
    fn test_rejects_non_cardinal_vectors() {
        for (dx, dy) in [(0, 0), (1, 1), (-1, -1), (2, 0), (0, -2)] {
            assert_eq!(
                Direction::try_from((dx, dy)),
                Err(GameError::InvalidDirection { dx, dy })
            );
        }
    }

    #[test]
    fn test_is_opposite() {
        assert!(Direction::North.is_opposite(&Direction::South));
        assert!(Direction::East.is_opposite(&Direction::West));
        assert!(!Direction::North.is_opposite(&Direction::East));
        assert!(!Direction::East.is_opposite(&Direction::East));
    }
}
