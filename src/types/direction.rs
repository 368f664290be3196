use std::str::FromStr;

use enumset::EnumSetType;

use crate::impl_display_from_debug;

/// A move on the grid. `Stop` keeps the agent in place.
#[derive(Debug, Hash, EnumSetType)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl_display_from_debug!(Direction);

impl Direction {
    /// The four moves that change position, in iteration order.
    pub const MOVES: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];

    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Stop => Direction::Stop,
        }
    }

    /// Unit displacement `(dx, dy)`. Rows grow downwards, so `North` is `dy = -1`.
    #[inline]
    pub const fn vector(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }
}

impl FromStr for Direction {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Ok(Self::North),
            "s" | "south" => Ok(Self::South),
            "e" | "east" => Ok(Self::East),
            "w" | "west" => Ok(Self::West),
            "stop" => Ok(Self::Stop),
            _ => Err("expected north|south|east|west|stop"),
        }
    }
}
