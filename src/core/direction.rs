//! The four movement directions.
//!
//! Directions form a fixed, closed set. Each has an opposite, used when an
//! interior barrier placed on one side of a wall has to be mirrored onto the
//! adjoining cell.

use serde::{Deserialize, Serialize};

/// All directions a robot can be sent in.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

/// A movement direction on the board.
///
/// Matches the lowercase names used by the relational encoding
/// (`north`, `south`, `east`, `west`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// The opposite direction.
    ///
    /// ```
    /// use ricochet_engine::core::Direction;
    ///
    /// assert_eq!(Direction::East.opposite(), Direction::West);
    /// assert_eq!(Direction::North.opposite(), Direction::South);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Row/column delta for one step in this direction.
    ///
    /// Rows grow southward, columns grow eastward.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// The lowercase wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Parse a wire name, case-insensitively.
    ///
    /// Returns `None` for anything that is not one of the four names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("north") {
            Some(Direction::North)
        } else if name.eq_ignore_ascii_case("south") {
            Some(Direction::South)
        } else if name.eq_ignore_ascii_case("east") {
            Some(Direction::East)
        } else if name.eq_ignore_ascii_case("west") {
            Some(Direction::West)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
