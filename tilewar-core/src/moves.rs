//! The five moves a bot can make

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A move decided by a bot for one round
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Stay,
}

/// Every valid move, in a fixed order
pub const ALL_MOVES: [Move; 5] = [Move::Up, Move::Down, Move::Left, Move::Right, Move::Stay];

impl Move {
    /// Unit displacement `(dx, dy)`
    pub const fn vector(self) -> (i8, i8) {
        match self {
            Move::Up => (0, 1),
            Move::Down => (0, -1),
            Move::Left => (-1, 0),
            Move::Right => (1, 0),
            Move::Stay => (0, 0),
        }
    }

    /// Move in the opposite direction (STAY is its own opposite)
    pub const fn opposite(self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
            Move::Stay => Move::Stay,
        }
    }

    /// Compass token: n/s/w/e, `h` for hold
    pub const fn token(self) -> char {
        match self {
            Move::Up => 'n',
            Move::Down => 's',
            Move::Left => 'w',
            Move::Right => 'e',
            Move::Stay => 'h',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
            Move::Stay => "stay",
        };
        f.write_str(name)
    }
}

/// A token that names none of the five moves
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("not a valid move: {0:?}")]
pub struct ParseMoveError(pub String);

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Accepts compass letters (`n`, `s`, `w`, `e`, `h`) and move names, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "up" => Ok(Move::Up),
            "s" | "down" => Ok(Move::Down),
            "w" | "left" => Ok(Move::Left),
            "e" | "right" => Ok(Move::Right),
            "h" | "stay" => Ok(Move::Stay),
            _ => Err(ParseMoveError(s.to_string())),
        }
    }
}
