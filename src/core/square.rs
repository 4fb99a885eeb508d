use std::fmt;
use std::str::FromStr;

use crate::core::coord::{Coord, BOARD_SIZE};

/// A board square packed into a single `u8` (`file * 16 + rank`).
///
/// We use it to keep positions hashable and cheap to compare; the textual
/// key form pairs a file letter `a`..`p` with a rank character `1`..`9`
/// (ranks 0–8) or `A`..`G` (ranks 9–15).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Square(u8);

impl Square {
    #[inline]
    pub const fn from_coord(c: Coord) -> Square {
        Square(c.file * BOARD_SIZE + c.rank)
    }

    #[inline]
    pub const fn coord(self) -> Coord {
        Coord {
            file: self.0 / BOARD_SIZE,
            rank: self.0 % BOARD_SIZE,
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// All 256 squares, file-major.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..=u8::MAX).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.coord();
        let file = (b'a' + c.file) as char;
        let rank = if c.rank < 9 {
            (b'1' + c.rank) as char
        } else {
            (b'A' + c.rank - 9) as char
        };
        write!(f, "{file}{rank}")
    }
}

/// Failed textual-key parse; carries the offending key.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseSquareError {
    pub key: String,
}

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid square key: {:?}", self.key)
    }
}

impl std::error::Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSquareError { key: s.to_string() };
        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(err());
        };
        let file = (f as u32).wrapping_sub('a' as u32);
        let rank = match r {
            '1'..='9' => r as u32 - '1' as u32,
            'A'..='G' => r as u32 - 'A' as u32 + 9,
            _ => return Err(err()),
        };
        if file >= BOARD_SIZE as u32 {
            return Err(err());
        }
        Ok(Square::from_coord(Coord::new(file as u8, rank as u8)))
    }
}
