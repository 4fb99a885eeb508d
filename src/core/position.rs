use rustc_hash::FxHashMap;

use crate::core::piece::Piece;
use crate::core::square::Square;

/// The piece placement: one entry per occupied square.
///
/// Absence means "empty"; there is never a null sentinel and never more
/// than one piece per square.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Position {
    pieces: FxHashMap<Square, Piece>,
}

impl Position {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.pieces.get(&sq).copied()
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.pieces.contains_key(&sq)
    }

    /// Places `piece` on `sq`, returning whatever occupied it before.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.pieces.insert(sq, piece)
    }

    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.pieces.remove(&sq)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces.iter().map(|(&sq, &p)| (sq, p))
    }

    /// Marks the piece on `sq` (if any) as promoted.
    pub fn set_promoted(&mut self, sq: Square) {
        if let Some(p) = self.pieces.get_mut(&sq) {
            p.promoted = true;
        }
    }
}

impl FromIterator<(Square, Piece)> for Position {
    fn from_iter<I: IntoIterator<Item = (Square, Piece)>>(iter: I) -> Self {
        Self {
            pieces: iter.into_iter().collect(),
        }
    }
}
