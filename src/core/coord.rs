/// Number of files and ranks on the board.
pub const BOARD_SIZE: u8 = 16;

/// A `(file, rank)` pair, each in `[0, BOARD_SIZE)`.
///
/// File 0 is the queenside edge, rank 0 is the white back rank.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Coord {
    pub file: u8,
    pub rank: u8,
}

impl Coord {
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    /// The same coordinate seen from the other side of the board.
    #[inline]
    pub fn flipped(self) -> Self {
        Self {
            file: BOARD_SIZE - 1 - self.file,
            rank: BOARD_SIZE - 1 - self.rank,
        }
    }
}
