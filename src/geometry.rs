//! Square ↔ pixel conversions for hit-testing and node placement.

use crate::core::coord::{Coord, BOARD_SIZE};
use crate::core::square::Square;

/// The rendering surface's bounding box, in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Top-left translation of a square's node, relative to the board origin.
pub fn pos_to_translate(pos: Coord, as_white: bool, bounds: Bounds) -> (f64, f64) {
    let pos = if as_white { pos } else { pos.flipped() };
    let n = BOARD_SIZE as f64;
    (
        pos.file as f64 * bounds.width / n,
        (BOARD_SIZE - 1 - pos.rank) as f64 * bounds.height / n,
    )
}

/// Absolute pixel center of a square, for drop targeting.
pub fn square_center(sq: Square, as_white: bool, bounds: Bounds) -> (f64, f64) {
    let pos = if as_white { sq.coord() } else { sq.coord().flipped() };
    let n = BOARD_SIZE as f64;
    (
        bounds.left + bounds.width * pos.file as f64 / n + bounds.width / (n * 2.0),
        bounds.top + bounds.height * (BOARD_SIZE - 1 - pos.rank) as f64 / n
            + bounds.height / (n * 2.0),
    )
}

/// The square under an absolute pixel point, if inside the board.
pub fn square_at_point(point: (f64, f64), as_white: bool, bounds: Bounds) -> Option<Square> {
    let n = BOARD_SIZE as f64;
    let file = ((point.0 - bounds.left) * n / bounds.width).floor() as i32;
    let rank = BOARD_SIZE as i32 - 1 - ((point.1 - bounds.top) * n / bounds.height).floor() as i32;
    if file < 0 || file >= BOARD_SIZE as i32 || rank < 0 || rank >= BOARD_SIZE as i32 {
        return None;
    }
    let mut pos = Coord::new(file as u8, rank as u8);
    if !as_white {
        pos = pos.flipped();
    }
    Some(Square::from_coord(pos))
}
