//! Position-text codec.
//!
//! A trimmed FEN dialect for the 16×16 board: piece placement only, 16
//! ranks from the top down, `/`-separated, with multi-digit run lengths for
//! empty squares and a trailing `~` marking the preceding piece as promoted.
//!
//! ```text
//! <placement> ::= <rank> ('/' <rank>){15}
//! <rank>      ::= (<skip> | <piece> '~'?)*
//! <piece>     ::= 'p'|'n'|'b'|'r'|'q'|'k'  (black)
//!               | 'P'|'N'|'B'|'R'|'Q'|'K'  (white)
//! ```
//!
//! The grammar assigns one letter per piece, with case carrying the color;
//! the variant's ten further colors have no letter assignment yet and are
//! outside this codec's contract. Reading is permissive: a space or `[`
//! (and anything after the sixteenth rank) terminates the parse and whatever
//! was read so far is returned.

use crate::core::coord::{Coord, BOARD_SIZE};
use crate::core::piece::{Color, Piece, Role};
use crate::core::position::Position;
use crate::core::square::Square;

/// The variant's initial piece placement.
pub const INITIAL: &str =
    "4rnbqkbnr4/4pppppppp4/16/16/16/16/16/16/16/16/16/16/16/16/4PPPPPPPP4/4RNBQKBNR4";

/// Parses a placement string; `"start"` is an alias for [`INITIAL`].
pub fn read(fen: &str) -> Position {
    let fen = if fen == "start" { INITIAL } else { fen };
    let mut pieces = Position::new();
    let mut rank: i32 = BOARD_SIZE as i32 - 1;
    let mut file: i32 = 0;
    let mut skip: i32 = 0;
    for c in fen.chars() {
        match c {
            ' ' | '[' => return pieces,
            '/' => {
                rank -= 1;
                if rank < 0 {
                    return pieces;
                }
                file = 0;
                skip = 0;
            }
            '~' => {
                if file >= 1 && file <= BOARD_SIZE as i32 {
                    let prev = Coord::new((file - 1) as u8, rank as u8);
                    pieces.set_promoted(Square::from_coord(prev));
                }
            }
            '0'..='9' => {
                skip = skip * 10 + (c as i32 - '0' as i32);
            }
            _ => {
                file += skip;
                skip = 0;
                let lower = c.to_ascii_lowercase();
                if let Some(role) = Role::from_letter(lower) {
                    if file < BOARD_SIZE as i32 {
                        let color = if c == lower { Color::Black } else { Color::White };
                        let at = Coord::new(file as u8, rank as u8);
                        pieces.set(Square::from_coord(at), Piece::new(color, role));
                    }
                }
                file += 1;
            }
        }
    }
    pieces
}

/// Writes a placement string; inverse of [`read`] over codec-expressible
/// positions (white upper-cased, everything else lower-cased).
pub fn write(pieces: &Position) -> String {
    let mut out = String::new();
    for rank in (0..BOARD_SIZE).rev() {
        if rank != BOARD_SIZE - 1 {
            out.push('/');
        }
        let mut empties = 0u32;
        for file in 0..BOARD_SIZE {
            let sq = Square::from_coord(Coord::new(file, rank));
            match pieces.get(sq) {
                None => empties += 1,
                Some(p) => {
                    if empties > 0 {
                        out.push_str(&empties.to_string());
                        empties = 0;
                    }
                    let letter = p.role.letter();
                    if p.color == Color::White {
                        out.push(letter.to_ascii_uppercase());
                    } else {
                        out.push(letter);
                    }
                    if p.promoted {
                        out.push('~');
                    }
                }
            }
        }
        if empties > 0 {
            out.push_str(&empties.to_string());
        }
    }
    out
}
