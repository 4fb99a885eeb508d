use sovereign_board::core::coord::Coord;
use sovereign_board::core::piece::{Color, Piece, Role};
use sovereign_board::core::position::Position;
use sovereign_board::core::square::Square;
use sovereign_board::fen;

fn sq(file: u8, rank: u8) -> Square {
    Square::from_coord(Coord::new(file, rank))
}

#[test]
fn start_alias_expands_to_initial_setup() {
    let pieces = fen::read("start");
    assert_eq!(pieces.len(), 32);
    assert_eq!(
        pieces.get(sq(8, 0)),
        Some(Piece::new(Color::White, Role::King))
    );
    assert_eq!(
        pieces.get(sq(8, 15)),
        Some(Piece::new(Color::Black, Role::King))
    );
    assert_eq!(
        pieces.get(sq(4, 1)),
        Some(Piece::new(Color::White, Role::Pawn))
    );
    assert_eq!(fen::write(&pieces), fen::INITIAL);
}

#[test]
fn write_then_read_is_identity() {
    let mut pieces = Position::new();
    pieces.set(sq(0, 0), Piece::new(Color::White, Role::Rook));
    pieces.set(sq(15, 15), Piece::new(Color::Black, Role::Queen));
    pieces.set(sq(7, 9), Piece::new(Color::White, Role::Knight));
    pieces.set(sq(8, 9), Piece::new(Color::Black, Role::Pawn));
    let text = fen::write(&pieces);
    assert_eq!(fen::read(&text), pieces);
}

#[test]
fn promoted_marker_round_trips() {
    let mut pieces = Position::new();
    let mut queen = Piece::new(Color::White, Role::Queen);
    queen.promoted = true;
    pieces.set(sq(3, 7), queen);
    let text = fen::write(&pieces);
    assert!(text.contains("Q~"), "promotion marker missing in {text:?}");
    assert_eq!(fen::read(&text), pieces);
}

#[test]
fn multi_digit_skips_count_sixteen_wide_ranks() {
    let pieces = fen::read("16/15k/16/16/16/16/16/16/16/16/16/16/16/16/16/16");
    assert_eq!(pieces.len(), 1);
    assert_eq!(
        pieces.get(sq(15, 14)),
        Some(Piece::new(Color::Black, Role::King))
    );
}

#[test]
fn parse_stops_at_space_and_bracket() {
    let with_space = fen::read("K15/16 the-rest-is-ignored");
    assert_eq!(with_space.len(), 1);
    assert_eq!(
        with_space.get(sq(0, 15)),
        Some(Piece::new(Color::White, Role::King))
    );

    let with_bracket = fen::read("K15[QQ]");
    assert_eq!(with_bracket.len(), 1);
}

#[test]
fn parse_returns_partial_position_on_excess_ranks() {
    // seventeen rank separators: everything after the sixteenth is dropped
    let text = "k15/16/16/16/16/16/16/16/16/16/16/16/16/16/16/16/QQQ";
    let pieces = fen::read(text);
    assert_eq!(pieces.len(), 1);
}

#[test]
fn out_of_range_placements_are_ignored() {
    // the second skip pushes past file 15; the trailing queen has no square
    let pieces = fen::read("16q/16/16/16/16/16/16/16/16/16/16/16/16/16/16/16");
    assert!(pieces.is_empty());
}
