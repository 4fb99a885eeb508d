use sovereign_board::board;
use sovereign_board::core::coord::Coord;
use sovereign_board::core::piece::{Color, Piece, Role};
use sovereign_board::core::position::Position;
use sovereign_board::core::square::Square;
use sovereign_board::state::BoardState;

fn sq(file: u8, rank: u8) -> Square {
    Square::from_coord(Coord::new(file, rank))
}

fn castling_state(color: Color, rank: u8, rook_file: u8) -> BoardState {
    let mut pieces = Position::new();
    pieces.set(sq(4, rank), Piece::new(color, Role::King));
    pieces.set(sq(rook_file, rank), Piece::new(color, Role::Rook));
    BoardState::from_position(pieces)
}

#[test]
fn kingside_notation_relocates_king_and_rook() {
    let mut state = castling_state(Color::White, 0, 7);
    assert!(board::user_move(&mut state, sq(4, 0), sq(6, 0)));
    assert_eq!(state.pieces.get(sq(6, 0)), Some(Piece::new(Color::White, Role::King)));
    assert_eq!(state.pieces.get(sq(5, 0)), Some(Piece::new(Color::White, Role::Rook)));
    assert_eq!(state.pieces.get(sq(4, 0)), None);
    assert_eq!(state.pieces.get(sq(7, 0)), None);
    assert_eq!(state.pieces.len(), 2);
}

#[test]
fn queenside_notation_relocates_king_and_rook() {
    let mut state = castling_state(Color::White, 0, 0);
    assert!(board::user_move(&mut state, sq(4, 0), sq(2, 0)));
    assert_eq!(state.pieces.get(sq(2, 0)), Some(Piece::new(Color::White, Role::King)));
    assert_eq!(state.pieces.get(sq(3, 0)), Some(Piece::new(Color::White, Role::Rook)));
    assert_eq!(state.pieces.get(sq(0, 0)), None);
}

#[test]
fn castling_works_on_the_top_back_rank() {
    let mut state = castling_state(Color::Black, 15, 7);
    state.turn_player = sovereign_board::core::piece::Side::Black;
    assert!(board::user_move(&mut state, sq(4, 15), sq(6, 15)));
    assert_eq!(state.pieces.get(sq(6, 15)), Some(Piece::new(Color::Black, Role::King)));
    assert_eq!(state.pieces.get(sq(5, 15)), Some(Piece::new(Color::Black, Role::Rook)));
}

#[test]
fn moving_the_king_onto_its_rook_also_castles() {
    let mut state = castling_state(Color::White, 0, 7);
    assert!(board::user_move(&mut state, sq(4, 0), sq(7, 0)));
    assert_eq!(state.pieces.get(sq(6, 0)), Some(Piece::new(Color::White, Role::King)));
    assert_eq!(state.pieces.get(sq(5, 0)), Some(Piece::new(Color::White, Role::Rook)));
}

#[test]
fn no_castling_off_the_back_ranks() {
    let mut state = castling_state(Color::White, 1, 7);
    assert!(board::user_move(&mut state, sq(4, 1), sq(6, 1)));
    // plain relocation: the rook stays put
    assert_eq!(state.pieces.get(sq(6, 1)), Some(Piece::new(Color::White, Role::King)));
    assert_eq!(state.pieces.get(sq(7, 1)), Some(Piece::new(Color::White, Role::Rook)));
    assert_eq!(state.pieces.get(sq(5, 1)), None);
}

#[test]
fn disabled_auto_castle_moves_only_the_king() {
    let mut state = castling_state(Color::White, 0, 7);
    state.auto_castle = false;
    assert!(board::user_move(&mut state, sq(4, 0), sq(6, 0)));
    assert_eq!(state.pieces.get(sq(6, 0)), Some(Piece::new(Color::White, Role::King)));
    assert_eq!(state.pieces.get(sq(7, 0)), Some(Piece::new(Color::White, Role::Rook)));
    assert_eq!(state.pieces.get(sq(5, 0)), None);
}

#[test]
fn opposing_rook_is_captured_rather_than_castled() {
    let mut state = castling_state(Color::White, 0, 7);
    state.pieces.set(sq(7, 0), Piece::new(Color::Black, Role::Rook));
    let result = board::base_move(&mut state, sq(4, 0), sq(7, 0));
    assert_eq!(
        result.captured(),
        Some(Piece::new(Color::Black, Role::Rook))
    );
    assert_eq!(state.pieces.get(sq(7, 0)), Some(Piece::new(Color::White, Role::King)));
}
