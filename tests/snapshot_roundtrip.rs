use sovereign_board::board;
use sovereign_board::core::coord::Coord;
use sovereign_board::core::piece::Side;
use sovereign_board::core::square::Square;
use sovereign_board::fen;
use sovereign_board::snapshot::{BoardSnapshot, SnapshotError};
use sovereign_board::state::{BoardState, LastMove};

fn sq(file: u8, rank: u8) -> Square {
    Square::from_coord(Coord::new(file, rank))
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut state = BoardState::new();
    assert!(board::user_move(&mut state, sq(4, 1), sq(4, 3)));
    state.check = Some(sq(8, 15));

    let snapshot = BoardSnapshot::of(&state);
    let json = snapshot.to_json().unwrap();
    let parsed = BoardSnapshot::from_json(&json).unwrap();
    assert_eq!(parsed, snapshot);

    let restored = parsed.restore().unwrap();
    assert_eq!(fen::write(&restored.pieces), fen::write(&state.pieces));
    assert_eq!(restored.turn_player, Side::Black);
    assert_eq!(restored.last_move, Some(LastMove::Move(sq(4, 1), sq(4, 3))));
    assert_eq!(restored.check, Some(sq(8, 15)));
}

#[test]
fn drop_last_move_survives_a_round_trip() {
    let mut state = BoardState::new();
    state.last_move = Some(LastMove::Drop(sq(9, 9)));
    let restored = BoardSnapshot::of(&state).restore().unwrap();
    assert_eq!(restored.last_move, Some(LastMove::Drop(sq(9, 9))));
}

#[test]
fn bad_square_keys_are_reported() {
    let snapshot = BoardSnapshot {
        fen: "16/16/16/16/16/16/16/16/16/16/16/16/16/16/16/16".to_string(),
        turn_player: Side::White,
        last_move: vec!["zz".to_string()],
        check: None,
    };
    assert_eq!(
        snapshot.restore(),
        Err(SnapshotError::BadSquare {
            key: "zz".to_string()
        })
    );
}

#[test]
fn oversized_last_move_is_rejected() {
    let snapshot = BoardSnapshot {
        fen: "16/16/16/16/16/16/16/16/16/16/16/16/16/16/16/16".to_string(),
        turn_player: Side::White,
        last_move: vec!["a1".into(), "a2".into(), "a3".into()],
        check: None,
    };
    assert_eq!(
        snapshot.restore(),
        Err(SnapshotError::BadLastMove { len: 3 })
    );
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(
        BoardSnapshot::from_json("{"),
        Err(SnapshotError::Json { .. })
    ));
}
