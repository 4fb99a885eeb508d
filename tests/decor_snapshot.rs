//! Deriving the per-frame decoration snapshot and frame inputs from the
//! interaction state.

use rustc_hash::FxHashMap;

use sovereign_board::board;
use sovereign_board::core::coord::Coord;
use sovereign_board::core::piece::{Color, Piece, Role};
use sovereign_board::core::position::Position;
use sovereign_board::core::square::Square;
use sovereign_board::geometry::Bounds;
use sovereign_board::render::{reconcile, Decor, NodeKind, RenderFrame, Scene};
use sovereign_board::state::{AnimPlan, BoardState, Exploding, LastMove};

const BOUNDS: Bounds = Bounds {
    left: 0.0,
    top: 0.0,
    width: 1024.0,
    height: 1024.0,
};

fn sq(file: u8, rank: u8) -> Square {
    Square::from_coord(Coord::new(file, rank))
}

fn bare_state(pieces: &[(Square, Piece)]) -> BoardState {
    BoardState::from_position(pieces.iter().copied().collect::<Position>())
}

#[test]
fn decor_mirrors_highlights_selection_and_arming() {
    let queen = Piece::new(Color::White, Role::Queen);
    let mut state = bare_state(&[(sq(4, 4), queen)]);
    state.last_move = Some(LastMove::Move(sq(4, 1), sq(4, 3)));
    state.check = Some(sq(7, 15));
    state.selected = Some(sq(4, 4));
    state.movable.dests = Some(FxHashMap::from_iter([
        (sq(4, 4), vec![sq(4, 5), sq(4, 6)]),
        (sq(0, 0), vec![sq(0, 1)]),
    ]));
    state.premovable.dests = Some(vec![sq(5, 5)]);
    board::set_predrop(&mut state, Role::Knight, sq(9, 9));

    let decor = Decor::of(&state);
    assert_eq!(decor.last_move, vec![sq(4, 1), sq(4, 3)]);
    assert_eq!(decor.check, Some(sq(7, 15)));
    assert_eq!(decor.selected, Some(sq(4, 4)));
    assert_eq!(decor.move_dests, vec![sq(4, 5), sq(4, 6)]);
    assert_eq!(decor.premove_dests, vec![sq(5, 5)]);
    assert_eq!(decor.current_premove, vec![sq(9, 9)]);

    // An armed premove takes over from the predrop square.
    state.premovable.current = Some((sq(2, 2), sq(2, 4)));
    let decor = Decor::of(&state);
    assert_eq!(decor.current_premove, vec![sq(2, 2), sq(2, 4)]);

    state.exploding = Some(Exploding {
        stage: 1,
        keys: vec![sq(4, 3)],
    });
    let decor = Decor::of(&state);
    assert_eq!(decor.exploding, Some((1, vec![sq(4, 3)])));
}

#[test]
fn highlight_flags_gate_last_move_and_check() {
    let mut state = bare_state(&[(sq(4, 4), Piece::new(Color::Black, Role::King))]);
    state.last_move = Some(LastMove::Drop(sq(4, 4)));
    state.check = Some(sq(4, 4));
    state.highlight.last_move = false;
    state.highlight.check = false;

    let decor = Decor::of(&state);
    assert!(decor.last_move.is_empty());
    assert_eq!(decor.check, None);

    state.highlight.last_move = true;
    state.highlight.check = true;
    let decor = Decor::of(&state);
    assert_eq!(decor.last_move, vec![sq(4, 4)]);
    assert_eq!(decor.check, Some(sq(4, 4)));
}

#[test]
fn show_dests_off_hides_destinations_but_not_the_selection() {
    let mut state = bare_state(&[(sq(4, 4), Piece::new(Color::White, Role::Rook))]);
    state.selected = Some(sq(4, 4));
    state.movable.dests = Some(FxHashMap::from_iter([(sq(4, 4), vec![sq(4, 5)])]));
    state.premovable.dests = Some(vec![sq(5, 5)]);
    state.movable.show_dests = false;

    let decor = Decor::of(&state);
    assert_eq!(decor.selected, Some(sq(4, 4)));
    assert!(decor.move_dests.is_empty());
    assert!(decor.premove_dests.is_empty());
}

#[test]
fn frame_follows_orientation_animation_and_drag() {
    let mut state = bare_state(&[(sq(4, 4), Piece::new(Color::White, Role::Rook))]);

    let frame = RenderFrame::of(&state, BOUNDS);
    assert!(frame.as_white);
    assert!(frame.anim.is_none());
    assert_eq!(frame.drag, None);

    board::toggle_orientation(&mut state);
    let mut plan = AnimPlan::default();
    plan.anims.insert(sq(4, 4), (128.0, 0.0));
    state.animation.current = Some(plan);
    state.draggable.current = Some(sq(4, 4));

    let frame = RenderFrame::of(&state, BOUNDS);
    assert!(!frame.as_white);
    assert_eq!(frame.drag, Some(sq(4, 4)));
    let anim = frame.anim.unwrap();
    assert_eq!(anim.anims.get(&sq(4, 4)), Some(&(128.0, 0.0)));
}

/// The derived snapshot, fed straight into the reconciler, produces the
/// expected highlight nodes without any hand-built inputs.
#[test]
fn derived_snapshot_drives_the_reconciler() {
    let mut state = bare_state(&[(sq(4, 4), Piece::new(Color::White, Role::Rook))]);
    state.selected = Some(sq(4, 4));
    state.movable.dests = Some(FxHashMap::from_iter([(sq(4, 4), vec![sq(4, 5)])]));

    let mut scene = Scene::new();
    reconcile(
        &mut scene,
        &state.pieces,
        &Decor::of(&state),
        &RenderFrame::of(&state, BOUNDS),
    );

    let highlights: Vec<(String, String)> = {
        let mut v: Vec<_> = scene
            .iter()
            .filter(|(_, n)| n.kind == NodeKind::SquareHighlight)
            .map(|(_, n)| (n.key.to_string(), n.class.clone()))
            .collect();
        v.sort();
        v
    };
    assert_eq!(
        highlights,
        vec![
            ("e5".to_string(), "selected".to_string()),
            ("e6".to_string(), "move-dest".to_string()),
        ]
    );
}
