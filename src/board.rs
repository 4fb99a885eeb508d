//! The interaction state machine.
//!
//! Free functions over a `&mut BoardState`, one per user-visible transition:
//! selecting squares, committing moves and drops, arming premoves/predrops.
//! Illegal input is never an error here; it is reported through `bool`/enum
//! returns and always settles back into a safe idle state with the selection
//! cleared. Notifications go through the state's event queue (drained by the
//! host after the call).

use std::fmt;

use crate::core::coord::{Coord, BOARD_SIZE};
use crate::core::piece::{Color, Piece, Role, Side};
use crate::core::square::Square;
use crate::events::{DropMetadata, Event, MoveMetadata};
use crate::state::{BoardState, LastMove, MovableColor};

/// Outcome of the move primitives.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveResult {
    /// The move could not be attempted; nothing changed.
    Failed,
    /// The move committed, capturing the carried piece if any.
    Committed(Option<Piece>),
}

impl MoveResult {
    #[inline]
    pub fn is_committed(self) -> bool {
        matches!(self, MoveResult::Committed(_))
    }

    #[inline]
    pub fn captured(self) -> Option<Piece> {
        match self {
            MoveResult::Committed(c) => c,
            MoveResult::Failed => None,
        }
    }
}

/// A capability is missing, as opposed to a move being merely illegal.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PlayError {
    /// Predrop legality needs a mobility model this crate does not carry.
    PredropUnsupported,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::PredropUnsupported => write!(f, "playing predrops is not supported"),
        }
    }
}

impl std::error::Error for PlayError {}

/// The piece color a side plays.
// TODO(color) associate players with the variant's other colors
pub fn side_color(side: Side) -> Color {
    match side {
        Side::White => Color::White,
        Side::Black => Color::Black,
    }
}

/// Whether `player` controls pieces of `color`.
pub fn player_controls_color(_state: &BoardState, player: Side, color: Color) -> bool {
    color == side_color(player)
}

/// Whether the side to move controls pieces of `color`.
pub fn active_player_controls_color(state: &BoardState, color: Color) -> bool {
    player_controls_color(state, state.turn_player, color)
}

pub fn toggle_orientation(state: &mut BoardState) {
    state.orientation = state.orientation.other();
    state.animation.current = None;
    state.draggable.current = None;
    state.selected = None;
}

pub fn reset(state: &mut BoardState) {
    state.last_move = None;
    unselect(state);
    unset_premove(state);
    unset_predrop(state);
}

/// Applies a placement diff: `Some` places a piece, `None` clears the square.
pub fn set_pieces(
    state: &mut BoardState,
    diff: impl IntoIterator<Item = (Square, Option<Piece>)>,
) {
    for (key, piece) in diff {
        match piece {
            Some(p) => {
                state.pieces.set(key, p);
            }
            None => {
                state.pieces.remove(key);
            }
        }
    }
}

/// What [`set_check`] should highlight.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CheckHighlight {
    Off,
    /// The king of the side to move (via [`side_color`]).
    SideToMove,
    Color(Color),
}

/// Marks the checked king's square, or clears the marker.
pub fn set_check(state: &mut BoardState, target: CheckHighlight) {
    state.check = None;
    let color = match target {
        CheckHighlight::Off => return,
        CheckHighlight::SideToMove => side_color(state.turn_player),
        CheckHighlight::Color(c) => c,
    };
    for (k, p) in state.pieces.iter() {
        if p.role == Role::King && p.color == color {
            state.check = Some(k);
        }
    }
}

/// Arms a premove, disarming any predrop. Called by the pointer layer when a
/// drag finishes off-turn.
pub fn set_premove(state: &mut BoardState, orig: Square, dest: Square, ctrl_key: Option<bool>) {
    unset_predrop(state);
    state.premovable.current = Some((orig, dest));
    state.events.push(Event::PremoveSet { orig, dest, ctrl_key });
}

pub fn unset_premove(state: &mut BoardState) {
    if state.premovable.current.take().is_some() {
        state.events.push(Event::PremoveUnset);
    }
}

/// Arms a predrop, disarming any premove.
pub fn set_predrop(state: &mut BoardState, role: Role, key: Square) {
    unset_premove(state);
    state.predroppable.current = Some((role, key));
    state.events.push(Event::PredropSet { role, key });
}

pub fn unset_predrop(state: &mut BoardState) {
    if state.predroppable.current.take().is_some() {
        state.events.push(Event::PredropUnset);
    }
}

/// Reinterprets a back-rank king move toward (or two files along) the rank
/// as castling and relocates both king and rook.
///
/// A provisional approximation: notation files (king 4→6/2, rooks at 7/0)
/// are kept as-is rather than generalized to the wide board.
fn try_auto_castle(state: &mut BoardState, orig: Square, dest: Square) -> bool {
    if !state.auto_castle {
        return false;
    }

    let Some(king) = state.pieces.get(orig) else {
        return false;
    };
    if king.role != Role::King {
        return false;
    }

    let orig_pos = orig.coord();
    let dest_pos = dest.coord();
    let back_rank = orig_pos.rank == 0 || orig_pos.rank == BOARD_SIZE - 1;
    if !back_rank || orig_pos.rank != dest_pos.rank {
        return false;
    }
    let mut rook_sq = dest;
    if orig_pos.file == 4 && !state.pieces.contains(dest) {
        if dest_pos.file == 6 {
            rook_sq = Square::from_coord(Coord::new(7, dest_pos.rank));
        } else if dest_pos.file == 2 {
            rook_sq = Square::from_coord(Coord::new(0, dest_pos.rank));
        }
    }
    let Some(rook) = state.pieces.get(rook_sq) else {
        return false;
    };
    if rook.color != king.color || rook.role != Role::Rook {
        return false;
    }

    state.pieces.remove(orig);
    state.pieces.remove(rook_sq);

    let rank = dest_pos.rank;
    if orig_pos.file < dest_pos.file {
        state.pieces.set(Square::from_coord(Coord::new(6, rank)), king);
        state.pieces.set(Square::from_coord(Coord::new(5, rank)), rook);
    } else {
        state.pieces.set(Square::from_coord(Coord::new(2, rank)), king);
        state.pieces.set(Square::from_coord(Coord::new(3, rank)), rook);
    }
    true
}

/// Relocates a piece with no legality checks beyond "origin occupied" and
/// "origin ≠ destination". The caller is responsible for rule legality;
/// same-color destination pieces are simply overwritten.
pub fn base_move(state: &mut BoardState, orig: Square, dest: Square) -> MoveResult {
    let Some(orig_piece) = state.pieces.get(orig) else {
        return MoveResult::Failed;
    };
    if orig == dest {
        return MoveResult::Failed;
    }
    let captured = state
        .pieces
        .get(dest)
        .filter(|p| p.color != orig_piece.color);
    if state.selected == Some(dest) {
        unselect(state);
    }
    state.events.push(Event::Move {
        orig,
        dest,
        captured,
    });
    if !try_auto_castle(state, orig, dest) {
        state.pieces.set(dest, orig_piece);
        state.pieces.remove(orig);
    }
    state.last_move = Some(LastMove::Move(orig, dest));
    state.check = None;
    state.events.push(Event::Change);
    MoveResult::Committed(captured)
}

/// Places a brand-new piece. Fails on an occupied square unless forced.
pub fn base_new_piece(state: &mut BoardState, piece: Piece, key: Square, force: bool) -> bool {
    if state.pieces.contains(key) {
        if force {
            state.pieces.remove(key);
        } else {
            return false;
        }
    }
    state.events.push(Event::DropNewPiece { piece, key });
    state.pieces.set(key, piece);
    state.last_move = Some(LastMove::Drop(key));
    state.check = None;
    state.events.push(Event::Change);
    state.movable.dests = None;
    state.turn_player = state.turn_player.other();
    true
}

fn base_user_move(state: &mut BoardState, orig: Square, dest: Square) -> MoveResult {
    let result = base_move(state, orig, dest);
    if result.is_committed() {
        state.movable.dests = None;
        state.turn_player = state.turn_player.other();
        state.animation.current = None;
    }
    result
}

/// Attempts a move on behalf of the user; arms a premove when the move is
/// not yet playable but premovable. Clears the selection on every path.
pub fn user_move(state: &mut BoardState, orig: Square, dest: Square) -> bool {
    if can_move(state, orig, dest) {
        let result = base_user_move(state, orig, dest);
        if let MoveResult::Committed(captured) = result {
            let hold_time = state.hold.stop();
            unselect(state);
            let metadata = MoveMetadata {
                premove: false,
                captured,
                ctrl_key: state.stats.ctrl_key,
                hold_time: Some(hold_time),
            };
            state.events.push(Event::MoveAfter {
                orig,
                dest,
                metadata,
            });
            return true;
        }
    } else if can_premove(state, orig, dest) {
        set_premove(state, orig, dest, state.stats.ctrl_key);
        unselect(state);
        return true;
    }
    unselect(state);
    false
}

/// Drops the piece held at `orig` onto `dest` as a brand-new piece.
///
/// Whatever branch is taken, `orig` ends up cleared and nothing stays
/// selected.
pub fn drop_new_piece(state: &mut BoardState, orig: Square, dest: Square, force: bool) {
    let piece = state.pieces.get(orig);
    match piece {
        Some(piece) if can_drop(state, orig, dest) || force => {
            state.pieces.remove(orig);
            base_new_piece(state, piece, dest, force);
            state.events.push(Event::DropAfter {
                role: piece.role,
                key: dest,
                metadata: DropMetadata {
                    premove: false,
                    predrop: false,
                },
            });
        }
        Some(piece) if can_predrop(state, orig, dest) => {
            set_predrop(state, piece.role, dest);
        }
        _ => {
            unset_premove(state);
            unset_predrop(state);
        }
    }
    state.pieces.remove(orig);
    unselect(state);
}

/// Handles a click/tap on `key`: deselect, move attempt, or new selection.
pub fn select_square(state: &mut BoardState, key: Square, force: bool) {
    state.events.push(Event::Select { key });
    if let Some(selected) = state.selected {
        if selected == key && !state.draggable.enabled {
            unselect(state);
            state.hold.cancel();
            return;
        } else if (state.selectable.enabled || force) && selected != key {
            if user_move(state, selected, key) {
                state.stats.dragged = false;
                return;
            }
        }
    }
    if is_movable(state, key) || is_premovable(state, key) {
        set_selected(state, key);
        state.hold.start();
    }
}

pub fn set_selected(state: &mut BoardState, key: Square) {
    state.selected = Some(key);
    state.premovable.dests = None;
}

pub fn unselect(state: &mut BoardState) {
    state.selected = None;
    state.premovable.dests = None;
    state.hold.cancel();
}

fn is_movable(state: &BoardState, orig: Square) -> bool {
    let Some(piece) = state.pieces.get(orig) else {
        return false;
    };
    match state.movable.color {
        Some(MovableColor::Both) => true,
        Some(MovableColor::Side(side)) => {
            side == state.turn_player && active_player_controls_color(state, piece.color)
        }
        None => false,
    }
}

pub fn can_move(state: &BoardState, orig: Square, dest: Square) -> bool {
    orig != dest
        && is_movable(state, orig)
        && (state.movable.free
            || state
                .movable
                .dests
                .as_ref()
                .and_then(|dests| dests.get(&orig))
                .is_some_and(|ds| ds.contains(&dest)))
}

fn can_drop(state: &BoardState, orig: Square, dest: Square) -> bool {
    let Some(piece) = state.pieces.get(orig) else {
        return false;
    };
    if orig != dest && state.pieces.contains(dest) {
        return false;
    }
    match state.movable.color {
        Some(MovableColor::Both) => true,
        Some(MovableColor::Side(side)) => {
            side == state.turn_player && active_player_controls_color(state, piece.color)
        }
        None => false,
    }
}

// Premoving would add another place to compute mobility/castling; disabled
// until a real mobility model exists.
fn is_premovable(_state: &BoardState, _orig: Square) -> bool {
    false
}

fn can_premove(_state: &BoardState, _orig: Square, _dest: Square) -> bool {
    false
}

fn can_predrop(_state: &BoardState, _orig: Square, _dest: Square) -> bool {
    false
}

pub fn is_draggable(state: &BoardState, orig: Square) -> bool {
    let Some(piece) = state.pieces.get(orig) else {
        return false;
    };
    if !state.draggable.enabled {
        return false;
    }
    match state.movable.color {
        Some(MovableColor::Both) => true,
        Some(MovableColor::Side(side)) => {
            player_controls_color(state, side, piece.color)
                && (active_player_controls_color(state, piece.color) || state.premovable.enabled)
        }
        None => false,
    }
}

/// Plays the armed premove if its move is now legal. The premove is disarmed
/// either way; returns whether a move committed.
pub fn play_premove(state: &mut BoardState) -> bool {
    let Some((orig, dest)) = state.premovable.current else {
        return false;
    };
    let mut success = false;
    if can_move(state, orig, dest) {
        if let MoveResult::Committed(captured) = base_user_move(state, orig, dest) {
            let metadata = MoveMetadata {
                premove: true,
                captured,
                ..MoveMetadata::default()
            };
            state.events.push(Event::MoveAfter {
                orig,
                dest,
                metadata,
            });
            success = true;
        }
    }
    unset_premove(state);
    success
}

/// Predrops need drop-legality validation this crate does not model.
pub fn play_predrop(
    _state: &mut BoardState,
    _validate: impl Fn(Role, Square) -> bool,
) -> Result<bool, PlayError> {
    Err(PlayError::PredropUnsupported)
}

pub fn cancel_move(state: &mut BoardState) {
    unset_premove(state);
    unset_predrop(state);
    unselect(state);
}

/// Disables all interaction until the movable config is restored.
pub fn stop(state: &mut BoardState) {
    state.movable.color = None;
    state.movable.dests = None;
    state.animation.current = None;
    cancel_move(state);
}

pub fn white_pov(state: &BoardState) -> bool {
    state.orientation == Side::White
}
