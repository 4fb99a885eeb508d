//! The interaction-state aggregate.
//!
//! [`BoardState`] owns everything the state machine in [`crate::board`]
//! mutates: the piece placement, selection, premove/predrop arming, turn
//! ownership, decoration inputs, and the outbound event queue. It is passed
//! by `&mut` into the operations rather than living in a global.

use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

use crate::core::piece::{Piece, Role};
use crate::core::position::Position;
use crate::core::square::Square;
use crate::events::EventQueue;
use crate::fen;

pub use crate::core::piece::Side;

/// The most recent committed move, highlighted on the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LastMove {
    /// A relocation from one square to another.
    Move(Square, Square),
    /// A new piece dropped onto a single square.
    Drop(Square),
}

impl LastMove {
    pub fn squares(self) -> impl Iterator<Item = Square> {
        let (a, b) = match self {
            LastMove::Move(orig, dest) => (orig, Some(dest)),
            LastMove::Drop(key) => (key, None),
        };
        std::iter::once(a).chain(b)
    }
}

/// Whose pieces may currently be moved.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MovableColor {
    Both,
    Side(Side),
}

/// Move permissions supplied by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct Movable {
    pub color: Option<MovableColor>,
    /// All destinations are legal; used when the host has no legality model.
    pub free: bool,
    /// Legal destinations per origin. `None` with `free` unset means nothing
    /// is movable.
    pub dests: Option<FxHashMap<Square, Vec<Square>>>,
    pub show_dests: bool,
}

impl Default for Movable {
    fn default() -> Self {
        Self {
            color: Some(MovableColor::Both),
            free: true,
            dests: None,
            show_dests: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Premovable {
    pub enabled: bool,
    /// The armed premove, if any.
    pub current: Option<(Square, Square)>,
    /// Premove destinations for the selected piece, when shown.
    pub dests: Option<Vec<Square>>,
}

impl Default for Premovable {
    fn default() -> Self {
        Self {
            enabled: true,
            current: None,
            dests: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Predroppable {
    /// The armed predrop, if any.
    pub current: Option<(Role, Square)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Draggable {
    pub enabled: bool,
    /// Origin square of the piece currently being dragged.
    pub current: Option<Square>,
}

impl Default for Draggable {
    fn default() -> Self {
        Self {
            enabled: true,
            current: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Selectable {
    pub enabled: bool,
}

impl Default for Selectable {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub last_move: bool,
    pub check: bool,
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            last_move: true,
            check: true,
        }
    }
}

/// Pixel offset of an animating piece relative to its resting translation.
pub type AnimVector = (f64, f64);

/// Host-supplied in-flight animation data for the current frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimPlan {
    /// Remaining offset per destination square.
    pub anims: FxHashMap<Square, AnimVector>,
    /// Ghost pieces that should linger (fade) where a capture landed.
    pub fadings: FxHashMap<Square, Piece>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Animation {
    pub current: Option<AnimPlan>,
}

/// Atomic-chess style explosion markers.
#[derive(Clone, Debug, PartialEq)]
pub struct Exploding {
    pub stage: u8,
    pub keys: Vec<Square>,
}

/// Input facts recorded by the pointer layer for the next commit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stats {
    pub dragged: bool,
    pub ctrl_key: Option<bool>,
}

/// Measures how long a selected piece has been held.
///
/// `stop` reads the elapsed time destructively; `cancel` abandons it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoldTimer {
    started: Option<Instant>,
}

impl HoldTimer {
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    pub fn cancel(&mut self) {
        self.started = None;
    }

    pub fn stop(&mut self) -> Duration {
        let elapsed = self
            .started
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO);
        self.started = None;
        elapsed
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }
}

/// The whole interaction state, exclusively owned by its host.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardState {
    pub pieces: Position,
    pub orientation: Side,
    pub turn_player: Side,
    pub selected: Option<Square>,
    pub last_move: Option<LastMove>,
    /// Square of the king currently in check, if highlighted.
    pub check: Option<Square>,
    pub auto_castle: bool,
    pub movable: Movable,
    pub premovable: Premovable,
    pub predroppable: Predroppable,
    pub draggable: Draggable,
    pub selectable: Selectable,
    pub highlight: Highlight,
    pub animation: Animation,
    pub exploding: Option<Exploding>,
    pub hold: HoldTimer,
    pub stats: Stats,
    pub events: EventQueue,
}

impl BoardState {
    /// The initial placement with default interaction settings.
    pub fn new() -> Self {
        Self::from_position(fen::read("start"))
    }

    pub fn from_position(pieces: Position) -> Self {
        Self {
            pieces,
            orientation: Side::White,
            turn_player: Side::White,
            selected: None,
            last_move: None,
            check: None,
            auto_castle: true,
            movable: Movable::default(),
            premovable: Premovable::default(),
            predroppable: Predroppable::default(),
            draggable: Draggable::default(),
            selectable: Selectable::default(),
            highlight: Highlight::default(),
            animation: Animation::default(),
            exploding: None,
            hold: HoldTimer::default(),
            stats: Stats::default(),
            events: EventQueue::default(),
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
