//! Outbound notifications.
//!
//! Every state mutation settles *before* its notification can be observed:
//! operations push [`Event`]s onto the board's [`EventQueue`] and the host
//! drains the queue after the call returns, so listeners can never re-enter
//! the state machine mid-transition.

use std::collections::VecDeque;
use std::time::Duration;

use crate::core::piece::{Piece, Role};
use crate::core::square::Square;

/// Extra facts about a committed move, for the host's `after` handling.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoveMetadata {
    pub premove: bool,
    pub captured: Option<Piece>,
    pub ctrl_key: Option<bool>,
    pub hold_time: Option<Duration>,
}

/// Extra facts about a committed drop.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DropMetadata {
    pub premove: bool,
    pub predrop: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// A square was clicked/selected (fires even if selection is refused).
    Select { key: Square },
    /// A piece is about to move from `orig` to `dest`.
    Move {
        orig: Square,
        dest: Square,
        captured: Option<Piece>,
    },
    /// The position changed in some way.
    Change,
    /// A new piece is being placed on the board.
    DropNewPiece { piece: Piece, key: Square },
    /// A user move committed; carries the post-move metadata.
    MoveAfter {
        orig: Square,
        dest: Square,
        metadata: MoveMetadata,
    },
    /// A new-piece drop committed.
    DropAfter {
        role: Role,
        key: Square,
        metadata: DropMetadata,
    },
    PremoveSet {
        orig: Square,
        dest: Square,
        ctrl_key: Option<bool>,
    },
    PremoveUnset,
    PredropSet { role: Role, key: Square },
    PredropUnset,
}

/// FIFO of pending notifications, drained by the host.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventQueue {
    queue: VecDeque<Event>,
}

impl EventQueue {
    pub fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Drains everything pending, oldest first.
    pub fn drain(&mut self) -> Vec<Event> {
        self.queue.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
