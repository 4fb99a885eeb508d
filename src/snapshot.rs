//! Host-facing board snapshots.
//!
//! A snapshot is intended to be **stable** (plain JSON, textual square keys
//! and the position codec) and **small**: enough to restore a game view, not
//! the interaction state around it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::piece::Side;
use crate::core::square::Square;
use crate::fen;
use crate::state::{BoardState, LastMove};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Piece placement in the position-text codec.
    pub fen: String,
    pub turn_player: Side,
    /// One key for a drop, two for a relocation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub last_move: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SnapshotError {
    Json { error: String },
    BadSquare { key: String },
    BadLastMove { len: usize },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Json { error } => write!(f, "snapshot JSON error: {error}"),
            SnapshotError::BadSquare { key } => write!(f, "snapshot square key invalid: {key:?}"),
            SnapshotError::BadLastMove { len } => {
                write!(f, "snapshot last_move must have 1 or 2 keys, got {len}")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

impl BoardSnapshot {
    pub fn of(state: &BoardState) -> Self {
        let last_move = match state.last_move {
            Some(lm) => lm.squares().map(|sq| sq.to_string()).collect(),
            None => Vec::new(),
        };
        Self {
            fen: fen::write(&state.pieces),
            turn_player: state.turn_player,
            last_move,
            check: state.check.map(|sq| sq.to_string()),
        }
    }

    /// Restores the snapshot into a fresh state with default interaction
    /// settings.
    pub fn restore(&self) -> Result<BoardState, SnapshotError> {
        let mut state = BoardState::from_position(fen::read(&self.fen));
        state.turn_player = self.turn_player;
        state.last_move = match self.last_move.as_slice() {
            [] => None,
            [key] => Some(LastMove::Drop(parse_key(key)?)),
            [orig, dest] => Some(LastMove::Move(parse_key(orig)?, parse_key(dest)?)),
            keys => {
                return Err(SnapshotError::BadLastMove { len: keys.len() });
            }
        };
        state.check = match &self.check {
            Some(key) => Some(parse_key(key)?),
            None => None,
        };
        Ok(state)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::Json {
            error: e.to_string(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::Json {
            error: e.to_string(),
        })
    }
}

fn parse_key(key: &str) -> Result<Square, SnapshotError> {
    key.parse::<Square>().map_err(|e| SnapshotError::BadSquare { key: e.key })
}
