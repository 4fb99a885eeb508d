//! Low-level, allocation-free primitives.
//!
//! These types are intentionally compact and hash-friendly because both the
//! interaction state and the renderer keep per-square bookkeeping in hash
//! maps keyed by square:
//!
//! - [`coord`]: `(file, rank)` coordinates on the 16×16 board.
//! - [`square`]: a square key packed into a single `u8`, plus the variant's
//!   textual key form (`a1` .. `pG`).
//! - [`piece`]: roles, the variant's twelve piece colors, the two sides.
//! - [`position`]: the piece placement, one entry per occupied square.

pub mod coord;
pub mod piece;
pub mod position;
pub mod square;
