//! A headless core for rendering and interacting with a 16×16 sovereign-style
//! chess board: selection, dragging state, premoves/predrops, move commitment,
//! and incremental reconciliation of a persistent visual scene.
//!
//! Move *legality* is supplied by the host (via [`state::Movable::dests`]);
//! this crate only enforces turn/color control and the configured destination
//! sets.

pub mod core;
pub mod fen;
pub mod state;
pub mod events;
pub mod board;
pub mod geometry;
pub mod render;
pub mod snapshot;
