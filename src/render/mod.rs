//! Incremental scene reconciliation.
//!
//! [`reconcile`] updates the persistent [`Scene`] to match the current
//! [`Position`] and [`Decor`] snapshot without rebuilding it:
//!
//! 1. **classify**: nodes still correct at their square are kept in place;
//!    everything else is pooled by visual class for reuse,
//! 2. **placement**: every unsatisfied `(square, class)` requirement pops a
//!    pooled node of that class (any instance; they are interchangeable) or
//!    appends a fresh one,
//! 3. **sweep**: whatever is left in the pools is surplus and removed.
//!
//! Reuse is purely an optimization to avoid node churn; correctness only
//! requires that afterwards exactly the required `(square, class)` pairs
//! exist. The reconciler never mutates the position.

pub mod decor;
pub mod scene;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::position::Position;
use crate::core::square::Square;
use crate::geometry::{pos_to_translate, Bounds};
use crate::state::{AnimPlan, BoardState};

pub use decor::{square_classes, Decor};
pub use scene::{NodeId, NodeKind, Scene, SceneEdit, SceneNode};

/// Per-frame inputs that are not part of the decoration snapshot.
#[derive(Copy, Clone, Debug)]
pub struct RenderFrame<'a> {
    pub as_white: bool,
    pub bounds: Bounds,
    /// In-flight animation vectors and fading ghosts, if animating.
    pub anim: Option<&'a AnimPlan>,
    /// Origin square of the piece currently being dragged.
    pub drag: Option<Square>,
}

impl<'a> RenderFrame<'a> {
    /// The frame implied by the interaction state.
    pub fn of(state: &'a BoardState, bounds: Bounds) -> Self {
        Self {
            as_white: crate::board::white_pov(state),
            bounds,
            anim: state.animation.current.as_ref(),
            drag: state.draggable.current,
        }
    }
}

/// Brings `scene` in line with `pieces` + `decor`, returning the edits the
/// rendering surface must mirror. Calling it again with the same inputs
/// yields no edits.
pub fn reconcile(
    scene: &mut Scene,
    pieces: &Position,
    decor: &Decor,
    frame: &RenderFrame<'_>,
) -> Vec<SceneEdit> {
    let squares = square_classes(decor, pieces);
    let empty_plan = AnimPlan::default();
    let plan = frame.anim.unwrap_or(&empty_plan);

    let mut same_pieces: FxHashSet<Square> = FxHashSet::default();
    let mut same_squares: FxHashSet<Square> = FxHashSet::default();
    let mut moved_pieces: FxHashMap<String, Vec<NodeId>> = FxHashMap::default();
    let mut moved_squares: FxHashMap<String, Vec<NodeId>> = FxHashMap::default();
    let mut edits: Vec<SceneEdit> = Vec::new();

    // classify: walk the existing nodes, settle animation/drag/fade flags,
    // and pool everything that no longer matches its square
    for id in scene.ids() {
        let Some(node) = scene.get_mut(id) else {
            continue;
        };
        let k = node.key;
        match node.kind {
            NodeKind::Piece => {
                if node.dragging && frame.drag != Some(k) {
                    node.dragging = false;
                    node.translation = pos_to_translate(k.coord(), frame.as_white, frame.bounds);
                }
                let fading = plan.fadings.get(&k);
                if fading.is_none() && node.fading {
                    node.fading = false;
                }
                match pieces.get(k) {
                    Some(piece) => {
                        let same_class = node.class == piece.class();
                        // continue the animation only for the same piece,
                        // otherwise it could animate a captured piece
                        if node.animating {
                            let base = pos_to_translate(k.coord(), frame.as_white, frame.bounds);
                            match plan.anims.get(&k) {
                                Some(&(dx, dy)) if same_class => {
                                    node.translation = (base.0 + dx, base.1 + dy);
                                }
                                _ => {
                                    node.translation = base;
                                    node.animating = false;
                                }
                            }
                        }
                        if same_class {
                            same_pieces.insert(k);
                        } else if fading.is_some_and(|f| node.class == f.class()) {
                            node.fading = true;
                        } else {
                            moved_pieces.entry(node.class.clone()).or_default().push(id);
                        }
                    }
                    None => {
                        moved_pieces.entry(node.class.clone()).or_default().push(id);
                    }
                }
            }
            NodeKind::SquareHighlight => {
                if squares.get(&k) == Some(&node.class) {
                    same_squares.insert(k);
                } else {
                    moved_squares.entry(node.class.clone()).or_default().push(id);
                }
            }
        }
    }

    // placement: satisfy every remaining (square, class) requirement from
    // the pools, appending fresh nodes when a pool runs dry
    for (k, piece) in pieces.iter() {
        if same_pieces.contains(&k) {
            continue;
        }
        let class = piece.class();
        let mut translation = pos_to_translate(k.coord(), frame.as_white, frame.bounds);
        let anim = plan.anims.get(&k).copied();
        if let Some((dx, dy)) = anim {
            translation = (translation.0 + dx, translation.1 + dy);
        }
        let reused = moved_pieces.get_mut(&class).and_then(Vec::pop);
        match reused {
            Some(id) => {
                let Some(node) = scene.get_mut(id) else {
                    continue;
                };
                let from = node.key;
                node.key = k;
                node.animating = anim.is_some();
                node.translation = translation;
                edits.push(SceneEdit::Retargeted { id, from, to: k });
            }
            None => {
                let mut node = SceneNode::piece(k, class, translation);
                node.animating = anim.is_some();
                let id = scene.insert(node);
                edits.push(SceneEdit::Appended(id));
            }
        }
    }

    for (&k, class) in &squares {
        if same_squares.contains(&k) {
            continue;
        }
        let translation = pos_to_translate(k.coord(), frame.as_white, frame.bounds);
        let reused = moved_squares.get_mut(class).and_then(Vec::pop);
        match reused {
            Some(id) => {
                let Some(node) = scene.get_mut(id) else {
                    continue;
                };
                let from = node.key;
                node.key = k;
                node.translation = translation;
                edits.push(SceneEdit::Retargeted { id, from, to: k });
            }
            None => {
                let id = scene.insert(SceneNode::square(k, class.clone(), translation));
                edits.push(SceneEdit::Appended(id));
            }
        }
    }

    // sweep: anything still pooled is surplus
    for ids in moved_pieces.into_values().chain(moved_squares.into_values()) {
        for id in ids {
            scene.remove(id);
            edits.push(SceneEdit::Removed(id));
        }
    }

    edits
}
