//! The persistent scene graph the reconciler edits.
//!
//! Scene nodes are the crate-side record of the rendering surface's
//! elements: one node per visible piece sprite or decorated square. The
//! surface applies the returned [`SceneEdit`]s; the scene itself is the
//! source of truth for what exists.

use rustc_hash::FxHashMap;

use crate::core::square::Square;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NodeKind {
    Piece,
    SquareHighlight,
}

/// One visual element, tagged with the square it sits on and its visual
/// class (piece: `"color role"`, square: the composed decoration classes).
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    pub kind: NodeKind,
    pub key: Square,
    pub class: String,
    /// Top-left pixel translation, including any animation offset.
    pub translation: (f64, f64),
    pub animating: bool,
    pub fading: bool,
    pub dragging: bool,
}

impl SceneNode {
    pub fn piece(key: Square, class: String, translation: (f64, f64)) -> Self {
        Self {
            kind: NodeKind::Piece,
            key,
            class,
            translation,
            animating: false,
            fading: false,
            dragging: false,
        }
    }

    pub fn square(key: Square, class: String, translation: (f64, f64)) -> Self {
        Self {
            kind: NodeKind::SquareHighlight,
            key,
            class,
            translation,
            animating: false,
            fading: false,
            dragging: false,
        }
    }
}

/// An edit the rendering surface must mirror.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneEdit {
    Appended(NodeId),
    Retargeted {
        id: NodeId,
        from: Square,
        to: Square,
    },
    Removed(NodeId),
}

/// Id-indexed store of live scene nodes.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    next: u32,
    nodes: FxHashMap<NodeId, SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: SceneNode) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        self.nodes.insert(id, node);
        id
    }

    pub fn remove(&mut self, id: NodeId) -> Option<SceneNode> {
        self.nodes.remove(&id)
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Live ids in insertion order.
    pub fn ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes.iter().map(|(&id, node)| (id, node))
    }
}
