//! Square decorations: which non-piece annotations apply where, and how
//! they compose into one class string per square.

use rustc_hash::FxHashMap;

use crate::core::position::Position;
use crate::core::square::Square;
use crate::state::BoardState;

/// Snapshot of the decoration inputs for one rendered frame.
///
/// Built from the interaction state by [`Decor::of`]; the reconciler only
/// reads this and the [`Position`], never the state itself.
#[derive(Clone, Debug, Default)]
pub struct Decor {
    pub last_move: Vec<Square>,
    pub check: Option<Square>,
    pub selected: Option<Square>,
    pub move_dests: Vec<Square>,
    pub premove_dests: Vec<Square>,
    /// Squares of the armed premove pair, or the armed predrop square.
    pub current_premove: Vec<Square>,
    pub exploding: Option<(u8, Vec<Square>)>,
}

impl Decor {
    pub fn of(state: &BoardState) -> Decor {
        let mut decor = Decor::default();
        if state.highlight.last_move {
            if let Some(lm) = state.last_move {
                decor.last_move = lm.squares().collect();
            }
        }
        if state.highlight.check {
            decor.check = state.check;
        }
        if let Some(selected) = state.selected {
            decor.selected = Some(selected);
            if state.movable.show_dests {
                if let Some(dests) = state
                    .movable
                    .dests
                    .as_ref()
                    .and_then(|dests| dests.get(&selected))
                {
                    decor.move_dests = dests.clone();
                }
                if let Some(dests) = &state.premovable.dests {
                    decor.premove_dests = dests.clone();
                }
            }
        }
        if let Some((orig, dest)) = state.premovable.current {
            decor.current_premove = vec![orig, dest];
        } else if let Some((_, key)) = state.predroppable.current {
            decor.current_premove = vec![key];
        }
        if let Some(exploding) = &state.exploding {
            decor.exploding = Some((exploding.stage, exploding.keys.clone()));
        }
        decor
    }
}

/// Composes the class string for every decorated square.
///
/// Later decorations append to, never replace, earlier ones; a square with
/// no decoration has no entry.
pub fn square_classes(decor: &Decor, pieces: &Position) -> FxHashMap<Square, String> {
    let mut squares: FxHashMap<Square, String> = FxHashMap::default();
    for &k in &decor.last_move {
        add_square(&mut squares, k, "last-move");
    }
    if let Some(k) = decor.check {
        add_square(&mut squares, k, "check");
    }
    if let Some(k) = decor.selected {
        add_square(&mut squares, k, "selected");
    }
    for &k in &decor.move_dests {
        let class = if pieces.contains(k) { "move-dest oc" } else { "move-dest" };
        add_square(&mut squares, k, class);
    }
    for &k in &decor.premove_dests {
        let class = if pieces.contains(k) { "premove-dest oc" } else { "premove-dest" };
        add_square(&mut squares, k, class);
    }
    for &k in &decor.current_premove {
        add_square(&mut squares, k, "current-premove");
    }
    if let Some((stage, keys)) = &decor.exploding {
        for &k in keys {
            add_square(&mut squares, k, &format!("exploding{stage}"));
        }
    }
    squares
}

fn add_square(squares: &mut FxHashMap<Square, String>, key: Square, class: &str) {
    match squares.get_mut(&key) {
        Some(existing) => {
            existing.push(' ');
            existing.push_str(class);
        }
        None => {
            squares.insert(key, class.to_string());
        }
    }
}
