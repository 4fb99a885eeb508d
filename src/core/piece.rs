use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Role {
    /// Lowercase role letter as used by the position codec.
    #[inline]
    pub fn letter(self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        }
    }

    pub fn from_letter(c: char) -> Option<Role> {
        Some(match c {
            'p' => Role::Pawn,
            'n' => Role::Knight,
            'b' => Role::Bishop,
            'r' => Role::Rook,
            'q' => Role::Queen,
            'k' => Role::King,
            _ => return None,
        })
    }
}

/// The variant's twelve piece colors.
///
/// Only two of them are bound to playing sides today (see
/// [`crate::board::side_color`]); the rest exist on the board as neutral or
/// controllable armies.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
    Slate,
    Ash,
    Pink,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Navy,
    Violet,
}

impl Color {
    /// CSS-style class fragment, also the color word in scene-node classes.
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
            Color::Slate => "slate",
            Color::Ash => "ash",
            Color::Pink => "pink",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Cyan => "cyan",
            Color::Navy => "navy",
            Color::Violet => "violet",
        }
    }
}

/// One of the two players.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// An immutable piece value. Moving a piece means removing this record from
/// one square and inserting an equal one at another, never sharing it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub role: Role,
    pub color: Color,
    pub promoted: bool,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, role: Role) -> Self {
        Self {
            role,
            color,
            promoted: false,
        }
    }

    /// Visual-class signature (`"white king"`); two pieces with the same
    /// signature are interchangeable for rendering.
    pub fn class(self) -> String {
        format!("{} {}", self.color.name(), role_name(self.role))
    }
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::Pawn => "pawn",
        Role::Knight => "knight",
        Role::Bishop => "bishop",
        Role::Rook => "rook",
        Role::Queen => "queen",
        Role::King => "king",
    }
}
