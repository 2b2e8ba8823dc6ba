//! Track model: the ground-truth label of each square.
//!
//! Squares alternate window/wall along the track, with square 0 fixed to
//! window. The label is a pure function of position, never random; all
//! randomness in the system lives in perception and movement.

use serde::Serialize;

/// Ground-truth (or perceived) label of a track square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SquareLabel {
    Window,
    Wall,
}

impl SquareLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SquareLabel::Window => "window",
            SquareLabel::Wall => "wall",
        }
    }
}

/// True label of square `pos`: window iff even. Total over all positions.
#[inline(always)]
pub fn label_at(pos: usize) -> SquareLabel {
    if pos % 2 == 0 {
        SquareLabel::Window
    } else {
        SquareLabel::Wall
    }
}
