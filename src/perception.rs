//! Perception model: noisy sensing of a square's label.
//!
//! Given the true label and the two sensor accuracies, one uniform draw
//! decides whether the report is correct. The draw count is part of the
//! contract: exactly one draw per call, so a fixed seed reproduces the
//! same perception sequence across the whole run.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::track::SquareLabel;

/// Perceive `true_label` through the noisy sensor. Consumes exactly one
/// uniform draw from `rng`.
///
/// The comparison is strict, so an accuracy of 0.0 never reports correctly
/// and 1.0 always does (the draw lies in [0, 1)).
#[inline(always)]
pub fn perceive(
    true_label: SquareLabel,
    p_correct_wall: f64,
    p_correct_window: f64,
    rng: &mut SmallRng,
) -> SquareLabel {
    let u: f64 = rng.random();
    match true_label {
        SquareLabel::Wall => {
            if u < p_correct_wall {
                SquareLabel::Wall
            } else {
                SquareLabel::Window
            }
        }
        SquareLabel::Window => {
            if u < p_correct_window {
                SquareLabel::Window
            } else {
                SquareLabel::Wall
            }
        }
    }
}

/// Probability that square `pos` is perceived as a wall. The exact solver
/// integrates over this instead of drawing.
#[inline(always)]
pub fn wall_perception_prob(
    true_label: SquareLabel,
    p_correct_wall: f64,
    p_correct_window: f64,
) -> f64 {
    match true_label {
        SquareLabel::Wall => p_correct_wall,
        SquareLabel::Window => 1.0 - p_correct_window,
    }
}
