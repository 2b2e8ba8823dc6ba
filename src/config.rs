//! Run configuration and eager validation.
//!
//! A [`SimConfig`] is a plain immutable record constructed once per run.
//! Both solvers call [`SimConfig::validate`] before any computation, so a
//! bad configuration is always rejected up front, never mid-computation.
//! The seed and trial count are run parameters of the empirical entry
//! point, not model parameters: the exact path is seed-independent.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::PROB_SUM_TOLERANCE;

/// Validation failures. Always fatal to the requested computation; the
/// core performs no logging and no recovery.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("movement probabilities sum to {sum}, expected 1.0 within {tolerance}")]
    MovementMassNotNormalized { sum: f64, tolerance: f64 },

    #[error("{name} = {value} is outside [0, 1]")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("movement table is empty")]
    EmptyMovementTable,

    #[error("movement table lists step size {step} more than once")]
    DuplicateStepSize { step: u32 },

    #[error("boundary must be positive")]
    ZeroBoundary,

    #[error("trial count must be positive")]
    ZeroTrials,
}

/// Immutable model parameters for one run.
///
/// `steps = 0` is valid: the robot never moves and both solvers return a
/// point mass at position 0.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of time ticks.
    pub steps: usize,
    /// Absorbing position; the robot never moves past it.
    pub boundary: usize,
    /// Step-size table: (step, probability) with probabilities summing to 1.
    /// Step 0 is a no-op tick.
    pub movement: Vec<(u32, f64)>,
    /// Chance the sensor correctly reports a wall square as a wall.
    pub p_correct_wall: f64,
    /// Chance the sensor correctly reports a window square as a window.
    pub p_correct_window: f64,
}

impl SimConfig {
    /// Reference scenario: boundary 3, the original movement table
    /// {0: 0.1, 1: 0.7, 2: 0.2}, perfect sensing.
    pub fn reference(steps: usize) -> Self {
        Self {
            steps,
            boundary: crate::constants::DEFAULT_BOUNDARY,
            movement: vec![(0, 0.1), (1, 0.7), (2, 0.2)],
            p_correct_wall: 1.0,
            p_correct_window: 1.0,
        }
    }

    /// Check every invariant of the data model. Called eagerly by both
    /// solvers before any computation proceeds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.boundary == 0 {
            return Err(ConfigError::ZeroBoundary);
        }
        check_probability("p_correct_wall", self.p_correct_wall)?;
        check_probability("p_correct_window", self.p_correct_window)?;

        if self.movement.is_empty() {
            return Err(ConfigError::EmptyMovementTable);
        }
        let mut sum = 0.0;
        for &(step, prob) in &self.movement {
            check_probability("movement probability", prob)?;
            if self.movement.iter().filter(|&&(s, _)| s == step).count() > 1 {
                return Err(ConfigError::DuplicateStepSize { step });
            }
            sum += prob;
        }
        if (sum - 1.0).abs() > PROB_SUM_TOLERANCE {
            return Err(ConfigError::MovementMassNotNormalized {
                sum,
                tolerance: PROB_SUM_TOLERANCE,
            });
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) || value.is_nan() {
        return Err(ConfigError::ProbabilityOutOfRange { name, value });
    }
    Ok(())
}
