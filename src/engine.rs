//! Trial simulator and empirical aggregator.
//!
//! One trial walks the robot through `steps` ticks: sample an intended step,
//! perceive each square the move would cross, halt at the first perceived
//! wall. A batch threads one seeded RNG through every trial in sequence, so
//! a whole run is reproducible from a single seed value; trials stay
//! statistically independent because each one only consumes the next draws
//! of the shared stream.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::Instant;

use crate::belief::Belief;
use crate::config::{ConfigError, SimConfig};
use crate::movement::MovementTable;
use crate::perception::perceive;
use crate::track::{label_at, SquareLabel};

/// Results of a batch simulation.
pub struct SimulationResult {
    /// Normalized final-position distribution.
    pub belief: Belief,
    /// Raw tallies indexed by final position.
    pub counts: Vec<u64>,
    pub trials: usize,
    pub seed: u64,
    /// Mean final position across trials.
    pub mean: f64,
    pub std_dev: f64,
    pub elapsed: std::time::Duration,
}

/// Execute one trial from position 0, returning the final resting position.
///
/// Per tick: sample an intended step `d`, clamp the target to the boundary,
/// then perceive squares `pos..target` in increasing order. The first square
/// perceived as a wall halts the robot at that square's position for this
/// tick; remaining ticks still execute. The boundary is absorbing: once
/// reached, the loop exits and no further randomness is consumed.
pub fn run_trial(cfg: &SimConfig, movement: &MovementTable, rng: &mut SmallRng) -> usize {
    let mut pos = 0usize;

    for _ in 0..cfg.steps {
        if pos == cfg.boundary {
            break;
        }

        let d = movement.sample(rng) as usize;
        if d == 0 {
            continue;
        }
        let target = (pos + d).min(cfg.boundary);

        let mut reached = target;
        for square in pos..target {
            let seen = perceive(
                label_at(square),
                cfg.p_correct_wall,
                cfg.p_correct_window,
                rng,
            );
            if seen == SquareLabel::Wall {
                reached = square;
                break;
            }
        }
        pos = reached;
    }

    pos
}

/// Run `trials` trials off one seeded stream and tally final positions.
pub fn simulate_batch(
    cfg: &SimConfig,
    trials: usize,
    seed: u64,
) -> Result<SimulationResult, ConfigError> {
    cfg.validate()?;
    if trials == 0 {
        return Err(ConfigError::ZeroTrials);
    }
    let movement = MovementTable::from_config(cfg)?;

    let start = Instant::now();

    // One advancing stream for the whole batch, never re-seeded per trial.
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut counts = vec![0u64; cfg.boundary + 1];
    for _ in 0..trials {
        let final_pos = run_trial(cfg, &movement, &mut rng);
        counts[final_pos] += 1;
    }

    let elapsed = start.elapsed();

    let sum: f64 = counts
        .iter()
        .enumerate()
        .map(|(pos, &c)| pos as f64 * c as f64)
        .sum();
    let mean = sum / trials as f64;
    let variance: f64 = counts
        .iter()
        .enumerate()
        .map(|(pos, &c)| (pos as f64 - mean).powi(2) * c as f64)
        .sum::<f64>()
        / trials as f64;

    Ok(SimulationResult {
        belief: Belief::from_counts(&counts, trials),
        counts,
        trials,
        seed,
        mean,
        std_dev: variance.sqrt(),
        elapsed,
    })
}

/// Empirical entry point: estimate the final-position distribution from
/// `trials` simulated trials under one seed.
pub fn run_empirical(cfg: &SimConfig, trials: usize, seed: u64) -> Result<Belief, ConfigError> {
    Ok(simulate_batch(cfg, trials, seed)?.belief)
}
