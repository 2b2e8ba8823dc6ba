//! Exact posterior solver: forward dynamic program over the position space.
//!
//! Instead of sampling, integrate the trial semantics analytically. The
//! per-tick transition matrix is built once: from position `p`, each step
//! size contributes mass to every possible halt position along its path
//! (first-perceived-wall branching) and to the clamped target (path clear).
//! The distribution is then pushed forward `steps` ticks with an explicit
//! dense table, the same shape as one tick of Monte Carlo but with
//! probability mass in place of draws.
//!
//! The crossed-squares rule and halt convention here must match
//! [`crate::engine::run_trial`] exactly, or the two paths diverge.

use crate::belief::Belief;
use crate::config::{ConfigError, SimConfig};
use crate::perception::wall_perception_prob;
use crate::track::label_at;

/// Build the per-tick transition matrix T where `T[p][q]` is the
/// probability of ending a tick at `q` having started it at `p`.
///
/// Row `boundary` is the identity (absorbing). Every row sums to 1 by
/// construction: the halt branches and the path-clear branch partition
/// each step size's mass.
pub fn transition_matrix(cfg: &SimConfig) -> Vec<Vec<f64>> {
    let n = cfg.boundary + 1;
    let mut t = vec![vec![0.0; n]; n];

    for p in 0..cfg.boundary {
        for &(step, prob) in &cfg.movement {
            let d = step as usize;
            if d == 0 {
                t[p][p] += prob;
                continue;
            }
            let target = (p + d).min(cfg.boundary);

            // Walk the crossed squares, branching on the first perceived
            // wall. `clear` carries the probability the path is wall-free
            // so far.
            let mut clear = 1.0;
            for square in p..target {
                let w = wall_perception_prob(
                    label_at(square),
                    cfg.p_correct_wall,
                    cfg.p_correct_window,
                );
                t[p][square] += prob * clear * w;
                clear *= 1.0 - w;
            }
            t[p][target] += prob * clear;
        }
    }
    t[cfg.boundary][cfg.boundary] = 1.0;

    t
}

/// Exact entry point: the distribution over final positions after `steps`
/// ticks. Seed-independent; same output for every call with equal config.
pub fn run_exact(cfg: &SimConfig) -> Result<Belief, ConfigError> {
    cfg.validate()?;

    let n = cfg.boundary + 1;
    let t = transition_matrix(cfg);

    let mut dist = vec![0.0f64; n];
    dist[0] = 1.0;

    for _ in 0..cfg.steps {
        let mut next = vec![0.0f64; n];
        for (p, &mass) in dist.iter().enumerate() {
            if mass == 0.0 {
                continue;
            }
            for (q, &tq) in t[p].iter().enumerate() {
                if tq > 0.0 {
                    next[q] += mass * tq;
                }
            }
        }
        dist = next;
    }

    Ok(Belief::from_masses(dist))
}
