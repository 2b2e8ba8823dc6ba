//! Movement sampler: categorical step-size draws via cumulative inversion.
//!
//! The table is validated and its cumulative distribution precomputed once
//! per run, then every tick costs one uniform draw and a short scan.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::{ConfigError, SimConfig};
use crate::constants::PROB_SUM_TOLERANCE;

/// Step-size table with precomputed cumulative distribution.
///
/// Entries are sorted by step size so the inversion scan visits categories
/// in a deterministic order regardless of how the caller listed them.
#[derive(Clone, Debug)]
pub struct MovementTable {
    steps: Vec<u32>,
    cumulative: Vec<f64>,
}

impl MovementTable {
    /// Build from (step, probability) pairs. Rejects an empty table, any
    /// probability outside [0, 1], a duplicate step size, or total mass
    /// off 1.0 by more than 1e-6.
    pub fn new(table: &[(u32, f64)]) -> Result<Self, ConfigError> {
        if table.is_empty() {
            return Err(ConfigError::EmptyMovementTable);
        }

        let mut entries: Vec<(u32, f64)> = table.to_vec();
        entries.sort_by_key(|&(step, _)| step);

        let mut steps = Vec::with_capacity(entries.len());
        let mut cumulative = Vec::with_capacity(entries.len());
        let mut sum = 0.0;
        for &(step, prob) in &entries {
            if !(0.0..=1.0).contains(&prob) || prob.is_nan() {
                return Err(ConfigError::ProbabilityOutOfRange {
                    name: "movement probability",
                    value: prob,
                });
            }
            if steps.last() == Some(&step) {
                return Err(ConfigError::DuplicateStepSize { step });
            }
            sum += prob;
            steps.push(step);
            cumulative.push(sum);
        }
        if (sum - 1.0).abs() > PROB_SUM_TOLERANCE {
            return Err(ConfigError::MovementMassNotNormalized {
                sum,
                tolerance: PROB_SUM_TOLERANCE,
            });
        }

        Ok(Self { steps, cumulative })
    }

    /// Build from a validated configuration.
    pub fn from_config(cfg: &SimConfig) -> Result<Self, ConfigError> {
        Self::new(&cfg.movement)
    }

    /// Draw one step size: first category whose cumulative mass exceeds the
    /// uniform draw. Consumes exactly one draw from `rng`.
    #[inline(always)]
    pub fn sample(&self, rng: &mut SmallRng) -> u32 {
        let u: f64 = rng.random();
        for (i, &c) in self.cumulative.iter().enumerate() {
            if c > u {
                return self.steps[i];
            }
        }
        // Tolerance slack can leave the final cumulative just under u.
        *self.steps.last().unwrap()
    }

    /// Step sizes in ascending order.
    pub fn steps(&self) -> &[u32] {
        &self.steps
    }

    /// (step, probability) pairs in ascending step order.
    pub fn entries(&self) -> Vec<(u32, f64)> {
        let mut prev = 0.0;
        self.steps
            .iter()
            .zip(&self.cumulative)
            .map(|(&step, &c)| {
                let p = c - prev;
                prev = c;
                (step, p)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_rejects_bad_tables() {
        assert!(MovementTable::new(&[]).is_err());
        assert!(MovementTable::new(&[(1, 0.5)]).is_err());
        assert!(MovementTable::new(&[(1, 1.2), (2, -0.2)]).is_err());
        assert!(MovementTable::new(&[(1, 0.5), (1, 0.5)]).is_err());
    }

    #[test]
    fn test_degenerate_table_always_returns_its_step() {
        let table = MovementTable::new(&[(0, 1.0)]).unwrap();
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..100 {
            assert_eq!(table.sample(&mut rng), 0);
        }
    }

    #[test]
    fn test_entries_round_trip() {
        let table = MovementTable::new(&[(2, 0.2), (0, 0.1), (1, 0.7)]).unwrap();
        let entries = table.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].0, 0);
        assert!((entries[0].1 - 0.1).abs() < 1e-12);
        assert!((entries[1].1 - 0.7).abs() < 1e-12);
        assert!((entries[2].1 - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_sample_frequencies_match_table() {
        let table = MovementTable::new(&[(0, 0.1), (1, 0.7), (2, 0.2)]).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let n = 200_000;
        let mut counts = [0u64; 3];
        for _ in 0..n {
            counts[table.sample(&mut rng) as usize] += 1;
        }
        let expected = [0.1, 0.7, 0.2];
        for (i, &count) in counts.iter().enumerate() {
            let rate = count as f64 / n as f64;
            assert!(
                (rate - expected[i]).abs() < 0.01,
                "step {i} rate {rate}, expected ~{}",
                expected[i]
            );
        }
    }

    #[test]
    fn test_sample_consumes_exactly_one_draw() {
        let table = MovementTable::new(&[(0, 0.1), (1, 0.7), (2, 0.2)]).unwrap();
        let mut sampled = SmallRng::seed_from_u64(3);
        let mut control = SmallRng::seed_from_u64(3);

        table.sample(&mut sampled);
        let _: f64 = control.random();

        for _ in 0..16 {
            assert_eq!(sampled.random::<u64>(), control.random::<u64>());
        }
    }
}
