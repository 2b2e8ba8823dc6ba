//! Belief distribution: the output of both computation paths.
//!
//! A dense probability vector over positions `0..=boundary`. Freshly
//! computed per invocation; nothing is cached or mutated after return.

use serde::Serialize;

/// Normalized distribution over final positions.
#[derive(Clone, Debug, Serialize)]
pub struct Belief {
    masses: Vec<f64>,
}

impl Belief {
    /// Wrap a dense mass vector indexed by position.
    pub fn from_masses(masses: Vec<f64>) -> Self {
        debug_assert!(!masses.is_empty());
        Self { masses }
    }

    /// Point mass at `pos` on a track with the given boundary.
    pub fn point_mass(pos: usize, boundary: usize) -> Self {
        let mut masses = vec![0.0; boundary + 1];
        masses[pos] = 1.0;
        Self { masses }
    }

    /// Normalize raw tallies by the trial count.
    pub fn from_counts(counts: &[u64], trials: usize) -> Self {
        let masses = counts
            .iter()
            .map(|&c| c as f64 / trials as f64)
            .collect();
        Self { masses }
    }

    /// Absorbing boundary position (highest index).
    pub fn boundary(&self) -> usize {
        self.masses.len() - 1
    }

    /// Probability mass at `pos`; zero outside the track.
    pub fn prob(&self, pos: usize) -> f64 {
        self.masses.get(pos).copied().unwrap_or(0.0)
    }

    /// Dense masses indexed by position.
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Sum of all masses. 1.0 within tolerance for any valid output.
    pub fn total_mass(&self) -> f64 {
        self.masses.iter().sum()
    }

    /// Expected final position.
    pub fn mean(&self) -> f64 {
        self.masses
            .iter()
            .enumerate()
            .map(|(pos, &p)| pos as f64 * p)
            .sum()
    }

    /// Standard deviation of the final position.
    pub fn std_dev(&self) -> f64 {
        let mean = self.mean();
        let variance: f64 = self
            .masses
            .iter()
            .enumerate()
            .map(|(pos, &p)| (pos as f64 - mean).powi(2) * p)
            .sum();
        variance.sqrt()
    }

    /// Total-variation distance to another distribution over the same track.
    pub fn tv_distance(&self, other: &Belief) -> f64 {
        debug_assert_eq!(self.masses.len(), other.masses.len());
        0.5 * self
            .masses
            .iter()
            .zip(&other.masses)
            .map(|(&a, &b)| (a - b).abs())
            .sum::<f64>()
    }

    /// Sparse (position, probability) pairs, zero entries skipped.
    pub fn pmf(&self) -> Vec<(usize, f64)> {
        self.masses
            .iter()
            .enumerate()
            .filter(|(_, &p)| p > 0.0)
            .map(|(pos, &p)| (pos, p))
            .collect()
    }
}

/// Save a distribution as pretty JSON.
pub fn save_distribution(belief: &Belief, path: &str) -> std::io::Result<()> {
    if let Some(parent) = std::path::Path::new(path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(belief).expect("belief serializes");
    std::fs::write(path, json)
}
