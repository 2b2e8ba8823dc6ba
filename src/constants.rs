//! Model constants and numeric tolerances.

/// Absorbing boundary position in the reference scenario.
pub const DEFAULT_BOUNDARY: usize = 3;

/// Default number of time ticks for the demo binary.
pub const DEFAULT_STEPS: usize = 5;

/// Default trial count for the demo binary.
pub const DEFAULT_TRIALS: usize = 20_000;

/// Default RNG seed for the demo binary.
pub const DEFAULT_SEED: u64 = 1;

/// Movement-table probabilities must sum to 1 within this tolerance.
pub const PROB_SUM_TOLERANCE: f64 = 1e-6;

/// Exact-path output mass must sum to 1 within this tolerance.
pub const MASS_TOLERANCE: f64 = 1e-9;
