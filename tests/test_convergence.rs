//! Cross-checks between the empirical simulator and the exact solver.
//!
//! The two paths implement the same trial semantics independently; these
//! tests pin the shared stop convention and verify the law-of-large-numbers
//! convergence the model promises.

use corridor::config::SimConfig;
use corridor::engine::{run_empirical, simulate_batch};
use corridor::exact::run_exact;

fn noisy_cfg(steps: usize) -> SimConfig {
    SimConfig {
        steps,
        boundary: 3,
        movement: vec![(0, 0.1), (1, 0.7), (2, 0.2)],
        p_correct_wall: 0.8,
        p_correct_window: 0.9,
    }
}

/// Direct cross-check of the stop convention (shared rule, not inferred
/// from either implementation): one tick of step 2 under perfect sensing
/// must halt at position 1 in BOTH paths. The robot crosses square 0
/// (window, passes) then square 1 (wall, halts at its near edge).
///
/// The two rejected conventions would land elsewhere: sensing only the
/// interior of the move would reach position 2, halting one square short
/// of the perceived wall would stay at 0.
#[test]
fn test_stop_convention_matches_in_both_paths() {
    let cfg = SimConfig {
        steps: 1,
        boundary: 3,
        movement: vec![(2, 1.0)],
        p_correct_wall: 1.0,
        p_correct_window: 1.0,
    };

    let exact = run_exact(&cfg).unwrap();
    assert!((exact.prob(1) - 1.0).abs() < 1e-9, "exact: {:?}", exact.masses());

    let empirical = run_empirical(&cfg, 1_000, 7).unwrap();
    assert_eq!(empirical.prob(1), 1.0, "empirical: {:?}", empirical.masses());
}

/// TV distance shrinks as trials grow (roughly 1/sqrt(trials)).
#[test]
fn test_tv_distance_shrinks_with_trials() {
    let cfg = noisy_cfg(5);
    let exact = run_exact(&cfg).unwrap();

    let tv_small = run_empirical(&cfg, 100, 42).unwrap().tv_distance(&exact);
    let tv_mid = run_empirical(&cfg, 10_000, 42).unwrap().tv_distance(&exact);
    let tv_large = run_empirical(&cfg, 1_000_000, 42).unwrap().tv_distance(&exact);

    assert!(
        tv_large < tv_small,
        "tv did not shrink: {tv_small} -> {tv_mid} -> {tv_large}"
    );
    assert!(tv_mid < 0.05, "tv at 10k trials too large: {tv_mid}");
    assert!(tv_large < 0.01, "tv at 1M trials too large: {tv_large}");
}

/// The empirical mean must sit within a few standard errors of the exact
/// mean. Mirrors the z-score sanity check the simulator's consumers run.
#[test]
fn test_empirical_mean_within_standard_error() {
    let cfg = noisy_cfg(6);
    let exact = run_exact(&cfg).unwrap();
    let result = simulate_batch(&cfg, 200_000, 42).unwrap();

    let se = exact.std_dev() / (result.trials as f64).sqrt();
    let z = (result.mean - exact.mean()) / se;
    assert!(
        z.abs() < 5.0,
        "empirical mean {:.5} vs exact {:.5} is {:.1} standard errors off",
        result.mean,
        exact.mean(),
        z.abs()
    );
}

/// A partial-noise scenario exercises every branch (halt at each crossed
/// square, full step, clamp); both paths must agree within sampling noise.
#[test]
fn test_noisy_scenario_agrees_at_large_sample() {
    let cfg = SimConfig {
        steps: 4,
        boundary: 3,
        movement: vec![(0, 0.2), (1, 0.3), (2, 0.3), (3, 0.2)],
        p_correct_wall: 0.6,
        p_correct_window: 0.75,
    };
    let exact = run_exact(&cfg).unwrap();
    let empirical = run_empirical(&cfg, 500_000, 123).unwrap();
    let tv = empirical.tv_distance(&exact);
    assert!(tv < 0.01, "tv={tv}");
}

// ── Fixed scenarios, both paths ─────────────────────────────────────

#[test]
fn test_zero_steps_point_mass_both_paths() {
    let cfg = noisy_cfg(0);
    assert_eq!(run_exact(&cfg).unwrap().prob(0), 1.0);
    assert_eq!(run_empirical(&cfg, 1_000, 5).unwrap().prob(0), 1.0);
}

#[test]
fn test_perfect_sensing_point_mass_both_paths() {
    let cfg = SimConfig {
        steps: 3,
        boundary: 3,
        movement: vec![(1, 1.0)],
        p_correct_wall: 1.0,
        p_correct_window: 1.0,
    };
    assert!((run_exact(&cfg).unwrap().prob(1) - 1.0).abs() < 1e-9);
    assert_eq!(run_empirical(&cfg, 1_000, 5).unwrap().prob(1), 1.0);
}

#[test]
fn test_blind_wall_sensor_reaches_boundary_both_paths() {
    let cfg = SimConfig {
        steps: 5,
        boundary: 3,
        movement: vec![(1, 1.0)],
        p_correct_wall: 0.0,
        p_correct_window: 1.0,
    };
    assert!((run_exact(&cfg).unwrap().prob(3) - 1.0).abs() < 1e-9);
    assert_eq!(run_empirical(&cfg, 1_000, 5).unwrap().prob(3), 1.0);
}

#[test]
fn test_degenerate_movement_point_mass_both_paths() {
    let cfg = SimConfig {
        steps: 20,
        boundary: 3,
        movement: vec![(0, 1.0)],
        p_correct_wall: 0.5,
        p_correct_window: 0.5,
    };
    assert_eq!(run_exact(&cfg).unwrap().prob(0), 1.0);
    assert_eq!(run_empirical(&cfg, 1_000, 5).unwrap().prob(0), 1.0);
}
