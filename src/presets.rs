//! Stock movement/sensor scenarios.
//!
//! The six permutations of the probabilities {0.1, 0.2, 0.7} over step
//! sizes {0, 1, 2}, all with perfect sensing. Plain immutable records;
//! call sites select one by name and build a [`SimConfig`] by value.

use crate::config::SimConfig;

/// One named scenario: a movement table plus sensor accuracies.
pub struct PresetScenario {
    pub name: &'static str,
    pub movement: &'static [(u32, f64)],
    pub p_correct_wall: f64,
    pub p_correct_window: f64,
}

impl PresetScenario {
    /// Materialize a configuration for this scenario.
    pub fn to_config(&self, steps: usize, boundary: usize) -> SimConfig {
        SimConfig {
            steps,
            boundary,
            movement: self.movement.to_vec(),
            p_correct_wall: self.p_correct_wall,
            p_correct_window: self.p_correct_window,
        }
    }
}

pub const PRESETS: &[PresetScenario] = &[
    PresetScenario {
        name: "idle-heavy",
        movement: &[(0, 0.7), (1, 0.2), (2, 0.1)],
        p_correct_wall: 1.0,
        p_correct_window: 1.0,
    },
    PresetScenario {
        name: "single-step",
        movement: &[(0, 0.2), (1, 0.7), (2, 0.1)],
        p_correct_wall: 1.0,
        p_correct_window: 1.0,
    },
    PresetScenario {
        name: "double-step",
        movement: &[(0, 0.2), (1, 0.1), (2, 0.7)],
        p_correct_wall: 1.0,
        p_correct_window: 1.0,
    },
    PresetScenario {
        name: "idle-bursty",
        movement: &[(0, 0.7), (1, 0.1), (2, 0.2)],
        p_correct_wall: 1.0,
        p_correct_window: 1.0,
    },
    PresetScenario {
        name: "sprint-heavy",
        movement: &[(0, 0.1), (1, 0.2), (2, 0.7)],
        p_correct_wall: 1.0,
        p_correct_window: 1.0,
    },
    PresetScenario {
        name: "baseline",
        movement: &[(0, 0.1), (1, 0.7), (2, 0.2)],
        p_correct_wall: 1.0,
        p_correct_window: 1.0,
    },
];

/// Look up a preset by name.
pub fn preset(name: &str) -> Option<&'static PresetScenario> {
    PRESETS.iter().find(|p| p.name == name)
}

/// All preset names, for usage messages.
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}
