//! Reactor physics step
//!
//! Pure function of the current temperature and rod depth. Power is
//! recomputed from scratch every tick; it has no memory.

use serde::{Deserialize, Serialize};

use super::state::SimulationState;
use crate::consts::*;

/// Result of one physics step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsOutput {
    pub temperature: f64,
    pub power_output: f64,
}

/// Compute next temperature and power output
pub fn compute_physics(state: &SimulationState) -> PhysicsOutput {
    let depth = state.control_rod_depth;

    let mut change = 0.0;
    if depth < MAX_ROD_DEPTH {
        change += (MAX_ROD_DEPTH - depth) / 100.0 * MAX_HEATING_PER_TICK;
    }
    // Exact comparison: only a fully inserted bank cools
    if depth == MAX_ROD_DEPTH {
        change -= FULL_INSERTION_COOLING;
    }

    let temperature = (state.temperature - PASSIVE_DISSIPATION + change).max(MIN_TEMPERATURE);

    let power_output = if temperature > POWER_MIN_TEMPERATURE && depth < POWER_MAX_ROD_DEPTH {
        (temperature / 10.0) * ((MAX_ROD_DEPTH - depth) / 100.0)
    } else {
        0.0
    };

    PhysicsOutput {
        temperature,
        power_output: power_output.clamp(0.0, MAX_POWER_OUTPUT),
    }
}
