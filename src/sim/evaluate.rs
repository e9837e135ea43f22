//! Condition evaluation and win/lose state machine
//!
//! Runs after the physics step. Checks are ordered and the first match wins:
//! meltdown, overheating (and lockout), cooled, then stable (and win).
//! Boundary temperatures belong to the stricter branch.

use super::state::{Condition, Outcome, SimulationState};
use crate::consts::*;

/// Classify the reactor, update streak counters and decide termination.
///
/// A no-op once the game is over, so a recorded meltdown can never be
/// replaced by a later classification.
pub fn evaluate(state: &mut SimulationState) {
    if state.is_game_over {
        return;
    }

    let previous = state.condition;

    if state.temperature >= MELTDOWN_THRESHOLD {
        state.condition = Condition::Meltdown;
        state.temperature = MELTDOWN_THRESHOLD;
        state.power_output = 0.0;
        finish(state, Outcome::Loss);
        return;
    }

    if state.temperature >= OVERHEAT_THRESHOLD {
        state.condition = Condition::Overheating;
        state.stable_ticks = 0;
        state.overheat_duration += 1;
        if previous != Condition::Overheating {
            log::warn!("Core overheating at {:.1}", state.temperature);
        }

        if state.overheat_duration >= MAX_OVERHEAT_DURATION {
            state.condition = Condition::OverheatLockout;
            finish(state, Outcome::Loss);
        }
        return;
    }

    if state.temperature < COLD_THRESHOLD {
        state.condition = Condition::Cooled;
        state.power_output = 0.0;
        state.stable_ticks = 0;
        state.overheat_duration = 0;
    } else {
        state.condition = Condition::Stable;
        state.overheat_duration = 0;

        if state.power_output >= POWER_TARGET_MW {
            state.stable_ticks += 1;
            if state.stable_ticks >= TARGET_STABLE_TICKS {
                finish(state, Outcome::Win);
                return;
            }
        } else {
            state.stable_ticks = 0;
        }
    }

    if state.condition != previous {
        log::info!("Condition {:?} -> {:?}", previous, state.condition);
    }
}

fn finish(state: &mut SimulationState, outcome: Outcome) {
    state.is_game_over = true;
    state.outcome = outcome;
    match outcome {
        Outcome::Win => log::info!("Game over: win after {} ticks", state.tick_count),
        _ => log::warn!(
            "Game over: {:?} after {} ticks",
            state.condition,
            state.tick_count
        ),
    }
}
