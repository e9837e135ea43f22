//! Fixed cadence simulation tick
//!
//! Operator input only ever touches the rod depth. Temperature, power and
//! condition change exclusively inside `advance_tick`.

use super::evaluate::evaluate;
use super::physics::compute_physics;
use super::state::{OperatorNotice, SimulationState, Snapshot};
use crate::consts::*;

/// Operator input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Rod depth change applied before the tick (negative raises the rods)
    pub rod_delta: f64,
}

impl TickInput {
    pub fn raise() -> Self {
        Self { rod_delta: -ROD_STEP }
    }

    pub fn lower() -> Self {
        Self { rod_delta: ROD_STEP }
    }
}

impl SimulationState {
    /// Move the control rods by `delta`, clamped to [0, 100].
    ///
    /// Returns false when the command was refused (game over or a
    /// non-finite delta).
    pub fn adjust_rods(&mut self, delta: f64) -> bool {
        if self.is_game_over || !delta.is_finite() {
            return false;
        }

        self.control_rod_depth =
            (self.control_rod_depth + delta).clamp(MIN_ROD_DEPTH, MAX_ROD_DEPTH);
        if delta < 0.0 {
            self.notice = Some(OperatorNotice::RodsRaised);
        } else if delta > 0.0 {
            self.notice = Some(OperatorNotice::RodsLowered);
        }
        log::debug!("Rods moved by {delta:+.1} -> {:.0}", self.control_rod_depth);
        true
    }

    /// Withdraw the rods one step (more reactivity)
    pub fn raise_rods(&mut self) -> bool {
        self.adjust_rods(-ROD_STEP)
    }

    /// Insert the rods one step (more damping)
    pub fn lower_rods(&mut self) -> bool {
        self.adjust_rods(ROD_STEP)
    }

    /// Run physics then condition evaluation for one tick.
    ///
    /// Once the game is over this returns the frozen snapshot unchanged.
    pub fn advance_tick(&mut self) -> Snapshot {
        if self.is_game_over {
            return self.snapshot();
        }

        let physics = compute_physics(self);
        self.temperature = physics.temperature;
        self.power_output = physics.power_output;
        self.tick_count += 1;
        self.notice = None;

        evaluate(self);

        log::debug!(
            "tick {}: T={:.2} power={:.2} rods={:.0} {:?}",
            self.tick_count,
            self.temperature,
            self.power_output,
            self.control_rod_depth,
            self.condition
        );

        self.snapshot()
    }
}

/// Apply operator input, then advance the simulation by one tick
pub fn tick(state: &mut SimulationState, input: &TickInput) -> Snapshot {
    if input.rod_delta != 0.0 {
        state.adjust_rods(input.rod_delta);
    }
    state.advance_tick()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Condition, Outcome};

    #[test]
    fn test_rods_clamp() {
        let mut state = SimulationState::new();
        assert!(state.adjust_rods(-500.0));
        assert_eq!(state.control_rod_depth, 0.0);
        assert!(state.adjust_rods(1e9));
        assert_eq!(state.control_rod_depth, 100.0);
    }

    #[test]
    fn test_non_finite_delta_ignored() {
        let mut state = SimulationState::new();
        assert!(!state.adjust_rods(f64::NAN));
        assert!(!state.adjust_rods(f64::INFINITY));
        assert_eq!(state.control_rod_depth, INITIAL_ROD_DEPTH);
        assert_eq!(state.notice, None);
    }

    #[test]
    fn test_rods_do_not_touch_derived_fields() {
        let mut state = SimulationState::new();
        let before = state.clone();
        state.raise_rods();
        assert_eq!(state.control_rod_depth, 45.0);
        assert_eq!(state.temperature, before.temperature);
        assert_eq!(state.power_output, before.power_output);
        assert_eq!(state.condition, before.condition);
        assert_eq!(state.notice, Some(OperatorNotice::RodsRaised));
    }

    #[test]
    fn test_tick_clears_notice() {
        let mut state = SimulationState::new();
        state.lower_rods();
        assert_eq!(state.notice, Some(OperatorNotice::RodsLowered));
        state.advance_tick();
        assert_eq!(state.notice, None);
        assert_eq!(state.tick_count, 1);
    }

    #[test]
    fn test_rods_locked_after_game_over() {
        let mut state = SimulationState {
            temperature: 899.9,
            control_rod_depth: 0.0,
            ..SimulationState::new()
        };
        let snap = state.advance_tick();
        assert_eq!(snap.condition, Condition::Meltdown);
        assert!(!state.controls_enabled());

        assert!(!state.lower_rods());
        assert_eq!(state.control_rod_depth, 0.0);
    }

    #[test]
    fn test_tick_applies_input_first() {
        let mut state = SimulationState::new();
        let snap = tick(&mut state, &TickInput::lower());
        assert_eq!(snap.control_rod_depth, 55.0);
        // 250 - 0.1 + 0.45 * 0.5
        assert!((snap.temperature - 250.125).abs() < 1e-9);
        assert_eq!(snap.outcome, Outcome::None);
    }
}
