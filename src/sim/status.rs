//! Status message text
//!
//! Derived purely from state, so the same state always renders the same
//! message.

use super::state::{Condition, OperatorNotice, Outcome, SimulationState};
use crate::consts::*;

pub fn status_text(state: &SimulationState) -> String {
    match state.outcome {
        Outcome::Loss if state.condition == Condition::Meltdown => {
            return "CRITICAL FAILURE! YOU LOSE!".to_string();
        }
        Outcome::Loss => {
            return "The reactor could not be stabilized. YOU LOSE!".to_string();
        }
        Outcome::Win => {
            return format!(
                "CONGRATULATIONS! You supplied power for {TARGET_STABLE_TICKS} seconds! YOU WIN!"
            );
        }
        Outcome::None => {}
    }

    if let Some(notice) = state.notice {
        return match notice {
            OperatorNotice::RodsRaised => "Control rods raised slightly.",
            OperatorNotice::RodsLowered => "Control rods lowered slightly.",
        }
        .to_string();
    }

    if state.tick_count == 0 {
        return "Welcome! The reactor is running.".to_string();
    }

    match state.condition {
        Condition::Overheating => "CRITICAL TEMPERATURE! MELTDOWN RISK!".to_string(),
        Condition::Cooled => "Temperature too low to generate power.".to_string(),
        Condition::Stable if state.power_output >= POWER_TARGET_MW => format!(
            "Reactor stable. {} s to target. Power: {:.0} MW",
            TARGET_STABLE_TICKS.saturating_sub(state.stable_ticks),
            state.power_output
        ),
        Condition::Stable => format!(
            "Reactor stable, but power ({:.0} MW) is below target ({:.0} MW).",
            state.power_output, POWER_TARGET_MW
        ),
        // Terminal conditions always carry an outcome
        Condition::Meltdown | Condition::OverheatLockout => state.condition.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_before_first_tick() {
        let state = SimulationState::new();
        assert_eq!(status_text(&state), "Welcome! The reactor is running.");
    }

    #[test]
    fn test_notice_takes_priority() {
        let mut state = SimulationState::new();
        state.raise_rods();
        assert_eq!(status_text(&state), "Control rods raised slightly.");
    }

    #[test]
    fn test_stable_messages() {
        let mut state = SimulationState::new();
        state.tick_count = 3;
        state.power_output = 12.7;
        assert_eq!(
            status_text(&state),
            "Reactor stable, but power (13 MW) is below target (200 MW)."
        );

        state.power_output = 240.0;
        state.stable_ticks = 10;
        assert_eq!(
            status_text(&state),
            "Reactor stable. 50 s to target. Power: 240 MW"
        );
    }

    #[test]
    fn test_outcome_messages() {
        let mut state = SimulationState::new();
        state.tick_count = 99;
        state.is_game_over = true;
        state.outcome = Outcome::Loss;
        state.condition = Condition::OverheatLockout;
        assert_eq!(
            status_text(&state),
            "The reactor could not be stabilized. YOU LOSE!"
        );

        state.condition = Condition::Meltdown;
        assert_eq!(status_text(&state), "CRITICAL FAILURE! YOU LOSE!");

        state.condition = Condition::Stable;
        state.outcome = Outcome::Win;
        assert!(status_text(&state).ends_with("YOU WIN!"));
    }
}
