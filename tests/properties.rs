//! Property tests for simulation invariants

use proptest::prelude::*;

use reactor_sim::consts::*;
use reactor_sim::sim::{SimulationState, TickInput, compute_physics, tick};

proptest! {
    #[test]
    fn rods_stay_in_range(deltas in prop::collection::vec(-1e6f64..1e6, 1..50)) {
        let mut state = SimulationState::new();
        for delta in deltas {
            state.adjust_rods(delta);
            prop_assert!((MIN_ROD_DEPTH..=MAX_ROD_DEPTH).contains(&state.control_rod_depth));
        }
    }

    #[test]
    fn physics_output_in_bounds(temperature in 20.0f64..2000.0, depth in 0.0f64..=100.0) {
        let state = SimulationState {
            temperature,
            control_rod_depth: depth,
            ..SimulationState::new()
        };
        let out = compute_physics(&state);
        prop_assert!(out.temperature >= MIN_TEMPERATURE);
        prop_assert!((0.0..=MAX_POWER_OUTPUT).contains(&out.power_output));
    }

    #[test]
    fn streak_counters_are_exclusive(
        start in 150.0f64..899.0,
        deltas in prop::collection::vec(prop::sample::select(vec![-25.0, -5.0, 0.0, 5.0, 25.0]), 1..400),
    ) {
        let mut state = SimulationState {
            temperature: start,
            ..SimulationState::new()
        };
        for rod_delta in deltas {
            let snap = tick(&mut state, &TickInput { rod_delta });
            prop_assert!(snap.stable_ticks == 0 || snap.overheat_duration == 0);
            prop_assert!(snap.temperature >= MIN_TEMPERATURE);
            prop_assert!((0.0..=MAX_POWER_OUTPUT).contains(&snap.power_output));
        }
    }

    #[test]
    fn game_over_snapshot_is_frozen(extra_ticks in 1usize..20, delta in -50.0f64..50.0) {
        let mut state = SimulationState {
            temperature: 905.0,
            ..SimulationState::new()
        };
        let frozen = serde_json::to_string(&state.advance_tick()).unwrap();
        prop_assert!(state.is_game_over);

        for _ in 0..extra_ticks {
            let snap = tick(&mut state, &TickInput { rod_delta: delta });
            prop_assert_eq!(serde_json::to_string(&snap).unwrap(), frozen.clone());
        }
    }
}
