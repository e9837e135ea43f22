//! Demo mode: an automatic operator
//!
//! Holds the core temperature inside a band around a setpoint by nudging the
//! rods one step per tick. Deterministic, reads snapshots only.

use serde::{Deserialize, Serialize};

use super::state::Snapshot;
use super::tick::TickInput;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Autopilot {
    /// Target core temperature
    pub setpoint: f64,
    /// Half-width of the band where the rods are left alone
    pub deadband: f64,
    /// Rod movement per correction
    pub step: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            setpoint: 500.0,
            deadband: 25.0,
            step: ROD_STEP,
        }
    }
}

impl Autopilot {
    pub fn new(setpoint: f64, step: f64) -> Self {
        Self {
            setpoint,
            step,
            ..Default::default()
        }
    }

    /// Pick the rod input for the next tick
    pub fn decide(&self, snapshot: &Snapshot) -> TickInput {
        if snapshot.is_game_over {
            return TickInput::default();
        }

        let error = snapshot.temperature - self.setpoint;
        let rod_delta = if error > self.deadband && snapshot.control_rod_depth < MAX_ROD_DEPTH {
            self.step
        } else if error < -self.deadband && snapshot.control_rod_depth > MIN_ROD_DEPTH {
            -self.step
        } else {
            0.0
        };

        TickInput { rod_delta }
    }
}
