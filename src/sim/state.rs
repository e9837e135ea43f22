//! Simulation state and core types
//!
//! One `SimulationState` per game session. Everything a presentation layer
//! needs is copied out into a `Snapshot` after each tick.

use serde::{Deserialize, Serialize};

use super::status::status_text;
use crate::consts::*;

/// Derived classification of the reactor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Condition {
    /// Between the cold and overheat thresholds
    #[default]
    Stable,
    /// At or above the overheat threshold, streak counting toward lockout
    Overheating,
    /// Below the cold threshold, no power generated
    Cooled,
    /// Core melted, terminal
    Meltdown,
    /// Overheated for too long, terminal
    OverheatLockout,
}

impl Condition {
    /// Display label for the condition readout
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Stable => "Stable",
            Condition::Overheating => "!!! OVERHEATING !!!",
            Condition::Cooled => "Cooled / Shut down",
            Condition::Meltdown => "!!! CORE MELTDOWN !!!",
            Condition::OverheatLockout => "PROLONGED OVERHEAT! SYSTEMS FAILED!",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Condition::Stable => Severity::Stable,
            Condition::Overheating => Severity::Warning,
            Condition::Cooled => Severity::Normal,
            Condition::Meltdown | Condition::OverheatLockout => Severity::Critical,
        }
    }

    /// True for the two loss conditions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Condition::Meltdown | Condition::OverheatLockout)
    }
}

/// Final result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    None,
    Win,
    Loss,
}

/// Styling hint for the condition readout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Normal,
    Stable,
    Warning,
    Critical,
}

/// Styling hint for the status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageTone {
    Normal,
    Win,
    Lose,
}

impl From<Outcome> for MessageTone {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::None => MessageTone::Normal,
            Outcome::Win => MessageTone::Win,
            Outcome::Loss => MessageTone::Lose,
        }
    }
}

/// Acknowledgement of the last operator command, shown until the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatorNotice {
    RodsRaised,
    RodsLowered,
}

/// Complete simulation state (single writer: the tick driver)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Core temperature (degrees), never below `MIN_TEMPERATURE`
    pub temperature: f64,
    /// 0 = fully withdrawn, 100 = fully inserted
    pub control_rod_depth: f64,
    /// Derived power output (MW), in [0, 1000]
    pub power_output: f64,
    pub condition: Condition,
    /// Consecutive Stable ticks at or above the power target
    pub stable_ticks: u32,
    /// Consecutive Overheating ticks
    pub overheat_duration: u32,
    pub is_game_over: bool,
    pub outcome: Outcome,
    /// Ticks simulated so far (stops counting at game over)
    pub tick_count: u64,
    /// Set by rod adjustments, cleared by the next tick
    #[serde(default)]
    pub notice: Option<OperatorNotice>,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationState {
    /// Fresh session with the fixed starting values
    pub fn new() -> Self {
        Self {
            temperature: INITIAL_TEMPERATURE,
            control_rod_depth: INITIAL_ROD_DEPTH,
            power_output: INITIAL_POWER_OUTPUT,
            condition: Condition::Stable,
            stable_ticks: 0,
            overheat_duration: 0,
            is_game_over: false,
            outcome: Outcome::None,
            tick_count: 0,
            notice: None,
        }
    }

    /// Whether the operator may still move the rods
    pub fn controls_enabled(&self) -> bool {
        !self.is_game_over
    }

    /// Copy of the state plus derived presentation fields
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            temperature: self.temperature,
            control_rod_depth: self.control_rod_depth,
            power_output: self.power_output,
            condition: self.condition,
            stable_ticks: self.stable_ticks,
            overheat_duration: self.overheat_duration,
            is_game_over: self.is_game_over,
            outcome: self.outcome,
            tick_count: self.tick_count,
            notice: self.notice,
            status: status_text(self),
            severity: self.condition.severity(),
            tone: self.outcome.into(),
        }
    }
}

/// Read-only view handed to the presentation layer after every tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub temperature: f64,
    pub control_rod_depth: f64,
    pub power_output: f64,
    pub condition: Condition,
    pub stable_ticks: u32,
    pub overheat_duration: u32,
    pub is_game_over: bool,
    pub outcome: Outcome,
    pub tick_count: u64,
    pub notice: Option<OperatorNotice>,
    /// Human-readable status message
    pub status: String,
    pub severity: Severity,
    pub tone: MessageTone,
}

impl Snapshot {
    /// Ticks left on the stable streak before a win
    pub fn ticks_to_target(&self) -> u32 {
        TARGET_STABLE_TICKS.saturating_sub(self.stable_ticks)
    }
}
