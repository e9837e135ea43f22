//! Harness settings
//!
//! Loaded from an optional JSON file, then overridden by command-line flags.
//! Gameplay thresholds are fixed and deliberately not part of this.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Autopilot;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Driver and display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Milliseconds between ticks
    pub tick_ms: u64,
    /// Rod movement per raise/lower command
    pub rod_step: f64,

    // === Demo mode ===
    /// Let the autopilot operate the rods
    pub autopilot: bool,
    /// Temperature the autopilot holds
    pub autopilot_setpoint: f64,

    // === Run control ===
    /// Stop after this many ticks
    pub max_ticks: Option<u64>,
    /// Emit snapshots as JSON lines instead of the text HUD
    pub json: bool,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: GAME_TICK_MS,
            rod_step: ROD_STEP,

            autopilot: false,
            autopilot_setpoint: 500.0,

            max_ticks: None,
            json: false,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_ms == 0 {
            return Err(SettingsError::Invalid("tick_ms must be positive".into()));
        }
        if !(self.rod_step > 0.0 && self.rod_step <= MAX_ROD_DEPTH) {
            return Err(SettingsError::Invalid(format!(
                "rod_step must be in (0, {MAX_ROD_DEPTH}], got {}",
                self.rod_step
            )));
        }
        if !(COLD_THRESHOLD..OVERHEAT_THRESHOLD).contains(&self.autopilot_setpoint) {
            return Err(SettingsError::Invalid(format!(
                "autopilot_setpoint must be in [{COLD_THRESHOLD}, {OVERHEAT_THRESHOLD}), got {}",
                self.autopilot_setpoint
            )));
        }
        Ok(())
    }

    /// Autopilot configured from these settings, if enabled
    pub fn autopilot(&self) -> Option<Autopilot> {
        self.autopilot
            .then(|| Autopilot::new(self.autopilot_setpoint, self.rod_step))
    }
}
