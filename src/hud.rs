//! Terminal HUD
//!
//! Presentation only: turns a snapshot into display lines and never touches
//! the simulation.

use crate::sim::{MessageTone, Severity, Snapshot};

/// Readout line: temperature with one decimal, rods whole, power one decimal
pub fn readout(snapshot: &Snapshot) -> String {
    format!(
        "[{:>5}] T {:>6.1}°  rods {:>3.0}%  power {:>6.1} MW  {}{}",
        snapshot.tick_count,
        snapshot.temperature,
        snapshot.control_rod_depth,
        snapshot.power_output,
        severity_marker(snapshot.severity),
        snapshot.condition.label(),
    )
}

/// Status message line
pub fn message(snapshot: &Snapshot) -> String {
    let prefix = match snapshot.tone {
        MessageTone::Normal => "",
        MessageTone::Win => "*** ",
        MessageTone::Lose => "xxx ",
    };
    format!("{prefix}{}", snapshot.status)
}

fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Normal | Severity::Stable => "",
        Severity::Warning => "(!) ",
        Severity::Critical => "(!!) ",
    }
}

/// Help text for the operator prompt
pub const CONTROLS_HELP: &str = "Commands: + / raise  (withdraw rods), - / lower  (insert rods), q / quit";
