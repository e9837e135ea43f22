//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per external timer firing, never re-entrant
//! - Physics first, then condition evaluation
//! - No rendering, timing or I/O dependencies

pub mod autopilot;
pub mod evaluate;
pub mod physics;
pub mod state;
pub mod status;
pub mod tick;

pub use autopilot::Autopilot;
pub use evaluate::evaluate;
pub use physics::{PhysicsOutput, compute_physics};
pub use state::{
    Condition, MessageTone, OperatorNotice, Outcome, Severity, SimulationState, Snapshot,
};
pub use status::status_text;
pub use tick::{TickInput, tick};
