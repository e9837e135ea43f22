//! Reactor Sim - a tick-driven reactor control game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, condition evaluation, win/lose state)
//! - `settings`: Harness configuration loaded from JSON and CLI flags
//! - `hud`: Plain-text rendering of simulation snapshots

pub mod hud;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use sim::{Condition, Outcome, SimulationState, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Reference tick period (1 tick per second)
    pub const GAME_TICK_MS: u64 = 1000;

    /// Temperature at or above which the core is overheating
    pub const OVERHEAT_THRESHOLD: f64 = 800.0;
    /// Temperature below which the reactor counts as cooled / shut down
    pub const COLD_THRESHOLD: f64 = 200.0;
    /// Full core meltdown, terminal
    pub const MELTDOWN_THRESHOLD: f64 = OVERHEAT_THRESHOLD + 100.0;
    /// Consecutive on-target stable ticks required to win
    pub const TARGET_STABLE_TICKS: u32 = 60;
    /// Power (MW) that counts as on-target
    pub const POWER_TARGET_MW: f64 = 200.0;
    /// Consecutive overheating ticks before the systems fail
    pub const MAX_OVERHEAT_DURATION: u32 = 15;

    /// Physics: heating per tick at fully withdrawn rods
    pub const MAX_HEATING_PER_TICK: f64 = 0.5;
    /// Physics: extra cooling per tick with rods fully inserted
    pub const FULL_INSERTION_COOLING: f64 = 0.2;
    /// Physics: passive dissipation, applied every tick
    pub const PASSIVE_DISSIPATION: f64 = 0.1;
    /// Physics: temperature floor (ambient)
    pub const MIN_TEMPERATURE: f64 = 20.0;

    /// Power generation needs the core hotter than this...
    pub const POWER_MIN_TEMPERATURE: f64 = 150.0;
    /// ...and the rods shallower than this
    pub const POWER_MAX_ROD_DEPTH: f64 = 90.0;
    /// Power output clamp (MW)
    pub const MAX_POWER_OUTPUT: f64 = 1000.0;

    /// Rod depth range (0 = withdrawn, 100 = fully inserted)
    pub const MIN_ROD_DEPTH: f64 = 0.0;
    pub const MAX_ROD_DEPTH: f64 = 100.0;
    /// Rod movement per raise/lower command
    pub const ROD_STEP: f64 = 5.0;

    /// Initial values for a fresh session
    pub const INITIAL_TEMPERATURE: f64 = 250.0;
    pub const INITIAL_ROD_DEPTH: f64 = 50.0;
    pub const INITIAL_POWER_OUTPUT: f64 = 10.0;
}
