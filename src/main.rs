//! Reactor Sim entry point
//!
//! Terminal harness: a fixed-cadence timer drives the simulation while the
//! operator moves the rods from stdin. Everything runs on one thread, so a
//! tick never overlaps another and the state has a single writer.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{MissedTickBehavior, interval};

use reactor_sim::hud;
use reactor_sim::sim::{Autopilot, SimulationState, Snapshot, tick};
use reactor_sim::Settings;

#[derive(Parser, Debug)]
#[command(name = "reactor-sim")]
#[command(about = "Keep the reactor stable and deliver power", long_about = None)]
struct Args {
    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Let the autopilot operate the rods
    #[arg(long)]
    autopilot: bool,

    /// Temperature the autopilot holds
    #[arg(long)]
    setpoint: Option<f64>,

    /// Stop after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Run ticks back-to-back instead of in real time
    #[arg(long)]
    fast: bool,

    /// Emit snapshots as JSON lines
    #[arg(long)]
    json: bool,
}

/// Operator commands read from stdin
#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Raise,
    Lower,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_lowercase().as_str() {
        "+" | "r" | "raise" => Some(Command::Raise),
        "-" | "l" | "lower" => Some(Command::Lower),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn build_settings(args: &Args) -> Result<Settings, reactor_sim::SettingsError> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    if let Some(tick_ms) = args.tick_ms {
        settings.tick_ms = tick_ms;
    }
    if args.autopilot {
        settings.autopilot = true;
    }
    if let Some(setpoint) = args.setpoint {
        settings.autopilot_setpoint = setpoint;
    }
    if args.max_ticks.is_some() {
        settings.max_ticks = args.max_ticks;
    }
    if args.json {
        settings.json = true;
    }

    settings.validate()?;
    Ok(settings)
}

fn render(snapshot: &Snapshot, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string(snapshot)?);
    } else {
        println!("{}", hud::readout(snapshot));
        println!("        {}", hud::message(snapshot));
    }
    Ok(())
}

fn apply_command(state: &mut SimulationState, command: Command, step: f64) {
    let delta = match command {
        Command::Raise => -step,
        Command::Lower => step,
        Command::Quit => return,
    };
    if !state.adjust_rods(delta) {
        log::info!("Controls are locked");
    }
}

fn finished(snapshot: &Snapshot, settings: &Settings) -> bool {
    snapshot.is_game_over
        || settings
            .max_ticks
            .is_some_and(|max| snapshot.tick_count >= max)
}

/// Back-to-back ticks with no operator input besides the autopilot
fn run_fast(state: &mut SimulationState, settings: &Settings) -> Result<Snapshot, Box<dyn std::error::Error>> {
    let pilot = settings.autopilot();
    if pilot.is_none() && settings.max_ticks.is_none() {
        return Err("--fast needs --autopilot or --max-ticks".into());
    }

    let mut snapshot = state.snapshot();
    while !finished(&snapshot, settings) {
        let input = pilot.map(|p| p.decide(&snapshot)).unwrap_or_default();
        snapshot = tick(state, &input);
        if settings.json {
            render(&snapshot, true)?;
        }
    }
    if !settings.json {
        render(&snapshot, false)?;
    }
    Ok(snapshot)
}

/// Real-time loop: timer ticks and stdin commands interleaved on one task
async fn run_realtime(
    state: &mut SimulationState,
    settings: &Settings,
) -> Result<Snapshot, Box<dyn std::error::Error>> {
    let pilot: Option<Autopilot> = settings.autopilot();
    let mut ticker = interval(Duration::from_millis(settings.tick_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // First tick of a tokio interval completes immediately
    ticker.tick().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut snapshot = state.snapshot();

    if !settings.json {
        println!("{}", hud::CONTROLS_HELP);
    }
    render(&snapshot, settings.json)?;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let input = pilot.map(|p| p.decide(&snapshot)).unwrap_or_default();
                snapshot = tick(state, &input);
                render(&snapshot, settings.json)?;
                if finished(&snapshot, settings) {
                    break;
                }
            }
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(line) => match parse_command(&line) {
                        Some(Command::Quit) => {
                            log::info!("Operator quit at tick {}", snapshot.tick_count);
                            break;
                        }
                        Some(command) => {
                            apply_command(state, command, settings.rod_step);
                            snapshot = state.snapshot();
                            if !settings.json {
                                println!("        {}", hud::message(&snapshot));
                            }
                        }
                        None => log::warn!("Unknown command {:?}", line.trim()),
                    },
                    None => {
                        log::debug!("stdin closed, running unattended");
                        stdin_open = false;
                    }
                }
            }
        }
    }

    Ok(snapshot)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let settings = build_settings(&args)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();
    log::info!("Reactor Sim starting ({} ms/tick)", settings.tick_ms);

    let mut state = SimulationState::new();
    let snapshot = if args.fast {
        run_fast(&mut state, &settings)?
    } else {
        run_realtime(&mut state, &settings).await?
    };

    log::info!(
        "Session ended at tick {}: {:?} ({:?})",
        snapshot.tick_count,
        snapshot.outcome,
        snapshot.condition
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command(" + "), Some(Command::Raise));
        assert_eq!(parse_command("LOWER"), Some(Command::Lower));
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("melt"), None);
    }

    #[test]
    fn test_cli_overrides_settings() {
        let args = Args::parse_from(["reactor-sim", "--tick-ms", "100", "--autopilot", "--max-ticks", "10"]);
        let settings = build_settings(&args).unwrap();
        assert_eq!(settings.tick_ms, 100);
        assert!(settings.autopilot);
        assert_eq!(settings.max_ticks, Some(10));
    }

    #[test]
    fn test_fast_run_stops_at_max_ticks() {
        let args = Args::parse_from(["reactor-sim", "--fast", "--max-ticks", "25", "--json"]);
        let settings = build_settings(&args).unwrap();
        let mut state = SimulationState::new();
        let snapshot = run_fast(&mut state, &settings).unwrap();
        assert_eq!(snapshot.tick_count, 25);
    }
}
