//! Scenewalk - Main Entry Point
//!
//! Runs the player controller headless: builds a level, drives the simulation
//! with a scripted gamepad sequence and logs where the player ends up.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glam::Vec3;
use scenewalk_game::{Level, PlayerInput, Simulation, SimulationConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    Default,
    Arcade,
    LowGravity,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless swept-sphere walker")]
struct Args {
    /// Simulation config (JSON). Overrides --preset.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in movement preset
    #[arg(long, value_enum, default_value_t = Preset::Default)]
    preset: Preset,

    /// Level mesh as a JSON array of [x, y, z] vertices, three per triangle.
    /// The test room is used when omitted.
    #[arg(long)]
    mesh: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Log the player state every N ticks
    #[arg(long, default_value_t = 60)]
    log_every: u64,
}

fn load_config(args: &Args) -> Result<SimulationConfig> {
    match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(match args.preset {
            Preset::Default => SimulationConfig::default(),
            Preset::Arcade => SimulationConfig::arcade(),
            Preset::LowGravity => SimulationConfig::low_gravity(),
        }),
    }
}

fn load_level(path: Option<&Path>, config: &SimulationConfig) -> Result<Level> {
    let space = config.movement.ellipsoid_space();

    let Some(path) = path else {
        return Ok(Level::test_room(space));
    };

    let text = fs::read_to_string(path).with_context(|| format!("reading mesh {}", path.display()))?;
    let vertices: Vec<Vec3> =
        serde_json::from_str(&text).with_context(|| format!("parsing mesh {}", path.display()))?;

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mesh".to_string());

    Ok(Level::from_vertices(&name, &name, &vertices, space)?)
}

/// Input for a given frame: settle, walk, turn, strafe and jump.
fn scripted_input(frame: u64) -> PlayerInput {
    let mut input = PlayerInput {
        frame: frame as u32,
        ..Default::default()
    };

    match frame % 600 {
        // Settle onto the floor
        0..=59 => {}
        // Walk forward
        60..=239 => input.dpad.up = true,
        // Turn right on the spot
        240..=299 => input.right_stick = (24000, 0),
        // Run forward while strafing left
        300..=419 => {
            input.left_stick = (-20000, -32767);
            input.actions.run = true;
        }
        // Hop in place
        420..=479 => input.actions.jump = frame % 30 < 5,
        // Look around
        _ => {
            input.dpad.left = true;
            input.dpad.up = true;
            input.actions.look = true;
        }
    }

    input
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = load_config(&args)?;
    let level = load_level(args.mesh.as_deref(), &config)?;

    log::info!(
        "level '{}': {} triangles, spawn {:?}",
        level.name,
        level.collision.triangle_count(),
        level.spawn_point
    );

    let mut simulation = Simulation::new(config, level);
    if !simulation.self_test_passed {
        log::warn!("continuing with a failed collision self-test");
    }

    for frame in 0..args.ticks {
        simulation.tick(&scripted_input(frame));

        if args.log_every > 0 && simulation.frame % args.log_every == 0 {
            let player = &simulation.player;
            log::info!(
                "frame {:>5}  pos ({:>7.3}, {:>7.3}, {:>7.3})  look ({:>6.3}, {:>6.3}, {:>6.3})  ground={}",
                simulation.frame,
                player.position().x,
                player.position().y,
                player.position().z,
                player.look_direction().x,
                player.look_direction().y,
                player.look_direction().z,
                player.on_ground()
            );
        }
    }

    let seconds = args.ticks as f32 * simulation.config.delta_time();
    log::info!(
        "simulated {} ticks ({:.1}s at {} Hz), final position {:?}",
        args.ticks,
        seconds,
        simulation.config.tick_rate,
        simulation.player.position()
    );

    Ok(())
}
