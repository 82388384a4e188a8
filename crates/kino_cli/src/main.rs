//! Kino CLI
//!
//! Trace sprite animation playback tick by tick without a renderer.

mod config;
mod trace;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use kino_animation::AdvancePolicy;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::KinoConfig;
use crate::trace::{Start, TraceOptions};

#[derive(Parser)]
#[command(name = "kino")]
#[command(author, version, about = "Kino sprite animation tools", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to kino.toml (or a directory containing it)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate playback of a uniform animation and print the frame shown each tick
    Trace(TraceArgs),
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args)]
struct TraceArgs {
    /// Number of frames
    #[arg(short, long, default_value_t = 4)]
    frames: u32,

    /// Display time of each frame in milliseconds
    #[arg(short, long, default_value_t = 100.0)]
    duration_ms: f32,

    /// Start on the last frame and play backward
    #[arg(long)]
    reversed: bool,

    /// Bounce at the ends instead of wrapping
    #[arg(long)]
    ping_pong: bool,

    /// Play until the tick budget runs out
    #[arg(long)]
    looping: bool,

    /// Playback speed multiplier
    #[arg(long, default_value_t = 1.0)]
    speed: f32,

    /// Simulated frame time in milliseconds (overrides kino.toml)
    #[arg(long)]
    tick_ms: Option<f32>,

    /// Number of ticks to simulate (overrides kino.toml)
    #[arg(long)]
    ticks: Option<usize>,

    /// Start from this frame
    #[arg(long, conflicts_with = "random_start")]
    start: Option<usize>,

    /// Start from a random frame
    #[arg(long)]
    random_start: bool,

    /// Advance several frames per tick when the tick is long enough
    #[arg(long)]
    catch_up: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = match &cli.config {
        Some(path) => KinoConfig::load(path)?,
        None => KinoConfig::load(&std::env::current_dir().context("No working directory")?)?,
    };

    match cli.command {
        Commands::Trace(args) => cmd_trace(args, config),
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn cmd_trace(args: TraceArgs, config: KinoConfig) -> Result<()> {
    let mut playback = config.playback;
    if args.catch_up {
        playback.advance = AdvancePolicy::CatchUp;
    }

    let start = match (args.start, args.random_start) {
        (Some(index), _) => Start::Index(index),
        (None, true) => Start::Random,
        (None, false) => Start::Default,
    };

    let options = TraceOptions {
        frames: args.frames,
        duration_ms: args.duration_ms,
        reversed: args.reversed,
        ping_pong: args.ping_pong,
        looping: args.looping,
        speed: args.speed,
        tick_ms: args.tick_ms.unwrap_or(config.trace.tick_ms),
        ticks: args.ticks.unwrap_or(config.trace.ticks),
        start,
    };

    tracing::info!(
        frames = options.frames,
        duration_ms = options.duration_ms,
        tick_ms = options.tick_ms,
        advance = ?playback.advance,
        "Tracing animation"
    );

    for line in trace::run(&options, playback)? {
        println!("{line}");
    }

    Ok(())
}
