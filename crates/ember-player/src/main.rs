//! Ember Player - terminal demo host for the Ember loop
//!
//! Runs the explicit driver loop the core expects but never owns: each tick
//! sleeps one frame and drives the game with the measured delta.
//!
//! Usage:
//!   ember-player [--config <ember.toml>] [--width N] [--height N] [--duration SECS]

use anyhow::{Context, Result};
use clap::Parser;
use ember_core::Game;
use ember_player::{SparksGame, TermRenderer};
use ember_runtime::{FrameClock, RuntimeConfig};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ember-player")]
#[command(about = "Ember demo player - rising sparks on a terminal grid")]
struct Args {
    /// Path to a runtime config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long, default_value_t = 72)]
    width: i32,

    /// Grid height in cells
    #[arg(long, default_value_t = 22)]
    height: i32,

    /// Stop after this many seconds (runs until interrupted by default)
    #[arg(long)]
    duration: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RuntimeConfig::load_from_file(path).context("Failed to load config")?,
        None => RuntimeConfig::default(),
    };
    let spawn = config.timers.get("spawn").copied().unwrap_or(0.08);
    let gust = config.timers.get("gust").copied().unwrap_or(1.5);

    let mut renderer = TermRenderer::create(args.width, args.height)
        .context("Failed to open terminal renderer")?;
    let mut game = SparksGame::new(args.width, args.height, spawn, gust);

    log::info!(
        "running at {:.0} fps on a {}x{} grid",
        config.frame_rate,
        args.width,
        args.height
    );

    let mut clock = FrameClock::new();
    let frame = config.frame_interval();
    let mut elapsed = 0.0;

    // Clear the screen and hide the cursor for the duration of the run
    print!("\x1b[2J\x1b[?25l");

    let run = loop {
        std::thread::sleep(frame);
        let delta = clock.delta();
        elapsed += delta;

        renderer.begin_frame();
        if let Err(err) = game.draw(&mut renderer, delta) {
            break Err(err).context("Frame failed");
        }
        if let Err(err) = renderer.present() {
            break Err(err).context("Present failed");
        }

        if let Some(limit) = args.duration {
            if elapsed >= limit {
                break Ok(());
            }
        }
    };

    print!("\x1b[?25h\x1b[0m");
    std::io::stdout().flush().ok();
    run
}
