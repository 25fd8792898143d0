//! Standalone drive binary.
//!
//! Usage:
//!   cargo run -p drive_client -- [--config drive.json] [--frame-hz 60] [--frames N]
//!                                [--width 800] [--height 600]
//!
//! Key events are read from stdin, one per line:
//!   down ArrowUp          - press a key
//!   up ArrowUp            - release a key
//!   down ArrowUp repeat   - auto-repeat event (ignored)
//!
//! The HUD is printed whenever it changes. Without `--frames` the loop ends
//! when stdin closes.

use std::env;
use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{bail, Context};
use drive_client::{game::Game, input, runner, terminal::TerminalRenderer};
use drive_shared::config::SimConfig;
use tokio::sync::mpsc;
use tracing::{info, warn};

fn parse_args() -> anyhow::Result<SimConfig> {
    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut frame_hz: Option<&str> = None;
    let mut frames: Option<&str> = None;
    let mut width: Option<&str> = None;
    let mut height: Option<&str> = None;
    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1).map(String::as_str);
        match (args[i].as_str(), value) {
            ("--config", Some(v)) => config_path = Some(PathBuf::from(v)),
            ("--frame-hz", Some(v)) => frame_hz = Some(v),
            ("--frames", Some(v)) => frames = Some(v),
            ("--width", Some(v)) => width = Some(v),
            ("--height", Some(v)) => height = Some(v),
            (other, _) => bail!("unknown or incomplete argument '{other}'"),
        }
        i += 2;
    }

    // File first, flags override.
    let mut cfg = match config_path {
        Some(path) => SimConfig::load(&path)?,
        None => SimConfig::default(),
    };
    if let Some(v) = frame_hz {
        cfg.frame_hz = v.parse().context("parse --frame-hz")?;
    }
    if let Some(v) = frames {
        cfg.max_frames = Some(v.parse().context("parse --frames")?);
    }
    if let Some(v) = width {
        cfg.viewport_width = v.parse().context("parse --width")?;
    }
    if let Some(v) = height {
        cfg.viewport_height = v.parse().context("parse --height")?;
    }

    cfg.validate()?;
    Ok(cfg)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = parse_args()?;
    info!(
        frame_hz = cfg.frame_hz,
        width = cfg.viewport_width,
        height = cfg.viewport_height,
        "Starting drive"
    );

    let (key_tx, mut key_rx) = mpsc::channel(64);

    // Spawn stdin reader thread.
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            match input::parse_line(&line) {
                Ok(Some(event)) => {
                    if key_tx.blocking_send(event).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => warn!(error = %e, "Bad key line"),
            }
        }
    });

    let mut game = Game::new(&cfg);
    let mut renderer = TerminalRenderer::new(std::io::stdout());
    let summary = runner::run(&mut game, &mut renderer, &mut key_rx, &cfg)
        .await
        .context("driving loop")?;

    info!(frames = summary.frames, "Exiting");
    Ok(())
}
