//! Driving loop.
//!
//! One cooperative loop on the current task: drain pending key events, step
//! and draw one frame, then sleep until the next frame deadline. Key events
//! arrive over a channel so the key source can live on its own thread while
//! all state changes happen here.

use std::time::Duration;

use drive_shared::{config::SimConfig, render::RenderBackend, vehicle::VehicleState};
use tokio::{
    sync::mpsc::{self, error::TryRecvError},
    time::Instant,
};
use tracing::{debug, info};

use crate::{game::Game, input::KeyEvent};

/// Outcome of a finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub state: VehicleState,
}

/// Runs frames until `cfg.max_frames` is reached, or, when no frame limit is
/// set, until the event channel closes.
pub async fn run(
    game: &mut Game,
    renderer: &mut dyn RenderBackend,
    events: &mut mpsc::Receiver<KeyEvent>,
    cfg: &SimConfig,
) -> anyhow::Result<RunSummary> {
    cfg.validate()?;

    let interval = Duration::from_secs_f64(cfg.frame_interval_ms() / 1000.0);
    let start = Instant::now();
    let mut next_frame = start;
    let mut input_open = true;

    info!(frame_hz = cfg.frame_hz, max_frames = ?cfg.max_frames, "Driving loop started");

    loop {
        if let Some(max) = cfg.max_frames {
            if game.frames() >= max {
                break;
            }
        }

        while input_open {
            match events.try_recv() {
                Ok(event) => {
                    if !game.handle_key(&event) {
                        debug!(?event, "Key event ignored");
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!("Key source closed");
                    input_open = false;
                }
            }
        }

        let now_ms = start.elapsed().as_secs_f64() * 1000.0;
        let dt = game.frame(now_ms, renderer);

        if game.frames() % u64::from(cfg.frame_hz) == 0 {
            let s = game.state();
            debug!(
                frame = game.frames(),
                dt,
                x = s.x,
                y = s.y,
                heading = s.heading,
                speed = s.speed,
                "Frame"
            );
        }

        let reached_limit = cfg.max_frames.is_some_and(|max| game.frames() >= max);
        if reached_limit || (!input_open && cfg.max_frames.is_none()) {
            break;
        }

        next_frame += interval;
        tokio::time::sleep_until(next_frame).await;
    }

    let summary = RunSummary {
        frames: game.frames(),
        state: *game.state(),
    };
    info!(
        frames = summary.frames,
        x = summary.state.x,
        y = summary.state.y,
        heading = summary.state.heading,
        speed = summary.state.speed,
        "Driving loop finished"
    );
    Ok(summary)
}
