//! Game context.
//!
//! `Game` owns the one vehicle and everything needed to step and draw it.
//! Input callbacks and the frame callback take `&mut Game`, so they can never
//! run concurrently.

use drive_shared::{
    config::SimConfig,
    render::{render_frame, RenderBackend, Viewport},
    vehicle::{VehicleState, VehicleTuning},
};

use crate::input::{self, Key, KeyEvent};

/// Derives frame deltas from monotonically increasing timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    previous_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns milliseconds since the previous tick.
    ///
    /// The first tick only primes the clock and yields 0. A timestamp older
    /// than the latest one seen yields 0 and is otherwise ignored, so time is
    /// never integrated twice.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let (dt, latest) = match self.previous_ms {
            Some(prev) if now_ms < prev => (0.0, prev),
            Some(prev) => (now_ms - prev, now_ms),
            None => (0.0, now_ms),
        };
        self.previous_ms = Some(latest);
        dt
    }
}

/// Simulation root.
pub struct Game {
    state: VehicleState,
    tuning: VehicleTuning,
    clock: FrameClock,
    viewport: Viewport,
    pixels_per_unit: f64,
    frames: u64,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&SimConfig::default())
    }
}

impl Game {
    pub fn new(cfg: &SimConfig) -> Self {
        Self {
            state: VehicleState::new(),
            tuning: cfg.tuning,
            clock: FrameClock::new(),
            viewport: Viewport::new(cfg.viewport_width, cfg.viewport_height),
            pixels_per_unit: cfg.pixels_per_unit,
            frames: 0,
        }
    }

    /// Read-only view for renderers.
    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    /// Mutable access for harnesses that need to seed a state.
    pub fn state_mut(&mut self) -> &mut VehicleState {
        &mut self.state
    }

    /// Number of frames stepped so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn on_key_down(&mut self, key: &Key, repeat: bool) -> bool {
        input::on_key_down(&mut self.state, key, repeat)
    }

    pub fn on_key_up(&mut self, key: &Key, repeat: bool) -> bool {
        input::on_key_up(&mut self.state, key, repeat)
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        input::apply(&mut self.state, event)
    }

    /// Advances the vehicle by `dt_ms` without touching the frame clock.
    pub fn update(&mut self, dt_ms: f64) {
        self.state.update_with(&self.tuning, dt_ms);
    }

    /// Runs one animation frame at `timestamp_ms`: update, then render.
    /// Returns the delta used.
    pub fn frame(&mut self, timestamp_ms: f64, renderer: &mut dyn RenderBackend) -> f64 {
        let dt = self.clock.tick(timestamp_ms);
        self.update(dt);
        render_frame(renderer, self.viewport, self.pixels_per_unit, &self.state);
        self.frames += 1;
        dt
    }
}
