//! Scripted scenario harness.
//!
//! A scenario seeds a vehicle, replays key events, updates and frames against
//! a headless `Game`, then checks the resulting state. Scenarios are plain
//! JSON so new cases can be added without code.

use std::path::Path;

use anyhow::Context;
use drive_client::{
    game::Game,
    input::{Key, KeyEvent, KeyEventKind},
};
use drive_shared::{config::SimConfig, render::NullRenderer, vehicle::VehicleState};
use serde::Deserialize;

/// Absolute tolerance for float comparisons.
pub const EPSILON: f64 = 1e-9;

/// One scripted action.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    KeyDown {
        key: String,
        #[serde(default)]
        repeat: bool,
    },
    KeyUp {
        key: String,
        #[serde(default)]
        repeat: bool,
    },
    /// Direct update with an explicit delta, repeated `times`.
    Update {
        dt: f64,
        #[serde(default = "default_times")]
        times: u32,
    },
    /// Animation frame at a timestamp; the first frame has a zero delta.
    Frame { at: f64 },
}

fn default_times() -> u32 {
    1
}

/// Initial vehicle fields; controls always start released.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Start {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub speed: f64,
}

/// Expected final values; unset fields are not checked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Expect {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub heading: Option<f64>,
    pub speed: Option<f64>,
    pub accelerating: Option<bool>,
    pub braking: Option<bool>,
    pub turning_right: Option<bool>,
    pub turning_left: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub config: Option<SimConfig>,
    #[serde(default)]
    pub start: Start,
    pub steps: Vec<Step>,
    #[serde(default)]
    pub expect: Expect,
}

impl Scenario {
    pub fn from_json_str(s: &str) -> anyhow::Result<Self> {
        serde_json::from_str(s).context("parse scenario")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read scenario {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("scenario {}", path.display()))
    }

    /// Replays the steps and returns the final vehicle state.
    pub fn run(&self) -> VehicleState {
        let cfg = self.config.clone().unwrap_or_default();
        let mut game = Game::new(&cfg);
        {
            let s = game.state_mut();
            s.x = self.start.x;
            s.y = self.start.y;
            s.heading = self.start.heading;
            s.speed = self.start.speed;
        }

        let mut renderer = NullRenderer;
        for step in &self.steps {
            match step {
                Step::KeyDown { key, repeat } => {
                    game.handle_key(&key_event(KeyEventKind::Down, key, *repeat));
                }
                Step::KeyUp { key, repeat } => {
                    game.handle_key(&key_event(KeyEventKind::Up, key, *repeat));
                }
                Step::Update { dt, times } => {
                    for _ in 0..*times {
                        game.update(*dt);
                    }
                }
                Step::Frame { at } => {
                    game.frame(*at, &mut renderer);
                }
            }
        }
        *game.state()
    }

    /// Compares a final state against `expect`.
    pub fn check(&self, state: &VehicleState) -> Result<(), String> {
        let e = &self.expect;
        let floats = [
            ("x", e.x, state.x),
            ("y", e.y, state.y),
            ("heading", e.heading, state.heading),
            ("speed", e.speed, state.speed),
        ];
        for (field, expected, actual) in floats {
            if let Some(expected) = expected {
                if (expected - actual).abs() > EPSILON {
                    return Err(format!(
                        "{}: {field} expected {expected}, got {actual}",
                        self.name
                    ));
                }
            }
        }

        let flags = [
            ("accelerating", e.accelerating, state.accelerating()),
            ("braking", e.braking, state.braking()),
            ("turning_right", e.turning_right, state.turning_right()),
            ("turning_left", e.turning_left, state.turning_left()),
        ];
        for (field, expected, actual) in flags {
            if let Some(expected) = expected {
                if expected != actual {
                    return Err(format!(
                        "{}: {field} expected {expected}, got {actual}",
                        self.name
                    ));
                }
            }
        }

        if !(0.0..360.0).contains(&state.heading) {
            return Err(format!("{}: heading {} out of range", self.name, state.heading));
        }
        Ok(())
    }
}

fn key_event(kind: KeyEventKind, name: &str, repeat: bool) -> KeyEvent {
    KeyEvent {
        kind,
        key: Key::from_name(name),
        repeat,
    }
}
