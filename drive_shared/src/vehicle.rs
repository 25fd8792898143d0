//! Vehicle state and per-frame update.
//!
//! Determinism notes:
//! - Speed and heading change by a fixed step per update call, independent of
//!   `dt`. Only position integration is time scaled.
//! - Controls are applied in a fixed order: accelerate, brake, turn right,
//!   turn left, then position.

use serde::{Deserialize, Serialize};

use crate::{
    controls::{Control, ControlSet},
    math::{wrap_heading, Vec2},
};

/// Per-call control steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleTuning {
    /// Speed gained per update while accelerating.
    #[serde(default = "default_speed_step")]
    pub accel_step: f64,
    /// Speed lost per update while braking.
    #[serde(default = "default_speed_step")]
    pub brake_step: f64,
    /// Degrees turned per update while turning.
    #[serde(default = "default_turn_step")]
    pub turn_step: f64,
}

fn default_speed_step() -> f64 {
    1.0
}

fn default_turn_step() -> f64 {
    5.0
}

impl Default for VehicleTuning {
    fn default() -> Self {
        Self {
            accel_step: default_speed_step(),
            brake_step: default_speed_step(),
            turn_step: default_turn_step(),
        }
    }
}

/// The simulated vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VehicleState {
    pub x: f64,
    pub y: f64,
    /// Degrees in `[0, 360)`.
    pub heading: f64,
    /// Signed; goes negative when braking past zero.
    pub speed: f64,
    pub controls: ControlSet,
}

impl VehicleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn accelerating(&self) -> bool {
        self.controls.is_active(Control::Accelerate)
    }

    pub fn braking(&self) -> bool {
        self.controls.is_active(Control::Brake)
    }

    pub fn turning_right(&self) -> bool {
        self.controls.is_active(Control::TurnRight)
    }

    pub fn turning_left(&self) -> bool {
        self.controls.is_active(Control::TurnLeft)
    }

    /// Advances the vehicle by `dt_ms` milliseconds with the default tuning.
    pub fn update(&mut self, dt_ms: f64) {
        self.update_with(&VehicleTuning::default(), dt_ms);
    }

    /// Advances the vehicle by `dt_ms` milliseconds.
    pub fn update_with(&mut self, tuning: &VehicleTuning, dt_ms: f64) {
        for control in self.controls.active() {
            match control {
                Control::Accelerate => self.speed += tuning.accel_step,
                Control::Brake => self.speed -= tuning.brake_step,
                Control::TurnRight => self.heading = wrap_heading(self.heading + tuning.turn_step),
                Control::TurnLeft => self.heading = wrap_heading(self.heading - tuning.turn_step),
            }
        }

        let travelled = self.speed * dt_ms / 1000.0;
        let step = Vec2::from_heading(self.heading).scale(travelled);
        self.x += step.x;
        self.y += step.y;
    }
}
