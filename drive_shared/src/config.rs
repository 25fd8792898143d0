//! Configuration system.
//!
//! Loads simulation configuration from JSON strings or files. Every field has
//! a default, so an empty object `{}` is a valid config.

use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::vehicle::VehicleTuning;

/// Root configuration for the drive simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Frame rate of the driving loop.
    #[serde(default = "default_frame_hz")]
    pub frame_hz: u32,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f64,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,
    /// Screen pixels per world unit.
    #[serde(default = "default_pixels_per_unit")]
    pub pixels_per_unit: f64,
    /// Stop after this many frames; run until input ends when unset.
    #[serde(default)]
    pub max_frames: Option<u64>,
    #[serde(default)]
    pub tuning: VehicleTuning,
}

fn default_frame_hz() -> u32 {
    60
}

fn default_viewport_width() -> f64 {
    800.0
}

fn default_viewport_height() -> f64 {
    600.0
}

fn default_pixels_per_unit() -> f64 {
    10.0
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_hz: default_frame_hz(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            pixels_per_unit: default_pixels_per_unit(),
            max_frames: None,
            tuning: VehicleTuning::default(),
        }
    }
}

impl SimConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let cfg = Self::from_json_str(&text)
            .with_context(|| format!("parse config {}", path.display()))?;
        cfg.validate()?;
        debug!(path = %path.display(), frame_hz = cfg.frame_hz, "Loaded config");
        Ok(cfg)
    }

    /// Checks values the loop and the vehicle update rely on.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.frame_hz == 0 {
            bail!("frame_hz must be greater than zero");
        }
        if !(self.viewport_width.is_finite() && self.viewport_height.is_finite()) {
            bail!("viewport size must be finite");
        }
        if !self.pixels_per_unit.is_finite() {
            bail!("pixels_per_unit must be finite");
        }
        let steps = [
            ("accel_step", self.tuning.accel_step),
            ("brake_step", self.tuning.brake_step),
            ("turn_step", self.tuning.turn_step),
        ];
        for (name, value) in steps {
            if !value.is_finite() || value < 0.0 {
                bail!("tuning.{name} must be finite and non-negative, got {value}");
            }
        }
        Ok(())
    }

    /// Frame interval in milliseconds.
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.frame_hz as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let cfg = SimConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, SimConfig::default());
        assert_eq!(cfg.tuning.turn_step, 5.0);
        assert_eq!(cfg.tuning.accel_step, 1.0);
    }

    #[test]
    fn partial_tuning_keeps_other_defaults() {
        let cfg = SimConfig::from_json_str(r#"{"frame_hz": 30, "tuning": {"turn_step": 2.5}}"#)
            .unwrap();
        assert_eq!(cfg.frame_hz, 30);
        assert_eq!(cfg.tuning.turn_step, 2.5);
        assert_eq!(cfg.tuning.brake_step, 1.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_zero_frame_rate() {
        let cfg = SimConfig {
            frame_hz: 0,
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn frame_interval_follows_rate() {
        let cfg = SimConfig {
            frame_hz: 50,
            ..SimConfig::default()
        };
        assert_eq!(cfg.frame_interval_ms(), 20.0);
    }

    fn temp_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "drive_shared_{}_{}.json",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_reads_valid_file() {
        let path = temp_config("valid", r#"{"frame_hz": 30}"#);
        let cfg = SimConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cfg.frame_hz, 30);
    }

    #[test]
    fn load_validates_file() {
        let path = temp_config("invalid", r#"{"tuning": {"turn_step": -1}}"#);
        let err = SimConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(err.to_string().contains("turn_step"));
    }

    #[test]
    fn load_reports_parse_and_read_errors() {
        let path = temp_config("malformed", "{ not json");
        let err = SimConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(err.to_string().starts_with("parse config"));

        let missing = std::env::temp_dir().join("drive_shared_does_not_exist.json");
        let err = SimConfig::load(&missing).unwrap_err();
        assert!(err.to_string().starts_with("read config"));
    }

    #[test]
    fn rejects_negative_turn_step() {
        let mut cfg = SimConfig::default();
        cfg.tuning.turn_step = -5.0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("turn_step"));
    }
}
