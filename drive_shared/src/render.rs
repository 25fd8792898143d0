//! Rendering abstraction.
//!
//! This crate does not depend on a graphics backend. A frame is a HUD with
//! the vehicle readouts plus a marker for the vehicle itself; backends decide
//! how to draw them.

use std::f64::consts::{FRAC_PI_4, PI};

use crate::{
    math::{deg_to_rad, js_round},
    vehicle::VehicleState,
};

/// Radius of the vehicle body dot, in pixels.
pub const BODY_RADIUS: f64 = 4.0;
/// Radius of the heading arc, in pixels.
pub const HEADING_ARC_RADIUS: f64 = 10.0;

/// Drawable area in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Screen-space geometry for one vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleMarker {
    pub cx: f64,
    pub cy: f64,
    pub body_radius: f64,
    pub arc_radius: f64,
    /// Arc start angle in radians.
    pub arc_start: f64,
    /// Arc end angle in radians.
    pub arc_end: f64,
}

impl VehicleMarker {
    /// Projects the vehicle onto the viewport; world origin is the viewport
    /// center.
    pub fn project(state: &VehicleState, viewport: Viewport, pixels_per_unit: f64) -> Self {
        let heading = deg_to_rad(state.heading);
        Self {
            cx: viewport.width / 2.0 + state.x * pixels_per_unit,
            cy: viewport.height / 2.0 + state.y * pixels_per_unit,
            body_radius: BODY_RADIUS,
            arc_radius: HEADING_ARC_RADIUS,
            arc_start: heading - FRAC_PI_4,
            arc_end: heading + FRAC_PI_4,
        }
    }

    /// Angular span of the heading arc in radians.
    pub fn arc_span(&self) -> f64 {
        (self.arc_end - self.arc_start).rem_euclid(2.0 * PI)
    }
}

/// HUD readouts: rounded position and speed, raw heading.
pub fn hud_lines(state: &VehicleState) -> [String; 4] {
    [
        format!("X:   {}", js_round(state.x)),
        format!("Y:   {}", js_round(state.y)),
        format!("Hdg: {}", state.heading),
        format!("S:   {}", js_round(state.speed)),
    ]
}

/// A minimal rendering API.
pub trait RenderBackend {
    fn begin_frame(&mut self, viewport: Viewport);
    fn draw_hud(&mut self, lines: &[String]);
    fn draw_vehicle(&mut self, marker: &VehicleMarker);
    fn end_frame(&mut self);
}

/// A no-op renderer useful for headless tests.
#[derive(Default)]
pub struct NullRenderer;

impl RenderBackend for NullRenderer {
    fn begin_frame(&mut self, _viewport: Viewport) {}
    fn draw_hud(&mut self, _lines: &[String]) {}
    fn draw_vehicle(&mut self, _marker: &VehicleMarker) {}
    fn end_frame(&mut self) {}
}

/// Draws one frame: HUD first, then the vehicle.
pub fn render_frame(
    backend: &mut dyn RenderBackend,
    viewport: Viewport,
    pixels_per_unit: f64,
    state: &VehicleState,
) {
    backend.begin_frame(viewport);
    backend.draw_hud(&hud_lines(state));
    backend.draw_vehicle(&VehicleMarker::project(state, viewport, pixels_per_unit));
    backend.end_frame();
}
