//! Text renderer for a terminal.
//!
//! Prints the HUD on one line whenever it differs from the last printed HUD.
//! The vehicle marker has no text form and is only tracked for inspection.

use std::io::Write;

use drive_shared::render::{RenderBackend, VehicleMarker, Viewport};
use tracing::warn;

pub struct TerminalRenderer<W: Write> {
    out: W,
    pending: Option<String>,
    last_printed: Option<String>,
    last_marker: Option<VehicleMarker>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            pending: None,
            last_printed: None,
            last_marker: None,
        }
    }

    pub fn last_marker(&self) -> Option<&VehicleMarker> {
        self.last_marker.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderBackend for TerminalRenderer<W> {
    fn begin_frame(&mut self, _viewport: Viewport) {
        self.pending = None;
    }

    fn draw_hud(&mut self, lines: &[String]) {
        self.pending = Some(lines.join(" | "));
    }

    fn draw_vehicle(&mut self, marker: &VehicleMarker) {
        self.last_marker = Some(*marker);
    }

    fn end_frame(&mut self) {
        let Some(hud) = self.pending.take() else {
            return;
        };
        if self.last_printed.as_deref() == Some(hud.as_str()) {
            return;
        }
        if let Err(e) = writeln!(self.out, "{hud}").and_then(|_| self.out.flush()) {
            warn!(error = %e, "Failed to write HUD");
            return;
        }
        self.last_printed = Some(hud);
    }
}
