//! Rendering module
//!
//! The simulation only supplies data; drawing goes through the `Surface` trait.
//! The browser implementation is a 2D canvas context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::consts::DEBUG_LINE_HEIGHT;
use crate::sim::{FrameStats, Simulation};

/// A 2D drawing target
pub trait Surface {
    /// Clear the whole surface
    fn clear(&mut self);
    /// Draw a filled disc
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
    /// Draw text with its top edge (hanging baseline) at `y`
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    /// Match a new viewport size. Fixed-size surfaces ignore this.
    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// Draw one frame: every live circle, then the debug overlay if enabled
pub fn render<S: Surface>(sim: &Simulation, surface: &mut S, show_debug: bool) {
    surface.clear();

    sim.registry.for_each(|_, circle| {
        surface.fill_circle(circle.center.x, circle.center.y, circle.radius as f64);
    });

    if show_debug {
        for (i, line) in debug_lines(&sim.stats).iter().enumerate() {
            surface.fill_text(line, 0.0, i as f64 * DEBUG_LINE_HEIGHT);
        }
    }
}

/// Frame stats as pretty JSON without the enclosing braces, one entry per line
pub fn debug_lines(stats: &FrameStats) -> Vec<String> {
    let json = match serde_json::to_string_pretty(stats) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Failed to format frame stats: {}", e);
            return Vec::new();
        }
    };

    let lines: Vec<&str> = json.lines().collect();
    if lines.len() < 2 {
        return Vec::new();
    }
    lines[1..lines.len() - 1]
        .iter()
        .map(|line| line.to_string())
        .collect()
}
