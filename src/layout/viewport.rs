//! Renderer-side zoom/pan transform.
//!
//! An affine transform applied on top of simulated positions. It never
//! feeds back into the simulation's own coordinate state: dragging a node
//! converts the pointer's screen position to world coordinates here, then
//! pins the node through [`Simulation::pin`](super::Simulation::pin).

use serde::{Deserialize, Serialize};

/// Zoom/pan state: `screen = world * scale + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl Viewport {
    /// Identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pan by a screen-space delta.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Zoom by `factor` keeping the given screen point fixed.
    pub fn zoom_at(&mut self, screen_x: f64, screen_y: f64, factor: f64) {
        let (wx, wy) = self.to_world(screen_x, screen_y);
        self.scale *= factor;
        self.offset_x = screen_x - wx * self.scale;
        self.offset_y = screen_y - wy * self.scale;
    }

    /// Screen → world (simulation) coordinates.
    pub fn to_world(&self, screen_x: f64, screen_y: f64) -> (f64, f64) {
        (
            (screen_x - self.offset_x) / self.scale,
            (screen_y - self.offset_y) / self.scale,
        )
    }

    /// World (simulation) → screen coordinates.
    pub fn to_screen(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        (
            world_x * self.scale + self.offset_x,
            world_y * self.scale + self.offset_y,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
