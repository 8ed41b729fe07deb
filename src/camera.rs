//! View pan/zoom
//!
//! Purely presentational: the renderer reads `ortho_bounds`, the simulation
//! never looks at it.

use serde::{Deserialize, Serialize};

/// Half-size of the default view in world units
pub const VIEW_HALF_EXTENT: f32 = 8.0;
pub const PAN_STEP: f32 = 0.2;
pub const ZOOM_STEP: f32 = 0.1;
pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 4.0;

/// Visible world rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub pan_x: f32,
    pub pan_y: f32,
    pub zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        }
    }
}

impl Camera {
    /// Pan horizontally by one step (`direction` is -1 or +1)
    pub fn pan(&mut self, direction: f32) {
        self.pan_x += direction.signum() * PAN_STEP;
    }

    /// Zoom in (+1) or out (-1) by one step
    pub fn zoom_by(&mut self, direction: f32) {
        self.zoom = (self.zoom + direction.signum() * ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn ortho_bounds(&self) -> ViewBounds {
        let half = VIEW_HALF_EXTENT / self.zoom;
        ViewBounds {
            left: -half + self.pan_x,
            right: half + self.pan_x,
            bottom: -half + self.pan_y,
            top: half + self.pan_y,
        }
    }
}
