//! Brick Catcher - a falling-brick arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, collisions, scoring)
//! - `scoreboard`: Seven-segment score encoding for the HUD
//! - `camera`: View pan/zoom state read by the renderer
//! - `platform`: Raw input events to per-tick input
//! - `settings`: Runtime configuration

pub mod camera;
pub mod platform;
pub mod scoreboard;
pub mod settings;
pub mod sim;

pub use camera::Camera;
pub use scoreboard::{ScoreDisplay, SegmentPattern, encode_score};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants (world units, one tick = one frame)
pub mod consts {
    /// Playfield bounds: the projectile expires on or past these
    pub const FIELD_MIN_X: f32 = -8.0;
    pub const FIELD_MAX_X: f32 = 8.0;
    pub const FIELD_MIN_Y: f32 = -6.0;
    pub const FIELD_MAX_Y: f32 = 8.0;

    /// Number of brick slots (ids 1..=9)
    pub const BRICK_SLOTS: usize = 9;
    pub const BRICK_HALF_WIDTH: f32 = 0.2;
    pub const BRICK_HALF_HEIGHT: f32 = 0.3;
    /// Top-of-field y: where bricks spawn and where inactive bricks park
    pub const BRICK_SPAWN_Y: f32 = 10.0;
    /// Bricks at or below this y are removed as a miss
    pub const BRICK_BOTTOM_Y: f32 = -7.0;

    /// Collector boxes
    pub const BOX_HALF_WIDTH: f32 = 0.5;
    pub const BOX_HALF_HEIGHT: f32 = 0.75;
    /// Fixed y of both boxes (the catch line)
    pub const BOX_Y: f32 = -7.0;
    pub const BOX_MIN_X: f32 = -7.2;
    pub const BOX_MAX_X: f32 = 7.2;
    pub const BOX_STEP: f32 = 0.15;
    pub const RED_BOX_START_X: f32 = -2.5;
    pub const GREEN_BOX_START_X: f32 = 2.5;

    /// Cannon
    pub const CANNON_X: f32 = -7.4;
    pub const CANNON_MIN_Y: f32 = -5.3;
    pub const CANNON_MAX_Y: f32 = 7.0;
    pub const CANNON_STEP: f32 = 0.2;
    /// Half-height of the cannon body (pointer grab band)
    pub const CANNON_HALF_HEIGHT: f32 = 0.6;
    pub const AIM_MIN_DEG: f32 = -70.0;
    pub const AIM_MAX_DEG: f32 = 70.0;
    pub const AIM_STEP_DEG: f32 = 3.0;

    /// Projectile
    pub const PROJECTILE_SPEED: f32 = 0.5;
    pub const PROJECTILE_HALF_LENGTH: f32 = 0.1;
    /// Full drawn length; its tip is what touches a mirror first
    pub const PROJECTILE_LENGTH: f32 = 1.0;
    /// Where an idle projectile waits
    pub const PROJECTILE_REST_X: f32 = -7.0;
    /// Minimum simulated seconds between two successful fires
    pub const FIRE_COOLDOWN_SECS: f64 = 0.7;

    /// Scoring
    pub const CATCH_REWARD: i64 = 2;
    pub const SHOOT_HAZARD_REWARD: i64 = 3;
    pub const SHOOT_COLORED_PENALTY: i64 = 2;

    /// Global fall-speed scale
    pub const SPEED_UP_STEP: f32 = 0.03;
    pub const SPEED_DOWN_STEP: f32 = 0.02;
    pub const SPEED_CAP: f32 = 3.5;
    /// Lower bound only drops while above this
    pub const SPEED_LOWER_FLOOR: f32 = 0.02;
    /// Individual brick speeds never drop below this
    pub const BRICK_MIN_SPEED: f32 = 0.001;
    pub const INITIAL_SPEED_LOWER: f32 = 0.03;
    pub const INITIAL_SPEED_UPPER: f32 = 0.06;

    /// Pointer regions
    pub const POINTER_BOX_BAND_Y: f32 = -5.2;
    pub const POINTER_CANNON_TRACK_X: f32 = -7.0;
}

/// Degrees to radians
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg.to_radians()
}

/// Unit heading for an angle in degrees (0° = +x, counter-clockwise)
#[inline]
pub fn heading(angle_deg: f32) -> Vec2 {
    let rad = deg_to_rad(angle_deg);
    Vec2::new(rad.cos(), rad.sin())
}
