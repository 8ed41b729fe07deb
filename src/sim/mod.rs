//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per rendered frame, clock injected by the host
//! - Seeded RNG only
//! - Stable iteration order (by brick slot)
//! - No rendering or platform dependencies

pub mod collision;
pub mod controls;
pub mod projectile;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{brick_in_box, projectile_hits_brick, projectile_hits_mirror, reflect_angle};
pub use spawn::{LANE_BOUNDS, lane_bounds, spawn_brick};
pub use state::{
    BoxColor, Brick, BrickClass, Cannon, CollectorBox, GameEvent, GamePhase, GameState, Mirror,
    MirrorHitTest, Projectile, SpeedRange,
};
pub use tick::{Command, PointerSample, TickInput, tick};
