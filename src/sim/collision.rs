//! Overlap tests and mirror reflection
//!
//! All shapes are axis-aligned rectangles in world units; the projectile is a
//! thin rod whose footprint depends on its travel angle.

use glam::Vec2;

use super::state::{CollectorBox, Mirror, MirrorHitTest};
use crate::consts::*;
use crate::deg_to_rad;

/// Whether a brick at `brick_pos` overlaps a collector box.
///
/// The brick center must sit strictly inside the box's horizontal window and
/// within the combined half-heights of the catch line.
pub fn brick_in_box(brick_pos: Vec2, collector: &CollectorBox) -> bool {
    let in_x =
        brick_pos.x > collector.x - BOX_HALF_WIDTH && brick_pos.x < collector.x + BOX_HALF_WIDTH;
    in_x && (BOX_Y - brick_pos.y).abs() < BOX_HALF_HEIGHT + BRICK_HALF_HEIGHT
}

/// Whether the projectile overlaps a brick.
///
/// Vertically the projectile center must be inside the brick's band;
/// horizontally the allowance is the brick half-width plus the projectile's
/// horizontal footprint, which shrinks with the cosine of its angle.
pub fn projectile_hits_brick(projectile_pos: Vec2, angle_deg: f32, brick_pos: Vec2) -> bool {
    let in_y = projectile_pos.y <= brick_pos.y + BRICK_HALF_HEIGHT
        && projectile_pos.y >= brick_pos.y - BRICK_HALF_HEIGHT;
    if !in_y {
        return false;
    }
    let footprint = (PROJECTILE_HALF_LENGTH * deg_to_rad(angle_deg).cos()).abs();
    (brick_pos.x - projectile_pos.x).abs() <= footprint + BRICK_HALF_WIDTH
}

/// Whether the projectile is touching a mirror this tick
pub fn projectile_hits_mirror(projectile_pos: Vec2, angle_deg: f32, mirror: &Mirror) -> bool {
    match mirror.hit_test {
        MirrorHitTest::Swept => {
            let rad = deg_to_rad(angle_deg);
            let tip_y = projectile_pos.y + rad.sin().abs() * PROJECTILE_LENGTH;
            let half_span = mirror.half_extent * deg_to_rad(mirror.angle_deg).sin().abs();
            let in_band = tip_y < mirror.pos.y + half_span && tip_y > mirror.pos.y - half_span;
            // Window widens by one tick of horizontal travel; negative when
            // heading away, so a receding projectile never re-hits.
            let reach = PROJECTILE_HALF_LENGTH + PROJECTILE_SPEED * rad.cos();
            in_band && (mirror.pos.x - projectile_pos.x).abs() <= reach
        }
        MirrorHitTest::Box {
            half_width,
            half_height,
        } => {
            (mirror.pos.x - projectile_pos.x).abs() <= half_width
                && (mirror.pos.y - projectile_pos.y).abs() <= half_height
        }
    }
}

/// Reflect a travel angle about a mirror axis: 2·axis − angle
#[inline]
pub fn reflect_angle(angle_deg: f32, axis_deg: f32) -> f32 {
    2.0 * axis_deg - angle_deg
}
