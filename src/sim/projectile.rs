//! Projectile physics: firing, mirror bounces, travel and expiry

use super::collision::{projectile_hits_mirror, reflect_angle};
use super::state::{GameEvent, GameState, Mirror, Projectile};
use crate::consts::*;
use crate::heading;

/// Fire from the cannon's current pose.
///
/// Ignored while a projectile is live or within the cooldown window of the
/// previous successful fire. Returns true if a projectile was launched.
pub fn try_fire(state: &mut GameState) -> bool {
    if state.projectile.active {
        return false;
    }
    if state
        .last_fire
        .is_some_and(|last| state.time - last < FIRE_COOLDOWN_SECS)
    {
        return false;
    }

    state.last_fire = Some(state.time);
    state.projectile = Projectile {
        active: true,
        pos: state.cannon.pivot(),
        angle_deg: state.cannon.aim_deg,
    };
    log::debug!("Fired at {:.1}°", state.projectile.angle_deg);
    state.events.push(GameEvent::ProjectileFired {
        angle_deg: state.projectile.angle_deg,
    });
    true
}

/// Test every mirror in order and reflect on contact.
///
/// No single-bounce latch: a projectile still inside a mirror's hit window on
/// the next tick reflects again.
pub fn bounce_off_mirrors(
    projectile: &mut Projectile,
    mirrors: &[Mirror],
    events: &mut Vec<GameEvent>,
) {
    if !projectile.active {
        return;
    }
    for (i, mirror) in mirrors.iter().enumerate() {
        if projectile_hits_mirror(projectile.pos, projectile.angle_deg, mirror) {
            projectile.angle_deg = reflect_angle(projectile.angle_deg, mirror.reflect_axis_deg);
            log::debug!("Mirror {} bounce -> {:.1}°", i, projectile.angle_deg);
            events.push(GameEvent::MirrorBounce {
                mirror: i,
                angle_deg: projectile.angle_deg,
            });
        }
    }
}

/// Move one tick along the current angle
pub fn advance(projectile: &mut Projectile) {
    if projectile.active {
        projectile.pos += heading(projectile.angle_deg) * PROJECTILE_SPEED;
    }
}

/// Whether a position is on or past the playfield edge
#[inline]
pub fn out_of_field(pos: glam::Vec2) -> bool {
    pos.x >= FIELD_MAX_X || pos.x <= FIELD_MIN_X || pos.y >= FIELD_MAX_Y || pos.y <= FIELD_MIN_Y
}

/// Park the projectile if it has left the field. Returns true if it expired.
pub fn expire_if_outside(projectile: &mut Projectile, events: &mut Vec<GameEvent>) -> bool {
    if projectile.active && out_of_field(projectile.pos) {
        projectile.park();
        events.push(GameEvent::ProjectileExpired);
        true
    } else {
        false
    }
}
