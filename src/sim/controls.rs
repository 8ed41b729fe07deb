//! Input-driven controllers
//!
//! Every control clamps silently; nothing here can fail.

use glam::Vec2;

use super::state::{BoxColor, GameState};
use crate::consts::*;

/// Step a collector box left (-1) or right (+1)
pub fn move_box(state: &mut GameState, color: BoxColor, direction: f32) {
    state.collector_mut(color).nudge(direction);
}

/// Step the cannon pivot up (+1) or down (-1)
pub fn move_cannon(state: &mut GameState, direction: f32) {
    let y = state.cannon.pivot_y + direction.signum() * CANNON_STEP;
    state.cannon.set_pivot_y(y);
}

/// Step the aim counter-clockwise (+1) or clockwise (-1)
pub fn rotate_cannon(state: &mut GameState, direction: f32) {
    let aim = state.cannon.aim_deg + direction.signum() * AIM_STEP_DEG;
    state.cannon.set_aim(aim);
}

/// Faster bricks: raises the spawn range and every falling brick
pub fn speed_up(state: &mut GameState) {
    for brick in state.bricks.iter_mut().filter(|b| b.active) {
        if brick.speed < SPEED_CAP {
            brick.speed = (brick.speed + SPEED_UP_STEP).min(SPEED_CAP);
        }
    }
    if state.speed.speed_up() {
        log::info!(
            "Fall speed up: {:.3}..{:.3}",
            state.speed.lower,
            state.speed.upper
        );
    }
}

/// Slower bricks: lowers the spawn range and every falling brick
pub fn slow_down(state: &mut GameState) {
    for brick in state.bricks.iter_mut().filter(|b| b.active) {
        if brick.speed > BRICK_MIN_SPEED {
            brick.speed = (brick.speed - SPEED_DOWN_STEP).max(BRICK_MIN_SPEED);
        }
    }
    if state.speed.slow_down() {
        log::info!(
            "Fall speed down: {:.3}..{:.3}",
            state.speed.lower,
            state.speed.upper
        );
    }
}

/// Whether releasing the pointer here fires (right of the cannon track,
/// above the box band)
pub fn in_firing_area(pos: Vec2) -> bool {
    pos.x > POINTER_CANNON_TRACK_X && pos.y > POINTER_BOX_BAND_Y
}

/// Apply one held-pointer sample (world coordinates).
///
/// - Box band: the first box (red, then green) whose footprint holds the
///   pointer x jumps to it.
/// - Cannon track: the pivot follows the pointer y.
/// - Anywhere else: the cannon aims at the pointer.
pub fn apply_pointer_drag(state: &mut GameState, pos: Vec2) {
    if pos.y < POINTER_BOX_BAND_Y {
        for color in [BoxColor::Red, BoxColor::Green] {
            if state.collector(color).footprint_contains(pos.x) {
                state.collector_mut(color).set_x(pos.x);
                return;
            }
        }
    } else if pos.x <= POINTER_CANNON_TRACK_X
        && (pos.y - state.cannon.pivot_y).abs() <= CANNON_HALF_HEIGHT
    {
        state.cannon.set_pivot_y(pos.y);
    } else {
        let offset = pos - state.cannon.pivot();
        state.cannon.set_aim(offset.y.atan2(offset.x).to_degrees());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_box_held_at_bound() {
        let mut state = GameState::new(1);
        state.red_box.set_x(BOX_MAX_X - 0.1);
        for _ in 0..50 {
            move_box(&mut state, BoxColor::Red, 1.0);
            assert!(state.red_box.x <= BOX_MAX_X);
        }
        assert_eq!(state.red_box.x, BOX_MAX_X);

        state.green_box.set_x(BOX_MIN_X + 0.1);
        for _ in 0..50 {
            move_box(&mut state, BoxColor::Green, -1.0);
        }
        assert_eq!(state.green_box.x, BOX_MIN_X);
    }

    #[test]
    fn test_cannon_bounds() {
        let mut state = GameState::new(1);
        for _ in 0..100 {
            move_cannon(&mut state, 1.0);
            rotate_cannon(&mut state, 1.0);
        }
        assert_eq!(state.cannon.pivot_y, CANNON_MAX_Y);
        assert_eq!(state.cannon.aim_deg, AIM_MAX_DEG);
        for _ in 0..100 {
            move_cannon(&mut state, -1.0);
            rotate_cannon(&mut state, -1.0);
        }
        assert_eq!(state.cannon.pivot_y, CANNON_MIN_Y);
        assert_eq!(state.cannon.aim_deg, AIM_MIN_DEG);
    }

    #[test]
    fn test_speed_controls_touch_active_bricks_only() {
        let mut state = GameState::new(1);
        state.bricks[0].active = true;
        state.bricks[0].speed = 0.05;
        state.bricks[1].speed = 0.05;

        speed_up(&mut state);
        assert!((state.bricks[0].speed - 0.08).abs() < 1e-6);
        assert_eq!(state.bricks[1].speed, 0.05);
        assert!((state.speed.lower - 0.06).abs() < 1e-6);
        assert!((state.speed.upper - 0.09).abs() < 1e-6);

        for _ in 0..20 {
            slow_down(&mut state);
        }
        assert!(state.bricks[0].speed >= BRICK_MIN_SPEED);
        assert!(state.speed.lower > 0.0);
    }

    #[test]
    fn test_speed_cap() {
        let mut state = GameState::new(1);
        state.bricks[4].active = true;
        state.bricks[4].speed = 3.49;
        for _ in 0..200 {
            speed_up(&mut state);
        }
        assert_eq!(state.bricks[4].speed, SPEED_CAP);
        assert!(state.speed.upper < SPEED_CAP + SPEED_UP_STEP);
    }

    #[test]
    fn test_drag_moves_box_under_pointer() {
        let mut state = GameState::new(1);
        // Red box at -2.5 holds x = -2.2
        apply_pointer_drag(&mut state, Vec2::new(-2.2, -6.0));
        assert_eq!(state.red_box.x, -2.2);
        assert_eq!(state.green_box.x, GREEN_BOX_START_X);

        // Pointer on neither box: nothing moves
        apply_pointer_drag(&mut state, Vec2::new(0.0, -6.0));
        assert_eq!(state.red_box.x, -2.2);
        assert_eq!(state.green_box.x, GREEN_BOX_START_X);
    }

    #[test]
    fn test_drag_overlapping_boxes_moves_red_only() {
        let mut state = GameState::new(1);
        state.red_box.set_x(1.0);
        state.green_box.set_x(1.2);
        apply_pointer_drag(&mut state, Vec2::new(1.1, -6.5));
        assert_eq!(state.red_box.x, 1.1);
        assert_eq!(state.green_box.x, 1.2);
    }

    #[test]
    fn test_drag_on_cannon_track_moves_pivot() {
        let mut state = GameState::new(1);
        apply_pointer_drag(&mut state, Vec2::new(-7.5, 0.5));
        assert_eq!(state.cannon.pivot_y, 0.5);
        assert_eq!(state.cannon.aim_deg, 0.0);
    }

    #[test]
    fn test_drag_elsewhere_aims() {
        let mut state = GameState::new(1);
        // 45° up-right of the pivot
        apply_pointer_drag(&mut state, Vec2::new(CANNON_X + 3.0, 3.0));
        assert!((state.cannon.aim_deg - 45.0).abs() < 1e-3);
        // Steeper than the limit clamps
        apply_pointer_drag(&mut state, Vec2::new(CANNON_X + 0.5, 6.0));
        assert_eq!(state.cannon.aim_deg, AIM_MAX_DEG);
    }

    #[test]
    fn test_firing_area() {
        assert!(in_firing_area(Vec2::new(0.0, 0.0)));
        assert!(!in_firing_area(Vec2::new(-7.2, 0.0)));
        assert!(!in_firing_area(Vec2::new(0.0, -6.0)));
    }

    proptest! {
        #[test]
        fn drag_never_escapes_bounds(x in -20.0f32..20.0, y in -20.0f32..20.0) {
            let mut state = GameState::new(3);
            apply_pointer_drag(&mut state, Vec2::new(x, y));
            prop_assert!(state.red_box.x >= BOX_MIN_X && state.red_box.x <= BOX_MAX_X);
            prop_assert!(state.green_box.x >= BOX_MIN_X && state.green_box.x <= BOX_MAX_X);
            prop_assert!(state.cannon.pivot_y >= CANNON_MIN_Y && state.cannon.pivot_y <= CANNON_MAX_Y);
            prop_assert!(state.cannon.aim_deg >= AIM_MIN_DEG && state.cannon.aim_deg <= AIM_MAX_DEG);
        }
    }
}
