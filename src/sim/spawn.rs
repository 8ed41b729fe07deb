//! Brick spawn policy
//!
//! An inactive slot is refilled at the top of its lane with a random x and a
//! random fall speed drawn from the current global range.

use rand::Rng;

use super::state::{Brick, SpeedRange};
use crate::consts::{BRICK_MIN_SPEED, BRICK_SPAWN_Y};

/// Horizontal spawn interval per lane (left to right, non-overlapping)
pub const LANE_BOUNDS: [(f32, f32); 3] = [(-5.0, -1.0), (-0.99, 3.0), (3.01, 7.0)];

/// Spawn interval for a lane index
#[inline]
pub fn lane_bounds(lane: usize) -> (f32, f32) {
    LANE_BOUNDS[lane]
}

/// Respawn an inactive brick. Active bricks are left untouched.
///
/// Returns true if the brick was spawned.
pub fn spawn_brick<R: Rng + ?Sized>(brick: &mut Brick, speed: SpeedRange, rng: &mut R) -> bool {
    if brick.active {
        return false;
    }

    let (min_x, max_x) = lane_bounds(brick.lane());
    let lower = speed.lower.max(BRICK_MIN_SPEED);
    let upper = speed.upper.max(lower);

    brick.pos.x = rng.random_range(min_x..=max_x);
    brick.pos.y = BRICK_SPAWN_Y;
    brick.speed = rng.random_range(lower..=upper);
    brick.active = true;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_fills_inactive_slot() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut brick = Brick::new(4);
        assert!(spawn_brick(&mut brick, SpeedRange::default(), &mut rng));
        assert!(brick.active);
        assert_eq!(brick.pos.y, BRICK_SPAWN_Y);
        let (lo, hi) = lane_bounds(1);
        assert!(brick.pos.x >= lo && brick.pos.x <= hi);
    }

    #[test]
    fn test_spawn_skips_active_slot() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut brick = Brick::new(1);
        brick.active = true;
        brick.pos.y = 3.0;
        brick.speed = 0.05;
        assert!(!spawn_brick(&mut brick, SpeedRange::default(), &mut rng));
        assert_eq!(brick.pos.y, 3.0);
        assert_eq!(brick.speed, 0.05);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        for slot in 1..=9 {
            let mut x = Brick::new(slot);
            let mut y = Brick::new(slot);
            spawn_brick(&mut x, SpeedRange::default(), &mut a);
            spawn_brick(&mut y, SpeedRange::default(), &mut b);
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.speed, y.speed);
        }
    }

    #[test]
    fn test_lanes_do_not_overlap() {
        for pair in LANE_BOUNDS.windows(2) {
            assert!(pair[0].1 < pair[1].0);
        }
    }

    proptest! {
        #[test]
        fn spawn_stays_in_lane_and_range(
            seed in any::<u64>(),
            slot in 1u8..=9,
            lower in 0.01f32..3.4,
            gap in 0.0f32..0.1,
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let range = SpeedRange { lower, upper: lower + gap };
            let mut brick = Brick::new(slot);
            spawn_brick(&mut brick, range, &mut rng);

            let (lo, hi) = lane_bounds(brick.lane());
            prop_assert!(brick.pos.x >= lo && brick.pos.x <= hi);
            prop_assert!(brick.speed >= range.lower && brick.speed <= range.upper);
            prop_assert!(brick.speed > 0.0);
        }
    }
}
