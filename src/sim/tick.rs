//! Per-frame simulation tick
//!
//! Core game loop that advances the world by one rendered frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{brick_in_box, projectile_hits_brick};
use super::controls;
use super::projectile;
use super::spawn::spawn_brick;
use super::state::{BoxColor, BrickClass, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Discrete actions for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    BoxLeft(BoxColor),
    BoxRight(BoxColor),
    CannonUp,
    CannonDown,
    /// Rotate aim counter-clockwise
    AimUp,
    /// Rotate aim clockwise
    AimDown,
    SpeedUp,
    SlowDown,
    Fire,
    Reset,
    Quit,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
}

impl Command {
    /// Commands that steer boxes or the cannon (replaced by the autopilot)
    fn is_steering(self) -> bool {
        matches!(
            self,
            Command::BoxLeft(_)
                | Command::BoxRight(_)
                | Command::CannonUp
                | Command::CannonDown
                | Command::AimUp
                | Command::AimDown
                | Command::Fire
        )
    }
}

/// Pointer position in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub pos: Vec2,
    /// Primary button held (drag in progress)
    pub held: bool,
}

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Seconds since the previous tick
    pub dt: f32,
    /// Commands in the order they arrived
    pub commands: Vec<Command>,
    /// Latest pointer sample, if the pointer is over the window
    pub pointer: Option<PointerSample>,
    /// Idle/demo mode - the autopilot steers boxes and cannon
    pub idle_mode: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time += f64::from(input.dt);
    state.time_ticks += 1;

    // Idle/demo mode keeps the player's non-steering commands
    if input.idle_mode && state.phase == GamePhase::Playing {
        let mut commands: Vec<Command> = input
            .commands
            .iter()
            .copied()
            .filter(|c| !c.is_steering())
            .collect();
        commands.extend(idle_commands(state));
        for command in commands {
            apply_command(state, command);
        }
    } else {
        for &command in &input.commands {
            apply_command(state, command);
        }
        if let Some(pointer) = input.pointer.filter(|p| p.held) {
            controls::apply_pointer_drag(state, pointer.pos);
        }
    }

    // Frozen until reset
    if state.phase == GamePhase::GameOver {
        return;
    }

    // Refill empty slots
    for brick in state.bricks.iter_mut() {
        if spawn_brick(brick, state.speed, &mut state.rng) {
            log::debug!(
                "Spawned brick {} at x={:.2} speed={:.3}",
                brick.slot,
                brick.pos.x,
                brick.speed
            );
            state.events.push(GameEvent::BrickSpawned { slot: brick.slot });
        }
    }

    projectile::bounce_off_mirrors(&mut state.projectile, &state.mirrors, &mut state.events);
    projectile::expire_if_outside(&mut state.projectile, &mut state.events);

    for idx in 0..BRICK_SLOTS {
        update_brick(state, idx);
    }

    projectile::advance(&mut state.projectile);
    projectile::expire_if_outside(&mut state.projectile, &mut state.events);
}

fn apply_command(state: &mut GameState, command: Command) {
    match command {
        Command::BoxLeft(color) => controls::move_box(state, color, -1.0),
        Command::BoxRight(color) => controls::move_box(state, color, 1.0),
        Command::CannonUp => controls::move_cannon(state, 1.0),
        Command::CannonDown => controls::move_cannon(state, -1.0),
        Command::AimUp => controls::rotate_cannon(state, 1.0),
        Command::AimDown => controls::rotate_cannon(state, -1.0),
        Command::SpeedUp => controls::speed_up(state),
        Command::SlowDown => controls::slow_down(state),
        Command::Fire => {
            if state.phase == GamePhase::Playing {
                projectile::try_fire(state);
            }
        }
        Command::Reset => state.reset(),
        Command::Quit => {
            if !state.quit_requested {
                log::info!("Quit requested");
                state.quit_requested = true;
                state.events.push(GameEvent::QuitRequested);
            }
        }
        Command::PanLeft => state.camera.pan(-1.0),
        Command::PanRight => state.camera.pan(1.0),
        Command::ZoomIn => state.camera.zoom_by(1.0),
        Command::ZoomOut => state.camera.zoom_by(-1.0),
    }
}

/// Collector test, then projectile test, then fall. At most one removal.
fn update_brick(state: &mut GameState, idx: usize) {
    let brick = &state.bricks[idx];
    if !brick.active {
        return;
    }
    let (slot, pos, class) = (brick.slot, brick.pos, brick.class());

    if pos.y > BRICK_BOTTOM_Y {
        for color in [BoxColor::Red, BoxColor::Green] {
            if brick_in_box(pos, state.collector(color)) {
                catch_brick(state, idx, color);
                return;
            }
        }
    }

    if state.projectile.active
        && projectile_hits_brick(state.projectile.pos, state.projectile.angle_deg, pos)
    {
        let score_delta = if class.is_hazard() {
            SHOOT_HAZARD_REWARD
        } else {
            -SHOOT_COLORED_PENALTY
        };
        state.add_score(score_delta);
        state.bricks[idx].remove();
        state.projectile.park();
        log::debug!("Shot brick {} ({:?}), score {}", slot, class, state.score);
        state.events.push(GameEvent::BrickShot { slot, score_delta });
        return;
    }

    let brick = &mut state.bricks[idx];
    if brick.pos.y > BRICK_BOTTOM_Y {
        brick.pos.y -= brick.speed;
    } else {
        brick.remove();
        state.events.push(GameEvent::BrickMissed { slot });
    }
}

fn catch_brick(state: &mut GameState, idx: usize, color: BoxColor) {
    let brick = &mut state.bricks[idx];
    let (slot, class) = (brick.slot, brick.class());
    brick.remove();

    let score_delta = if class.affinity() == Some(color) {
        CATCH_REWARD
    } else {
        0
    };
    state.add_score(score_delta);
    state.events.push(GameEvent::BrickCaught {
        slot,
        by: color,
        score_delta,
    });

    if class == BrickClass::Hazard {
        log::info!(
            "Game over: hazard brick {} caught by {:?} box (score {})",
            slot,
            color,
            state.score
        );
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
    } else {
        log::debug!("Brick {} caught by {:?} box, score {}", slot, color, state.score);
    }
}

/// Autopilot: boxes chase the lowest brick of their color, the cannon hunts
/// the lowest hazard brick
fn idle_commands(state: &GameState) -> Vec<Command> {
    let mut commands = Vec::new();

    let lowest = |class: BrickClass| {
        state
            .bricks
            .iter()
            .filter(|b| b.active && b.class() == class)
            .min_by(|a, b| {
                a.pos
                    .y
                    .partial_cmp(&b.pos.y)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    };

    for (color, class) in [(BoxColor::Red, BrickClass::Red), (BoxColor::Green, BrickClass::Green)] {
        if let Some(target) = lowest(class) {
            let dx = target.pos.x - state.collector(color).x;
            if dx > BOX_STEP / 2.0 {
                commands.push(Command::BoxRight(color));
            } else if dx < -BOX_STEP / 2.0 {
                commands.push(Command::BoxLeft(color));
            }
        }
    }

    if let Some(hazard) = lowest(BrickClass::Hazard) {
        // Keep shots flat by tracking the hazard's height
        let dy = hazard.pos.y - state.cannon.pivot_y;
        if dy > CANNON_STEP {
            commands.push(Command::CannonUp);
        } else if dy < -CANNON_STEP {
            commands.push(Command::CannonDown);
        }

        let offset = hazard.pos - state.cannon.pivot();
        let desired = offset
            .y
            .atan2(offset.x)
            .to_degrees()
            .clamp(AIM_MIN_DEG, AIM_MAX_DEG);
        let diff = desired - state.cannon.aim_deg;
        if diff > AIM_STEP_DEG / 2.0 {
            commands.push(Command::AimUp);
        } else if diff < -AIM_STEP_DEG / 2.0 {
            commands.push(Command::AimDown);
        }
        if diff.abs() <= AIM_STEP_DEG && !state.projectile.active {
            commands.push(Command::Fire);
        }
    }

    commands
}
