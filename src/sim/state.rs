//! Game state and core simulation types
//!
//! Everything the renderer draws and everything a snapshot needs lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::consts::*;
use crate::scoreboard::{ScoreDisplay, encode_score};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// A hazard brick was caught; world frozen until reset
    GameOver,
}

/// Collector box colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoxColor {
    Red,
    Green,
}

/// Brick classes, derived from the slot id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickClass {
    /// Black brick: catching it ends the game, shooting it scores
    Hazard,
    Red,
    Green,
}

impl BrickClass {
    /// Class for a slot id: 1 = hazard, 2 = red, 0 = green (mod 3)
    pub fn for_slot(slot: u8) -> Self {
        match slot % 3 {
            1 => BrickClass::Hazard,
            2 => BrickClass::Red,
            _ => BrickClass::Green,
        }
    }

    /// The box that rewards catching this class, if any
    pub fn affinity(self) -> Option<BoxColor> {
        match self {
            BrickClass::Hazard => None,
            BrickClass::Red => Some(BoxColor::Red),
            BrickClass::Green => Some(BoxColor::Green),
        }
    }

    pub fn is_hazard(self) -> bool {
        self == BrickClass::Hazard
    }
}

/// A falling brick slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Slot id in 1..=9
    pub slot: u8,
    pub pos: Vec2,
    /// World units per tick
    pub speed: f32,
    pub active: bool,
}

impl Brick {
    /// An inactive brick parked at the spawn line
    pub fn new(slot: u8) -> Self {
        Self {
            slot,
            pos: Vec2::new(0.0, BRICK_SPAWN_Y),
            speed: 0.0,
            active: false,
        }
    }

    /// Lane index 0..3
    #[inline]
    pub fn lane(&self) -> usize {
        (self.slot as usize - 1) / 3
    }

    #[inline]
    pub fn class(&self) -> BrickClass {
        BrickClass::for_slot(self.slot)
    }

    /// Remove from play: inactive and parked at the spawn line
    pub fn remove(&mut self) {
        self.active = false;
        self.pos.y = BRICK_SPAWN_Y;
    }
}

/// One of the two collector boxes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorBox {
    pub color: BoxColor,
    /// Center x; y is fixed at `BOX_Y`
    pub x: f32,
}

impl CollectorBox {
    pub fn new(color: BoxColor) -> Self {
        let x = match color {
            BoxColor::Red => RED_BOX_START_X,
            BoxColor::Green => GREEN_BOX_START_X,
        };
        Self { color, x }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, BOX_Y)
    }

    /// Whether `x` lies within the box's horizontal footprint (edges included)
    pub fn footprint_contains(&self, x: f32) -> bool {
        x >= self.x - BOX_HALF_WIDTH && x <= self.x + BOX_HALF_WIDTH
    }

    /// Move by one keyboard step (`direction` is -1 or +1)
    pub fn nudge(&mut self, direction: f32) {
        self.set_x(self.x + direction.signum() * BOX_STEP);
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x.clamp(BOX_MIN_X, BOX_MAX_X);
    }
}

/// The player's cannon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cannon {
    /// Pivot y; pivot x is fixed at `CANNON_X`
    pub pivot_y: f32,
    /// Aim angle in degrees, 0 = pointing right
    pub aim_deg: f32,
}

impl Default for Cannon {
    fn default() -> Self {
        Self {
            pivot_y: 0.0,
            aim_deg: 0.0,
        }
    }
}

impl Cannon {
    pub fn pivot(&self) -> Vec2 {
        Vec2::new(CANNON_X, self.pivot_y)
    }

    pub fn set_pivot_y(&mut self, y: f32) {
        self.pivot_y = y.clamp(CANNON_MIN_Y, CANNON_MAX_Y);
    }

    pub fn set_aim(&mut self, deg: f32) {
        self.aim_deg = deg.clamp(AIM_MIN_DEG, AIM_MAX_DEG);
    }
}

/// The single laser projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub active: bool,
    pub pos: Vec2,
    /// Travel angle in degrees (changes on mirror bounces)
    pub angle_deg: f32,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            active: false,
            pos: Vec2::new(PROJECTILE_REST_X, 0.0),
            angle_deg: 0.0,
        }
    }
}

impl Projectile {
    /// Deactivate and return to the rest x
    pub fn park(&mut self) {
        self.active = false;
        self.pos.x = PROJECTILE_REST_X;
    }
}

/// How a mirror decides the projectile is touching it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MirrorHitTest {
    /// Vertical band spanned by the tilted mirror, horizontal window
    /// shrinking with the cosine of the projectile angle
    Swept,
    /// Axis-aligned window around the mirror center
    Box { half_width: f32, half_height: f32 },
}

/// A fixed mirror
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mirror {
    pub pos: Vec2,
    /// Drawn rotation in degrees
    pub angle_deg: f32,
    /// Half length along the mirror's own axis
    pub half_extent: f32,
    pub hit_test: MirrorHitTest,
    /// Axis the projectile angle is reflected about.
    /// The lower-left mirror reflects about a fixed 120° whatever its rotation.
    pub reflect_axis_deg: f32,
}

impl Mirror {
    /// Right-hand vertical mirror
    pub fn primary() -> Self {
        Self {
            pos: Vec2::new(6.0, 0.0),
            angle_deg: 90.0,
            half_extent: 1.0,
            hit_test: MirrorHitTest::Swept,
            reflect_axis_deg: 90.0,
        }
    }

    /// Lower-left tilted mirror
    pub fn secondary() -> Self {
        Self {
            pos: Vec2::new(-4.0, -4.5),
            angle_deg: 120.0,
            half_extent: 1.0,
            hit_test: MirrorHitTest::Box {
                half_width: PROJECTILE_HALF_LENGTH + 0.05,
                half_height: PROJECTILE_HALF_LENGTH + 1.0,
            },
            reflect_axis_deg: 120.0,
        }
    }
}

/// Global fall-speed bounds new bricks draw from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    pub lower: f32,
    pub upper: f32,
}

impl Default for SpeedRange {
    fn default() -> Self {
        Self {
            lower: INITIAL_SPEED_LOWER,
            upper: INITIAL_SPEED_UPPER,
        }
    }
}

impl SpeedRange {
    /// Raise both bounds in lockstep; returns false at the cap
    pub fn speed_up(&mut self) -> bool {
        if self.upper < SPEED_CAP {
            self.lower += SPEED_UP_STEP;
            self.upper += SPEED_UP_STEP;
            true
        } else {
            false
        }
    }

    /// Lower both bounds in lockstep; returns false at the floor
    pub fn slow_down(&mut self) -> bool {
        if self.lower > SPEED_LOWER_FLOOR {
            self.lower -= SPEED_DOWN_STEP;
            self.upper -= SPEED_DOWN_STEP;
            true
        } else {
            false
        }
    }
}

/// Things that happened during a tick (for audio/HUD hooks)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BrickSpawned { slot: u8 },
    BrickCaught { slot: u8, by: BoxColor, score_delta: i64 },
    BrickShot { slot: u8, score_delta: i64 },
    BrickMissed { slot: u8 },
    ProjectileFired { angle_deg: f32 },
    ProjectileExpired,
    MirrorBounce { mirror: usize, angle_deg: f32 },
    GameOver,
    Reset,
    QuitRequested,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG, seeded once
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// May go negative
    pub score: i64,
    /// Simulated seconds since start
    pub time: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Time of the last successful fire
    pub last_fire: Option<f64>,
    /// Slots 1..=9 at indices 0..9
    pub bricks: [Brick; BRICK_SLOTS],
    pub red_box: CollectorBox,
    pub green_box: CollectorBox,
    pub cannon: Cannon,
    pub projectile: Projectile,
    pub mirrors: [Mirror; 2],
    pub speed: SpeedRange,
    pub camera: Camera,
    /// Set once the player asks to quit; the host decides when to stop
    pub quit_requested: bool,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_speed(seed, SpeedRange::default())
    }

    /// Create a new game state with custom initial fall-speed bounds
    pub fn with_speed(seed: u64, speed: SpeedRange) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            score: 0,
            time: 0.0,
            time_ticks: 0,
            last_fire: None,
            bricks: std::array::from_fn(|i| Brick::new(i as u8 + 1)),
            red_box: CollectorBox::new(BoxColor::Red),
            green_box: CollectorBox::new(BoxColor::Green),
            cannon: Cannon::default(),
            projectile: Projectile::default(),
            mirrors: [Mirror::primary(), Mirror::secondary()],
            speed,
            camera: Camera::default(),
            quit_requested: false,
            events: Vec::new(),
        }
    }

    /// Brick by slot id (1..=9)
    pub fn brick(&self, slot: u8) -> &Brick {
        &self.bricks[slot as usize - 1]
    }

    pub fn brick_mut(&mut self, slot: u8) -> &mut Brick {
        &mut self.bricks[slot as usize - 1]
    }

    pub fn collector(&self, color: BoxColor) -> &CollectorBox {
        match color {
            BoxColor::Red => &self.red_box,
            BoxColor::Green => &self.green_box,
        }
    }

    pub fn collector_mut(&mut self, color: BoxColor) -> &mut CollectorBox {
        match color {
            BoxColor::Red => &mut self.red_box,
            BoxColor::Green => &mut self.green_box,
        }
    }

    /// HUD digits for the current score
    pub fn score_display(&self) -> ScoreDisplay {
        encode_score(self.score)
    }

    /// Back to Playing with a zero score. Bricks, projectile and clock are
    /// left exactly as they were.
    pub fn reset(&mut self) {
        log::info!("Reset (score was {}, phase {:?})", self.score, self.phase);
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.events.push(GameEvent::Reset);
    }

    pub(crate) fn add_score(&mut self, delta: i64) {
        self.score += delta;
    }
}
