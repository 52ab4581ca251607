use macroquad::math::Vec2;

pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 600.0;
pub const GROUND_STRIP_HEIGHT: f32 = 50.0;

pub const GRAVITY_MPS2: f32 = 9.81;

pub const EMITTER_POSITION: Vec2 = Vec2::new(50.0, 50.0);
pub const BARREL_LENGTH: f32 = 40.0;
pub const CANNON_BASE_RADIUS: f32 = 20.0;
pub const BARREL_HALF_WIDTH: f32 = 5.0;

pub const DEFAULT_ANGLE_DEG: f32 = 45.0;
pub const MIN_ANGLE_DEG: f32 = 0.0;
pub const MAX_ANGLE_DEG: f32 = 90.0;
pub const DEFAULT_POWER: f32 = 50.0;
pub const MIN_POWER: f32 = 10.0;
pub const MAX_POWER: f32 = 100.0;
pub const ADJUST_STEP: f32 = 1.0;

pub const PROJECTILE_RADIUS: f32 = 5.0;
pub const MAX_TIME_ALIVE_S: f32 = 10.0;
pub const SETTLE_SPEED: f32 = 1.0;
pub const GROUND_CONTACT_DAMPING: f32 = 0.5;
pub const GROUND_BOUNCE_RESTITUTION: f32 = 0.7;
pub const WALL_RESTITUTION: f32 = 0.7;

/// Logical playfield the wall collision is measured against.
///
/// Only `width` feeds the physics; `height` bounds the rendered view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest x a projectile centre may occupy before touching the wall.
    pub fn wall_limit(&self, radius: f32) -> f32 {
        self.width - radius
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(WORLD_WIDTH, WORLD_HEIGHT)
    }
}
