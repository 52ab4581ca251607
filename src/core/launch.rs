use macroquad::math::{Vec2, vec2};

use crate::core::projectile::Projectile;
use crate::core::world::{
    BARREL_LENGTH, DEFAULT_ANGLE_DEG, DEFAULT_POWER, EMITTER_POSITION, MAX_ANGLE_DEG, MAX_POWER,
    MIN_ANGLE_DEG, MIN_POWER,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AimState {
    pub angle_deg: f32,
    pub power: f32,
    pub emitter: Vec2,
}

impl Default for AimState {
    fn default() -> Self {
        Self {
            angle_deg: DEFAULT_ANGLE_DEG,
            power: DEFAULT_POWER,
            emitter: EMITTER_POSITION,
        }
    }
}

impl AimState {
    pub fn direction(&self) -> Vec2 {
        let theta = self.angle_deg.to_radians();
        vec2(theta.cos(), theta.sin())
    }

    pub fn launch_velocity(&self) -> Vec2 {
        self.direction() * self.power
    }

    /// Where the barrel ends; shots spawn here.
    pub fn barrel_tip(&self) -> Vec2 {
        self.emitter + self.direction() * BARREL_LENGTH
    }
}

/// Owns the cannon's aim and turns it into projectiles.
#[derive(Clone, Debug, Default)]
pub struct LaunchController {
    aim: AimState,
}

impl LaunchController {
    pub fn new(mut aim: AimState) -> Self {
        let defaults = AimState::default();
        if aim.angle_deg.is_nan() {
            aim.angle_deg = defaults.angle_deg;
        }
        if aim.power.is_nan() {
            aim.power = defaults.power;
        }
        let mut controller = Self { aim };
        // Route through the clamps so a hand-built AimState can't break them.
        controller.adjust_angle(0.0);
        controller.adjust_power(0.0);
        controller
    }

    pub fn aim(&self) -> &AimState {
        &self.aim
    }

    /// NaN deltas are ignored; everything else is clamped into range.
    pub fn adjust_angle(&mut self, delta: f32) {
        if delta.is_nan() {
            return;
        }
        self.aim.angle_deg = (self.aim.angle_deg + delta).clamp(MIN_ANGLE_DEG, MAX_ANGLE_DEG);
    }

    pub fn adjust_power(&mut self, delta: f32) {
        if delta.is_nan() {
            return;
        }
        self.aim.power = (self.aim.power + delta).clamp(MIN_POWER, MAX_POWER);
    }

    pub fn fire(&self) -> Projectile {
        Projectile::new(self.aim.barrel_tip(), self.aim.launch_velocity())
    }
}
