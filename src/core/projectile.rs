use macroquad::math::Vec2;

use crate::core::world::{
    GRAVITY_MPS2, GROUND_BOUNCE_RESTITUTION, GROUND_CONTACT_DAMPING, MAX_TIME_ALIVE_S,
    PROJECTILE_RADIUS, SETTLE_SPEED, WALL_RESTITUTION, WorldBounds,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub active: bool,
    pub time_alive: f32,
}

/// What a single update ran into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Contact {
    pub ground: bool,
    pub wall: bool,
    pub settled: bool,
}

impl Projectile {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            radius: PROJECTILE_RADIUS,
            active: true,
            time_alive: 0.0,
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn is_expired(&self) -> bool {
        !self.active || self.time_alive > MAX_TIME_ALIVE_S
    }

    /// Advances one semi-implicit Euler step, then resolves the ground and
    /// the right wall. The left edge and the ceiling are open.
    pub fn update(&mut self, bounds: WorldBounds, dt: f32) -> Contact {
        let mut contact = Contact::default();

        self.velocity.y -= GRAVITY_MPS2 * dt;
        self.position += self.velocity * dt;
        self.time_alive += dt;

        if self.position.y <= self.radius {
            contact.ground = true;
            self.position.y = self.radius;
            self.velocity *= GROUND_CONTACT_DAMPING;

            if self.speed() < SETTLE_SPEED {
                self.active = false;
                contact.settled = true;
            } else {
                self.velocity.y = -self.velocity.y * GROUND_BOUNCE_RESTITUTION;
            }
        }

        let wall_x = bounds.wall_limit(self.radius);
        if self.position.x >= wall_x {
            contact.wall = true;
            self.position.x = wall_x;
            self.velocity.x *= -WALL_RESTITUTION;
        }

        contact
    }
}
