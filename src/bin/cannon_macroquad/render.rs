use cannon_sandbox::core::launch::AimState;
use cannon_sandbox::core::projectile::Projectile;
use cannon_sandbox::core::world::{
    BARREL_HALF_WIDTH, CANNON_BASE_RADIUS, GROUND_STRIP_HEIGHT, WorldBounds,
};
use macroquad::prelude::*;

use crate::constants::{
    BARREL_COLOR, CANNON_BASE_COLOR, GROUND_COLOR, PROJECTILE_COLOR,
};

/// Maps the y-up logical world onto the current window, stretched to fit.
#[derive(Clone, Copy)]
pub(crate) struct Viewport {
    scale: Vec2,
    screen_h: f32,
}

impl Viewport {
    pub(crate) fn fit(bounds: WorldBounds, screen_w: f32, screen_h: f32) -> Self {
        Self {
            scale: vec2(
                screen_w / bounds.width.max(1.0),
                screen_h / bounds.height.max(1.0),
            ),
            screen_h,
        }
    }

    pub(crate) fn world_to_screen(&self, world: Vec2) -> Vec2 {
        vec2(world.x * self.scale.x, self.screen_h - world.y * self.scale.y)
    }

    pub(crate) fn length(&self, world_len: f32) -> f32 {
        world_len * self.scale.x.min(self.scale.y)
    }
}

pub(crate) fn draw_ground(view: &Viewport, bounds: WorldBounds) {
    let top_left = view.world_to_screen(vec2(0.0, GROUND_STRIP_HEIGHT));
    let bottom_right = view.world_to_screen(vec2(bounds.width, 0.0));
    draw_rectangle(
        top_left.x,
        top_left.y,
        bottom_right.x - top_left.x,
        bottom_right.y - top_left.y,
        GROUND_COLOR,
    );
}

pub(crate) fn draw_cannon(view: &Viewport, aim: &AimState) {
    let base = view.world_to_screen(aim.emitter);
    let tip = view.world_to_screen(aim.barrel_tip());
    draw_circle(base.x, base.y, view.length(CANNON_BASE_RADIUS), CANNON_BASE_COLOR);
    draw_line(
        base.x,
        base.y,
        tip.x,
        tip.y,
        view.length(BARREL_HALF_WIDTH * 2.0),
        BARREL_COLOR,
    );
}

pub(crate) fn draw_projectiles(view: &Viewport, projectiles: &[Projectile]) {
    for projectile in projectiles {
        let p = view.world_to_screen(projectile.position);
        draw_circle(p.x, p.y, view.length(projectile.radius), PROJECTILE_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::Viewport;
    use cannon_sandbox::core::world::WorldBounds;
    use macroquad::prelude::vec2;

    #[test]
    fn world_origin_lands_bottom_left() {
        let view = Viewport::fit(WorldBounds::default(), 1600.0, 1200.0);
        assert_eq!(view.world_to_screen(vec2(0.0, 0.0)), vec2(0.0, 1200.0));
        assert_eq!(view.world_to_screen(vec2(800.0, 600.0)), vec2(1600.0, 0.0));
        assert_eq!(view.length(5.0), 10.0);
    }
}
