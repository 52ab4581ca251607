use crate::core::projectile::Projectile;
use crate::core::world::WorldBounds;

/// Contact totals for one `step`, summed over every active projectile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub advanced: usize,
    pub ground_contacts: usize,
    pub wall_contacts: usize,
    pub settled: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ProjectileSimulation {
    bounds: WorldBounds,
    projectiles: Vec<Projectile>,
}

impl ProjectileSimulation {
    pub fn new(bounds: WorldBounds) -> Self {
        Self {
            bounds,
            projectiles: Vec::new(),
        }
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn insert(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    /// Every stored entry, settled ones included until the next prune.
    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Negative or non-finite `dt` is a caller bug; it is treated as a
    /// zero-length step.
    pub fn step(&mut self, dt: f32) -> StepReport {
        let dt = if !dt.is_finite() || dt < 0.0 {
            log::warn!("invalid frame time {dt}s clamped to zero");
            0.0
        } else {
            dt
        };

        let mut report = StepReport::default();
        for projectile in self.projectiles.iter_mut().filter(|p| p.active) {
            let contact = projectile.update(self.bounds, dt);
            report.advanced += 1;
            report.ground_contacts += usize::from(contact.ground);
            report.wall_contacts += usize::from(contact.wall);
            report.settled += usize::from(contact.settled);
        }

        if report.ground_contacts + report.wall_contacts > 0 {
            log::debug!(
                "step dt={dt:.4}: {} ground, {} wall, {} settled",
                report.ground_contacts,
                report.wall_contacts,
                report.settled
            );
        }
        report
    }

    /// Drops settled and timed-out projectiles. Returns how many went.
    pub fn prune(&mut self) -> usize {
        let before = self.projectiles.len();
        self.projectiles.retain(|p| !p.is_expired());
        before - self.projectiles.len()
    }

    pub fn snapshot(&self) -> Vec<Projectile> {
        self.projectiles.iter().filter(|p| p.active).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{ProjectileSimulation, StepReport};
    use crate::core::launch::{AimState, LaunchController};
    use crate::core::projectile::Projectile;
    use crate::core::world::{PROJECTILE_RADIUS, WORLD_WIDTH, WorldBounds};
    use macroquad::math::vec2;

    fn simulation() -> ProjectileSimulation {
        ProjectileSimulation::new(WorldBounds::default())
    }

    #[test]
    fn zero_time_step_keeps_spawn_position() {
        let controller = LaunchController::new(AimState {
            angle_deg: 45.0,
            power: 50.0,
            ..AimState::default()
        });
        let shot = controller.fire();
        let mut sim = simulation();
        sim.insert(shot);
        sim.step(0.0);

        let live = sim.snapshot();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].position, shot.position);
        assert_eq!(live[0].velocity, shot.velocity);
        assert_eq!(live[0].time_alive, 0.0);
    }

    #[test]
    fn negative_time_is_treated_as_zero() {
        let shot = Projectile::new(vec2(100.0, 100.0), vec2(10.0, 10.0));
        let mut sim = simulation();
        sim.insert(shot);
        let report = sim.step(-0.5);

        assert_eq!(report.advanced, 1);
        assert_eq!(sim.projectiles()[0], shot);
    }

    #[test]
    fn nan_time_is_treated_as_zero_and_shot_still_expires() {
        let shot = LaunchController::default().fire();
        let mut sim = simulation();
        sim.insert(shot);
        sim.step(f32::NAN);
        sim.step(f32::INFINITY);
        assert_eq!(sim.projectiles()[0], shot);

        for _ in 0..2000 {
            sim.step(1.0 / 60.0);
            sim.prune();
        }
        assert!(sim.is_empty());
    }

    #[test]
    fn settled_projectile_is_skipped_then_pruned() {
        let mut sim = simulation();
        sim.insert(Projectile::new(vec2(300.0, PROJECTILE_RADIUS), vec2(0.0, -0.5)));
        sim.insert(Projectile::new(vec2(100.0, 300.0), vec2(5.0, 0.0)));

        let report = sim.step(1.0 / 60.0);
        assert_eq!(
            report,
            StepReport {
                advanced: 2,
                ground_contacts: 1,
                wall_contacts: 0,
                settled: 1,
            }
        );
        assert_eq!(sim.len(), 2);
        assert_eq!(sim.snapshot().len(), 1);

        let frozen = sim.projectiles()[0];
        let report = sim.step(1.0 / 60.0);
        assert_eq!(report.advanced, 1);
        assert_eq!(sim.projectiles()[0], frozen);

        assert_eq!(sim.prune(), 1);
        assert_eq!(sim.len(), 1);
        assert!(sim.projectiles()[0].active);
    }

    #[test]
    fn prune_removes_timed_out_regardless_of_active() {
        let mut sim = simulation();
        let mut old_active = Projectile::new(vec2(100.0, 300.0), vec2(0.0, 0.0));
        old_active.time_alive = 10.01;
        let mut old_settled = old_active;
        old_settled.active = false;
        let mut young = old_active;
        young.time_alive = 9.99;

        sim.insert(old_active);
        sim.insert(old_settled);
        sim.insert(young);

        assert_eq!(sim.prune(), 2);
        assert_eq!(sim.projectiles(), &[young]);
    }

    #[test]
    fn wall_approach_is_clamped_after_one_step() {
        let limit = WORLD_WIDTH - PROJECTILE_RADIUS;
        let mut sim = simulation();
        sim.insert(Projectile::new(vec2(limit + 1.0, 400.0), vec2(20.0, 0.0)));
        let report = sim.step(0.05);

        assert_eq!(report.wall_contacts, 1);
        let p = sim.snapshot()[0];
        assert_eq!(p.position.x, limit);
        assert!((p.velocity.x - (-14.0)).abs() < 1e-5);
    }

    #[test]
    fn narrower_bounds_move_the_wall() {
        let mut sim = ProjectileSimulation::new(WorldBounds::new(200.0, 600.0));
        assert_eq!(sim.bounds().wall_limit(PROJECTILE_RADIUS), 195.0);
        sim.insert(Projectile::new(vec2(190.0, 300.0), vec2(100.0, 0.0)));
        sim.step(0.1);
        assert_eq!(sim.snapshot()[0].position.x, 195.0);
    }

    #[test]
    fn snapshot_is_repeatable_between_steps() {
        let mut sim = simulation();
        let controller = LaunchController::default();
        sim.insert(controller.fire());
        sim.insert(controller.fire());
        sim.step(0.016);

        let first = sim.snapshot();
        let second = sim.snapshot();
        assert_eq!(first, second);
        assert_eq!(first.as_slice(), sim.projectiles());
    }

    #[test]
    fn insert_keeps_duplicates() {
        let mut sim = simulation();
        let shot = LaunchController::default().fire();
        sim.insert(shot);
        sim.insert(shot);
        assert_eq!(sim.len(), 2);
        assert!(!sim.is_empty());
    }
}
