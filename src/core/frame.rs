//! One frame of the sandbox: aim adjustments, optional fire, step, prune.
//!
//! Input arrives already decoded into [`FrameInput`], so the whole loop runs
//! without a window.

use crate::core::launch::{AimState, LaunchController};
use crate::core::projectile::Projectile;
use crate::core::simulation::{ProjectileSimulation, StepReport};
use crate::core::world::{ADJUST_STEP, WorldBounds};

/// Adjust flags are "held this frame"; `fire` is a press edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub angle_up: bool,
    pub angle_down: bool,
    pub power_up: bool,
    pub power_down: bool,
    pub fire: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub fired: bool,
    pub step: StepReport,
    pub pruned: usize,
    pub live: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Sandbox {
    launcher: LaunchController,
    simulation: ProjectileSimulation,
}

impl Sandbox {
    pub fn new(aim: AimState, bounds: WorldBounds) -> Self {
        Self {
            launcher: LaunchController::new(aim),
            simulation: ProjectileSimulation::new(bounds),
        }
    }

    pub fn aim(&self) -> &AimState {
        self.launcher.aim()
    }

    pub fn bounds(&self) -> WorldBounds {
        self.simulation.bounds()
    }

    pub fn simulation(&self) -> &ProjectileSimulation {
        &self.simulation
    }

    pub fn snapshot(&self) -> Vec<Projectile> {
        self.simulation.snapshot()
    }

    pub fn advance(&mut self, input: &FrameInput, dt: f32) -> FrameReport {
        if input.angle_up {
            self.launcher.adjust_angle(ADJUST_STEP);
        }
        if input.angle_down {
            self.launcher.adjust_angle(-ADJUST_STEP);
        }
        if input.power_up {
            self.launcher.adjust_power(ADJUST_STEP);
        }
        if input.power_down {
            self.launcher.adjust_power(-ADJUST_STEP);
        }

        if input.fire {
            let aim = self.launcher.aim();
            log::info!(
                "fire: angle={:.0} deg, power={:.0}",
                aim.angle_deg,
                aim.power
            );
            self.simulation.insert(self.launcher.fire());
        }

        let step = self.simulation.step(dt);
        let pruned = self.simulation.prune();
        if pruned > 0 {
            log::debug!("pruned {pruned} projectile(s)");
        }

        FrameReport {
            fired: input.fire,
            step,
            pruned,
            live: self.simulation.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameInput, Sandbox};
    use crate::core::launch::AimState;
    use crate::core::world::WorldBounds;

    #[test]
    fn held_keys_move_one_unit_per_frame() {
        let mut sandbox = Sandbox::default();
        let input = FrameInput {
            angle_up: true,
            power_down: true,
            ..FrameInput::default()
        };
        for _ in 0..3 {
            sandbox.advance(&input, 0.016);
        }
        assert_eq!(sandbox.aim().angle_deg, 48.0);
        assert_eq!(sandbox.aim().power, 47.0);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut sandbox = Sandbox::default();
        let input = FrameInput {
            angle_up: true,
            angle_down: true,
            power_up: true,
            power_down: true,
            fire: false,
        };
        sandbox.advance(&input, 0.016);
        assert_eq!(sandbox.aim().angle_deg, 45.0);
        assert_eq!(sandbox.aim().power, 50.0);
    }

    #[test]
    fn fire_uses_the_adjusted_aim() {
        let mut sandbox = Sandbox::default();
        let report = sandbox.advance(
            &FrameInput {
                angle_up: true,
                fire: true,
                ..FrameInput::default()
            },
            0.0,
        );
        assert!(report.fired);
        assert_eq!(report.live, 1);

        let shot = sandbox.snapshot()[0];
        let expected = 46f32.to_radians();
        assert!((shot.velocity.y / shot.velocity.x - expected.tan()).abs() < 1e-4);
    }

    #[test]
    fn bounds_reach_the_simulation() {
        let sandbox = Sandbox::new(AimState::default(), WorldBounds::new(300.0, 200.0));
        assert_eq!(sandbox.bounds(), WorldBounds::new(300.0, 200.0));
        assert_eq!(sandbox.simulation().bounds().width, 300.0);
    }

    #[test]
    fn idle_frame_with_nothing_live_is_quiet() {
        let mut sandbox = Sandbox::default();
        let report = sandbox.advance(&FrameInput::default(), 0.016);
        assert!(!report.fired);
        assert_eq!(report.step.advanced, 0);
        assert_eq!(report.live, 0);
    }
}
