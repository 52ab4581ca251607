//! Headless single-shot runs used by the CLI and the plotter.

use macroquad::math::Vec2;

use crate::core::launch::{AimState, LaunchController};
use crate::core::simulation::ProjectileSimulation;
use crate::core::world::WorldBounds;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotOutcome {
    Settled,
    TimedOut,
    FrameLimit,
}

impl ShotOutcome {
    pub fn label(self) -> &'static str {
        match self {
            ShotOutcome::Settled => "settled on the ground",
            ShotOutcome::TimedOut => "timed out",
            ShotOutcome::FrameLimit => "still flying at frame limit",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ShotTrace {
    pub aim: AimState,
    pub dt: f32,
    pub points: Vec<Vec2>,
    pub frames: usize,
    pub flight_time_s: f32,
    pub first_contact: Option<(f32, f32)>,
    pub ground_bounces: usize,
    pub wall_hits: usize,
    pub apex_y: f32,
    pub outcome: ShotOutcome,
}

impl ShotTrace {
    pub fn final_position(&self) -> Vec2 {
        self.points.last().copied().unwrap_or(self.aim.barrel_tip())
    }
}

/// Fires once and steps with a fixed `dt` until the shot is pruned or
/// `max_frames` have run. `dt` must be positive.
pub fn trace_shot(aim: AimState, bounds: WorldBounds, dt: f32, max_frames: usize) -> ShotTrace {
    let launcher = LaunchController::new(aim);
    let aim = *launcher.aim();
    let shot = launcher.fire();

    let mut simulation = ProjectileSimulation::new(bounds);
    simulation.insert(shot);

    let mut trace = ShotTrace {
        aim,
        dt,
        points: vec![shot.position],
        frames: 0,
        flight_time_s: 0.0,
        first_contact: None,
        ground_bounces: 0,
        wall_hits: 0,
        apex_y: shot.position.y,
        outcome: ShotOutcome::FrameLimit,
    };

    while trace.frames < max_frames {
        let report = simulation.step(dt);
        trace.frames += 1;

        // Record the frame's state before prune can drop a settled shot.
        if let Some(p) = simulation.projectiles().first() {
            trace.points.push(p.position);
            trace.flight_time_s = p.time_alive;
            trace.apex_y = trace.apex_y.max(p.position.y);
            if report.ground_contacts > 0 && trace.first_contact.is_none() {
                trace.first_contact = Some((p.time_alive, p.position.x));
            }
        }
        trace.ground_bounces += report.ground_contacts - report.settled;
        trace.wall_hits += report.wall_contacts;

        if simulation.prune() > 0 {
            trace.outcome = if report.settled > 0 {
                ShotOutcome::Settled
            } else {
                ShotOutcome::TimedOut
            };
            break;
        }
    }

    log::debug!(
        "traced {} frame(s): {}",
        trace.frames,
        trace.outcome.label()
    );
    trace
}
