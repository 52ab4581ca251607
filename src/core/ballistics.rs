use macroquad::math::{Vec2, vec2};

use crate::core::launch::AimState;
use crate::core::world::{GRAVITY_MPS2, PROJECTILE_RADIUS};

/// Drag-free position of a shot `time_s` after it leaves the barrel.
pub fn trajectory_at_time(aim: &AimState, time_s: f32) -> Vec2 {
    let start = aim.barrel_tip();
    let velocity = aim.launch_velocity();
    vec2(
        start.x + velocity.x * time_s,
        start.y + (velocity.y * time_s) - (0.5 * GRAVITY_MPS2 * time_s * time_s),
    )
}

/// Closed-form time and x of the first ground contact (centre at one radius
/// above the ground line). The integrator approaches this as `dt` shrinks.
pub fn first_contact(aim: &AimState) -> Result<(f32, f32), String> {
    if !aim.angle_deg.is_finite() || !aim.power.is_finite() {
        return Err("Aim must be finite numbers.".to_string());
    }
    if aim.power < 0.0 {
        return Err("Power cannot be negative.".to_string());
    }

    let start = aim.barrel_tip();
    let vy = aim.launch_velocity().y;
    let drop = start.y - PROJECTILE_RADIUS;
    let disc = vy * vy + 2.0 * GRAVITY_MPS2 * drop;
    if disc < 0.0 {
        return Err(format!(
            "No real contact time: vy^2 + 2*g*h is negative ({disc})."
        ));
    }

    let t_contact = (vy + disc.sqrt()) / GRAVITY_MPS2;
    if t_contact < 0.0 {
        return Err(format!(
            "Contact time computed as negative ({t_contact}). Check the aim."
        ));
    }

    Ok((t_contact, trajectory_at_time(aim, t_contact).x))
}

pub fn sample_trajectory(aim: &AimState, duration_s: f32, samples: usize) -> Vec<Vec2> {
    let sample_count = samples.max(2);
    (0..=sample_count)
        .map(|i| {
            let t = (i as f32 * duration_s) / sample_count as f32;
            trajectory_at_time(aim, t)
        })
        .collect()
}
