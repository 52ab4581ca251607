use cannon_sandbox::core::frame::FrameInput;
use macroquad::prelude::*;

/// Arrows adjust while held, Space fires once per press.
pub(crate) fn frame_input() -> FrameInput {
    FrameInput {
        angle_up: is_key_down(KeyCode::Up),
        angle_down: is_key_down(KeyCode::Down),
        power_up: is_key_down(KeyCode::Right),
        power_down: is_key_down(KeyCode::Left),
        fire: is_key_pressed(KeyCode::Space),
    }
}

pub(crate) fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}
