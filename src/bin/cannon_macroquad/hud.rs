use cannon_sandbox::core::frame::Sandbox;
use macroquad::prelude::*;

use crate::constants::{
    HUD_FONT_SIZE, HUD_HINT_COLOR, HUD_HINT_FONT_SIZE, HUD_MARGIN, HUD_TEXT_COLOR,
};

fn draw_ui_text(text: &str, x: f32, y: f32, font_size: u16, color: Color, font: Option<&Font>) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_hud(sandbox: &Sandbox, live: usize, screen_w: f32, font: Option<&Font>) {
    let aim = sandbox.aim();
    let stats = format!(
        "Angle: {:.0} deg   Power: {:.0}   In flight: {}",
        aim.angle_deg, aim.power, live
    );
    draw_ui_text(
        &stats,
        HUD_MARGIN,
        HUD_MARGIN + f32::from(HUD_FONT_SIZE),
        HUD_FONT_SIZE,
        HUD_TEXT_COLOR,
        font,
    );

    let hint = "Up/Down: angle   Left/Right: power   Space: fire   Esc: quit";
    let size = measure_text(hint, font, HUD_HINT_FONT_SIZE, 1.0);
    draw_ui_text(
        hint,
        (screen_w - size.width - HUD_MARGIN).max(HUD_MARGIN),
        HUD_MARGIN + f32::from(HUD_HINT_FONT_SIZE),
        HUD_HINT_FONT_SIZE,
        HUD_HINT_COLOR,
        font,
    );
}
