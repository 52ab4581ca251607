use cannon_sandbox::core::frame::Sandbox;
use cannon_sandbox::core::launch::AimState;
use cannon_sandbox::core::world::{WORLD_HEIGHT, WORLD_WIDTH, WorldBounds};
use macroquad::prelude::*;

use crate::constants::{BACKGROUND, MSAA_SAMPLES, UI_FONT_PATH, WINDOW_TITLE};
use crate::hud::draw_hud;
use crate::input::{frame_input, quit_requested};
use crate::render::{Viewport, draw_cannon, draw_ground, draw_projectiles};

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: WORLD_WIDTH as i32,
        window_height: WORLD_HEIGHT as i32,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            log::warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut sandbox = Sandbox::new(AimState::default(), WorldBounds::default());

    loop {
        if quit_requested() {
            log::info!("quit requested");
            break;
        }

        let frame_dt = get_frame_time();
        let report = sandbox.advance(&frame_input(), frame_dt);
        if report.fired {
            log::debug!("{} projectile(s) live", report.live);
        }

        let screen_w = screen_width();
        let bounds = sandbox.bounds();
        let view = Viewport::fit(bounds, screen_w, screen_height());
        let live = sandbox.snapshot();

        clear_background(BACKGROUND);
        draw_ground(&view, bounds);
        draw_cannon(&view, sandbox.aim());
        draw_projectiles(&view, &live);
        draw_hud(&sandbox, live.len(), screen_w, ui_font.as_ref());

        next_frame().await;
    }
}
