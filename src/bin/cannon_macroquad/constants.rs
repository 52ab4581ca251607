use macroquad::prelude::Color;

pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";
pub const WINDOW_TITLE: &str = "Cannon Simulator";

pub const BACKGROUND: Color = Color::new(0.2, 0.3, 0.3, 1.0);
pub const GROUND_COLOR: Color = Color::new(0.0, 0.7, 0.0, 1.0);
pub const CANNON_BASE_COLOR: Color = Color::new(0.5, 0.5, 0.5, 1.0);
pub const BARREL_COLOR: Color = Color::new(0.3, 0.3, 0.3, 1.0);
pub const PROJECTILE_COLOR: Color = Color::new(0.9, 0.1, 0.1, 1.0);
pub const HUD_TEXT_COLOR: Color = Color::new(0.92, 0.93, 0.95, 1.0);
pub const HUD_HINT_COLOR: Color = Color::new(0.72, 0.78, 0.78, 1.0);

pub const HUD_MARGIN: f32 = 14.0;
pub const HUD_FONT_SIZE: u16 = 20;
pub const HUD_HINT_FONT_SIZE: u16 = 16;
