use crate::core::world::WorldBounds;

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Plot extents that always contain the playfield and keep its aspect
/// ratio, growing to fit anything that left through the open top or right.
pub fn fixed_ratio_axis_window(bounds: WorldBounds, raw_max_x: f64, raw_max_y: f64) -> (f64, f64) {
    let world_w = f64::from(bounds.width).max(1.0);
    let world_h = f64::from(bounds.height).max(1.0);
    let ratio = world_w / world_h;

    let mut x_span = if raw_max_x > world_w {
        raw_max_x * (1.0 + X_PADDING_RATIO)
    } else {
        world_w
    };
    let mut y_span = if raw_max_y > world_h {
        raw_max_y * (1.0 + Y_PADDING_RATIO)
    } else {
        world_h
    };

    if x_span / y_span < ratio {
        x_span = y_span * ratio;
    } else {
        y_span = x_span / ratio;
    }

    (x_span, y_span)
}

#[cfg(test)]
mod tests {
    use super::fixed_ratio_axis_window;
    use crate::core::world::WorldBounds;

    #[test]
    fn playfield_fits_exactly() {
        let (x, y) = fixed_ratio_axis_window(WorldBounds::default(), 400.0, 200.0);
        assert!((x - 800.0).abs() < 1e-9);
        assert!((y - 600.0).abs() < 1e-9);
    }

    #[test]
    fn tall_arc_widens_to_keep_ratio() {
        let (x, y) = fixed_ratio_axis_window(WorldBounds::default(), 300.0, 1000.0);
        assert!((y - 1100.0).abs() < 1e-9);
        assert!((x / y - 800.0 / 600.0).abs() < 1e-9);
    }
}
