use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use plotters::prelude::*;

use crate::core::ballistics::{first_contact, sample_trajectory};
use crate::core::trace::ShotTrace;
use crate::core::window::fixed_ratio_axis_window;
use crate::core::world::{GROUND_STRIP_HEIGHT, WorldBounds};

const PLOT_SIZE_PX: (u32, u32) = (1200, 900);
const IDEAL_SAMPLES: usize = 240;

pub fn default_plot_path() -> PathBuf {
    PathBuf::from(format!(
        "cannon_trace_{}.png",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Lowest x and the (width, height) of a plot that fits the trace and the
/// playfield. Shots that rebound off the wall can leave through x < 0.
pub fn plot_extents(trace: &ShotTrace, bounds: WorldBounds) -> (f64, f64, f64) {
    let (min_x, max_x, max_y) = trace.points.iter().fold(
        (0.0f64, 0.0f64, 0.0f64),
        |(min_x, max_x, max_y), p| {
            (
                min_x.min(f64::from(p.x)),
                max_x.max(f64::from(p.x)),
                max_y.max(f64::from(p.y)),
            )
        },
    );
    let min_x = if min_x < 0.0 { min_x * 1.06 } else { 0.0 };
    let (x_span, y_span) = fixed_ratio_axis_window(bounds, max_x - min_x, max_y);
    (min_x, x_span, y_span)
}

pub fn render_trace_png(trace: &ShotTrace, bounds: WorldBounds, path: &Path) -> Result<()> {
    let (min_x, x_span, y_span) = plot_extents(trace, bounds);
    let width = f64::from(bounds.width);

    let root = BitMapBackend::new(path, PLOT_SIZE_PX).into_drawing_area();
    root.fill(&WHITE)?;

    let caption = format!(
        "Shot at {:.0} deg, power {:.0} ({})",
        trace.aim.angle_deg,
        trace.aim.power,
        Local::now().format("%Y-%m-%d %H:%M")
    );
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 26))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(min_x..(min_x + x_span), 0.0..y_span)
        .context("could not lay out plot axes")?;

    chart
        .configure_mesh()
        .x_desc("x (world units)")
        .y_desc("y (world units)")
        .light_line_style(RGBColor(227, 231, 236))
        .draw()?;

    chart.draw_series(std::iter::once(Rectangle::new(
        [(0.0, 0.0), (width, f64::from(GROUND_STRIP_HEIGHT))],
        RGBColor(0, 178, 0).mix(0.35).filled(),
    )))?;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(width, 0.0), (width, y_span)],
        BLACK.stroke_width(2),
    )))?;

    match first_contact(&trace.aim) {
        Ok((t_contact, _)) => {
            let ideal = sample_trajectory(&trace.aim, t_contact, IDEAL_SAMPLES);
            chart
                .draw_series(LineSeries::new(
                    ideal.iter().map(|p| (f64::from(p.x), f64::from(p.y))),
                    RGBColor(76, 141, 245).stroke_width(2),
                ))?
                .label("closed form to first contact")
                .legend(|(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], RGBColor(76, 141, 245))
                });
        }
        Err(err) => log::warn!("skipping closed-form overlay: {err}"),
    }

    chart
        .draw_series(LineSeries::new(
            trace
                .points
                .iter()
                .map(|p| (f64::from(p.x), f64::from(p.y))),
            RED.stroke_width(3),
        ))?
        .label(format!("integrated, dt = {:.4} s", trace.dt))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("could not write {}", path.display()))?;
    log::info!("wrote trajectory plot to {}", path.display());
    Ok(())
}
