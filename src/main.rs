use anyhow::{Result, bail};
use cannon_sandbox::core::ballistics::first_contact;
use cannon_sandbox::core::launch::AimState;
use cannon_sandbox::core::plot::{default_plot_path, render_trace_png};
use cannon_sandbox::core::trace::{ShotTrace, trace_shot};
use cannon_sandbox::core::world::{
    DEFAULT_ANGLE_DEG, DEFAULT_POWER, EMITTER_POSITION, MAX_ANGLE_DEG, MAX_POWER, MIN_ANGLE_DEG,
    MIN_POWER, WorldBounds,
};
use clap::Parser;
use std::path::PathBuf;

/// Fire one cannon shot without a window and report how it went.
#[derive(Parser, Debug)]
#[command(name = "cannon_sandbox")]
#[command(about = "Headless cannon shot: integrate, bounce, and optionally plot the path")]
struct Args {
    /// Barrel angle in degrees (clamped to 0..=90)
    #[arg(long, default_value_t = DEFAULT_ANGLE_DEG)]
    angle: f32,

    /// Launch power (clamped to 10..=100)
    #[arg(long, default_value_t = DEFAULT_POWER)]
    power: f32,

    /// Fixed frame time in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Stop after this many frames even if the shot is still live
    #[arg(long, default_value_t = 100_000)]
    max_frames: usize,

    /// Write a PNG of the path; without a value a timestamped name is used
    #[arg(long, num_args = 0..=1)]
    plot: Option<Option<PathBuf>>,

    /// Log every contact
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn validate(args: &Args) -> Result<()> {
    if !args.dt.is_finite() || args.dt <= 0.0 {
        bail!("Frame time must be a positive number, got {}.", args.dt);
    }
    if !args.angle.is_finite() || !args.power.is_finite() {
        bail!("Angle and power must be finite numbers.");
    }
    if args.max_frames == 0 {
        bail!("max-frames must be > 0");
    }
    if !(MIN_ANGLE_DEG..=MAX_ANGLE_DEG).contains(&args.angle) {
        log::warn!(
            "angle {} outside {MIN_ANGLE_DEG}..={MAX_ANGLE_DEG}, clamping",
            args.angle
        );
    }
    if !(MIN_POWER..=MAX_POWER).contains(&args.power) {
        log::warn!(
            "power {} outside {MIN_POWER}..={MAX_POWER}, clamping",
            args.power
        );
    }
    Ok(())
}

fn print_summary(trace: &ShotTrace) {
    let end = trace.final_position();
    println!(
        "\nShot: {:.1} deg, power {:.1}",
        trace.aim.angle_deg, trace.aim.power
    );
    println!("Frames simulated: {} (dt = {:.4} s)", trace.frames, trace.dt);
    println!("Time alive: {:.4} s", trace.flight_time_s);
    println!("Apex height: {:.2}", trace.apex_y);
    println!("Ground bounces: {}", trace.ground_bounces);
    println!("Wall hits: {}", trace.wall_hits);
    println!("Final position: ({:.2}, {:.2})", end.x, end.y);
    println!("Outcome: {}", trace.outcome.label());

    match (trace.first_contact, first_contact(&trace.aim)) {
        (Some((t, x)), Ok((ideal_t, ideal_x))) => {
            println!(
                "First ground contact: t = {t:.4} s, x = {x:.2} (closed form: t = {ideal_t:.4} s, x = {ideal_x:.2})"
            );
        }
        (None, Ok((ideal_t, ideal_x))) => {
            println!(
                "First ground contact: not reached (closed form: t = {ideal_t:.4} s, x = {ideal_x:.2})"
            );
        }
        (_, Err(err)) => log::warn!("closed-form contact unavailable: {err}"),
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    validate(&args)?;

    let aim = AimState {
        angle_deg: args.angle,
        power: args.power,
        emitter: EMITTER_POSITION,
    };
    let bounds = WorldBounds::default();
    let trace = trace_shot(aim, bounds, args.dt, args.max_frames);
    print_summary(&trace);

    if let Some(plot) = args.plot {
        let path = plot.unwrap_or_else(default_plot_path);
        render_trace_png(&trace, bounds, &path)?;
        println!("Plot: {}", path.display());
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
