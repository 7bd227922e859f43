use std::path::PathBuf;

use clap::Parser;
use kiss3d::window::Window;

use solar_sim::config::{SimConfig, Viewport};
use solar_sim::gui::{DataFiles, SolarApp};
use solar_sim::physics::DirectGravity;
use solar_sim::scheduler::Scheduler;

#[derive(Debug, Parser)]
struct Args {
    /// System to load at startup, and to reload with `O`
    #[arg(short, long, default_value = "solar_system.txt")]
    input: PathBuf,
    /// Where `S` saves the current state
    #[arg(short, long, default_value = "solar_system_saved.txt")]
    output: PathBuf,
    /// Physical seconds per tick
    #[arg(short, long)]
    time_step: Option<f64>,
    /// Playback speed, 1 to 100
    #[arg(short, long)]
    speed: Option<i32>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = SimConfig::default();
    if let Some(time_step) = args.time_step {
        anyhow::ensure!(
            time_step > 0.0 && time_step.is_finite(),
            "time step must be positive, got {}",
            time_step
        );
        config.time_step = time_step;
    }
    if let Some(speed) = args.speed {
        config.speed = speed;
    }
    config.viewport = Viewport::new(
        args.width.unwrap_or(config.viewport.width),
        args.height.unwrap_or(config.viewport.height),
    );
    anyhow::ensure!(
        config.viewport.width > 0 && config.viewport.height > 0,
        "window must be at least one pixel across, got {}x{}",
        config.viewport.width,
        config.viewport.height
    );

    log::info!("Modelling started!");

    let mut window = Window::new_with_size(
        "Solar System",
        config.viewport.width,
        config.viewport.height,
    );
    window.set_background_color(0.0, 0.0, 0.0);
    window.set_framerate_limit(Some(60));

    let scheduler = Scheduler::new(&config, DirectGravity::new());
    let files = DataFiles {
        input: Some(args.input),
        output: args.output,
    };
    let app = SolarApp::new(scheduler, files, &mut window);
    window.render_loop(app);

    log::info!("Modelling finished!");
    Ok(())
}
