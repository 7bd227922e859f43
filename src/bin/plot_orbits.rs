use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use plotters::prelude::*;

use solar_sim::config::SimConfig;
use solar_sim::gui::parse_color;
use solar_sim::physics::DirectGravity;
use solar_sim::render::TrackRecorder;
use solar_sim::scheduler::Scheduler;

/// Runs a system without a window, and plots where everything went.
#[derive(Debug, Parser)]
struct Args {
    input: PathBuf,
    #[arg(short, long, default_value = "plots/orbits.png")]
    plot: PathBuf,
    /// Also save the final state here
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(short = 'n', long, default_value_t = 1000)]
    num_ticks: usize,
    #[arg(short, long, default_value_t = 1.0)]
    time_step: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = SimConfig::default();
    let mut scheduler = Scheduler::new(&config, DirectGravity::new());
    let mut recorder = TrackRecorder::new();

    scheduler.set_time_step(args.time_step)?;
    scheduler
        .load_file(&args.input, &mut recorder)
        .with_context(|| format!("loading {}", args.input.display()))?;

    for _ in 0..args.num_ticks {
        scheduler.tick(&mut recorder);
    }
    println!(
        "Simulated {} ticks, {:.1} seconds gone",
        args.num_ticks,
        scheduler.state().physical_time()
    );

    draw_tracks(&args.plot, &recorder, config.viewport.half_extent())
        .map_err(|e| anyhow::anyhow!("drawing {}: {}", args.plot.display(), e))?;

    if let Some(output) = &args.output {
        scheduler
            .save_file(output)
            .with_context(|| format!("saving {}", output.display()))?;
    }

    Ok(())
}

fn draw_tracks(
    name: &Path,
    recorder: &TrackRecorder,
    half_extent: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    // Objects can wander off screen, so make room for them too
    let reach = match recorder.bounds() {
        Some((lo, hi)) => [lo.x, lo.y, hi.x, hi.y]
            .iter()
            .fold(half_extent, |acc, v| acc.max(v.abs())),
        None => half_extent,
    };
    let reach = reach as f32;

    let root = BitMapBackend::new(name, (800, 800)).into_drawing_area();
    root.fill(&BLACK)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(5)
        .build_cartesian_2d(-reach..reach, -reach..reach)?;

    for (_, track) in recorder.tracks() {
        let color = parse_color(&track.color);
        let color = RGBColor(
            (color.x * 255.0) as u8,
            (color.y * 255.0) as u8,
            (color.z * 255.0) as u8,
        );
        chart.draw_series(LineSeries::new(
            track.points.iter().map(|p| (p.x as f32, p.y as f32)),
            &color,
        ))?;
    }

    root.present()?;
    Ok(())
}
