//! Grainfall Powder - headless falling-sand demo

use std::path::PathBuf;

use clap::Parser;
use grainfall_powder::render::{ascii, ppm};
use grainfall_powder::{App, PowderConfig, Scene};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (RON); defaults to `grainfall.ron` if present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scene file with scripted paint strokes (RON)
    #[arg(long)]
    scene: Option<PathBuf>,

    /// RNG seed (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate (overrides config)
    #[arg(long)]
    ticks: Option<u64>,

    /// Grid width in cells (overrides config)
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells (overrides config)
    #[arg(long)]
    height: Option<usize>,

    /// Write the final grid as a PPM image
    #[arg(long)]
    ppm: Option<PathBuf>,

    /// Log statistics every N ticks (0 disables, overrides config)
    #[arg(long)]
    stats: Option<u64>,

    /// Don't print the final grid as text
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Starting Grainfall Powder");

    let mut config = PowderConfig::load(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.run.seed = seed;
    }
    if let Some(ticks) = args.ticks {
        config.run.ticks = ticks;
    }
    if let Some(width) = args.width {
        config.rules.width = width;
    }
    if let Some(height) = args.height {
        config.rules.height = height;
    }
    if let Some(interval) = args.stats {
        config.run.stats_interval = interval;
    }
    if args.quiet {
        config.render.ascii = false;
    }

    let scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::default(),
    };
    if let Some(last) = scene.last_tick()
        && last >= config.run.ticks
    {
        log::warn!(
            "Scene has strokes up to tick {} but only {} ticks will run",
            last,
            config.run.ticks
        );
    }

    let mut app = App::new(config, scene)?;
    let ticks = app.config().run.ticks;
    let summary = app.run(ticks);

    log::info!(
        "Finished {} ticks: moved={} changes={} reactions={} strokes={} | {}",
        summary.ticks,
        summary.pixels_moved,
        summary.state_changes,
        summary.reactions,
        summary.strokes_applied,
        summary.population
    );

    let render = app.config().render.clone();
    if render.ascii {
        print!("{}", ascii::render(app.simulation()));
        println!("{}", ascii::legend(app.simulation()));
    }

    if let Some(path) = &args.ppm {
        ppm::save(app.simulation_mut(), render.background, render.scale, path)?;
    }

    Ok(())
}
