//! wire4d - renders a rotating tesseract to a sequence of PPM frames
//!
//! The animation timeline is split across a fixed pool of worker threads;
//! each frame is a pure function of its index, so workers never share
//! mutable state. Frames land as `frame{N}.ppm` in the output directory.

use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use wire4d::config::{AppConfig, Overrides};
use wire4d_render::{render, Animation, PpmDirSink, Wireframe4};

/// Side length of the rendered tesseract
const TESSERACT_SIZE: f32 = 2.0;

#[derive(Parser, Debug)]
#[command(name = "wire4d", about = "Render a rotating tesseract animation to PPM frames")]
struct Cli {
    /// Number of frames to render
    frames: Option<usize>,

    /// Base size; frames are (SIZE*8) x (SIZE*8) pixels
    #[arg(long)]
    size: Option<usize>,

    /// Worker thread count (defaults to the hardware parallelism)
    #[arg(long)]
    workers: Option<usize>,

    /// Output directory for the PPM frames
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()) {
        log::error!("{}", err);
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    config.apply_overrides(&Overrides {
        frames: cli.frames,
        size: cli.size,
        workers: cli.workers,
        output_dir: cli.output.map(|p| p.to_string_lossy().into_owned()),
    });

    let frames = config.render.frames;
    let workers = match config.render.workers {
        0 => num_cpus::get(),
        n => n,
    };

    let animation = Animation::new(
        Wireframe4::tesseract(TESSERACT_SIZE),
        config.render.width(),
        config.render.height(),
    );
    let sink = PpmDirSink::new(&config.output.dir)?;

    let bar = ProgressBar::new(frames as u64);
    bar.set_style(
        ProgressStyle::with_template(
            "{bar:40} {pos}/{len} ({percent}%) {per_sec} elapsed {elapsed_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let start = Instant::now();
    render(&animation, frames, &sink, workers, |_| bar.inc(1))?;
    bar.finish();

    let elapsed = start.elapsed();
    log::info!(
        "rendered {} frames with {} workers in {:.1}s",
        frames,
        workers,
        elapsed.as_secs_f32()
    );
    println!("Rendering took {}s", elapsed.as_secs());
    Ok(())
}
