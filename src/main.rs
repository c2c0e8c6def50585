use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use raylib::prelude::*;

use slideshow::config::parse_delay;
use slideshow::source::{load_sorted_image_paths, shuffle_paths};
use slideshow::stage::{FPS, Stage, StageOptions};
use slideshow::state::Direction;

/// Plays a directory of images as a slideshow with hover and click thumbnails.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory holding the images
    dir: PathBuf,

    /// Transition axis: horizontal or vertical
    #[arg(long)]
    direction: Option<Direction>,

    /// Milliseconds each slide stays on screen
    #[arg(long, value_parser = parse_delay)]
    delay: Option<Duration>,

    /// Play the images in random order instead of by file name
    #[arg(long)]
    shuffle: bool,

    #[arg(long, default_value_t = 1280)]
    width: i32,

    #[arg(long, default_value_t = 800)]
    height: i32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut paths = load_sorted_image_paths(&args.dir)
        .with_context(|| format!("failed to load images from {}", args.dir.display()))?;
    if args.shuffle {
        shuffle_paths(&mut paths);
    }
    info!("{} images from {}", paths.len(), args.dir.display());

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Slideshow")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let options = StageOptions {
        width: args.width,
        height: args.height,
        direction: args.direction,
        delay: args.delay,
    };
    let mut stage = Stage::new(&mut rl, &thread, paths, &options)?;
    stage.run(&mut rl, &thread);
    Ok(())
}
