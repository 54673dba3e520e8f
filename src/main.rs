/*
 * Pixel Particles
 *
 * This application renders an image as a grid of colored particles that:
 * 1. Fly in from random positions and settle into the picture
 * 2. Scatter away from the pointer when it comes close
 * 3. Replay one of four animations on demand (warp, blocks, assemble, prints)
 *
 * Without --headless a window opens with a control panel; with --headless
 * the animation is rendered in software and the last frame written to disk.
 */

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use pixel_particles::app::{self, LaunchOptions};
use pixel_particles::cli::Args;
use pixel_particles::headless::{self, HeadlessRun};
use pixel_particles::loader;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pixel_particles=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    if args.headless {
        return match run_headless(&args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!(error = %err, "headless render failed");
                ExitCode::FAILURE
            }
        };
    }

    app::run(LaunchOptions::from(&args));
    ExitCode::SUCCESS
}

fn run_headless(args: &Args) -> Result<(), Box<dyn Error>> {
    let path = args.image.as_deref().ok_or("headless mode needs an image")?;
    let loaded = loader::load_image(path)?;

    let run = HeadlessRun {
        width: args.width,
        height: args.height,
        params: args.scene_params(),
        seed: args.seed,
        frames: args.frames,
        mode: args.mode.map(Into::into),
    };
    headless::render_to_file(&run, &loaded.image, &args.output)?;
    Ok(())
}
