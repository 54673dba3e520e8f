// ============================================================================
// Command line configuration
// ============================================================================
//
// Usage examples:
//   pixel_particles photo.png                          (interactive window)
//   pixel_particles photo.png --sample-step 4 --influence-radius 6000
//   pixel_particles photo.png --headless --mode prints --frames 90 -o out.png

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::mode::Mode;
use crate::params::SceneParams;
use crate::{DEFAULT_FRICTION, DEFAULT_INFLUENCE_RADIUS, DEFAULT_SAMPLE_STEP};

/// Render an image as particles that scatter and reassemble around the pointer.
#[derive(Parser, Debug, Clone)]
#[command(name = "pixel_particles", version, about)]
pub struct Args {
    /// Image to load at startup. More images can be dropped on the window.
    pub image: Option<PathBuf>,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Pixel grid spacing for sampling; also the particle size.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_STEP, value_parser = clap::value_parser!(u32).range(1..))]
    pub sample_step: u32,

    /// Pointer influence, compared against the squared distance.
    #[arg(long, default_value_t = DEFAULT_INFLUENCE_RADIUS)]
    pub influence_radius: f32,

    /// Velocity damping per frame.
    #[arg(long, default_value_t = DEFAULT_FRICTION)]
    pub friction: f32,

    /// Milliseconds added per particle during a staggered reassembly.
    #[arg(long, default_value_t = 1)]
    pub stagger_ms: u64,

    /// Seed for the random source, for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Render without a window and write the last frame to --output.
    #[arg(long, requires = "image")]
    pub headless: bool,

    /// Number of frames to render in headless mode.
    #[arg(long, default_value_t = 120)]
    pub frames: u32,

    /// Mode to trigger after the first headless frame.
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Where to write the headless frame.
    #[arg(short, long, default_value = "frame.png", value_name = "FILE")]
    pub output: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Warp,
    Blocks,
    Assemble,
    Prints,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Warp => Mode::Scatter,
            ModeArg::Blocks => Mode::CornerBurst,
            ModeArg::Assemble => Mode::ReassembleRandom,
            ModeArg::Prints => Mode::ReassembleCenter,
        }
    }
}

impl Args {
    pub fn scene_params(&self) -> SceneParams {
        SceneParams {
            sample_step: self.sample_step.max(1),
            influence_radius: self.influence_radius,
            friction: self.friction,
            stagger_unit: Duration::from_millis(self.stagger_ms),
        }
    }
}
