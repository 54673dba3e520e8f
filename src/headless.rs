/*
 * Headless Module
 *
 * Runs the animation loop without a window: every frame is rendered into a
 * software PixelBuffer at a fixed 60 Hz step, and the last frame is written
 * to disk. Useful for previews and for checking a configuration on machines
 * without a GPU.
 */

use std::path::Path;
use std::time::Duration;

use image::RgbaImage;
use tracing::info;

use crate::error::ExportError;
use crate::mode::Mode;
use crate::params::SceneParams;
use crate::scene::Scene;
use crate::surface::PixelBuffer;

pub const FRAME_STEP: Duration = Duration::from_micros(16_667);

pub struct HeadlessRun {
    pub width: u32,
    pub height: u32,
    pub params: SceneParams,
    pub seed: Option<u64>,
    pub frames: u32,
    pub mode: Option<Mode>,
}

// Render `frames` frames of the image and return the last one
pub fn render(run: &HeadlessRun, image: &RgbaImage) -> PixelBuffer {
    let mut scene = Scene::new(run.width, run.height, run.params.clone());
    if let Some(seed) = run.seed {
        scene = scene.with_seed(seed);
    }
    scene.initialize(image);

    let mut surface = PixelBuffer::new(run.width, run.height);
    for frame in 0..run.frames {
        scene.tick(FRAME_STEP);
        scene.frame(&mut surface);

        if frame == 0 {
            if let Some(mode) = run.mode {
                scene.trigger(mode);
            }
        }
    }

    info!(
        frames = run.frames,
        particles = scene.particles().len(),
        active = scene.active_count(),
        "headless render finished"
    );
    surface
}

// Render and write the last frame
pub fn render_to_file(run: &HeadlessRun, image: &RgbaImage, output: &Path) -> Result<(), ExportError> {
    let surface = render(run, image);
    surface.save(output)?;
    info!(path = %output.display(), "wrote frame");
    Ok(())
}
