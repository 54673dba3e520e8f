/*
 * Mode Module
 *
 * This module defines the four animation modes a user can trigger and the
 * single function that moves a particle into a mode.
 *
 * | Mode             | start position          | ease | size      | staggered |
 * |------------------|-------------------------|------|-----------|-----------|
 * | Scatter          | random in bounds        | 0.2  | step      | no        |
 * | CornerBurst      | random surface corner   | 0.1  | 3 x step  | no        |
 * | ReassembleRandom | random in bounds        | 0.5  | step      | yes       |
 * | ReassembleCenter | surface center          | 0.5  | step      | yes       |
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::SceneParams;
use crate::particle::Particle;
use crate::scheduler::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    // "warp": scatter across the surface and ease back
    Scatter,
    // "blocks": burst from the corners as oversized squares
    CornerBurst,
    // "assemble": scatter, then release particles one after another
    ReassembleRandom,
    // "prints": collapse to the center, then release one after another
    ReassembleCenter,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::Scatter,
        Mode::CornerBurst,
        Mode::ReassembleRandom,
        Mode::ReassembleCenter,
    ];

    // Label shown on the control panel
    pub fn label(self) -> &'static str {
        match self {
            Mode::Scatter => "Warp",
            Mode::CornerBurst => "Blocks",
            Mode::ReassembleRandom => "Assemble",
            Mode::ReassembleCenter => "Prints",
        }
    }

    // Pull strength toward home while in this mode
    pub fn ease(self) -> f32 {
        match self {
            Mode::Scatter => 0.2,
            Mode::CornerBurst => 0.1,
            Mode::ReassembleRandom | Mode::ReassembleCenter => 0.5,
        }
    }

    // Render size relative to the sample step
    pub fn size_multiplier(self) -> f32 {
        match self {
            Mode::CornerBurst => 3.0,
            _ => 1.0,
        }
    }

    // Whether particles are frozen and released with increasing delays
    pub fn is_staggered(self) -> bool {
        matches!(self, Mode::ReassembleRandom | Mode::ReassembleCenter)
    }

    // Starting position of a particle entering this mode
    pub fn origin<R: Rng>(self, width: f32, height: f32, rng: &mut R) -> Point2 {
        match self {
            Mode::Scatter | Mode::ReassembleRandom => {
                pt2(rng.gen::<f32>() * width, rng.gen::<f32>() * height)
            }
            Mode::CornerBurst => {
                let x = if rng.gen_bool(0.5) { 0.0 } else { width };
                let y = if rng.gen_bool(0.5) { 0.0 } else { height };
                pt2(x, y)
            }
            Mode::ReassembleCenter => pt2(width * 0.5, height * 0.5),
        }
    }
}

// Shared state a mode trigger threads through every particle
pub struct ModeContext<'a, R: Rng> {
    pub width: f32,
    pub height: f32,
    pub params: &'a SceneParams,
    pub stagger_counter: &'a mut u32,
    pub scheduler: &'a mut dyn Scheduler,
    pub rng: &'a mut R,
}

// Move one particle into a mode. `index` is the particle's position in the
// scene, used as the target of its delayed activation.
pub fn apply_mode<R: Rng>(
    particle: &mut Particle,
    index: usize,
    mode: Mode,
    ctx: &mut ModeContext<'_, R>,
) {
    particle.active = true;
    if let Some(handle) = particle.pending.take() {
        ctx.scheduler.cancel(handle);
    }

    particle.position = mode.origin(ctx.width, ctx.height, &mut *ctx.rng);
    particle.ease = mode.ease();
    particle.size = ctx.params.particle_size() * mode.size_multiplier();

    if mode.is_staggered() {
        particle.active = false;
        *ctx.stagger_counter += 1;
        let delay = ctx.params.stagger_delay(*ctx.stagger_counter);
        particle.pending = Some(ctx.scheduler.schedule(delay, index));
    }
}
