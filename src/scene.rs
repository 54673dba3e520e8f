/*
 * Scene Module
 *
 * This module defines the Scene that owns the whole particle simulation:
 * the surface size, the particles sampled from the current image, the
 * pointer snapshot, and the delayed activations of staggered modes.
 *
 * The scene is confined to one thread. The host writes the pointer from its
 * input callbacks and drives `tick`, `draw` and `update` from its frame loop;
 * no call ever overlaps another.
 */

use std::time::Duration;

use image::RgbaImage;
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::mode::{apply_mode, Mode, ModeContext};
use crate::params::SceneParams;
use crate::particle::Particle;
use crate::scheduler::{Expired, Scheduler, TimerQueue};
use crate::surface::{PixelBuffer, Surface};

// Last known pointer position in surface coordinates, written by the input
// handlers and read by every particle during the update pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    position: Option<Point2>,
}

impl Pointer {
    pub fn set(&mut self, x: f32, y: f32) {
        self.position = Some(pt2(x, y));
    }

    pub fn clear(&mut self) {
        self.position = None;
    }

    #[inline]
    pub fn position(&self) -> Option<Point2> {
        self.position
    }
}

pub struct Scene {
    width: u32,
    height: u32,
    params: SceneParams,
    pointer: Pointer,
    stagger_counter: u32,
    particles: Vec<Particle>,
    scheduler: Box<dyn Scheduler>,
    rng: StdRng,
}

impl Scene {
    // Create an empty scene for a surface of the given size
    pub fn new(width: u32, height: u32, params: SceneParams) -> Self {
        Self {
            width,
            height,
            params,
            pointer: Pointer::default(),
            stagger_counter: 0,
            particles: Vec::new(),
            scheduler: Box::new(TimerQueue::new()),
            rng: StdRng::from_entropy(),
        }
    }

    // Use a fixed random seed, for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    // Replace the delayed activation source
    pub fn with_scheduler(mut self, scheduler: Box<dyn Scheduler>) -> Self {
        self.scheduler = scheduler;
        self
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    // Parameters that take effect on the next frame (influence radius) or the
    // next sampling pass (sample step, friction)
    pub fn params_mut(&mut self) -> &mut SceneParams {
        &mut self.params
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn stagger_counter(&self) -> u32 {
        self.stagger_counter
    }

    pub fn scheduler(&self) -> &dyn Scheduler {
        self.scheduler.as_ref()
    }

    pub fn active_count(&self) -> usize {
        self.particles.iter().filter(|p| p.active).count()
    }

    #[inline]
    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer.set(x, y);
    }

    // The pointer left the surface
    pub fn clear_pointer(&mut self) {
        self.pointer.clear();
    }

    // Paint the image centered on the surface and sample it
    pub fn initialize(&mut self, image: &RgbaImage) {
        let pixels = PixelBuffer::from_image_centered(image, self.width, self.height);
        self.sample(&pixels);
    }

    // Build one particle per opaque sample of the pixel grid, replacing the
    // current particle set
    pub fn sample(&mut self, pixels: &PixelBuffer) {
        // Activations of the old particles must never reach the new ones
        self.scheduler.clear();
        self.stagger_counter = 0;
        self.particles.clear();

        let step = self.params.sample_step.max(1) as usize;
        let width = pixels.width().min(self.width);
        let height = pixels.height().min(self.height);
        let bytes = pixels.as_bytes();

        for y in (0..height).step_by(step) {
            for x in (0..width).step_by(step) {
                let index = pixels.index(x, y);
                let red = bytes[index];
                let green = bytes[index + 1];
                let blue = bytes[index + 2];
                let alpha = bytes[index + 3];

                if alpha > 0 {
                    let particle = Particle::new(
                        x,
                        y,
                        rgba(red, green, blue, alpha),
                        self.width as f32,
                        self.height as f32,
                        &self.params,
                        &mut self.rng,
                    );
                    self.particles.push(particle);
                }
            }
        }

        info!(
            particles = self.particles.len(),
            step,
            width = self.width,
            height = self.height,
            "sampled image"
        );
    }

    // Draw every particle in insertion order
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for particle in &self.particles {
            particle.draw(surface);
        }
    }

    // Advance every particle by one frame
    pub fn update(&mut self) {
        let pointer = self.pointer.position();
        let influence_radius = self.params.influence_radius;
        for particle in &mut self.particles {
            particle.update(pointer, influence_radius);
        }
    }

    // One frame of the animation loop: the surface shows the state left by
    // the previous update, then the simulation moves on
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        self.draw(surface);
        self.update();
    }

    // Advance the delayed activation clock and fire whatever became due
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        let expired = self.scheduler.advance(elapsed);
        let fired = expired.len();
        for task in expired {
            self.fire(task);
        }
        fired
    }

    // Deliver one delayed activation. Handles that are no longer the
    // particle's pending activation are ignored.
    pub fn fire(&mut self, task: Expired) {
        if let Some(particle) = self.particles.get_mut(task.target) {
            if particle.pending == Some(task.handle) {
                particle.pending = None;
                particle.active = true;
            }
        }
    }

    // Move every particle into a mode
    pub fn trigger(&mut self, mode: Mode) {
        self.stagger_counter = 0;

        let mut ctx = ModeContext {
            width: self.width as f32,
            height: self.height as f32,
            params: &self.params,
            stagger_counter: &mut self.stagger_counter,
            scheduler: self.scheduler.as_mut(),
            rng: &mut self.rng,
        };
        for (index, particle) in self.particles.iter_mut().enumerate() {
            apply_mode(particle, index, mode, &mut ctx);
        }

        debug!(?mode, particles = self.particles.len(), staggered = self.stagger_counter, "mode triggered");
    }

    pub fn warp(&mut self) {
        self.trigger(Mode::Scatter);
    }

    pub fn blocks(&mut self) {
        self.trigger(Mode::CornerBurst);
    }

    pub fn assemble(&mut self) {
        self.trigger(Mode::ReassembleRandom);
    }

    pub fn prints(&mut self) {
        self.trigger(Mode::ReassembleCenter);
    }
}
