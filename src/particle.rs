/*
 * Particle Module
 *
 * This module defines the Particle struct and its behavior.
 * Each particle stands for one sampled pixel of the source image and:
 * 1. Is pushed away from the pointer when it comes close
 * 2. Loses velocity to friction every frame
 * 3. Eases back toward the pixel it was sampled from
 *
 * An inactive particle is still drawn but does not move at all.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::SceneParams;
use crate::scheduler::TaskHandle;
use crate::surface::Surface;
use crate::INITIAL_EASE;

#[derive(Debug, Clone)]
pub struct Particle {
    pub home_x: u32,
    pub home_y: u32,
    pub position: Point2,
    pub velocity: Vec2,
    pub color: Rgba<u8>,
    pub ease: f32,
    pub friction: f32,
    pub size: f32,
    pub active: bool,
    // Delayed activation, only ever set while inactive
    pub pending: Option<TaskHandle>,
}

impl Particle {
    // Create a particle anchored at a pixel, starting somewhere random on the surface
    pub fn new<R: Rng>(
        home_x: u32,
        home_y: u32,
        color: Rgba<u8>,
        width: f32,
        height: f32,
        params: &SceneParams,
        rng: &mut R,
    ) -> Self {
        let position = pt2(rng.gen::<f32>() * width, rng.gen::<f32>() * height);

        // Random initial velocity
        let vx = rng.gen_range(-1.0..1.0);
        let vy = rng.gen_range(-1.0..1.0);

        Self {
            home_x,
            home_y,
            position,
            velocity: vec2(vx, vy),
            color,
            ease: INITIAL_EASE,
            friction: params.friction,
            size: params.particle_size(),
            active: true,
            pending: None,
        }
    }

    #[inline]
    pub fn home(&self) -> Vec2 {
        vec2(self.home_x as f32, self.home_y as f32)
    }

    // Update the particle's velocity and position for one frame
    pub fn update(&mut self, pointer: Option<Point2>, influence_radius: f32) {
        if !self.active {
            return;
        }

        // Pointer repulsion, measured in squared distance
        if let Some(pointer) = pointer {
            let dx = pointer.x - self.position.x;
            let dy = pointer.y - self.position.y;
            let distance_sq = dx * dx + dy * dy;

            // A pointer exactly on the particle has no direction to push in
            if distance_sq > 0.0 && distance_sq < influence_radius {
                let force = -influence_radius / distance_sq;
                let angle = dy.atan2(dx);
                self.velocity.x += force * angle.cos();
                self.velocity.y += force * angle.sin();
            }
        }

        // Friction, then ease toward home
        self.velocity *= self.friction;
        self.position += self.velocity + (self.home() - self.position) * self.ease;
    }

    // Fill color: the sampled RGB, always painted fully opaque
    pub fn paint(&self) -> Rgba<u8> {
        rgba(self.color.red, self.color.green, self.color.blue, 255)
    }

    // Draw the particle as a filled square at its current position
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(self.position.x, self.position.y, self.size, self.size, self.paint());
    }
}
