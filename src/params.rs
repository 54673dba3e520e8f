/*
 * Scene Parameters Module
 *
 * This module defines the SceneParams struct that contains the tunable
 * parameters of the particle scene. The sample step is fixed once an image
 * has been sampled; the influence radius can be adjusted from the UI while
 * the simulation is running.
 */

use std::time::Duration;

use crate::{DEFAULT_FRICTION, DEFAULT_INFLUENCE_RADIUS, DEFAULT_SAMPLE_STEP};

// Parameters for the scene, set from the command line and the control panel
#[derive(Debug, Clone, PartialEq)]
pub struct SceneParams {
    // Pixel grid spacing used for sampling, also the base particle size
    pub sample_step: u32,
    // Squared-distance threshold for pointer repulsion
    pub influence_radius: f32,
    // Velocity damping applied every frame
    pub friction: f32,
    // Delay added per particle during a staggered reassembly
    pub stagger_unit: Duration,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            sample_step: DEFAULT_SAMPLE_STEP,
            influence_radius: DEFAULT_INFLUENCE_RADIUS,
            friction: DEFAULT_FRICTION,
            stagger_unit: Duration::from_millis(1),
        }
    }
}

impl SceneParams {
    // Base render size of a particle in surface pixels
    pub fn particle_size(&self) -> f32 {
        self.sample_step as f32
    }

    // Delay for the n-th particle of a staggered trigger
    pub fn stagger_delay(&self, counter: u32) -> Duration {
        self.stagger_unit * counter
    }

    // Get parameter ranges for UI sliders
    pub fn get_influence_radius_range() -> std::ops::RangeInclusive<f32> {
        1.0..=20000.0
    }
}
