/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and scene statistics to be displayed in the UI.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Number of particles, and how many of them are moving
 * - Delayed activations still waiting to fire
 */

use std::time::Duration;

use crate::scene::Scene;

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub particles: usize,
    pub active_particles: usize,
    pub pending_activations: usize,
    pub activations_last_frame: usize,
}

impl DebugInfo {
    // Refresh the scene statistics after a frame
    pub fn record_scene(&mut self, scene: &Scene, activations: usize) {
        self.particles = scene.particles().len();
        self.active_particles = scene.active_count();
        self.pending_activations = scene.scheduler().pending();
        self.activations_last_frame = activations;
    }
}
