/*
 * Pixel Particles - Module Definitions
 *
 * This file defines the module structure for the pixel particle application.
 * The simulation core (scene, particle, mode, scheduler, surface) has no
 * dependency on the window; the nannou host lives in app, input, renderer and ui.
 */

// Re-export key components for easier access
pub use particle::Particle;
pub use mode::Mode;
pub use scene::{Pointer, Scene};
pub use params::SceneParams;
pub use scheduler::{Expired, Scheduler, TaskHandle, TimerQueue};
pub use surface::{PixelBuffer, Surface};
pub use error::{ExportError, LoadError};
pub use debug::DebugInfo;
pub use app::Model;

// Define modules
pub mod particle;
pub mod mode;
pub mod scene;
pub mod params;
pub mod scheduler;
pub mod surface;
pub mod loader;
pub mod error;
pub mod debug;
pub mod cli;
pub mod headless;
pub mod app;
pub mod ui;
pub mod renderer;
pub mod input;

// Constants
pub const DEFAULT_SAMPLE_STEP: u32 = 3;
pub const DEFAULT_INFLUENCE_RADIUS: f32 = 3000.0;
pub const DEFAULT_FRICTION: f32 = 0.95;
pub const INITIAL_EASE: f32 = 0.2;
