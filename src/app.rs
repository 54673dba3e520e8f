/*
 * Application Module
 *
 * This module defines the main application model and the per-frame logic of
 * the particle window. It wires the scene to nannou: window creation, input
 * handlers, background image loading and the control panel.
 *
 * nannou calls `update` and then `view` for every frame, so each frame shows
 * the state produced by the most recent update and the next update runs
 * after it has been drawn.
 */

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::{error, info};

use crate::cli::Args;
use crate::debug::DebugInfo;
use crate::input::{dropped_file, key_pressed, mouse_exited, mouse_moved, raw_window_event};
use crate::loader::ImageLoader;
use crate::mode::Mode;
use crate::params::SceneParams;
use crate::renderer::view;
use crate::scene::Scene;
use crate::ui;

// Startup configuration handed from main to the nannou model function
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub width: u32,
    pub height: u32,
    pub params: SceneParams,
    pub seed: Option<u64>,
    pub image: Option<PathBuf>,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            params: SceneParams::default(),
            seed: None,
            image: None,
        }
    }
}

impl From<&Args> for LaunchOptions {
    fn from(args: &Args) -> Self {
        Self {
            width: args.width,
            height: args.height,
            params: args.scene_params(),
            seed: args.seed,
            image: args.image.clone(),
        }
    }
}

// nannou builds the model from a plain function, so options travel through here
static LAUNCH_OPTIONS: OnceLock<LaunchOptions> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub scene: Scene,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub loader: ImageLoader,
    pub paused: bool,
    pub show_debug: bool,
    pub image_name: Option<String>,
    // Mode requested from the keyboard, applied at the next update
    pub requested_mode: Option<Mode>,
}

// Open the window and run until it is closed
pub fn run(options: LaunchOptions) {
    if LAUNCH_OPTIONS.set(options).is_err() {
        error!("application launched twice");
        return;
    }
    nannou::app(model).update(update).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let options = LAUNCH_OPTIONS.get().cloned().unwrap_or_default();

    // Create the main window; the surface size is fixed from here on
    let window_id = app
        .new_window()
        .title("Pixel Particles")
        .size(options.width, options.height)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_exited(mouse_exited)
        .key_pressed(key_pressed)
        .dropped_file(dropped_file)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to create the main window");

    // Get the window
    let window = app.window(window_id).expect("main window closed during setup");

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create the scene
    let mut scene = Scene::new(options.width, options.height, options.params.clone());
    if let Some(seed) = options.seed {
        scene = scene.with_seed(seed);
    }

    // Start decoding the startup image, if any
    let mut loader = ImageLoader::new();
    if let Some(path) = options.image.clone() {
        info!(path = %path.display(), "loading startup image");
        loader.request(path);
    }

    Model {
        scene,
        egui,
        debug_info: DebugInfo::default(),
        loader,
        paused: false,
        show_debug: false,
        image_name: None,
        requested_mode: None,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Replace the particles with any image that finished decoding
    while let Some(result) = model.loader.poll() {
        match result {
            Ok(loaded) => {
                model.scene.initialize(&loaded.image);
                model.image_name = loaded
                    .path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned());
            }
            Err(err) => error!(error = %err, "failed to load image"),
        }
    }

    // Update UI
    let response = ui::update_ui(
        &mut model.egui,
        model.scene.params_mut(),
        &mut model.paused,
        &mut model.show_debug,
        model.image_name.as_deref(),
        &model.debug_info,
    );
    let requested = model.requested_mode.take();

    let activations = step_scene(
        &mut model.scene,
        update.since_last,
        model.paused,
        response.mode.or(requested),
    );

    model.debug_info.record_scene(&model.scene, activations);
}

// Advance the scene by one frame, then apply any requested mode.
// The frame's elapsed time passed before the request, so it must not count
// toward the new stagger delays. Delayed activations wait while paused.
pub fn step_scene(scene: &mut Scene, elapsed: Duration, paused: bool, mode: Option<Mode>) -> usize {
    let mut activations = 0;
    if !paused {
        activations = scene.tick(elapsed);
        scene.update();
    }

    if let Some(mode) = mode {
        scene.trigger(mode);
    }

    activations
}
