/*
 * Input Module
 *
 * This module handles user input events for the particle window.
 *
 * Features:
 * - Pointer tracking in surface coordinates for particle repulsion
 * - Keys 1-4 trigger the four modes, Space pauses the simulation
 * - Image files dropped on the window are loaded in the background
 * - Raw events are forwarded to egui
 */

use std::path::PathBuf;

use nannou::prelude::*;
use tracing::info;

use crate::app::Model;
use crate::mode::Mode;

// Convert a nannou window position (center origin, y up) to surface coordinates
pub fn window_to_surface(pos: Point2, window_rect: Rect) -> Point2 {
    pt2(pos.x - window_rect.left(), window_rect.top() - pos.y)
}

// Mode bound to a number key
pub fn mode_for_key(key: Key) -> Option<Mode> {
    match key {
        Key::Key1 => Some(Mode::Scatter),
        Key::Key2 => Some(Mode::CornerBurst),
        Key::Key3 => Some(Mode::ReassembleRandom),
        Key::Key4 => Some(Mode::ReassembleCenter),
        _ => None,
    }
}

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let surface_pos = window_to_surface(pos, app.window_rect());
    model.scene.set_pointer(surface_pos.x, surface_pos.y);
}

// The pointer left the window: stop repelling particles
pub fn mouse_exited(_app: &App, model: &mut Model) {
    model.scene.clear_pointer();
}

// Keyboard shortcuts, ignored while egui has keyboard focus
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    if let Some(mode) = mode_for_key(key) {
        model.requested_mode = Some(mode);
    } else if key == Key::Space {
        model.paused = !model.paused;
        info!(paused = model.paused, "toggled pause");
    }
}

// A file was dropped onto the window
pub fn dropped_file(_app: &App, model: &mut Model, path: PathBuf) {
    info!(path = %path.display(), "loading dropped image");
    model.loader.request(path);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
