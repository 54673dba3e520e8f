/*
 * UI Module
 *
 * This module contains the control panel built with nannou_egui. It offers
 * the four mode buttons, the pointer influence slider, a pause toggle and
 * the debug statistics. Button presses are returned to the app instead of
 * being applied here.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::mode::Mode;
use crate::params::SceneParams;

// What the user asked for this frame
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct UiResponse {
    pub mode: Option<Mode>,
}

// Update the UI and return the requested mode, if any
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SceneParams,
    paused: &mut bool,
    show_debug: &mut bool,
    image_name: Option<&str>,
    debug_info: &DebugInfo,
) -> UiResponse {
    let mut response = UiResponse::default();

    let ctx = egui.begin_frame();

    egui::Window::new("Pixel Particles")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            match image_name {
                Some(name) => ui.label(format!("Image: {}", name)),
                None => ui.label("Drop an image file on the window"),
            };

            ui.separator();

            ui.horizontal(|ui| {
                for mode in Mode::ALL {
                    if ui.button(mode.label()).clicked() {
                        response.mode = Some(mode);
                    }
                }
            });
            ui.label("Keys 1-4 trigger the modes, Space pauses");

            ui.collapsing("Pointer", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.influence_radius, SceneParams::get_influence_radius_range())
                        .text("Influence Radius"),
                );
            });

            ui.checkbox(paused, "Pause Simulation");
            ui.checkbox(show_debug, "Show Debug Info");

            if *show_debug {
                ui.separator();
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Particles: {}", debug_info.particles));
                ui.label(format!("Moving: {}", debug_info.active_particles));
                ui.label(format!("Waiting to release: {}", debug_info.pending_activations));
                ui.label(format!("Released last frame: {}", debug_info.activations_last_frame));
            }
        });

    response
}
