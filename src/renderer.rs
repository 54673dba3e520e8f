/*
 * Renderer Module
 *
 * This module handles the rendering of the particle scene in the window.
 * The scene paints in surface coordinates (origin top-left, y down) while
 * nannou draws around the window center with y up, so the renderer exposes
 * the window through the Surface trait and converts on the way.
 */

use nannou::prelude::*;
use tracing::warn;

use crate::app::Model;
use crate::surface::Surface;

// Window-backed drawing surface
pub struct NannouSurface<'a> {
    draw: &'a Draw,
    window_rect: Rect,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, window_rect: Rect) -> Self {
        Self { draw, window_rect }
    }

    // Center of a surface rectangle in nannou coordinates
    pub fn to_window(&self, x: f32, y: f32, width: f32, height: f32) -> Point2 {
        pt2(
            self.window_rect.left() + x + width / 2.0,
            self.window_rect.top() - y - height / 2.0,
        )
    }
}

impl Surface for NannouSurface<'_> {
    fn clear(&mut self) {
        self.draw.background().color(BLACK);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba<u8>) {
        let center = self.to_window(x, y, width, height);
        self.draw
            .rect()
            .xy(center)
            .w_h(width, height)
            .color(rgba(
                color.red as f32 / 255.0,
                color.green as f32 / 255.0,
                color.blue as f32 / 255.0,
                color.alpha as f32 / 255.0,
            ));
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();
    let mut surface = NannouSurface::new(&draw, app.window_rect());

    // Clear the background and draw every particle
    surface.clear();
    model.scene.draw(&mut surface);

    // Finish drawing
    if let Err(err) = draw.to_frame(app, &frame) {
        warn!(error = ?err, "failed to render frame");
    }

    // Draw the egui UI
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        warn!(error = ?err, "failed to render control panel");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_to_window_coordinates() {
        let draw = Draw::new();
        let rect = Rect::from_w_h(100.0, 60.0);
        let surface = NannouSurface::new(&draw, rect);

        // Top-left pixel square lands in the top-left corner
        assert_eq!(surface.to_window(0.0, 0.0, 2.0, 2.0), pt2(-49.0, 29.0));
        // Surface center is the window center
        assert_eq!(surface.to_window(49.0, 29.0, 2.0, 2.0), pt2(0.0, 0.0));
    }
}
