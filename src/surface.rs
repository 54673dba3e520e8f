/*
 * Surface Module
 *
 * This module defines the drawing surface the scene paints onto and a
 * software RGBA8 raster that implements it. The raster is used for the
 * initial sampling pass (the image is composited centered on a transparent
 * surface and read back) and for headless rendering.
 *
 * Coordinates are surface pixels: origin at the top-left corner, y down.
 */

use std::path::Path;

use image::RgbaImage;
use nannou::color::Rgba;

use crate::error::ExportError;

// A fixed-size 2D raster the scene can paint onto
pub trait Surface {
    // Clear the whole surface
    fn clear(&mut self);

    // Fill an axis-aligned rectangle with a straight-alpha color
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba<u8>);
}

// RGBA8888 pixel buffer, row-major, straight alpha
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    // Create a fully transparent buffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    // Composite an image centered on a transparent surface of the given size.
    // Parts of the image falling outside the surface are clipped.
    pub fn from_image_centered(image: &RgbaImage, width: u32, height: u32) -> Self {
        let mut buffer = Self::new(width, height);

        let offset_x = (width as i64 - image.width() as i64).div_euclid(2);
        let offset_y = (height as i64 - image.height() as i64).div_euclid(2);

        for (ix, iy, pixel) in image.enumerate_pixels() {
            let x = ix as i64 + offset_x;
            let y = iy as i64 + offset_y;
            if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
                continue;
            }
            let index = buffer.index(x as u32, y as u32);
            buffer.pixels[index..index + 4].copy_from_slice(&pixel.0);
        }

        buffer
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    // Raw RGBA bytes, 4 per pixel
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    // Byte offset of a pixel
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    // Read back one pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]])
    }

    // Write the buffer as an image file, format chosen from the extension
    pub fn save(&self, path: &Path) -> Result<(), ExportError> {
        let image = RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or(ExportError::Buffer {
                width: self.width,
                height: self.height,
            })?;

        image.save(path).map_err(|source| ExportError::Encode {
            path: path.to_path_buf(),
            source,
        })
    }

    // Clamp a span to [0, limit), rounding edges to the nearest pixel boundary
    fn span(start: f32, extent: f32, limit: u32) -> Option<(u32, u32)> {
        if !start.is_finite() || !extent.is_finite() {
            return None;
        }
        let from = start.round().max(0.0);
        let to = (start + extent).round().min(limit as f32);
        if to <= from {
            return None;
        }
        Some((from as u32, to as u32))
    }
}

// Source-over blend of one channel, alpha in 0..=255
#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u16) -> u8 {
    let result = src as u16 * alpha + dst as u16 * (255 - alpha);
    ((result + 1 + (result >> 8)) >> 8) as u8
}

impl Surface for PixelBuffer {
    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba<u8>) {
        let Some((x0, x1)) = Self::span(x, width, self.width) else {
            return;
        };
        let Some((y0, y1)) = Self::span(y, height, self.height) else {
            return;
        };

        let alpha = color.alpha;
        if alpha == 0 {
            return;
        }

        for py in y0..y1 {
            for px in x0..x1 {
                let i = self.index(px, py);
                let dest = &mut self.pixels[i..i + 4];
                if alpha == 255 {
                    dest.copy_from_slice(&[color.red, color.green, color.blue, 255]);
                } else {
                    let a = alpha as u16;
                    dest[0] = blend_channel(color.red, dest[0], a);
                    dest[1] = blend_channel(color.green, dest[1], a);
                    dest[2] = blend_channel(color.blue, dest[2], a);
                    dest[3] = blend_channel(255, dest[3], a);
                }
            }
        }
    }
}
