/*
 * Error Module
 *
 * Error types for image loading and frame export.
 *
 * The simulation itself has no failure modes: empty scenes, unset pointers
 * and transparent pixels are handled as policy, not errors. Only the I/O at
 * the edges of the program can fail.
 */

use std::path::PathBuf;

use thiserror::Error;

// Errors that can occur while loading a source image.
#[derive(Debug, Error)]
pub enum LoadError {
    // The file could not be opened or decoded.
    #[error("failed to load image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    // The background decoder went away before reporting a result.
    #[error("image loader thread disconnected")]
    Disconnected,
}

// Errors that can occur while writing a rendered frame.
#[derive(Debug, Error)]
pub enum ExportError {
    // The image encoder failed.
    #[error("failed to write frame to {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    // The pixel data did not match the buffer dimensions.
    #[error("pixel buffer does not match its {width}x{height} dimensions")]
    Buffer { width: u32, height: u32 },
}
