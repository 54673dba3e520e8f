/*
 * Loader Module
 *
 * Background image loading.
 *
 * Decoding a large photo takes long enough to stall a frame, so the window
 * hands paths to an ImageLoader, which decodes on a worker thread and
 * reports through a channel polled once per frame.
 */

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use image::RgbaImage;
use tracing::debug;

use crate::error::LoadError;

// A decoded source image and where it came from.
#[derive(Debug)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub image: RgbaImage,
}

// Decode an image file to RGBA8 on the calling thread.
pub fn load_image(path: &Path) -> Result<LoadedImage, LoadError> {
    let image = image::open(path)
        .map_err(|source| LoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    debug!(path = %path.display(), width = image.width(), height = image.height(), "decoded image");

    Ok(LoadedImage {
        path: path.to_path_buf(),
        image,
    })
}

// Decodes images off the main thread.
pub struct ImageLoader {
    sender: Sender<Result<LoadedImage, LoadError>>,
    receiver: Receiver<Result<LoadedImage, LoadError>>,
    in_flight: usize,
}

impl ImageLoader {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            in_flight: 0,
        }
    }

    // Start decoding `path` in the background.
    pub fn request(&mut self, path: PathBuf) {
        let sender = self.sender.clone();
        self.in_flight += 1;
        thread::spawn(move || {
            // The receiver only goes away when the window closes
            let _ = sender.send(load_image(&path));
        });
    }

    // Number of requests that have not reported yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    // Take one finished load, if any.
    pub fn poll(&mut self) -> Option<Result<LoadedImage, LoadError>> {
        if self.in_flight == 0 {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(result) => {
                self.in_flight -= 1;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.in_flight = 0;
                Some(Err(LoadError::Disconnected))
            }
        }
    }
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}
