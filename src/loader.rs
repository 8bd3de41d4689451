//! Asynchronous accessory image loading.
//!
//! Decoding happens off the frame thread; completions travel back over a
//! channel and are drained at frame boundaries, so every piece of session
//! state is still touched only on the frame thread. In-flight loads are
//! never cancelled; how a late completion interacts with a newer request is
//! the store's [`ReloadPolicy`](crate::assets::ReloadPolicy).

use crate::assets::{Accessory, AccessoryImage};
use crossbeam_channel::{unbounded, Receiver, Sender};
use image::RgbaImage;
use std::path::{Path, PathBuf};
use std::thread;

/// Result of one asynchronous load request.
///
/// `image` is `None` when the file could not be read or decoded; the store
/// treats that as "keep the previous image."
#[derive(Debug)]
pub struct LoadCompletion {
    pub category: Accessory,
    pub generation: u64,
    pub image: Option<AccessoryImage>,
}

/// Decode an image file, resolving to `None` on any failure
pub fn load(path: &Path) -> Option<RgbaImage> {
    match image::open(path) {
        Ok(decoded) => Some(decoded.to_rgba8()),
        Err(e) => {
            log::warn!("Failed to load accessory image {}: {e}", path.display());
            None
        }
    }
}

/// Hands decode work to background threads and collects their completions
pub struct AssetLoader {
    tx: Sender<LoadCompletion>,
    rx: Receiver<LoadCompletion>,
}

impl AssetLoader {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// Start a fire-and-forget load for a category.
    ///
    /// The completion carries `generation` back so the store can tell a
    /// stale result from a current one.
    pub fn request(&self, category: Accessory, generation: u64, source: PathBuf) {
        log::info!("Loading {} image from {}", category.name(), source.display());
        let tx = self.tx.clone();
        thread::spawn(move || {
            let image = load(&source).map(|image| AccessoryImage {
                image,
                source: source.clone(),
            });
            // Receiver dropping just means the session is gone
            let _ = tx.send(LoadCompletion {
                category,
                generation,
                image,
            });
        });
    }

    /// Drain every completion that has arrived so far, without blocking
    pub fn poll(&self) -> Vec<LoadCompletion> {
        self.rx.try_iter().collect()
    }
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_none() {
        assert!(load(Path::new("definitely/not/here.png")).is_none());
    }

    #[test]
    fn test_request_delivers_completion() {
        let loader = AssetLoader::new();
        loader.request(Accessory::Ring, 7, PathBuf::from("definitely/not/here.png"));

        // Block on the channel directly; poll() is for the frame loop
        let completion = loader.rx.recv().unwrap();
        assert_eq!(completion.category, Accessory::Ring);
        assert_eq!(completion.generation, 7);
        assert!(completion.image.is_none());
    }
}
