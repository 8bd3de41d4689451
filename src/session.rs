//! The try-on session: explicit owner of every piece of mutable state.
//!
//! Mode, loaded images, anchor histories, and the overlay surface all live
//! here instead of free-floating globals, so multiple sessions can coexist
//! and tests can drive one deterministically.

use crate::assets::{Accessory, AccessoryImage, AccessoryStore};
use crate::compositor::Compositor;
use crate::config::Config;
use crate::landmarks::{extract_anchors, LandmarkFrame};
use crate::loader::{load, AssetLoader, LoadCompletion};
use crate::smoothing::AnchorSmoother;
use crate::Result;
use image::RgbaImage;
use std::path::PathBuf;

/// A single try-on session over one video feed
pub struct TryOnSession {
    mode: Accessory,
    store: AccessoryStore,
    smoother: AnchorSmoother,
    loader: AssetLoader,
    compositor: Compositor,
    asset_root: PathBuf,
}

impl TryOnSession {
    /// Create a session and load the default variant of every category.
    ///
    /// A default image that fails to load leaves its category empty; the
    /// category then draws nothing until a later selection succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let mut store = AccessoryStore::new(config.assets.reload_policy);
        for category in Accessory::ALL {
            let source = category.default_source(&config.assets.root);
            let generation = store.begin_reload(category, source.clone());
            let image = load(&source).map(|image| AccessoryImage { image, source });
            store.apply_completion(category, generation, image);
        }

        Ok(Self {
            mode: Accessory::Earring,
            store,
            smoother: AnchorSmoother::new(config.smoothing.window),
            loader: AssetLoader::new(),
            compositor: Compositor::new(config.surface.width, config.surface.height),
            asset_root: config.assets.root.clone(),
        })
    }

    /// Currently active accessory category
    pub fn mode(&self) -> Accessory {
        self.mode
    }

    /// Switch the active category.
    ///
    /// Takes effect on the very next frame. Histories of anchors the new
    /// category does not use are kept, just unused while inactive.
    pub fn select_mode(&mut self, mode: Accessory) {
        log::info!("Selecting mode: {}", mode.name());
        self.mode = mode;
    }

    /// Request a different catalog file for a category.
    ///
    /// Fire and forget: the load completes in the background and is applied
    /// at a later frame boundary. On failure the category keeps its
    /// previous image.
    pub fn change_accessory(&mut self, category: Accessory, filename: &str) {
        let source = self.asset_root.join(category.dir_name()).join(filename);
        let generation = self.store.begin_reload(category, source.clone());
        self.loader.request(category, generation, source);
    }

    /// The ten catalog paths for a category, for the selection UI
    pub fn catalog(&self, category: Accessory) -> Vec<PathBuf> {
        category.catalog(&self.asset_root)
    }

    /// Resize the overlay surface to the video's native resolution.
    ///
    /// Called once when video metadata becomes available.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        log::info!("Resizing overlay surface to {width}x{height}");
        self.compositor.resize(width, height);
    }

    /// Apply one load completion to the store.
    ///
    /// Normally called from [`on_frame`](Self::on_frame) for completions
    /// the loader delivered; exposed so tests can inject completions in a
    /// chosen order.
    pub fn apply_completion(&mut self, completion: LoadCompletion) -> bool {
        self.store
            .apply_completion(completion.category, completion.generation, completion.image)
    }

    /// Process one detector frame: drain pending load completions, update
    /// anchor histories if a face is present, then clear and redraw the
    /// overlay.
    ///
    /// With zero faces the histories keep their previous samples, so the
    /// smoothed anchors stay pinned at their last known positions.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame's landmark list is too short to
    /// contain the anchor indices.
    pub fn on_frame(&mut self, frame: &LandmarkFrame) -> Result<()> {
        for completion in self.loader.poll() {
            self.apply_completion(completion);
        }

        if let Some(face) = frame.primary_face() {
            let anchors = extract_anchors(face, self.compositor.width(), self.compositor.height())?;
            self.smoother.observe(&anchors);
        }

        self.compositor.render(self.mode, &self.store, &self.smoother);
        Ok(())
    }

    /// The composited overlay of the most recent frame
    pub fn overlay(&self) -> &RgbaImage {
        self.compositor.surface()
    }

    pub fn smoother(&self) -> &AnchorSmoother {
        &self.smoother
    }

    pub fn store(&self) -> &AccessoryStore {
        &self.store
    }
}
