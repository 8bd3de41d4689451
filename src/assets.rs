//! Accessory categories, catalog conventions, and the loaded-image store.

use crate::constants::CATALOG_VARIANTS;
use crate::{Error, Result};
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Accessory category. Exactly one category is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessory {
    Earring,
    Necklace,
    Ring,
    Bracelet,
}

impl Accessory {
    /// All categories, in catalog order
    pub const ALL: [Accessory; 4] = [
        Accessory::Earring,
        Accessory::Necklace,
        Accessory::Ring,
        Accessory::Bracelet,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Accessory::Earring => "earring",
            Accessory::Necklace => "necklace",
            Accessory::Ring => "ring",
            Accessory::Bracelet => "bracelet",
        }
    }

    /// Catalog directory for this category, relative to the asset root
    pub fn dir_name(self) -> &'static str {
        match self {
            Accessory::Earring => "earrings",
            Accessory::Necklace => "necklaces",
            Accessory::Ring => "rings",
            Accessory::Bracelet => "bracelets",
        }
    }

    /// Catalog file name of variant `n` (`earring3.png` for n = 3)
    pub fn variant_file(self, n: usize) -> String {
        format!("{}{n}.png", self.name())
    }

    /// The ten catalog paths the selection UI enumerates for this category
    pub fn catalog(self, root: &Path) -> Vec<PathBuf> {
        (1..=CATALOG_VARIANTS)
            .map(|n| root.join(self.dir_name()).join(self.variant_file(n)))
            .collect()
    }

    /// Path of the variant selected at startup
    pub fn default_source(self, root: &Path) -> PathBuf {
        root.join(self.dir_name()).join(self.variant_file(1))
    }
}

impl std::str::FromStr for Accessory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "earring" => Ok(Accessory::Earring),
            "necklace" => Ok(Accessory::Necklace),
            "ring" => Ok(Accessory::Ring),
            "bracelet" => Ok(Accessory::Bracelet),
            _ => Err(Error::InvalidInput(format!("Unknown accessory category: {s}"))),
        }
    }
}

/// A decoded accessory image together with the path it was loaded from
#[derive(Debug, Clone)]
pub struct AccessoryImage {
    pub image: RgbaImage,
    pub source: PathBuf,
}

/// Resolution policy for reloads of the same category that complete out of
/// request order.
///
/// `LastResolved` applies every successful completion in arrival order, so
/// a slow older load can clobber a newer one. `LastRequested` discards
/// completions whose generation is not newer than the last applied one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReloadPolicy {
    #[default]
    LastResolved,
    LastRequested,
}

/// Per-category slot state
#[derive(Debug, Clone, Default)]
struct Slot {
    current: Option<AccessoryImage>,
    requested_source: Option<PathBuf>,
    requested_generation: u64,
    applied_generation: u64,
}

/// Loaded images and reload bookkeeping for every category.
///
/// A failed load never clears a slot: the previous image stays active as a
/// stale-but-valid fallback.
#[derive(Debug, Clone)]
pub struct AccessoryStore {
    slots: [Slot; 4],
    policy: ReloadPolicy,
}

impl AccessoryStore {
    pub fn new(policy: ReloadPolicy) -> Self {
        Self {
            slots: std::array::from_fn(|_| Slot::default()),
            policy,
        }
    }

    fn index(category: Accessory) -> usize {
        match category {
            Accessory::Earring => 0,
            Accessory::Necklace => 1,
            Accessory::Ring => 2,
            Accessory::Bracelet => 3,
        }
    }

    /// Currently active image for a category, if one has ever loaded
    pub fn image(&self, category: Accessory) -> Option<&AccessoryImage> {
        self.slots[Self::index(category)].current.as_ref()
    }

    /// Most recently requested source path for a category
    pub fn requested_source(&self, category: Accessory) -> Option<&Path> {
        self.slots[Self::index(category)].requested_source.as_deref()
    }

    /// Record a reload request and return the generation assigned to it.
    ///
    /// The returned generation must accompany the eventual completion so
    /// staleness is detectable.
    pub fn begin_reload(&mut self, category: Accessory, source: PathBuf) -> u64 {
        let slot = &mut self.slots[Self::index(category)];
        slot.requested_generation += 1;
        slot.requested_source = Some(source);
        slot.requested_generation
    }

    /// Apply a load completion to its category slot.
    ///
    /// Returns `true` if the slot's image changed. A `None` image (load
    /// failure) is always a no-op; under `ReloadPolicy::LastRequested` a
    /// completion whose generation is not newer than the last applied one
    /// is discarded as stale.
    pub fn apply_completion(
        &mut self,
        category: Accessory,
        generation: u64,
        image: Option<AccessoryImage>,
    ) -> bool {
        let slot = &mut self.slots[Self::index(category)];

        let Some(image) = image else {
            log::debug!("Load for {} generation {generation} failed, keeping previous image", category.name());
            return false;
        };

        if self.policy == ReloadPolicy::LastRequested && generation <= slot.applied_generation {
            log::debug!(
                "Discarding stale {} completion: generation {generation} <= {}",
                category.name(),
                slot.applied_generation
            );
            return false;
        }

        slot.applied_generation = generation;
        slot.current = Some(image);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(width: u32) -> AccessoryImage {
        AccessoryImage {
            image: RgbaImage::new(width, 10),
            source: PathBuf::from(format!("{width}.png")),
        }
    }

    #[test]
    fn test_catalog_paths() {
        let paths = Accessory::Earring.catalog(Path::new("assets"));
        assert_eq!(paths.len(), CATALOG_VARIANTS);
        assert_eq!(paths[0], PathBuf::from("assets/earrings/earring1.png"));
        assert_eq!(paths[9], PathBuf::from("assets/earrings/earring10.png"));
    }

    #[test]
    fn test_failed_load_keeps_previous() {
        let mut store = AccessoryStore::new(ReloadPolicy::LastResolved);
        let generation = store.begin_reload(Accessory::Necklace, PathBuf::from("a.png"));
        assert!(store.apply_completion(Accessory::Necklace, generation, Some(test_image(1))));

        let generation = store.begin_reload(Accessory::Necklace, PathBuf::from("b.png"));
        assert!(!store.apply_completion(Accessory::Necklace, generation, None));
        assert_eq!(store.image(Accessory::Necklace).unwrap().image.width(), 1);

        // The requested source still reflects the failed selection
        assert_eq!(
            store.requested_source(Accessory::Necklace),
            Some(Path::new("b.png"))
        );
    }

    #[test]
    fn test_last_resolved_lets_older_win() {
        let mut store = AccessoryStore::new(ReloadPolicy::LastResolved);
        let gen_a = store.begin_reload(Accessory::Earring, PathBuf::from("a.png"));
        let gen_b = store.begin_reload(Accessory::Earring, PathBuf::from("b.png"));

        // B resolves first, then A: the older request ends up active
        assert!(store.apply_completion(Accessory::Earring, gen_b, Some(test_image(2))));
        assert!(store.apply_completion(Accessory::Earring, gen_a, Some(test_image(1))));
        assert_eq!(store.image(Accessory::Earring).unwrap().image.width(), 1);
    }

    #[test]
    fn test_last_requested_discards_stale() {
        let mut store = AccessoryStore::new(ReloadPolicy::LastRequested);
        let gen_a = store.begin_reload(Accessory::Earring, PathBuf::from("a.png"));
        let gen_b = store.begin_reload(Accessory::Earring, PathBuf::from("b.png"));

        assert!(store.apply_completion(Accessory::Earring, gen_b, Some(test_image(2))));
        assert!(!store.apply_completion(Accessory::Earring, gen_a, Some(test_image(1))));
        assert_eq!(store.image(Accessory::Earring).unwrap().image.width(), 2);
    }
}
