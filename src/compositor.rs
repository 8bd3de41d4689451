//! Mode dispatch and accessory compositing.
//!
//! Owns the RGBA overlay surface. Each frame the surface is cleared and the
//! active category's image is drawn at its anchor-relative rectangle. A
//! category whose image never loaded draws nothing; the accessory simply
//! does not appear.

use crate::assets::{Accessory, AccessoryStore};
use crate::constants::{
    BRACELET_HEIGHT, BRACELET_MARGIN, BRACELET_WIDTH, EARRING_HEIGHT, EARRING_LEFT_X_OFFSET,
    EARRING_RIGHT_X_OFFSET, EARRING_WIDTH, NECKLACE_HEIGHT, NECKLACE_WIDTH, NECKLACE_X_OFFSET,
    RING_HEIGHT, RING_WIDTH, RING_X_OFFSET,
};
use crate::landmarks::Anchor;
use crate::smoothing::AnchorSmoother;
use crate::utils::to_draw_coord;
use image::{imageops, RgbaImage};

/// One accessory draw: top-left corner in surface pixels plus footprint.
/// Coordinates may be negative; drawing clips at the surface edges.
#[derive(Debug, Clone, Copy)]
struct Placement {
    x: i64,
    y: i64,
    width: u32,
    height: u32,
}

/// Composites the active accessory category onto the overlay surface
pub struct Compositor {
    surface: RgbaImage,
}

impl Compositor {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: RgbaImage::new(width, height),
        }
    }

    /// Recreate the surface at the video's native resolution.
    ///
    /// Called once when video metadata becomes available.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface = RgbaImage::new(width, height);
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    /// The composited overlay of the most recent frame
    pub fn surface(&self) -> &RgbaImage {
        &self.surface
    }

    /// Clear the surface and draw the active category.
    ///
    /// Anchored categories draw only when their smoothed anchors exist,
    /// i.e. after the first detection; the bracelet ignores landmarks
    /// entirely and always draws at its two fixed screen positions.
    pub fn render(&mut self, mode: Accessory, store: &AccessoryStore, smoother: &AnchorSmoother) {
        self.clear();

        let Some(asset) = store.image(mode) else {
            return;
        };

        match mode {
            Accessory::Earring => {
                let (Some(left), Some(right)) = (
                    smoother.average(Anchor::LeftEar),
                    smoother.average(Anchor::RightEar),
                ) else {
                    return;
                };
                // Same image on both sides, not mirrored; the asymmetric
                // offsets keep it visually centered on each ear.
                self.draw(
                    &asset.image,
                    Placement {
                        x: to_draw_coord(left.x + EARRING_LEFT_X_OFFSET),
                        y: to_draw_coord(left.y),
                        width: EARRING_WIDTH,
                        height: EARRING_HEIGHT,
                    },
                );
                self.draw(
                    &asset.image,
                    Placement {
                        x: to_draw_coord(right.x + EARRING_RIGHT_X_OFFSET),
                        y: to_draw_coord(right.y),
                        width: EARRING_WIDTH,
                        height: EARRING_HEIGHT,
                    },
                );
            }
            Accessory::Necklace => {
                let Some(chin) = smoother.average(Anchor::Chin) else {
                    return;
                };
                self.draw(
                    &asset.image,
                    Placement {
                        x: to_draw_coord(chin.x + NECKLACE_X_OFFSET),
                        y: to_draw_coord(chin.y),
                        width: NECKLACE_WIDTH,
                        height: NECKLACE_HEIGHT,
                    },
                );
            }
            Accessory::Ring => {
                // Nose tip stands in as the anchor; there is no hand tracking
                let Some(nose) = smoother.average(Anchor::NoseTip) else {
                    return;
                };
                self.draw(
                    &asset.image,
                    Placement {
                        x: to_draw_coord(nose.x + RING_X_OFFSET),
                        y: to_draw_coord(nose.y),
                        width: RING_WIDTH,
                        height: RING_HEIGHT,
                    },
                );
            }
            Accessory::Bracelet => {
                let y = i64::from(self.height().saturating_sub(BRACELET_HEIGHT + BRACELET_MARGIN));
                let right_x = i64::from(self.width().saturating_sub(BRACELET_WIDTH + BRACELET_MARGIN));
                for x in [i64::from(BRACELET_MARGIN), right_x] {
                    self.draw(
                        &asset.image,
                        Placement {
                            x,
                            y,
                            width: BRACELET_WIDTH,
                            height: BRACELET_HEIGHT,
                        },
                    );
                }
            }
        }
    }

    fn clear(&mut self) {
        self.surface.fill(0);
    }

    fn draw(&mut self, image: &RgbaImage, placement: Placement) {
        let scaled = imageops::resize(image, placement.width, placement.height, imageops::FilterType::Triangle);
        imageops::overlay(&mut self.surface, &scaled, placement.x, placement.y);
    }
}
