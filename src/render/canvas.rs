//! # Canvas Buffer
//!
//! A fixed-width RGBA raster whose height grows while a receipt is composed
//! and is trimmed once when it is finished.
//!
//! Growth is amortized: when a draw needs more rows than the buffer has, the
//! buffer is reallocated at 1.2x the required height so consecutive lines do
//! not each trigger a copy.
//!
//! ```text
//! ┌────────────── width (fixed) ──────────────┐
//! │ drawn rows            [0, bottom_y)       │
//! │ headroom (white)      [bottom_y, height)  │ ← dropped by trim_to_exact
//! └───────────────────────────────────────────┘
//! ```

use image::{Rgba, RgbaImage, imageops};

/// Opaque white paper.
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Opaque black ink.
pub const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Height of a freshly created canvas, in rows.
pub const INITIAL_HEIGHT: u32 = 40;

/// Headroom multiplier applied on each growth.
const GROWTH_FACTOR: f32 = 1.2;

/// Growable pixel buffer backing a receipt.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Allocate a `width × height` canvas filled with the background color.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, BACKGROUND),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Make sure at least `min_height` rows exist.
    ///
    /// No-op when the canvas is already tall enough. Otherwise the buffer is
    /// replaced by one of height `max(min_height, height) * 1.2`, with all
    /// existing pixels copied to the top-left and the rest white.
    pub fn grow_to(&mut self, min_height: u32) {
        let current = self.height();
        if current >= min_height {
            return;
        }
        let new_height = (min_height.max(current) as f32 * GROWTH_FACTOR) as u32;
        self.reallocate(new_height.max(min_height));
    }

    /// Reallocate to exactly `height` rows, dropping any headroom.
    pub fn trim_to_exact(&mut self, height: u32) {
        if self.height() == height {
            return;
        }
        self.reallocate(height);
    }

    fn reallocate(&mut self, height: u32) {
        let mut next = RgbaImage::from_pixel(self.width(), height, BACKGROUND);
        imageops::replace(&mut next, &self.pixels, 0, 0);
        self.pixels = next;
    }

    /// Mix ink into one pixel by `coverage` (0.0 = untouched, 1.0 = solid ink).
    ///
    /// Coordinates outside the canvas are ignored.
    pub fn blend_ink(&mut self, x: i64, y: i64, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        let coverage = coverage.clamp(0.0, 1.0);
        if coverage == 0.0 {
            return;
        }
        let pixel = self.pixels.get_pixel_mut(x as u32, y as u32);
        for (channel, ink) in pixel.0.iter_mut().take(3).zip(INK.0) {
            let mixed = *channel as f32 + (ink as f32 - *channel as f32) * coverage;
            *channel = mixed.round() as u8;
        }
    }

    /// Alpha-composite `image` with its top-left corner at `(x, y)`.
    ///
    /// The origin may lie outside the canvas; anything off-canvas is clipped.
    pub fn overlay(&mut self, image: &RgbaImage, x: i64, y: i64) {
        imageops::overlay(&mut self.pixels, image, x, y);
    }

    /// Read back one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }
}
