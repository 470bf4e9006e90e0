//! # Receipt
//!
//! The finished raster: exactly as wide as the paper and exactly as tall as
//! its content.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::PrintslipError;
use crate::transport::encode;

/// A rendered receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    image: RgbaImage,
}

impl Receipt {
    pub(crate) fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// A receipt with no rows.
    pub fn is_empty(&self) -> bool {
        self.image.height() == 0
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Encode as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, PrintslipError> {
        encode::encode_png(&self.image)
    }

    /// Encode as PNG, then base64, ready for a print service.
    pub fn to_base64(&self) -> Result<String, PrintslipError> {
        Ok(encode::encode_base64(&self.to_png()?))
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), PrintslipError> {
        std::fs::write(path, self.to_png()?)?;
        Ok(())
    }
}
