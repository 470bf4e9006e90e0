//! Image transport encoding: PNG, then base64.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::PrintslipError;

/// Encode an RGBA raster as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, PrintslipError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(PrintslipError::Image(format!(
            "cannot encode an empty {}x{} image",
            image.width(),
            image.height()
        )));
    }

    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e: image::ImageError| PrintslipError::Image(e.to_string()))?;

    Ok(png_bytes)
}

/// Standard-alphabet base64 with padding and no line breaks.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_png_decodes_to_same_dimensions() {
        let mut raster = RgbaImage::from_pixel(384, 30, Rgba([255, 255, 255, 255]));
        raster.put_pixel(10, 10, Rgba([0, 0, 0, 255]));

        let png = encode_png(&raster).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();

        assert_eq!(decoded.dimensions(), (384, 30));
        assert_eq!(decoded, raster);
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let raster = RgbaImage::new(384, 0);
        assert!(matches!(encode_png(&raster), Err(PrintslipError::Image(_))));
    }

    #[test]
    fn test_base64_has_no_line_breaks() {
        let encoded = encode_base64(&[0xAB; 200]);
        assert!(!encoded.contains('\n'));
        assert_eq!(encoded.len(), 268);
        assert_eq!(STANDARD.decode(&encoded).unwrap(), vec![0xAB; 200]);
    }
}
