//! TTF font rendering for custom fonts.
//!
//! Renders text as anti-aliased coverage blended straight into the canvas
//! using ab_glyph. Fonts are loaded at runtime from bytes or a file, with an
//! optional dedicated bold face. Without one, bold is synthesized by
//! double-striking one pixel to the right.

use std::path::Path;

use ab_glyph::{Font, FontArc, GlyphId, ScaleFont, point};

use super::{FontMetrics, FontSpec, LineMetrics, TextFit};
use crate::error::PrintslipError;
use crate::render::canvas::Canvas;

/// A TrueType/OpenType font family.
#[derive(Clone)]
pub struct TtfFont {
    regular: FontArc,
    bold: Option<FontArc>,
}

impl std::fmt::Debug for TtfFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfFont")
            .field("has_bold_face", &self.bold.is_some())
            .finish()
    }
}

fn load(data: Vec<u8>) -> Result<FontArc, PrintslipError> {
    FontArc::try_from_vec(data).map_err(|e| PrintslipError::Font(e.to_string()))
}

impl TtfFont {
    /// Load a regular face from raw font data.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, PrintslipError> {
        Ok(Self {
            regular: load(data)?,
            bold: None,
        })
    }

    /// Load a regular face from a font file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PrintslipError> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Use a dedicated bold face instead of synthesized bold.
    pub fn with_bold(mut self, data: Vec<u8>) -> Result<Self, PrintslipError> {
        self.bold = Some(load(data)?);
        Ok(self)
    }

    pub fn with_bold_path<P: AsRef<Path>>(self, path: P) -> Result<Self, PrintslipError> {
        self.with_bold(std::fs::read(path)?)
    }

    /// Face to draw with, and whether bold must be synthesized.
    fn face(&self, spec: &FontSpec) -> (&FontArc, bool) {
        match (&self.bold, spec.bold) {
            (Some(bold), true) => (bold, false),
            (None, true) => (&self.regular, true),
            (_, false) => (&self.regular, false),
        }
    }

    /// Caret advance of every character, kerning folded into each step.
    fn advances(&self, text: &str, spec: &FontSpec) -> Vec<f32> {
        let (font, _) = self.face(spec);
        let scaled = font.as_scaled(spec.size);
        let mut prev: Option<GlyphId> = None;
        text.chars()
            .map(|ch| {
                let id = font.glyph_id(ch);
                let kern = prev.map(|p| scaled.kern(p, id)).unwrap_or(0.0);
                prev = Some(id);
                kern + scaled.h_advance(id)
            })
            .collect()
    }
}

impl FontMetrics for TtfFont {
    fn measure_width(&self, text: &str, spec: &FontSpec) -> f32 {
        self.advances(text, spec).iter().sum()
    }

    fn line_metrics(&self, spec: &FontSpec) -> LineMetrics {
        let (font, _) = self.face(spec);
        let scaled = font.as_scaled(spec.size);
        // ab_glyph measures ascent upwards; the layout measures downwards.
        LineMetrics {
            ascent: -scaled.ascent(),
            descent: -scaled.descent(),
        }
    }

    fn break_to_fit<'a>(&self, text: &'a str, spec: &FontSpec, max_width: f32) -> TextFit<'a> {
        let mut width = 0.0;
        let mut fitted = 0;
        for advance in self.advances(text, spec) {
            width += advance;
            if width > max_width {
                break;
            }
            fitted += 1;
        }
        TextFit::split(text, fitted)
    }

    fn draw_text(&self, canvas: &mut Canvas, text: &str, x: f32, baseline_y: f32, spec: &FontSpec) {
        let (font, synthesize_bold) = self.face(spec);
        let scaled = font.as_scaled(spec.size);
        let strikes: &[i64] = if synthesize_bold { &[0, 1] } else { &[0] };

        let mut caret_x = x;
        let mut prev: Option<GlyphId> = None;

        for ch in text.chars() {
            let id = font.glyph_id(ch);
            if let Some(p) = prev {
                caret_x += scaled.kern(p, id);
            }
            prev = Some(id);

            let glyph = id.with_scale_and_position(spec.size, point(caret_x, baseline_y));
            caret_x += scaled.h_advance(id);

            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|px, py, coverage| {
                    let gx = bounds.min.x as i64 + px as i64;
                    let gy = bounds.min.y as i64 + py as i64;
                    for &strike in strikes {
                        canvas.blend_ink(gx + strike, gy, coverage);
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_font_data() {
        let result = TtfFont::from_bytes(vec![0u8; 16]);
        assert!(matches!(result, Err(PrintslipError::Font(_))));
    }

    #[test]
    fn test_missing_font_file() {
        let result = TtfFont::from_path("/nonexistent/printslip/font.ttf");
        assert!(matches!(result, Err(PrintslipError::Io(_))));
    }
}
