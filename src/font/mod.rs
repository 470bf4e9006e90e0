//! # Font Metrics
//!
//! The layout engine never rasterizes glyphs itself. It asks a
//! [`FontMetrics`] provider three questions (how wide is this text, how tall
//! is a line, how much of this text fits) and hands it a canvas to draw on.
//!
//! ## Providers
//!
//! | Provider | Glyph source | Notes |
//! |----------|--------------|-------|
//! | [`SpleenFont`] | Built-in Spleen 12x24 bitmap | Monospaced, deterministic, no files needed |
//! | [`TtfFont`] | Any TrueType/OpenType file | Anti-aliased, kerning-aware |
//!
//! ## Vertical Metrics
//!
//! Metrics follow the usual baseline convention: `ascent` is the signed
//! offset from the baseline to the top of the line box (negative, pointing
//! up) and `descent` the offset to its bottom. A line drawn with its top at
//! `y` has its baseline at `y - ascent`.

mod spleen;
mod ttf;

pub use spleen::SpleenFont;
pub use ttf::TtfFont;

use serde::{Deserialize, Serialize};

use crate::render::canvas::Canvas;

/// Horizontal alignment of content within its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Fraction of a span that lies left of the alignment anchor.
    ///
    /// Left-aligned content starts at its anchor, centered content straddles
    /// it, right-aligned content ends at it.
    #[inline]
    pub fn anchor_fraction(self) -> f32 {
        match self {
            Self::Left => 0.0,
            Self::Center => 0.5,
            Self::Right => 1.0,
        }
    }
}

/// Size, weight and alignment of a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    /// Text size in pixels
    pub size: f32,
    pub bold: bool,
    pub align: Alignment,
}

impl FontSpec {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            bold: false,
            align: Alignment::Left,
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}

/// Vertical metrics of one line of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    /// Baseline to top of the line box (negative).
    pub ascent: f32,
    /// Baseline to bottom of the line box.
    pub descent: f32,
}

impl LineMetrics {
    #[inline]
    pub fn height(&self) -> f32 {
        self.descent - self.ascent
    }
}

/// Result of fitting text into a maximum width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFit<'a> {
    /// Number of characters in `head`. Zero means not even one fits.
    pub chars: usize,
    /// The longest prefix that fits.
    pub head: &'a str,
    /// Whatever did not fit.
    pub tail: &'a str,
}

impl<'a> TextFit<'a> {
    /// Split `text` after its first `chars` characters.
    pub fn split(text: &'a str, chars: usize) -> Self {
        let end = text
            .char_indices()
            .nth(chars)
            .map(|(idx, _)| idx)
            .unwrap_or(text.len());
        let (head, tail) = text.split_at(end);
        Self {
            chars: head.chars().count(),
            head,
            tail,
        }
    }
}

/// Glyph measurement and drawing, supplied by the platform.
pub trait FontMetrics {
    /// Advance width of `text` in pixels.
    fn measure_width(&self, text: &str, spec: &FontSpec) -> f32;

    fn line_metrics(&self, spec: &FontSpec) -> LineMetrics;

    /// `descent - ascent`.
    fn line_height(&self, spec: &FontSpec) -> f32 {
        self.line_metrics(spec).height()
    }

    /// Longest character prefix of `text` no wider than `max_width`.
    ///
    /// Returns `chars == 0` when not even one character fits; callers treat
    /// that as "draw nothing", not as an error.
    fn break_to_fit<'a>(&self, text: &'a str, spec: &FontSpec, max_width: f32) -> TextFit<'a> {
        let mut fitted = 0;
        for (idx, ch) in text.char_indices() {
            if self.measure_width(&text[..idx + ch.len_utf8()], spec) > max_width {
                break;
            }
            fitted += 1;
        }
        TextFit::split(text, fitted)
    }

    /// Draw `text` starting at `x` with its baseline at `baseline_y`.
    fn draw_text(&self, canvas: &mut Canvas, text: &str, x: f32, baseline_y: f32, spec: &FontSpec);
}

impl<F: FontMetrics + ?Sized> FontMetrics for Box<F> {
    fn measure_width(&self, text: &str, spec: &FontSpec) -> f32 {
        (**self).measure_width(text, spec)
    }

    fn line_metrics(&self, spec: &FontSpec) -> LineMetrics {
        (**self).line_metrics(spec)
    }

    fn line_height(&self, spec: &FontSpec) -> f32 {
        (**self).line_height(spec)
    }

    fn break_to_fit<'a>(&self, text: &'a str, spec: &FontSpec, max_width: f32) -> TextFit<'a> {
        (**self).break_to_fit(text, spec, max_width)
    }

    fn draw_text(&self, canvas: &mut Canvas, text: &str, x: f32, baseline_y: f32, spec: &FontSpec) {
        (**self).draw_text(canvas, text, x, baseline_y, spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character is 10px wide, lines are 20px tall.
    struct FixedFont;

    impl FontMetrics for FixedFont {
        fn measure_width(&self, text: &str, _spec: &FontSpec) -> f32 {
            text.chars().count() as f32 * 10.0
        }

        fn line_metrics(&self, _spec: &FontSpec) -> LineMetrics {
            LineMetrics {
                ascent: -16.0,
                descent: 4.0,
            }
        }

        fn draw_text(&self, _: &mut Canvas, _: &str, _: f32, _: f32, _: &FontSpec) {}
    }

    #[test]
    fn test_anchor_fraction() {
        assert_eq!(Alignment::Left.anchor_fraction(), 0.0);
        assert_eq!(Alignment::Center.anchor_fraction(), 0.5);
        assert_eq!(Alignment::Right.anchor_fraction(), 1.0);
    }

    #[test]
    fn test_line_height_from_metrics() {
        assert_eq!(FixedFont.line_height(&FontSpec::new(20.0)), 20.0);
    }

    #[test]
    fn test_default_break_to_fit() {
        let spec = FontSpec::new(20.0);
        let fit = FixedFont.break_to_fit("abcdef", &spec, 35.0);
        assert_eq!(fit.chars, 3);
        assert_eq!(fit.head, "abc");
        assert_eq!(fit.tail, "def");
    }

    #[test]
    fn test_break_to_fit_nothing_fits() {
        let fit = FixedFont.break_to_fit("abc", &FontSpec::new(20.0), 9.0);
        assert_eq!(fit.chars, 0);
        assert_eq!(fit.head, "");
        assert_eq!(fit.tail, "abc");
    }

    #[test]
    fn test_break_to_fit_everything_fits() {
        let fit = FixedFont.break_to_fit("abc", &FontSpec::new(20.0), 30.0);
        assert_eq!(fit.chars, 3);
        assert!(fit.tail.is_empty());
    }

    #[test]
    fn test_split_multibyte() {
        let fit = TextFit::split("née: 5€", 6);
        assert_eq!(fit.head, "née: 5");
        assert_eq!(fit.tail, "€");
        assert_eq!(fit.chars, 6);
    }

    #[test]
    fn test_boxed_provider_delegates() {
        let boxed: Box<dyn FontMetrics> = Box::new(FixedFont);
        assert_eq!(boxed.measure_width("abcd", &FontSpec::new(12.0)), 40.0);
    }
}
