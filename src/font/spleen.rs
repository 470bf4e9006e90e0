//! Built-in bitmap font.
//!
//! Uses the Spleen 12x24 glyphs, scaled nearest-neighbour to the requested
//! text size. Every cell is `size` pixels tall and `size / 2` pixels wide,
//! which keeps the 1:2 aspect of the source font.

use spleen_font::{FONT_12X24, PSF2Font};

use super::{FontMetrics, FontSpec, LineMetrics, TextFit};
use crate::render::canvas::Canvas;

const SOURCE_WIDTH: usize = 12;
const SOURCE_HEIGHT: usize = 24;

/// Share of the cell above the baseline (19 of 24 rows in the source font).
const ASCENT_RATIO: f32 = 0.8;

/// Monospaced bitmap font with synthesized bold.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpleenFont;

impl SpleenFont {
    /// Cell size `(width, height)` in pixels for a text size.
    fn cell(spec: &FontSpec) -> (usize, usize) {
        let height = spec.size.round().max(1.0) as usize;
        let width = (spec.size / 2.0).round().max(1.0) as usize;
        (width, height)
    }
}

impl FontMetrics for SpleenFont {
    fn measure_width(&self, text: &str, spec: &FontSpec) -> f32 {
        let (cell_w, _) = Self::cell(spec);
        (text.chars().count() * cell_w) as f32
    }

    fn line_metrics(&self, spec: &FontSpec) -> LineMetrics {
        let (_, cell_h) = Self::cell(spec);
        let above = (cell_h as f32 * ASCENT_RATIO).round();
        LineMetrics {
            ascent: -above,
            descent: cell_h as f32 - above,
        }
    }

    fn break_to_fit<'a>(&self, text: &'a str, spec: &FontSpec, max_width: f32) -> TextFit<'a> {
        let (cell_w, _) = Self::cell(spec);
        let fitting = (max_width.max(0.0) / cell_w as f32).floor() as usize;
        TextFit::split(text, fitting)
    }

    fn draw_text(&self, canvas: &mut Canvas, text: &str, x: f32, baseline_y: f32, spec: &FontSpec) {
        let (cell_w, cell_h) = Self::cell(spec);
        let metrics = self.line_metrics(spec);
        let top = (baseline_y + metrics.ascent).round() as i64;
        let left = x.round() as i64;
        let strikes: &[i64] = if spec.bold { &[0, 1] } else { &[0] };

        let mut font = PSF2Font::new(FONT_12X24).expect("embedded Spleen font is valid");

        for (i, ch) in text.chars().enumerate() {
            let origin_x = left + (i * cell_w) as i64;
            let utf8 = ch.to_string();

            let mut source = vec![false; SOURCE_WIDTH * SOURCE_HEIGHT];
            match font.glyph_for_utf8(utf8.as_bytes()) {
                Some(glyph) => {
                    for (row_y, row) in glyph.enumerate() {
                        for (col_x, on) in row.enumerate() {
                            if row_y < SOURCE_HEIGHT && col_x < SOURCE_WIDTH {
                                source[row_y * SOURCE_WIDTH + col_x] = on;
                            }
                        }
                    }
                }
                None => draw_box(&mut source, SOURCE_WIDTH, SOURCE_HEIGHT),
            }

            for dy in 0..cell_h {
                let sy = dy * SOURCE_HEIGHT / cell_h;
                for dx in 0..cell_w {
                    let sx = dx * SOURCE_WIDTH / cell_w;
                    if !source[sy * SOURCE_WIDTH + sx] {
                        continue;
                    }
                    for &strike in strikes {
                        canvas.blend_ink(origin_x + dx as i64 + strike, top + dy as i64, 1.0);
                    }
                }
            }
        }
    }
}

/// Outline box for characters the font does not cover.
fn draw_box(glyph: &mut [bool], width: usize, height: usize) {
    for x in 0..width {
        glyph[x] = true;
        glyph[(height - 1) * width + x] = true;
    }
    for y in 0..height {
        glyph[y * width] = true;
        glyph[y * width + width - 1] = true;
    }
}
