//! # Column Placer
//!
//! Places one text or image item into the current row of a [`Surface`].
//!
//! ## Width Allocation
//!
//! Each item gets an *allotted width*, computed from its width percent:
//!
//! | Percent | Allotted width |
//! |---------|----------------|
//! | 0 | `min(remaining, natural width)` |
//! | 1..=100 | `min(remaining, paper * percent / 100)` |
//!
//! where `remaining` is what is left of the row. A zero allotment skips the
//! item. Text wider than its allotment wraps into sub-lines stacked below
//! each other, `line_height + LINE_SPACE` apart; images are never wrapped or
//! scaled.
//!
//! ## Alignment
//!
//! Alignment picks an anchor inside the allotment (left edge, middle, right
//! edge) and positions each sub-line relative to it: left-aligned text
//! starts at the anchor, centered text straddles it, right-aligned text ends
//! at it. Images are offset by the same fraction of `allotted - image_width`.

use image::RgbaImage;
use tracing::{debug, warn};

use super::canvas::{Canvas, INITIAL_HEIGHT};
use super::cursor::{LINE_SPACE, RowCursor};
use crate::font::{Alignment, FontMetrics, FontSpec};

/// Canvas and cursor of one receipt in progress.
#[derive(Debug, Clone)]
pub struct Surface {
    canvas: Canvas,
    cursor: RowCursor,
}

impl Surface {
    pub fn new(width: u32) -> Self {
        Self {
            canvas: Canvas::new(width, INITIAL_HEIGHT),
            cursor: RowCursor::new(width as f32),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn cursor(&self) -> &RowCursor {
        &self.cursor
    }

    pub fn new_row(&mut self) {
        self.cursor.new_row();
    }

    /// Append `height` blank pixels below the current row.
    pub fn feed(&mut self, height: f32) {
        self.cursor.feed(height);
        self.canvas.grow_to(self.cursor.bottom_y().ceil() as u32);
    }

    /// Trim the canvas to the cursor's bottom edge and hand it over.
    pub fn finish(mut self) -> RgbaImage {
        self.canvas.trim_to_exact(self.cursor.bottom_y().ceil() as u32);
        self.canvas.into_image()
    }
}

/// Allotted width for an item of `natural` width at `percent` of the paper.
pub fn allotted_width(cursor: &RowCursor, percent: u8, natural: f32) -> f32 {
    let remaining = cursor.remaining_width();
    let wanted = match percent.min(100) {
        0 => natural,
        p => cursor.width() * p as f32 / 100.0,
    };
    remaining.min(wanted).max(0.0)
}

/// Split `text` into the sub-lines it occupies inside `max_width`.
///
/// Stops early if some remainder cannot fit even one character.
pub fn wrap_lines<'a, F: FontMetrics + ?Sized>(
    font: &F,
    text: &'a str,
    spec: &FontSpec,
    max_width: f32,
) -> Vec<&'a str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let fit = font.break_to_fit(rest, spec, max_width);
        if fit.chars == 0 {
            if !lines.is_empty() {
                warn!(
                    dropped = fit.tail,
                    max_width, "remainder does not fit its column, dropping it"
                );
            }
            break;
        }
        lines.push(fit.head);
        rest = fit.tail;
    }
    lines
}

/// Place a text item in the current row.
pub fn place_text<F: FontMetrics + ?Sized>(
    surface: &mut Surface,
    font: &F,
    text: &str,
    spec: &FontSpec,
    percent: u8,
) {
    if text.is_empty() {
        return;
    }

    let natural = if percent == 0 {
        font.measure_width(text, spec)
    } else {
        0.0
    };
    let allotted = allotted_width(&surface.cursor, percent, natural);
    if allotted <= 0.0 {
        debug!(text, percent, "no width left in row, skipping text");
        return;
    }

    let left_x = surface.cursor.left_x();
    let top_y = surface.cursor.top_y();
    let lines = wrap_lines(font, text, spec, allotted);
    if lines.is_empty() {
        warn!(text, allotted, "column too narrow for a single character");
        surface.cursor.advance(allotted, top_y);
        return;
    }

    let metrics = font.line_metrics(spec);
    let line_height = metrics.height();
    let fraction = spec.align.anchor_fraction();
    let anchor_x = left_x + allotted * fraction;

    let mut line_top = top_y;
    let mut bottom = top_y;
    for line in lines {
        bottom = line_top + line_height;
        surface.canvas.grow_to(bottom.ceil() as u32);

        let x = anchor_x - font.measure_width(line, spec) * fraction;
        font.draw_text(&mut surface.canvas, line, x, line_top - metrics.ascent, spec);

        line_top = bottom + LINE_SPACE;
    }

    surface.cursor.advance(allotted, bottom);
}

/// Place an image item in the current row. Images are drawn whole.
pub fn place_image(surface: &mut Surface, image: &RgbaImage, align: Alignment, percent: u8) {
    let natural = image.width() as f32;
    let allotted = allotted_width(&surface.cursor, percent, natural);
    if allotted <= 0.0 {
        debug!(percent, "no width left in row, skipping image");
        return;
    }

    let offset = (allotted - natural) * align.anchor_fraction();
    let x = surface.cursor.left_x() + offset;
    let top = surface.cursor.top_y();
    let bottom = top + image.height() as f32;

    surface.canvas.grow_to(bottom.ceil() as u32);
    surface.canvas.overlay(image, x.round() as i64, top.round() as i64);
    surface.cursor.advance(allotted, bottom);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::SpleenFont;
    use crate::render::canvas::{BACKGROUND, INK};

    /// 20px text: 10px cells, 20px lines.
    fn spec() -> FontSpec {
        FontSpec::new(20.0)
    }

    fn inked_columns(surface: &Surface) -> Vec<u32> {
        let mut xs: Vec<u32> = surface
            .canvas()
            .as_image()
            .enumerate_pixels()
            .filter(|(_, _, p)| **p != BACKGROUND)
            .map(|(x, _, _)| x)
            .collect();
        xs.sort_unstable();
        xs.dedup();
        xs
    }

    #[test]
    fn test_auto_width_uses_measured_text() {
        let mut surface = Surface::new(384);
        place_text(&mut surface, &SpleenFont, "abc", &spec(), 0);
        assert_eq!(surface.cursor().left_x(), 30.0);
        assert_eq!(surface.cursor().bottom_y(), 20.0);
    }

    #[test]
    fn test_auto_width_capped_by_remaining() {
        let mut surface = Surface::new(100);
        place_text(&mut surface, &SpleenFont, "abcdef", &spec(), 0);
        place_text(&mut surface, &SpleenFont, "abcdefghij", &spec(), 0);
        // 60 + min(40, 100) fills the row and wraps; the 40px column
        // holds four cells per sub-line, so the second item takes three.
        assert_eq!(surface.cursor().left_x(), 0.0);
        assert_eq!(surface.cursor().top_y(), 3.0 * 20.0 + 3.0 * LINE_SPACE);
    }

    #[test]
    fn test_percent_width() {
        let mut surface = Surface::new(384);
        place_text(&mut surface, &SpleenFont, "a", &spec(), 25);
        assert_eq!(surface.cursor().left_x(), 96.0);
    }

    #[test]
    fn test_percent_over_100_is_clamped() {
        let cursor = RowCursor::new(200.0);
        assert_eq!(allotted_width(&cursor, 250, 0.0), 200.0);
    }

    #[test]
    fn test_empty_text_is_noop() {
        let mut surface = Surface::new(384);
        let before = *surface.cursor();
        place_text(&mut surface, &SpleenFont, "", &spec(), 100);
        assert_eq!(*surface.cursor(), before);
        assert_eq!(surface.canvas().height(), INITIAL_HEIGHT);
    }

    #[test]
    fn test_zero_width_is_skipped() {
        let cursor = RowCursor::new(100.0);
        assert_eq!(allotted_width(&cursor, 0, 0.0), 0.0);

        let mut surface = Surface::new(100);
        let before = *surface.cursor();
        let empty = RgbaImage::new(0, 5);
        place_image(&mut surface, &empty, Alignment::Left, 0);
        assert_eq!(*surface.cursor(), before);
        assert_eq!(surface.canvas().height(), INITIAL_HEIGHT);
    }

    #[test]
    fn test_too_narrow_column_draws_nothing() {
        let mut surface = Surface::new(100);
        surface.cursor.advance(95.0, 0.0);
        place_text(&mut surface, &SpleenFont, "W", &spec(), 100);

        assert!(inked_columns(&surface).is_empty());
        // The sliver is consumed, so the row is full and wraps.
        assert_eq!(surface.cursor().left_x(), 0.0);
        assert_eq!(surface.cursor().top_y(), LINE_SPACE);
    }

    #[test]
    fn test_overflowing_text_wraps_into_sub_lines() {
        let mut surface = Surface::new(100);
        // 25px column fits two 10px cells per sub-line
        place_text(&mut surface, &SpleenFont, "abcdefghij", &spec(), 25);

        let line = SpleenFont.line_height(&spec());
        let expected_bottom = 5.0 * line + 4.0 * LINE_SPACE;
        assert_eq!(surface.cursor().bottom_y(), expected_bottom);
        assert_eq!(surface.cursor().left_x(), 25.0);
        assert!(surface.canvas().height() as f32 >= expected_bottom);
        assert!(inked_columns(&surface).iter().all(|&x| x < 25));
    }

    #[test]
    fn test_wrap_lines_splits_evenly() {
        let lines = wrap_lines(&SpleenFont, "abcdefg", &spec(), 30.0);
        assert_eq!(lines, vec!["abc", "def", "g"]);
    }

    #[test]
    fn test_right_alignment_ends_at_column_edge() {
        let mut surface = Surface::new(200);
        place_text(&mut surface, &SpleenFont, "ab", &spec().align(Alignment::Right), 50);
        let xs = inked_columns(&surface);
        assert!(!xs.is_empty());
        assert!(*xs.first().unwrap() >= 80);
        assert!(*xs.last().unwrap() < 100);
    }

    #[test]
    fn test_center_alignment_straddles_middle() {
        let mut surface = Surface::new(200);
        place_text(&mut surface, &SpleenFont, "ab", &spec().align(Alignment::Center), 100);
        let xs = inked_columns(&surface);
        assert!(*xs.first().unwrap() >= 90);
        assert!(*xs.last().unwrap() < 110);
    }

    #[test]
    fn test_image_centered_in_column() {
        let mut surface = Surface::new(100);
        let stamp = RgbaImage::from_pixel(10, 6, INK);
        place_image(&mut surface, &stamp, Alignment::Center, 100);

        assert_eq!(inked_columns(&surface), (45..55).collect::<Vec<_>>());
        // A full-width column fills the row
        assert_eq!(surface.cursor().top_y(), 6.0 + LINE_SPACE);
    }

    #[test]
    fn test_image_auto_width_is_natural_width() {
        let mut surface = Surface::new(100);
        let stamp = RgbaImage::from_pixel(30, 12, INK);
        place_image(&mut surface, &stamp, Alignment::Left, 0);
        assert_eq!(surface.cursor().left_x(), 30.0);
        assert_eq!(surface.cursor().bottom_y(), 12.0);
    }

    #[test]
    fn test_feed_grows_canvas() {
        let mut surface = Surface::new(100);
        surface.feed(100.0);
        assert_eq!(surface.cursor().bottom_y(), 100.0);
        assert!(surface.canvas().height() >= 100);
    }

    #[test]
    fn test_finish_trims_to_bottom() {
        let mut surface = Surface::new(100);
        place_text(&mut surface, &SpleenFont, "abc", &spec(), 100);
        let image = surface.finish();
        assert_eq!(image.width(), 100);
        assert_eq!(image.height(), 20 + LINE_SPACE as u32);
    }
}
