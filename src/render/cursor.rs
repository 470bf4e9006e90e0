//! # Row Cursor
//!
//! Tracks where the next column item goes. Items are placed left to right
//! inside a row; the row's bottom edge is the lowest point any item reached.
//!
//! ```text
//! top_y    ─┬───────────┬──────────────┬─────────
//!           │  item A   │   item B     │ left_x →
//!           │           │  (2 lines)   │
//! bottom_y ─┴───────────┴──────────────┴─────────
//!           ↕ LINE_SPACE
//! next row ──────────────────────────────────────
//! ```

/// Vertical gap between rows and between wrapped sub-lines, in pixels.
pub const LINE_SPACE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowCursor {
    width: f32,
    top_y: f32,
    bottom_y: f32,
    left_x: f32,
}

impl RowCursor {
    /// Cursor at the origin of a `width`-pixel-wide canvas.
    pub fn new(width: f32) -> Self {
        Self {
            width,
            top_y: 0.0,
            bottom_y: 0.0,
            left_x: 0.0,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn top_y(&self) -> f32 {
        self.top_y
    }

    #[inline]
    pub fn bottom_y(&self) -> f32 {
        self.bottom_y
    }

    #[inline]
    pub fn left_x(&self) -> f32 {
        self.left_x
    }

    /// Width still free in the current row.
    #[inline]
    pub fn remaining_width(&self) -> f32 {
        (self.width - self.left_x).max(0.0)
    }

    /// Start a new row below everything placed so far.
    pub fn new_row(&mut self) {
        self.left_x = 0.0;
        self.top_y = self.bottom_y + LINE_SPACE;
        self.bottom_y = self.top_y;
    }

    /// Record an item of width `consumed` whose lowest pixel is `reached_bottom`.
    ///
    /// A row that is filled to the paper edge wraps immediately.
    pub fn advance(&mut self, consumed: f32, reached_bottom: f32) {
        self.left_x = (self.left_x + consumed).min(self.width);
        self.bottom_y = self.bottom_y.max(reached_bottom);
        if self.left_x >= self.width {
            self.new_row();
        }
    }

    /// Push the bottom edge down by `height` blank pixels.
    pub fn feed(&mut self, height: f32) {
        self.bottom_y += height.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_origin() {
        let cursor = RowCursor::new(384.0);
        assert_eq!(cursor.top_y(), 0.0);
        assert_eq!(cursor.bottom_y(), 0.0);
        assert_eq!(cursor.left_x(), 0.0);
        assert_eq!(cursor.remaining_width(), 384.0);
    }

    #[test]
    fn test_new_row_adds_line_space() {
        let mut cursor = RowCursor::new(384.0);
        cursor.advance(100.0, 24.0);
        cursor.new_row();
        assert_eq!(cursor.left_x(), 0.0);
        assert_eq!(cursor.top_y(), 26.0);
        assert_eq!(cursor.bottom_y(), 26.0);
    }

    #[test]
    fn test_advance_keeps_lowest_bottom() {
        let mut cursor = RowCursor::new(384.0);
        cursor.advance(100.0, 50.0);
        cursor.advance(100.0, 20.0);
        assert_eq!(cursor.left_x(), 200.0);
        assert_eq!(cursor.bottom_y(), 50.0);
        assert_eq!(cursor.top_y(), 0.0);
    }

    #[test]
    fn test_full_row_wraps() {
        let mut cursor = RowCursor::new(384.0);
        cursor.advance(200.0, 30.0);
        cursor.advance(184.0, 30.0);
        assert_eq!(cursor.left_x(), 0.0);
        assert_eq!(cursor.top_y(), 32.0);
    }

    #[test]
    fn test_left_x_never_exceeds_width() {
        let mut cursor = RowCursor::new(100.0);
        cursor.advance(60.0, 10.0);
        assert!(cursor.left_x() <= cursor.width());
        cursor.advance(60.0, 10.0);
        assert_eq!(cursor.left_x(), 0.0);
    }

    #[test]
    fn test_feed_moves_bottom_only() {
        let mut cursor = RowCursor::new(384.0);
        cursor.feed(100.0);
        assert_eq!(cursor.top_y(), 0.0);
        assert_eq!(cursor.bottom_y(), 100.0);
        cursor.feed(-5.0);
        assert_eq!(cursor.bottom_y(), 100.0);
    }
}
