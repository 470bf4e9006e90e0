//! # Column Items
//!
//! The units a row is made of.

use image::RgbaImage;

use crate::font::{Alignment, FontSpec};

/// One text or image unit inside a row.
///
/// `percent` is the share of the paper width the item occupies (1..=100),
/// or 0 to size it to its natural width. The allotment is always capped by
/// what is left of the row; values above 100 count as 100.
#[derive(Debug, Clone, Copy)]
pub enum ColumnItem<'a> {
    Text {
        text: &'a str,
        spec: FontSpec,
        percent: u8,
    },
    Image {
        image: &'a RgbaImage,
        align: Alignment,
        percent: u8,
    },
}

impl<'a> ColumnItem<'a> {
    pub fn text(text: &'a str, spec: FontSpec, percent: u8) -> Self {
        Self::Text {
            text,
            spec,
            percent,
        }
    }

    pub fn image(image: &'a RgbaImage, align: Alignment, percent: u8) -> Self {
        Self::Image {
            image,
            align,
            percent,
        }
    }

    /// Whether the item would draw nothing.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text { text, .. } => text.is_empty(),
            Self::Image { .. } => false,
        }
    }
}

/// A text column of the generic multi-column template.
///
/// Text and width travel together so a row can never have more widths
/// than texts or the other way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<'a> {
    pub text: &'a str,
    pub percent: u8,
}

impl<'a> Column<'a> {
    pub fn new(text: &'a str, percent: u8) -> Self {
        Self { text, percent }
    }
}

impl<'a> From<(&'a str, u8)> for Column<'a> {
    fn from((text, percent): (&'a str, u8)) -> Self {
        Self::new(text, percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_items() {
        let spec = FontSpec::new(18.0);
        assert!(ColumnItem::text("", spec, 0).is_blank());
        assert!(!ColumnItem::text(" ", spec, 0).is_blank());

        let image = RgbaImage::new(1, 1);
        assert!(!ColumnItem::image(&image, Alignment::Center, 100).is_blank());
    }

    #[test]
    fn test_column_from_pair() {
        let column: Column<'_> = ("Total", 60).into();
        assert_eq!(column, Column::new("Total", 60));
    }
}
