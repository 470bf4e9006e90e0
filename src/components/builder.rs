//! # Receipt Builder
//!
//! Row templates on top of the column placer.
//!
//! Every template places its columns left to right and then starts a new
//! row. A template whose text fields are all empty does nothing at all.
//!
//! | Template | Percents | Alignment |
//! |----------|----------|-----------|
//! | [`text`](ReceiptBuilder::text) | 100 | caller |
//! | [`text_pair`](ReceiptBuilder::text_pair) | 0, 100 | Left, Right |
//! | [`text_triple`](ReceiptBuilder::text_triple) | 33, 34, 34 | Left, Center, Right |
//! | [`text_quad`](ReceiptBuilder::text_quad) | 25 each | Left, Center, Center, Right |
//! | [`columns`](ReceiptBuilder::columns) | caller | Left, Center..., Right |
//! | [`image`](ReceiptBuilder::image) | 100 | Center |

use image::RgbaImage;
use tracing::{debug, error};

use super::column::{Column, ColumnItem};
use super::receipt::Receipt;
use crate::font::{Alignment, FontMetrics, FontSpec, SpleenFont};
use crate::printer::PaperWidth;
use crate::render::placer::{self, Surface};

/// Most columns the generic template accepts.
pub const MAX_COLUMNS: usize = 4;

/// Composes one receipt.
///
/// The canvas is allocated on the first drawing call. [`finish`](Self::finish)
/// consumes the builder, so nothing can be drawn after the receipt is handed
/// over.
///
/// ## Example
///
/// ```
/// use printslip::components::ReceiptBuilder;
/// use printslip::font::Alignment;
/// use printslip::printer::{PaperWidth, PrintSize};
///
/// let mut builder = ReceiptBuilder::new(PaperWidth::Normal);
/// builder
///     .text("Print Test", PrintSize::TYPE, true, Alignment::Center)
///     .text_pair("merchant:", "123456789012345", PrintSize::NORMAL, false)
///     .text("$11.23", PrintSize::AMOUNT, true, Alignment::Center)
///     .feed(PrintSize::TAIL_FEED);
///
/// let receipt = builder.finish();
/// assert_eq!(receipt.width(), 384);
/// ```
#[derive(Debug)]
pub struct ReceiptBuilder<F: FontMetrics = SpleenFont> {
    paper: PaperWidth,
    font: F,
    surface: Option<Surface>,
}

impl ReceiptBuilder<SpleenFont> {
    /// Builder using the built-in bitmap font.
    pub fn new(paper: PaperWidth) -> Self {
        Self::with_font(paper, SpleenFont)
    }
}

impl<F: FontMetrics> ReceiptBuilder<F> {
    pub fn with_font(paper: PaperWidth, font: F) -> Self {
        Self {
            paper,
            font,
            surface: None,
        }
    }

    pub fn paper(&self) -> PaperWidth {
        self.paper
    }

    pub fn font(&self) -> &F {
        &self.font
    }

    /// Current bottom edge of the content, 0 before anything was drawn.
    pub fn bottom_y(&self) -> f32 {
        self.surface
            .as_ref()
            .map(|s| s.cursor().bottom_y())
            .unwrap_or(0.0)
    }

    fn parts(&mut self) -> (&mut Surface, &F) {
        let width = self.paper.pixels();
        let surface = self.surface.get_or_insert_with(|| Surface::new(width));
        (surface, &self.font)
    }

    // ========================================================================
    // LOW-LEVEL PLACEMENT
    // ========================================================================

    /// Place one text column in the current row without ending it.
    pub fn add_text(&mut self, text: &str, spec: FontSpec, percent: u8) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        let (surface, font) = self.parts();
        placer::place_text(surface, font, text, &spec, percent);
        self
    }

    /// Place one image column in the current row without ending it.
    pub fn add_image(&mut self, image: &RgbaImage, align: Alignment, percent: u8) -> &mut Self {
        let (surface, _) = self.parts();
        placer::place_image(surface, image, align, percent);
        self
    }

    /// End the current row.
    pub fn newline(&mut self) -> &mut Self {
        let (surface, _) = self.parts();
        surface.new_row();
        self
    }

    /// Place `items` left to right as one row.
    pub fn row(&mut self, items: &[ColumnItem<'_>]) -> &mut Self {
        if items.iter().all(ColumnItem::is_blank) {
            return self;
        }
        debug!(row = %describe(items), "placing row");
        for item in items {
            match *item {
                ColumnItem::Text {
                    text,
                    spec,
                    percent,
                } => {
                    self.add_text(text, spec, percent);
                }
                ColumnItem::Image {
                    image,
                    align,
                    percent,
                } => {
                    self.add_image(image, align, percent);
                }
            }
        }
        self.newline()
    }

    // ========================================================================
    // TEMPLATES
    // ========================================================================

    /// One full-width line of text.
    pub fn text(&mut self, text: &str, size: f32, bold: bool, align: Alignment) -> &mut Self {
        let spec = FontSpec::new(size).bold(bold).align(align);
        self.row(&[ColumnItem::text(text, spec, 100)])
    }

    /// Label on the left at its natural width, value right-aligned in the rest.
    pub fn text_pair(&mut self, left: &str, right: &str, size: f32, bold: bool) -> &mut Self {
        let spec = FontSpec::new(size).bold(bold);
        self.row(&[
            ColumnItem::text(left, spec.align(Alignment::Left), 0),
            ColumnItem::text(right, spec.align(Alignment::Right), 100),
        ])
    }

    /// Three columns: left, center, right.
    pub fn text_triple(
        &mut self,
        left: &str,
        center: &str,
        right: &str,
        size: f32,
        bold: bool,
    ) -> &mut Self {
        let spec = FontSpec::new(size).bold(bold);
        self.row(&[
            ColumnItem::text(left, spec.align(Alignment::Left), 33),
            ColumnItem::text(center, spec.align(Alignment::Center), 34),
            ColumnItem::text(right, spec.align(Alignment::Right), 34),
        ])
    }

    /// Four equal columns: left, center, center, right.
    pub fn text_quad(
        &mut self,
        first: &str,
        second: &str,
        third: &str,
        fourth: &str,
        size: f32,
        bold: bool,
    ) -> &mut Self {
        let spec = FontSpec::new(size).bold(bold);
        self.row(&[
            ColumnItem::text(first, spec.align(Alignment::Left), 25),
            ColumnItem::text(second, spec.align(Alignment::Center), 25),
            ColumnItem::text(third, spec.align(Alignment::Center), 25),
            ColumnItem::text(fourth, spec.align(Alignment::Right), 25),
        ])
    }

    /// One to four text columns with caller-chosen widths.
    ///
    /// The first column is left-aligned, the last right-aligned and any in
    /// between centered. A single column is left-aligned at its natural
    /// width. More than four columns is logged and the row is skipped.
    pub fn columns(&mut self, columns: &[Column<'_>], size: f32, bold: bool) -> &mut Self {
        if columns.iter().all(|c| c.text.is_empty()) {
            return self;
        }
        if columns.len() > MAX_COLUMNS {
            error!(count = columns.len(), "text count more than {}", MAX_COLUMNS);
            return self;
        }

        let spec = FontSpec::new(size).bold(bold);
        let last = columns.len() - 1;
        let items: Vec<ColumnItem<'_>> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                if last == 0 {
                    return ColumnItem::text(column.text, spec, 0);
                }
                let align = match i {
                    0 => Alignment::Left,
                    i if i == last => Alignment::Right,
                    _ => Alignment::Center,
                };
                ColumnItem::text(column.text, spec.align(align), column.percent)
            })
            .collect();
        self.row(&items)
    }

    /// A centered image on its own row.
    pub fn image(&mut self, image: &RgbaImage) -> &mut Self {
        self.row(&[ColumnItem::image(image, Alignment::Center, 100)])
    }

    /// Blank vertical space of `height` pixels, followed by a new row.
    pub fn feed(&mut self, height: f32) -> &mut Self {
        debug!(height, "feed");
        let (surface, _) = self.parts();
        surface.feed(height);
        surface.new_row();
        self
    }

    /// Trim the canvas to its content and hand it over.
    ///
    /// A builder that never drew anything yields a receipt of height 0.
    pub fn finish(self) -> Receipt {
        let image = match self.surface {
            Some(surface) => surface.finish(),
            None => RgbaImage::new(self.paper.pixels(), 0),
        };
        Receipt::new(image)
    }
}

/// Row contents for the debug log.
fn describe(items: &[ColumnItem<'_>]) -> String {
    items
        .iter()
        .map(|item| match item {
            ColumnItem::Text { text, .. } => *text,
            ColumnItem::Image { .. } => "[image]",
        })
        .collect::<Vec<_>>()
        .join(" ")
}
