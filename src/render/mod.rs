//! # Rendering Module
//!
//! The layout engine underneath [`ReceiptBuilder`](crate::components::ReceiptBuilder).
//!
//! ## Modules
//!
//! - [`canvas`]: Growable RGBA pixel buffer
//! - [`cursor`]: Row cursor (top, bottom, left edge of the current row)
//! - [`placer`]: Width allocation, alignment and wrapping of column items
//!
//! ## Usage Example
//!
//! ```
//! use printslip::font::{FontSpec, SpleenFont};
//! use printslip::render::placer::{self, Surface};
//!
//! let mut surface = Surface::new(384);
//! placer::place_text(&mut surface, &SpleenFont, "Total", &FontSpec::new(22.0), 0);
//! surface.new_row();
//!
//! let image = surface.finish();
//! assert_eq!(image.height(), 24);
//! ```

pub mod canvas;
pub mod cursor;
pub mod placer;
