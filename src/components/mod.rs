//! # Receipt Composition
//!
//! Builder API for composing a receipt row by row.
//!
//! ## Design Philosophy
//!
//! A receipt is a sequence of rows. Each row holds one to a few column items
//! (text or images) laid out left to right, each taking a percentage of the
//! paper width. The canvas grows as rows are added and is trimmed to its
//! content when the builder is finished:
//!
//! ```
//! use printslip::components::{Column, ReceiptBuilder};
//! use printslip::font::Alignment;
//! use printslip::printer::{PaperWidth, PrintSize};
//!
//! let mut builder = ReceiptBuilder::new(PaperWidth::Normal);
//! builder
//!     .text("CHURRA MART", PrintSize::TYPE, true, Alignment::Center)
//!     .text_triple("Item", "Qty", "Price", PrintSize::SMALL, true)
//!     .columns(&[Column::new("Espresso", 70), Column::new("4.50", 30)], PrintSize::SMALL, false)
//!     .feed(PrintSize::TAIL_FEED);
//!
//! let receipt = builder.finish();
//! let encoded = receipt.to_base64().unwrap();
//! assert!(encoded.is_ascii());
//! ```

mod builder;
mod column;
mod receipt;

pub use builder::*;
pub use column::*;
pub use receipt::*;
