//! # Printslip - Receipt Raster Layout
//!
//! Printslip composes a printable receipt into a single raster image at a
//! fixed paper width, then hands it to a print service. It provides:
//!
//! - **Layout**: rows of 1 to 4 text columns, images and blank feeds, with
//!   percentage widths, alignment and automatic wrapping
//! - **Fonts**: a built-in bitmap font and TrueType fonts loaded at runtime
//! - **Transport**: PNG/base64 encoding and a retrying print service client
//!
//! ## Quick Start
//!
//! ```
//! use printslip::{
//!     font::Alignment,
//!     printer::{PaperWidth, PrintSize},
//!     ReceiptBuilder,
//! };
//!
//! let mut builder = ReceiptBuilder::new(PaperWidth::Normal);
//! builder
//!     .text("Print Test", PrintSize::TYPE, true, Alignment::Center)
//!     .text_pair("Name:", "Imark", PrintSize::SMALL, false)
//!     .text_triple("ITEM", "QTY", "PRICE", PrintSize::SMALL, true)
//!     .feed(PrintSize::TAIL_FEED);
//!
//! let receipt = builder.finish();
//! assert_eq!(receipt.width(), 384);
//!
//! let encoded = receipt.to_base64()?;
//! assert!(!encoded.is_empty());
//! # Ok::<(), printslip::PrintslipError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`components`] | Receipt builder, column items, finished receipts |
//! | [`render`] | Canvas, row cursor and column placer |
//! | [`font`] | Font metrics trait and providers |
//! | [`transport`] | Encoding and print service client |
//! | [`printer`] | Paper widths and text sizes |
//! | [`receipt`] | Demo receipt templates |
//! | [`trigger`] | Print trigger debounce |
//! | [`error`] | Error types |

pub mod components;
pub mod error;
pub mod font;
pub mod printer;
pub mod receipt;
pub mod render;
pub mod transport;
pub mod trigger;

// Re-exports for convenience
pub use components::{Receipt, ReceiptBuilder};
pub use error::PrintslipError;
pub use printer::PaperWidth;
