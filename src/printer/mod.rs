//! # Printer Module
//!
//! This module provides paper presets and named print sizes.
//!
//! ## Modules
//!
//! - [`config`]: Paper width presets and text sizes

pub mod config;

pub use config::{PaperWidth, PrintSize};
