//! # Print Transport Layer
//!
//! Everything between a finished [`Receipt`](crate::components::Receipt) and
//! the print service.
//!
//! ## Modules
//!
//! - [`encode`]: PNG and base64 encoding of the raster
//! - [`service`]: [`PrintService`] trait and the retrying [`PrintClient`]
//! - [`http`]: [`PrintService`] over HTTP
//! - [`config`]: Client configuration (service URL, retry, debounce)

pub mod config;
pub mod encode;
pub mod http;
pub mod service;

pub use config::{ClientConfig, RetryPolicy};
pub use encode::{encode_base64, encode_png};
pub use http::HttpPrintService;
pub use service::{ConnectionState, PrintClient, PrintService};
