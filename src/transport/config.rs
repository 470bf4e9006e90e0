//! # Client Configuration
//!
//! Policy knobs for the print boundary, loadable from a JSON file. Every
//! field is optional; missing fields take the defaults below.
//!
//! ```json
//! {
//!   "service_url": "http://127.0.0.1:8080",
//!   "device_model": "CPOS-X",
//!   "debounce_ms": 1000,
//!   "retry": { "max_retries": 3, "interval_ms": 3000 }
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PrintslipError;
use crate::printer::PaperWidth;

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8080";

/// Bounded retry for establishing the service connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries after the first failed attempt
    pub max_retries: u32,
    /// Wait between attempts, in milliseconds
    pub interval_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            interval_ms: 3000,
        }
    }
}

impl RetryPolicy {
    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Total connection attempts, first try included.
    #[inline]
    pub fn attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the print service
    pub service_url: String,
    /// Device model; picks the paper preset
    pub device_model: String,
    /// Minimum interval between accepted print triggers, in milliseconds
    pub debounce_ms: u64,
    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            device_model: String::new(),
            debounce_ms: 1000,
            retry: RetryPolicy::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, PrintslipError> {
        serde_json::from_str(json).map_err(|e| PrintslipError::Config(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PrintslipError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            PrintslipError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    #[inline]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn paper(&self) -> PaperWidth {
        PaperWidth::from_device_model(&self.device_model)
    }
}
