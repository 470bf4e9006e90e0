//! # HTTP Print Service
//!
//! Binds [`PrintService`] to a print service reachable over HTTP.
//!
//! | Operation | Request | Expected response |
//! |-----------|---------|-------------------|
//! | connect | `GET {base}/status` | any 2xx |
//! | start_printing | `POST {base}/print` `{"image": "<base64>"}` | `{"accepted": bool}` |

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::service::PrintService;
use crate::error::PrintslipError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct PrintRequest<'a> {
    image: &'a str,
}

#[derive(Debug, Deserialize)]
struct PrintResponse {
    accepted: bool,
}

#[derive(Debug, Clone)]
pub struct HttpPrintService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPrintService {
    pub fn new(base_url: impl Into<String>) -> Result<Self, PrintslipError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("printslip/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PrintslipError::Transport(format!("HTTP client error: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl PrintService for HttpPrintService {
    async fn connect(&mut self) -> Result<(), PrintslipError> {
        let url = self.url("status");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PrintslipError::Transport(format!("Failed to reach {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(PrintslipError::Transport(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }
        Ok(())
    }

    async fn start_printing(&mut self, encoded_image: &str) -> Result<bool, PrintslipError> {
        let url = self.url("print");
        let response = self
            .client
            .post(&url)
            .json(&PrintRequest {
                image: encoded_image,
            })
            .send()
            .await
            .map_err(|e| PrintslipError::Transport(format!("Failed to reach {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(PrintslipError::Transport(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        let body: PrintResponse = response
            .json()
            .await
            .map_err(|e| PrintslipError::Transport(format!("Invalid print response: {}", e)))?;
        Ok(body.accepted)
    }
}
