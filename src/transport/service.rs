//! # Print Service Client
//!
//! Connection handling for a remote print service.
//!
//! ## States
//!
//! ```text
//!                 connect()
//! Disconnected ──────────────► Connecting { attempt: 1 }
//!      ▲                            │   │ failure, attempts left:
//!      │ all attempts failed        │   └──► sleep(interval), attempt + 1
//!      │ or submission fault        │ success
//!      └──────────── Connected ◄────┘
//! ```
//!
//! Submitting while disconnected kicks off a reconnection and reports the
//! print as not accepted. A fault during submission is reported the same
//! way; it never propagates.

use async_trait::async_trait;
use tracing::{info, warn};

use super::config::RetryPolicy;
use crate::error::PrintslipError;

/// A remote service that prints base64-encoded receipt images.
#[async_trait]
pub trait PrintService: Send {
    /// Establish the connection. Called again after failures.
    async fn connect(&mut self) -> Result<(), PrintslipError>;

    /// Submit one encoded image. `Ok(false)` means the service declined it.
    async fn start_printing(&mut self, encoded_image: &str) -> Result<bool, PrintslipError>;

    async fn disconnect(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting { attempt: u32 },
    Connected,
}

/// Bounded-retry connection manager around a [`PrintService`].
#[derive(Debug)]
pub struct PrintClient<S> {
    service: S,
    policy: RetryPolicy,
    state: ConnectionState,
}

impl<S: PrintService> PrintClient<S> {
    pub fn new(service: S, policy: RetryPolicy) -> Self {
        Self {
            service,
            policy,
            state: ConnectionState::Disconnected,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Connect, retrying up to `max_retries` times with `interval` between
    /// attempts. No-op when already connected.
    pub async fn connect(&mut self) -> Result<(), PrintslipError> {
        if self.is_connected() {
            return Ok(());
        }

        let attempts = self.policy.attempts();
        let mut last_error = None;

        for attempt in 1..=attempts {
            self.state = ConnectionState::Connecting { attempt };
            match self.service.connect().await {
                Ok(()) => {
                    info!(attempt, "print service connected");
                    self.state = ConnectionState::Connected;
                    return Ok(());
                }
                Err(e) => {
                    warn!(attempt, error = %e, "print service bind failed");
                    last_error = Some(e);
                    if attempt < attempts {
                        tokio::time::sleep(self.policy.interval()).await;
                    }
                }
            }
        }

        self.state = ConnectionState::Disconnected;
        Err(PrintslipError::Transport(format!(
            "print service unreachable after {} attempts: {}",
            attempts,
            last_error.map(|e| e.to_string()).unwrap_or_default()
        )))
    }

    /// Submit an encoded receipt image. Returns whether it was accepted.
    pub async fn submit(&mut self, encoded_image: &str) -> bool {
        if !self.is_connected() {
            warn!("print service not connected, reconnecting");
            if let Err(e) = self.connect().await {
                warn!(error = %e, "reconnection failed");
            }
            return false;
        }

        match self.service.start_printing(encoded_image).await {
            Ok(accepted) => {
                if !accepted {
                    info!("print service declined the receipt");
                }
                accepted
            }
            Err(e) => {
                warn!(error = %e, "print submission failed");
                self.state = ConnectionState::Disconnected;
                false
            }
        }
    }

    pub async fn disconnect(&mut self) {
        self.service.disconnect().await;
        self.state = ConnectionState::Disconnected;
        info!("print service disconnected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted service: fails the first `connect_failures` connects.
    #[derive(Debug, Default)]
    struct MockService {
        connect_failures: u32,
        connect_calls: u32,
        accept: bool,
        print_fault: bool,
        printed: Vec<String>,
    }

    #[async_trait]
    impl PrintService for MockService {
        async fn connect(&mut self) -> Result<(), PrintslipError> {
            self.connect_calls += 1;
            if self.connect_calls <= self.connect_failures {
                return Err(PrintslipError::Transport("bind refused".into()));
            }
            Ok(())
        }

        async fn start_printing(&mut self, encoded_image: &str) -> Result<bool, PrintslipError> {
            if self.print_fault {
                return Err(PrintslipError::Transport("remote exception".into()));
            }
            self.printed.push(encoded_image.to_string());
            Ok(self.accept)
        }
    }

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_retries: 3,
            interval_ms: 0,
        }
    }

    #[tokio::test]
    async fn test_connects_first_try() {
        let mut client = PrintClient::new(MockService::default(), fast_policy());
        assert_eq!(client.state(), ConnectionState::Disconnected);
        client.connect().await.unwrap();
        assert_eq!(client.state(), ConnectionState::Connected);
        assert_eq!(client.service().connect_calls, 1);
    }

    #[tokio::test]
    async fn test_retries_until_success() {
        let service = MockService {
            connect_failures: 3,
            ..Default::default()
        };
        let mut client = PrintClient::new(service, fast_policy());
        client.connect().await.unwrap();
        assert!(client.is_connected());
        assert_eq!(client.service().connect_calls, 4);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let service = MockService {
            connect_failures: u32::MAX,
            ..Default::default()
        };
        let mut client = PrintClient::new(service, fast_policy());
        let result = client.connect().await;

        assert!(matches!(result, Err(PrintslipError::Transport(_))));
        assert_eq!(client.state(), ConnectionState::Disconnected);
        assert_eq!(client.service().connect_calls, 4);
    }

    #[tokio::test]
    async fn test_submit_while_disconnected_reconnects_and_reports_false() {
        let service = MockService {
            accept: true,
            ..Default::default()
        };
        let mut client = PrintClient::new(service, fast_policy());

        assert!(!client.submit("aGVsbG8=").await);
        assert!(client.is_connected());
        assert!(client.service().printed.is_empty());

        assert!(client.submit("aGVsbG8=").await);
        assert_eq!(client.service().printed, vec!["aGVsbG8=".to_string()]);
    }

    #[tokio::test]
    async fn test_declined_print() {
        let mut client = PrintClient::new(MockService::default(), fast_policy());
        client.connect().await.unwrap();
        assert!(!client.submit("x").await);
        assert!(client.is_connected());
    }

    #[tokio::test]
    async fn test_fault_during_submit_is_false_and_disconnects() {
        let service = MockService {
            accept: true,
            print_fault: true,
            ..Default::default()
        };
        let mut client = PrintClient::new(service, fast_policy());
        client.connect().await.unwrap();

        assert!(!client.submit("x").await);
        assert_eq!(client.state(), ConnectionState::Disconnected);
    }

    #[tokio::test]
    async fn test_disconnect() {
        let mut client = PrintClient::new(MockService::default(), fast_policy());
        client.connect().await.unwrap();
        client.disconnect().await;
        assert!(!client.is_connected());
    }
}
