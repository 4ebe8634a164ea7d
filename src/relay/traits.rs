//! Trait abstraction for the email relay to enable mocking in tests

use crate::leads::SubmissionPayload;
use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by a relay implementation
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay answered {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Transactional-email dispatch service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRelay: Send + Sync {
    /// Send one templated email built from `payload`
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        payload: &SubmissionPayload,
        public_key: &str,
    ) -> Result<(), RelayError>;
}
