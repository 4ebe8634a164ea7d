//! EmailJS REST client
//!
//! Posts the same JSON body the EmailJS browser SDK sends. The EmailJS
//! account must allow API calls from non-browser applications.

use super::traits::{NotificationRelay, RelayError};
use crate::leads::SubmissionPayload;
use async_trait::async_trait;
use serde::Serialize;

/// Default EmailJS send endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a SubmissionPayload,
}

/// Relay backed by the EmailJS HTTP API
pub struct EmailJsRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl EmailJsRelay {
    /// Create a relay client, optionally pointing at a different endpoint
    pub fn new(endpoint: Option<String>) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("agrovita-leads/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl NotificationRelay for EmailJsRelay {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        payload: &SubmissionPayload,
        public_key: &str,
    ) -> Result<(), RelayError> {
        let body = EmailJsRequest {
            service_id,
            template_id,
            user_id: public_key,
            template_params: payload,
        };

        tracing::debug!(endpoint = %self.endpoint, template_id, "posting to email relay");

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
