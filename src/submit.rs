//! Contact submission
//!
//! Forwards a completed [`SubmissionPayload`] to the site backend over
//! HTTP. Uses a long-lived reqwest::Client for connection pooling. A
//! submission failure never surfaces to the visitor; the caller logs it
//! and the conversation still ends with the closing lines.

use crate::error::ChatError;
use crate::models::SubmissionPayload;
use crate::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info};

/// Seam between the agent and the backend that stores contact records.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<()>;
}

/// POSTs payloads to a configured endpoint (connection-pooled).
pub struct HttpSubmissionSink {
    client: Client,
    endpoint: String,
}

impl HttpSubmissionSink {
    pub fn new(endpoint: String) -> Self {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(8)
            .timeout(Duration::from_secs(15))
            .build()
            .expect("Failed to build HTTP client");

        Self { client, endpoint }
    }
}

#[async_trait]
impl SubmissionSink for HttpSubmissionSink {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(ChatError::SubmissionError(
                "submission endpoint not configured".to_string(),
            ));
        }

        info!("Submitting contact record to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!("Contact submission request failed: {}", e);
                ChatError::SubmissionError(format!("submission request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Contact submission rejected ({}): {}", status, error_text);
            return Err(ChatError::SubmissionError(format!(
                "submission rejected with status {}",
                status
            )));
        }

        info!("Contact record submitted");
        Ok(())
    }
}

/// Test sink that records every payload it receives.
#[cfg(test)]
pub struct RecordingSink {
    pub payloads: std::sync::Mutex<Vec<SubmissionPayload>>,
    pub fail: bool,
}

#[cfg(test)]
impl RecordingSink {
    pub fn new() -> Self {
        Self {
            payloads: std::sync::Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            payloads: std::sync::Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn count(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }
}

#[cfg(test)]
#[async_trait]
impl SubmissionSink for RecordingSink {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<()> {
        self.payloads.lock().unwrap().push(payload.clone());
        if self.fail {
            return Err(ChatError::SubmissionError("simulated failure".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactFields, ContactRecord};

    fn sample_payload() -> SubmissionPayload {
        let fields = ContactFields {
            name: Some("Nadia".to_string()),
            topic: Some("a mentorship call".to_string()),
            email: Some("nadia@example.com".to_string()),
            whatsapp: None,
        };
        SubmissionPayload::new(ContactRecord::from(&fields), "https://example.com".to_string())
    }

    #[test]
    fn test_payload_serializes_flat_with_metadata() {
        let payload = sample_payload();
        let json = serde_json::to_value(&payload).unwrap();

        // record fields sit at the top level, not nested
        assert_eq!(json["name"], "Nadia");
        assert_eq!(json["email"], "nadia@example.com");
        assert_eq!(json["page_origin"], "https://example.com");
        assert_eq!(json["honeypot"], "");
        assert!(json["submitted_at"].is_string());
    }

    #[tokio::test]
    async fn test_recording_sink_counts_submissions() {
        let sink = RecordingSink::new();
        sink.submit(&sample_payload()).await.unwrap();
        sink.submit(&sample_payload()).await.unwrap();
        assert_eq!(sink.count(), 2);
    }

    #[tokio::test]
    async fn test_failing_sink_still_records() {
        let sink = RecordingSink::failing();
        let result = sink.submit(&sample_payload()).await;
        assert!(result.is_err());
        assert_eq!(sink.count(), 1);
    }
}
