//! Chat agent
//!
//! Owns one conversation end to end: routes each visitor turn through the
//! dialogue policy, paces the reply lines out through a
//! [`ResponseDelivery`], and forwards the finished contact record to a
//! [`SubmissionSink`]. One agent per visitor session.

use crate::delivery::ResponseDelivery;
use crate::models::{ContactRecord, SubmissionPayload, TurnReply};
use crate::policy;
use crate::state::ConversationState;
use crate::submit::SubmissionSink;
use crate::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct ChatAgent {
    state: ConversationState,
    delivery: Arc<dyn ResponseDelivery>,
    sink: Arc<dyn SubmissionSink>,
    page_origin: String,
}

impl ChatAgent {
    pub fn new(
        delivery: Arc<dyn ResponseDelivery>,
        sink: Arc<dyn SubmissionSink>,
        page_origin: String,
    ) -> Self {
        Self {
            state: ConversationState::new(),
            delivery,
            sink,
            page_origin,
        }
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Deliver the scripted opener that greets a visitor before they type
    /// anything.
    pub async fn open(&mut self) -> Result<()> {
        let reply = TurnReply::lines(policy::opening_lines());
        for line in &reply.lines {
            self.delivery.deliver(line).await?;
        }
        Ok(())
    }

    /// Run one visitor turn. Input that arrives while a previous turn is
    /// still delivering is dropped, not queued.
    pub async fn handle_turn(&mut self, input: &str) -> Result<TurnReply> {
        if input.trim().is_empty() {
            return Ok(TurnReply::lines(Vec::<String>::new()));
        }
        if self.state.is_processing {
            debug!("Dropping input: previous turn still delivering");
            return Ok(TurnReply::lines(Vec::<String>::new()));
        }

        self.state.is_processing = true;
        let result = self.run_turn(input).await;
        self.state.is_processing = false;
        result
    }

    async fn run_turn(&mut self, input: &str) -> Result<TurnReply> {
        let reply = policy::respond(&mut self.state, input);

        for line in &reply.lines {
            self.delivery.deliver(line).await?;
        }

        if let Some(record) = &reply.completed {
            self.submit_record(record).await;
        }

        Ok(reply)
    }

    /// Forward the finished record. The visitor has already seen the
    /// closing lines, so a failed submission is logged and swallowed.
    async fn submit_record(&self, record: &ContactRecord) {
        if !self.state.fields.is_submittable() {
            warn!("Completed conversation lacks a reachable contact; submitting anyway");
        }

        let payload = SubmissionPayload::new(record.clone(), self.page_origin.clone());
        match self.sink.submit(&payload).await {
            Ok(()) => info!(
                "Contact record forwarded for {}",
                record.name.as_deref().unwrap_or("unnamed visitor")
            ),
            Err(e) => warn!("Contact submission failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::InstantDelivery;
    use crate::models::Step;
    use crate::submit::RecordingSink;

    fn agent_with_sink(sink: Arc<RecordingSink>) -> ChatAgent {
        ChatAgent::new(
            Arc::new(InstantDelivery),
            sink,
            "https://example.com/contact".to_string(),
        )
    }

    async fn drive(agent: &mut ChatAgent, turns: &[&str]) {
        for turn in turns {
            agent.handle_turn(turn).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_happy_path_submits_exactly_once() {
        let sink = Arc::new(RecordingSink::new());
        let mut agent = agent_with_sink(sink.clone());

        drive(
            &mut agent,
            &[
                "hello",
                "my name is Nadia",
                "i need help with a mobile app design",
                "nadia@example.com",
                "skip",
            ],
        )
        .await;

        assert_eq!(agent.state().step, Step::Complete);
        assert_eq!(sink.count(), 1);
        let payloads = sink.payloads.lock().unwrap();
        assert_eq!(payloads[0].record.name.as_deref(), Some("Nadia"));
        assert_eq!(payloads[0].page_origin, "https://example.com/contact");
    }

    #[tokio::test]
    async fn test_no_resubmission_after_complete() {
        let sink = Arc::new(RecordingSink::new());
        let mut agent = agent_with_sink(sink.clone());

        drive(
            &mut agent,
            &[
                "Nadia",
                "hiring for a design role",
                "nadia@example.com",
                "0771234567",
                "hello again",
                "thanks!",
            ],
        )
        .await;

        assert_eq!(agent.state().step, Step::Complete);
        assert_eq!(sink.count(), 1);
    }

    #[tokio::test]
    async fn test_submission_failure_does_not_surface() {
        let sink = Arc::new(RecordingSink::failing());
        let mut agent = agent_with_sink(sink.clone());

        drive(
            &mut agent,
            &["Nadia", "a portfolio review", "nadia@example.com", "no thanks"],
        )
        .await;

        // closing still happened; the error stayed internal
        assert_eq!(agent.state().step, Step::Complete);
        assert_eq!(sink.count(), 1);
    }

    #[tokio::test]
    async fn test_empty_input_is_ignored() {
        let sink = Arc::new(RecordingSink::new());
        let mut agent = agent_with_sink(sink.clone());

        let reply = agent.handle_turn("   ").await.unwrap();
        assert!(reply.lines.is_empty());
        assert_eq!(agent.state().step, Step::Initial);
    }

    #[tokio::test]
    async fn test_guard_released_after_every_turn() {
        let sink = Arc::new(RecordingSink::new());
        let mut agent = agent_with_sink(sink.clone());

        for turn in ["hi", "asdfasdf", "you idiot", "no", "whatever"] {
            agent.handle_turn(turn).await.unwrap();
            assert!(!agent.state().is_processing);
        }
    }

    #[tokio::test]
    async fn test_declined_conversation_never_submits() {
        let sink = Arc::new(RecordingSink::new());
        let mut agent = agent_with_sink(sink.clone());

        drive(&mut agent, &["no thanks", "hello?"]).await;

        assert_eq!(agent.state().step, Step::Declined);
        assert_eq!(sink.count(), 0);
    }
}
