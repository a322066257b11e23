//! Response delivery
//!
//! Renders agent lines with human-like pacing: a read-pause, then a
//! simulated typing duration proportional to message length. Delivery is
//! the only suspending step in a turn; lines of a multi-line reply are
//! awaited strictly in order and are never cancelled mid-sequence.

use crate::models::ReplyLine;
use crate::Result;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

/// Pacing knobs for simulated reading and typing.
#[derive(Debug, Clone)]
pub struct PacingConfig {
    /// Pause before the typing indicator appears, as if reading.
    pub read_pause_ms: u64,
    /// Fixed floor of the typing time.
    pub typing_base_ms: u64,
    /// Additional typing time per character of the message.
    pub typing_per_char_ms: u64,
    /// Upper bound so long lines don't stall the conversation.
    pub typing_max_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            read_pause_ms: 600,
            typing_base_ms: 250,
            typing_per_char_ms: 35,
            typing_max_ms: 2600,
        }
    }
}

impl PacingConfig {
    /// Simulated typing time for one line.
    pub fn typing_duration(&self, text: &str) -> Duration {
        let ms = self.typing_base_ms + self.typing_per_char_ms * text.chars().count() as u64;
        Duration::from_millis(ms.min(self.typing_max_ms))
    }
}

/// Seam between the policy engine and whatever renders agent speech.
#[async_trait]
pub trait ResponseDelivery: Send + Sync {
    /// Present one line to the visitor, returning once it is visible.
    async fn deliver(&self, line: &ReplyLine) -> Result<()>;
}

/// Terminal renderer with read-pause + typing delays. These timers always
/// complete; there is no failure mode.
pub struct PacedDelivery {
    config: PacingConfig,
}

impl PacedDelivery {
    pub fn new() -> Self {
        Self {
            config: PacingConfig::default(),
        }
    }

    pub fn with_config(config: PacingConfig) -> Self {
        Self { config }
    }
}

impl Default for PacedDelivery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseDelivery for PacedDelivery {
    async fn deliver(&self, line: &ReplyLine) -> Result<()> {
        if line.is_first_in_group {
            sleep(Duration::from_millis(self.config.read_pause_ms)).await;
        }
        sleep(self.config.typing_duration(&line.text)).await;
        println!("  {}", line.text);
        Ok(())
    }
}

/// No-pacing delivery for tests and for callers (like the HTTP API) that
/// hand the lines to a remote renderer.
pub struct InstantDelivery;

#[async_trait]
impl ResponseDelivery for InstantDelivery {
    async fn deliver(&self, _line: &ReplyLine) -> Result<()> {
        Ok(())
    }
}
