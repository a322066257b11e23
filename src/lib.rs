//! Portfolio Contact Agent
//!
//! A rule-based chat agent for a portfolio site that:
//! - Greets visitors and steers small talk toward a purpose
//! - Collects name, topic, email and WhatsApp through a fixed step ladder
//! - Classifies every turn with ordered keyword/regex checks (no LLM)
//! - Intercepts contact details typed out of order without regressing
//! - Deflects vulgarity and gibberish with scripted escalation
//! - Forwards the finished contact record to the site backend
//!
//! TURN LOOP:
//! INPUT → INTERCEPTS → STEP HANDLER → ADVANCE → DELIVER → SUBMIT?

pub mod agent;
pub mod api;
pub mod classify;
pub mod delivery;
pub mod error;
pub mod models;
pub mod policy;
pub mod state;
pub mod submit;

pub use error::{ChatError, Result};

// Re-export common types
pub use models::*;
pub use state::{ConversationState, SessionStore};
