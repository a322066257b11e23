//! Core data models for the contact chat agent

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

//
// ================= Conversation Step =================
//

/// Conversational step. Ordered so that "jump ahead" transitions can be
/// checked for monotonicity: a turn may move the step forward, never back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Initial,
    AskName,
    AskTopic,
    AskEmail,
    AskWhatsapp,
    Complete,
    Declined,
}

impl Step {
    /// Terminal steps accept no further field writes.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Step::Complete | Step::Declined)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Step::Initial => "initial",
            Step::AskName => "ask_name",
            Step::AskTopic => "ask_topic",
            Step::AskEmail => "ask_email",
            Step::AskWhatsapp => "ask_whatsapp",
            Step::Complete => "complete",
            Step::Declined => "declined",
        };
        write!(f, "{}", s)
    }
}

//
// ================= Collected Fields =================
//

/// Fields collected over the course of a conversation. Later writes
/// overwrite earlier ones; the policy decides when a field is accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: Option<String>,
    pub topic: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
}

impl ContactFields {
    /// First field the conversation still needs, in collection order.
    /// `None` means everything required has been gathered.
    pub fn next_unmet(&self) -> Option<Step> {
        self.next_unmet_from(Step::Initial)
    }

    /// Like [`next_unmet`](Self::next_unmet), but never returns a step
    /// before `floor`: a jump-ahead may move the conversation forward,
    /// never back.
    pub fn next_unmet_from(&self, floor: Step) -> Option<Step> {
        [
            (Step::AskName, self.name.is_none()),
            (Step::AskTopic, self.topic.is_none()),
            (Step::AskEmail, self.email.is_none()),
            (Step::AskWhatsapp, self.whatsapp.is_none()),
        ]
        .into_iter()
        .find(|(step, unmet)| *unmet && *step >= floor)
        .map(|(step, _)| step)
    }

    /// A record is submittable once we have a topic plus at least one
    /// contact channel.
    pub fn is_submittable(&self) -> bool {
        self.topic.is_some() && (self.email.is_some() || self.whatsapp.is_some())
    }
}

/// The record handed to the submission sink when the conversation
/// transitions into `Complete`. Produced exactly once per session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    pub name: Option<String>,
    pub topic: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
}

impl From<&ContactFields> for ContactRecord {
    fn from(fields: &ContactFields) -> Self {
        Self {
            name: fields.name.clone(),
            topic: fields.topic.clone(),
            email: fields.email.clone(),
            whatsapp: fields.whatsapp.clone(),
        }
    }
}

//
// ================= Submission Payload =================
//

/// Wire payload for the external form endpoint: the collected record plus
/// submission metadata. `honeypot` is always empty; a filled value marks
/// the submission as bot traffic on the receiving side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub record: ContactRecord,
    pub submitted_at: DateTime<Utc>,
    pub page_origin: String,
    pub honeypot: String,
}

impl SubmissionPayload {
    pub fn new(record: ContactRecord, page_origin: String) -> Self {
        Self {
            record,
            submitted_at: Utc::now(),
            page_origin,
            honeypot: String::new(),
        }
    }
}

//
// ================= Reply Lines =================
//

/// A single rendered line of agent speech. The grouping flags drive
/// avatar/name-label display on the rendering side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplyLine {
    pub text: String,
    pub is_first_in_group: bool,
    pub is_last_in_group: bool,
}

/// Tag a sequence of reply texts with group boundary flags.
pub fn group_lines<I, S>(texts: I) -> Vec<ReplyLine>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let texts: Vec<String> = texts.into_iter().map(Into::into).collect();
    let last = texts.len().saturating_sub(1);
    texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| ReplyLine {
            text,
            is_first_in_group: i == 0,
            is_last_in_group: i == last,
        })
        .collect()
}

/// Everything the policy decided for one turn: the lines to deliver and,
/// when the turn crossed into `Complete`, the record to submit.
#[derive(Debug, Clone)]
pub struct TurnReply {
    pub lines: Vec<ReplyLine>,
    pub completed: Option<ContactRecord>,
}

impl TurnReply {
    pub fn lines<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: group_lines(texts),
            completed: None,
        }
    }
}

//
// ================= Topic Categories =================
//

/// Bucket a free-text topic lands in; selects the acknowledgment line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TopicCategory {
    Mentorship,
    Hiring,
    UxDesign,
    Product,
    Branding,
    AppWeb,
    Review,
    Collaboration,
    General,
}

impl fmt::Display for TopicCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TopicCategory::Mentorship => "mentorship",
            TopicCategory::Hiring => "hiring",
            TopicCategory::UxDesign => "ux_design",
            TopicCategory::Product => "product",
            TopicCategory::Branding => "branding",
            TopicCategory::AppWeb => "app_web",
            TopicCategory::Review => "review",
            TopicCategory::Collaboration => "collaboration",
            TopicCategory::General => "general",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_unmet_follows_collection_order() {
        let mut fields = ContactFields::default();
        assert_eq!(fields.next_unmet(), Some(Step::AskName));

        fields.name = Some("Maya".into());
        assert_eq!(fields.next_unmet(), Some(Step::AskTopic));

        fields.topic = Some("a website".into());
        assert_eq!(fields.next_unmet(), Some(Step::AskEmail));

        fields.email = Some("maya@example.com".into());
        assert_eq!(fields.next_unmet(), Some(Step::AskWhatsapp));

        fields.whatsapp = Some("+94771234567".into());
        assert_eq!(fields.next_unmet(), None);
    }

    #[test]
    fn test_next_unmet_respects_floor() {
        let fields = ContactFields::default();
        // Everything unmet, but nothing before the floor is offered.
        assert_eq!(fields.next_unmet_from(Step::AskEmail), Some(Step::AskEmail));

        let fields = ContactFields {
            email: Some("a@b.io".into()),
            ..Default::default()
        };
        assert_eq!(fields.next_unmet_from(Step::AskEmail), Some(Step::AskWhatsapp));
    }

    #[test]
    fn test_step_ordering_is_monotonic() {
        assert!(Step::Initial < Step::AskName);
        assert!(Step::AskName < Step::AskTopic);
        assert!(Step::AskTopic < Step::AskEmail);
        assert!(Step::AskEmail < Step::AskWhatsapp);
        assert!(Step::AskWhatsapp < Step::Complete);
    }

    #[test]
    fn test_group_lines_flags() {
        let lines = group_lines(["one", "two", "three"]);
        assert!(lines[0].is_first_in_group);
        assert!(!lines[0].is_last_in_group);
        assert!(!lines[1].is_first_in_group);
        assert!(!lines[1].is_last_in_group);
        assert!(lines[2].is_last_in_group);

        let single = group_lines(["only"]);
        assert!(single[0].is_first_in_group && single[0].is_last_in_group);
    }

    #[test]
    fn test_submission_payload_honeypot_stays_empty() {
        let record = ContactRecord {
            name: None,
            topic: Some("app".into()),
            email: Some("a@b.io".into()),
            whatsapp: None,
        };
        let payload = SubmissionPayload::new(record, "https://example.com/contact".into());
        assert!(payload.honeypot.is_empty());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["honeypot"], "");
        assert_eq!(json["topic"], "app");
    }
}
