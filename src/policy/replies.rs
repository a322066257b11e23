//! Canned reply text
//!
//! One place for everything the agent says, so the policy logic stays
//! readable. Voice and emoji use carry over from the portfolio site's
//! chat widget.

use crate::models::{Step, TopicCategory};

/// Lines the agent opens the conversation with, before any user input.
pub fn opening_lines() -> Vec<&'static str> {
    vec![
        "hey there! 👋",
        "want to work together? or just wanna chat? tell me, how can i help you?",
    ]
}

/// Prompt for whichever field the conversation needs next.
pub fn prompt_for(step: Step) -> &'static str {
    match step {
        Step::AskName => "what should i call you? 😊",
        Step::AskTopic => "what's on your mind? a project, a role, or just a chat?",
        Step::AskEmail => "what's your email? 📧",
        Step::AskWhatsapp => "and your whatsapp number so i can reach you faster? 📱 (type 'skip' if you'd rather not)",
        // The remaining steps never prompt; callers only pass ask-steps.
        _ => "so, how can i help you?",
    }
}

// ── Greeting escalation ──

pub fn greeting_first() -> Vec<&'static str> {
    vec![
        "hey hey! 👋",
        "so, what brings you here? work stuff or just saying hi?",
    ]
}

pub fn greeting_second() -> Vec<&'static str> {
    vec!["hello again 😄 still me!", "what can i help you with?"]
}

pub fn greeting_third() -> Vec<&'static str> {
    vec!["okay we've greeted each other plenty 😅", "let's do this properly —"]
}

// ── Initial-step branches ──

pub fn casual_hi() -> &'static str {
    "doing great, thanks for asking! 😎"
}

pub fn just_testing() -> Vec<&'static str> {
    vec![
        "testing, testing, 1 2 3 — loud and clear 🎙️",
        "whenever you're ready, tell me what you're looking for!",
    ]
}

pub fn work_intent() -> &'static str {
    "ooh, i like where this is going 👀"
}

pub fn name_ack(name: &str) -> String {
    format!("nice to meet you, {}! 😊", name)
}

pub fn affirmative() -> &'static str {
    "awesome! let's get you set up 🙌"
}

pub fn declined() -> Vec<&'static str> {
    vec![
        "no worries at all! 😊",
        "i'll be right here if you change your mind ✌️",
    ]
}

pub fn gibberish_retry() -> Vec<&'static str> {
    vec![
        "its funny i cant understand any of those. i'm not sure i should laugh or cry. ;3",
        "wanna try again? what can i help you with?",
    ]
}

pub fn gibberish_bail() -> &'static str {
    "okay i really can't understand you 😅 let's keep it simple —"
}

pub fn fallback_topic_ack() -> &'static str {
    "nice! sounds interesting 🤔"
}

// ── Vulgarity intercept ──

pub fn guardian_joke() -> Vec<&'static str> {
    vec![
        "oh wow... hold on, i'm forwarding this to your mom real quick 📱",
        "done! she said Hi btw 👋😊",
        "anyway... how can i actually help you today?",
    ]
}

pub fn vulgar_repeat() -> &'static str {
    "your mom already knows about this one too 😅 let's try something more productive?"
}

// ── Field collection ──

pub fn phone_saved() -> &'static str {
    "got your number! 👍"
}

pub fn email_saved() -> &'static str {
    "got your email! ✨"
}

pub fn field_saved() -> &'static str {
    "got it! 👍"
}

pub fn email_required() -> Vec<&'static str> {
    vec!["i need at least your email to get back to you! 😅", "what's your email? 📧"]
}

pub fn email_invalid() -> &'static str {
    "that doesn't look like a valid email 🤔 try again?"
}

pub fn phone_invalid() -> &'static str {
    "hmm that doesn't look like a valid number 🤔 try again or type 'skip' to move on"
}

pub fn whatsapp_skipped() -> &'static str {
    "no worries!"
}

/// Contextual acknowledgment keyed by the topic bucket.
pub fn topic_ack(category: TopicCategory) -> &'static str {
    match category {
        TopicCategory::Mentorship => "mentorship! love that — happy to share what i know 🙌",
        TopicCategory::Hiring => "oh nice, a role! always up for hearing about good teams 💼",
        TopicCategory::UxDesign => "a design challenge, my favorite kind 🎨",
        TopicCategory::Product => "product work! let's make something people actually use 🚀",
        TopicCategory::Branding => "branding! first impressions matter ✨",
        TopicCategory::AppWeb => "an app or web project — right up my alley 💻",
        TopicCategory::Review => "a review! fresh eyes coming right up 👀",
        TopicCategory::Collaboration => "a collab! the best things ship in pairs 🤝",
        TopicCategory::General => "nice! sounds interesting 🤔",
    }
}

// ── Terminal states ──

pub fn closing() -> Vec<&'static str> {
    vec!["perfect! thanks 🙏", "i'll hit you up at the earliest! talk soon ✨"]
}

pub fn already_complete() -> &'static str {
    "we're all set! i already have your info 😊 just wait for my message!"
}

pub fn already_declined() -> &'static str {
    "all good! i'm here if you ever want to pick this back up 😊"
}
