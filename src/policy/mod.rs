//! Dialogue policy
//!
//! Given the current conversation state and one raw user input, decide the
//! next step, the reply lines, and any field writes. Runs synchronously to
//! completion; delivery pacing and submission transport live elsewhere.
//!
//! Turn order: vulgarity intercept (always, state-preserving) → terminal
//! replies → phone intercept → email intercept → per-step dispatch. The
//! field intercepts let a visitor hand over a phone number or email out of
//! turn and jump the conversation forward to the next unmet field.

pub mod replies;

use crate::classify::{self, InitialIntent};
use crate::models::{ContactRecord, Step, TurnReply};
use crate::state::ConversationState;
use tracing::debug;

/// Gibberish strikes tolerated at the opening step before the policy
/// stops asking and goes straight for an email.
const GIBBERISH_STRIKE_LIMIT: u32 = 2;

/// Lines the agent speaks when a session starts, before any input.
pub fn opening_lines() -> Vec<&'static str> {
    replies::opening_lines()
}

/// Process one user turn. Invalid input never errors: every input has a
/// defined reply, and the worst case is a re-prompt in the same step.
pub fn respond(state: &mut ConversationState, input: &str) -> TurnReply {
    let text = input.trim();
    if text.is_empty() {
        return TurnReply {
            lines: vec![],
            completed: None,
        };
    }

    // Vulgarity is checked on every input, whatever the step. It varies
    // the reply, never the step.
    if classify::contains_vulgar(text) {
        state.vulgarity_count += 1;
        if !state.guardian_joke_fired {
            state.guardian_joke_fired = true;
            return TurnReply::lines(replies::guardian_joke());
        }
        return TurnReply::lines([replies::vulgar_repeat()]);
    }

    // Terminal steps only acknowledge.
    match state.step {
        Step::Complete => return TurnReply::lines([replies::already_complete()]),
        Step::Declined => return TurnReply::lines([replies::already_declined()]),
        _ => {}
    }

    // Phone intercept: a number handed over out of turn is recorded and
    // the conversation jumps to the next unmet field. A bare digit run
    // only counts when it is a strictly valid number on its own or comes
    // with a phone mention.
    if matches!(
        state.step,
        Step::Initial | Step::AskName | Step::AskTopic | Step::AskEmail
    ) && state.fields.whatsapp.is_none()
        && (classify::is_valid_phone(text) || classify::mentions_phone(text))
    {
        if let Some(number) = classify::extract_phone(text) {
            debug!(step = %state.step, "phone intercept fired");
            state.fields.whatsapp = Some(number);
            return advance(state, vec![replies::phone_saved().to_string()]);
        }
    }

    // Email intercept, symmetric to phone.
    if matches!(state.step, Step::Initial | Step::AskName | Step::AskTopic)
        && state.fields.email.is_none()
        && classify::is_valid_email(text)
    {
        debug!(step = %state.step, "email intercept fired");
        state.fields.email = Some(text.to_string());
        return advance(state, vec![replies::email_saved().to_string()]);
    }

    match state.step {
        Step::Initial => respond_initial(state, text),
        Step::AskName => {
            state.fields.name = Some(text.to_string());
            advance(state, vec![replies::name_ack(text)])
        }
        Step::AskTopic => {
            state.fields.topic = Some(text.to_string());
            let category = classify::categorize_topic(text);
            advance(state, vec![replies::topic_ack(category).to_string()])
        }
        Step::AskEmail => respond_ask_email(state, text),
        Step::AskWhatsapp => respond_ask_whatsapp(state, text),
        // Handled above.
        Step::Complete | Step::Declined => unreachable!("terminal steps reply early"),
    }
}

fn respond_initial(state: &mut ConversationState, text: &str) -> TurnReply {
    match classify::classify_initial(text) {
        InitialIntent::Greeting => {
            state.greeting_count += 1;
            match state.greeting_count {
                1 => TurnReply::lines(replies::greeting_first()),
                2 => TurnReply::lines(replies::greeting_second()),
                _ => {
                    let lines = replies::greeting_third()
                        .into_iter()
                        .map(String::from)
                        .collect();
                    advance(state, lines)
                }
            }
        }
        InitialIntent::CasualHi => advance(state, vec![replies::casual_hi().to_string()]),
        InitialIntent::JustTesting => TurnReply::lines(replies::just_testing()),
        InitialIntent::WorkIntent => advance(state, vec![replies::work_intent().to_string()]),
        InitialIntent::NameShaped(name) => {
            let ack = replies::name_ack(&name);
            state.fields.name = Some(name);
            advance(state, vec![ack])
        }
        InitialIntent::Affirmative => advance(state, vec![replies::affirmative().to_string()]),
        InitialIntent::Negative => {
            state.step = Step::Declined;
            TurnReply::lines(replies::declined())
        }
        InitialIntent::Gibberish => {
            state.gibberish_count += 1;
            if state.gibberish_count <= GIBBERISH_STRIKE_LIMIT {
                TurnReply::lines(replies::gibberish_retry())
            } else {
                state.step = Step::AskEmail;
                TurnReply::lines([replies::gibberish_bail(), replies::prompt_for(Step::AskEmail)])
            }
        }
        InitialIntent::Fallback => {
            // Assume they want to proceed: the input is their topic.
            state.fields.topic = Some(text.to_string());
            advance(state, vec![replies::fallback_topic_ack().to_string()])
        }
    }
}

fn respond_ask_email(state: &mut ConversationState, text: &str) -> TurnReply {
    if classify::wants_to_skip(text) {
        // Email is the one hard-required channel.
        return TurnReply::lines(replies::email_required());
    }
    if classify::is_valid_email(text) {
        state.fields.email = Some(text.to_string());
        return advance(state, vec![replies::field_saved().to_string()]);
    }
    TurnReply::lines([replies::email_invalid()])
}

fn respond_ask_whatsapp(state: &mut ConversationState, text: &str) -> TurnReply {
    if classify::wants_to_skip(text) {
        return complete(state, vec![replies::whatsapp_skipped().to_string()]);
    }
    if classify::is_valid_phone(text) {
        state.fields.whatsapp = Some(classify::extract_phone(text).unwrap_or_else(|| text.to_string()));
        return advance(state, vec![replies::field_saved().to_string()]);
    }
    if let Some(number) = classify::extract_phone(text) {
        state.fields.whatsapp = Some(number);
        return advance(state, vec![replies::field_saved().to_string()]);
    }
    TurnReply::lines([replies::phone_invalid()])
}

/// Move to the first unmet field at or after the current step, appending
/// its prompt, or finish the conversation when everything from here on is
/// collected. The floor keeps jump-ahead transitions monotonic.
fn advance(state: &mut ConversationState, mut lines: Vec<String>) -> TurnReply {
    match state.fields.next_unmet_from(state.step) {
        Some(next) => {
            state.step = next;
            lines.push(replies::prompt_for(next).to_string());
            TurnReply::lines(lines)
        }
        None => complete(state, lines),
    }
}

/// Transition into `Complete`. The contact record is produced exactly
/// once per session, on the first crossing.
fn complete(state: &mut ConversationState, mut lines: Vec<String>) -> TurnReply {
    state.step = Step::Complete;
    lines.extend(replies::closing().into_iter().map(String::from));

    let completed = if state.submitted {
        None
    } else {
        state.submitted = true;
        Some(ContactRecord::from(&state.fields))
    };

    TurnReply {
        lines: crate::models::group_lines(lines),
        completed,
    }
}
