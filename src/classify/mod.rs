//! Text classifiers
//!
//! Pure functions that inspect a single input string and return a boolean
//! or category. No side effects, no conversation state. The open-state
//! classification runs as an ordered cascade of (predicate, category)
//! pairs with first-match-wins semantics.

pub mod contact;
pub mod gibberish;
pub mod intent;
pub mod vulgarity;

pub use contact::{extract_phone, is_valid_email, is_valid_phone, mentions_phone};
pub use gibberish::is_gibberish;
pub use intent::{
    categorize_topic, extract_name_shaped, is_affirmative, is_casual_hi, is_greeting,
    is_just_testing, is_negative, is_work_intent, wants_to_skip,
};
pub use vulgarity::contains_vulgar;

/// How an input at the opening step was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialIntent {
    Greeting,
    CasualHi,
    JustTesting,
    WorkIntent,
    /// Carries the extracted name portion.
    NameShaped(String),
    Affirmative,
    Negative,
    Gibberish,
    /// Nothing matched; assume the visitor is describing their topic.
    Fallback,
}

/// Ordered cascade for the opening step. Each entry is an independent,
/// individually testable predicate; the first hit wins.
const INITIAL_CASCADE: &[fn(&str) -> Option<InitialIntent>] = &[
    |t| is_greeting(t).then_some(InitialIntent::Greeting),
    |t| is_casual_hi(t).then_some(InitialIntent::CasualHi),
    |t| is_just_testing(t).then_some(InitialIntent::JustTesting),
    |t| is_work_intent(t).then_some(InitialIntent::WorkIntent),
    |t| extract_name_shaped(t).map(InitialIntent::NameShaped),
    |t| is_affirmative(t).then_some(InitialIntent::Affirmative),
    |t| is_negative(t).then_some(InitialIntent::Negative),
    |t| is_gibberish(t).then_some(InitialIntent::Gibberish),
];

/// Classify an input arriving at the `Initial` step.
pub fn classify_initial(text: &str) -> InitialIntent {
    INITIAL_CASCADE
        .iter()
        .find_map(|predicate| predicate(text))
        .unwrap_or(InitialIntent::Fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_priority_order() {
        // A greeting wins over its own name-shape.
        assert_eq!(classify_initial("hey there"), InitialIntent::Greeting);
        // Work intent wins over gibberish ratio on short keyword inputs.
        assert_eq!(classify_initial("hire you"), InitialIntent::WorkIntent);
        // Bare yes/no never reads as a name.
        assert_eq!(classify_initial("sure"), InitialIntent::Affirmative);
        assert_eq!(classify_initial("nope"), InitialIntent::Negative);
    }

    #[test]
    fn test_name_shape_carries_value() {
        match classify_initial("i'm Maya Chen") {
            InitialIntent::NameShaped(name) => assert_eq!(name, "Maya Chen"),
            other => panic!("expected name shape, got {:?}", other),
        }
    }

    #[test]
    fn test_fallback_for_ordinary_requests() {
        assert_eq!(
            classify_initial("i want to talk about a redesign of my shop page"),
            InitialIntent::Fallback
        );
    }

    #[test]
    fn test_gibberish_lands_in_cascade() {
        assert_eq!(classify_initial("asdfasdf"), InitialIntent::Gibberish);
    }
}
