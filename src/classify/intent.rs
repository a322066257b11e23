//! Salutation, yes/no, work-intent, and name-shape detectors, plus the
//! topic categorizer. All pure functions over a single input string.

use crate::models::TopicCategory;
use lazy_static::lazy_static;
use regex::Regex;

/// Site owner's name; inputs mentioning it are addressed at them, not a
/// visitor introducing themselves.
pub const OWNER_NAME: &str = "asith";

lazy_static! {
    static ref GREETING: Regex =
        Regex::new(r"(?i)^(hi|hello|hey|heya|hiya)(\s+(there|[a-z]+))?$").unwrap();
    // ['’] admits the typographic apostrophe mobile keyboards insert.
    static ref CASUAL_HI: Regex = Regex::new(
        r"(?i)^(yo|sup|wassup|whats?\s*up|what['’]s\s+up|how\s+are\s+you|how['’]s\s+it\s+going)\b",
    )
    .unwrap();
    static ref NAME_LEAD_IN: Regex =
        Regex::new(r"(?i)^\s*(my\s+name\s+is|i['’]m|i\s+am|this\s+is)\s+").unwrap();
    static ref NAME_WORD: Regex = Regex::new(r"(?i)^[a-z][a-z'’\-]*$").unwrap();
}

/// Trim trailing punctuation and surrounding whitespace before a
/// closed-vocabulary match.
fn trim_token(text: &str) -> String {
    text.trim()
        .trim_end_matches(['.', '!', '?', ',', ';', ':'])
        .trim()
        .to_lowercase()
}

/// Short salutation, optionally with an addressee ("hey there", "hi asith").
pub fn is_greeting(text: &str) -> bool {
    GREETING.is_match(&trim_token(text))
}

/// Looser conversational openers that aren't plain salutations.
pub fn is_casual_hi(text: &str) -> bool {
    CASUAL_HI.is_match(&trim_token(text))
}

/// The visitor admits they're poking at the widget.
pub fn is_just_testing(text: &str) -> bool {
    let t = trim_token(text);
    t == "test" || t == "testing" || t.contains("just testing") || t.contains("just checking")
}

const AFFIRMATIVE: &[&str] = &[
    "yes", "yeah", "yep", "yup", "sure", "ok", "okay", "of course", "sure thing", "why not", "y",
];

const NEGATIVE: &[&str] = &[
    "no", "nope", "nah", "n", "not really", "no thanks", "no thank you", "not now",
];

pub fn is_affirmative(text: &str) -> bool {
    AFFIRMATIVE.contains(&trim_token(text).as_str())
}

pub fn is_negative(text: &str) -> bool {
    NEGATIVE.contains(&trim_token(text).as_str())
}

/// "skip" or an explicit negative, used by the optional-field steps.
pub fn wants_to_skip(text: &str) -> bool {
    trim_token(text).contains("skip") || is_negative(text)
}

/// Ordered phrase patterns expressing desire to collaborate, hire, get
/// mentorship, or request a review — any match counts.
const WORK_INTENT_PHRASES: &[&str] = &[
    "work together",
    "work with you",
    "hire",
    "hiring",
    "freelance",
    "job",
    "collaborat",
    "mentor",
    "review my",
    "portfolio review",
    "consult",
    "coaching",
    "need a designer",
    "build me",
    "project for you",
];

pub fn is_work_intent(text: &str) -> bool {
    let lower = text.to_lowercase();
    WORK_INTENT_PHRASES.iter().any(|p| lower.contains(p))
}

/// Words that mark a sentence rather than a bare name.
const NOT_A_NAME_WORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "you", "your", "not", "please", "thanks",
    "thank", "good", "nice", "want", "need", "help", "work", "just", "here", "hello", "again",
];

const QUESTION_WORDS: &[&str] = &[
    "what", "how", "why", "when", "where", "who", "which", "can", "could", "do", "does", "is",
    "are", "will", "would", "should",
];

/// If the input looks like the visitor stating their name, return the name
/// portion. 1-4 alphabetic words, no question-word opener, no sentence
/// filler, and not the site owner's name.
pub fn extract_name_shaped(text: &str) -> Option<String> {
    let candidate = NAME_LEAD_IN.replace(text.trim(), "");
    let candidate = candidate
        .trim()
        .trim_end_matches(['.', '!', '?', ','])
        .to_string();

    let words: Vec<&str> = candidate.split_whitespace().collect();
    if words.is_empty() || words.len() > 4 {
        return None;
    }
    // Yes/no vocabulary is never a name, whatever its shape.
    if is_affirmative(&candidate) || is_negative(&candidate) {
        return None;
    }
    // Neither is a keyboard mash; let the gibberish branch claim it.
    if words.iter().any(|w| super::gibberish::looks_mashed(w)) {
        return None;
    }
    if !words.iter().all(|w| NAME_WORD.is_match(w)) {
        return None;
    }

    let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    if QUESTION_WORDS.contains(&lowered[0].as_str()) {
        return None;
    }
    if lowered.iter().any(|w| {
        NOT_A_NAME_WORDS.contains(&w.as_str()) || w == OWNER_NAME
    }) {
        return None;
    }

    Some(candidate)
}

/// Ordered keyword groups; first group with a hit names the category.
const TOPIC_GROUPS: &[(TopicCategory, &[&str])] = &[
    (
        TopicCategory::Mentorship,
        &["mentorship", "mentor", "guidance", "coach", "career advice"],
    ),
    (
        TopicCategory::Hiring,
        &["hire", "hiring", "job", "position", "role", "recruit", "vacancy", "opening"],
    ),
    (
        TopicCategory::UxDesign,
        &["ux", "ui", "user experience", "usability", "wireframe", "figma", "design"],
    ),
    (
        TopicCategory::Product,
        &["product", "mvp", "startup", "saas", "feature"],
    ),
    (TopicCategory::Branding, &["brand", "logo", "identity"]),
    (
        TopicCategory::AppWeb,
        &["app", "website", "web", "mobile", "landing page", "site"],
    ),
    (
        TopicCategory::Review,
        &["review", "feedback", "critique", "audit"],
    ),
    (
        TopicCategory::Collaboration,
        &["collaborate", "collaboration", "partner", "work together", "team up"],
    ),
];

/// Bucket a free-text topic; defaults to `General` when nothing matches.
pub fn categorize_topic(text: &str) -> TopicCategory {
    let lower = text.to_lowercase();
    for (category, keywords) in TOPIC_GROUPS {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return *category;
        }
    }
    TopicCategory::General
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_detection() {
        assert!(is_greeting("hi"));
        assert!(is_greeting("Hello!"));
        assert!(is_greeting("hey there"));
        assert!(is_greeting("hi asith"));
        assert!(!is_greeting("hey can you help me with something"));
        assert!(!is_greeting("highway"));
    }

    #[test]
    fn test_casual_hi() {
        assert!(is_casual_hi("what's up?"));
        assert!(is_casual_hi("what\u{2019}s up?"));
        assert!(is_casual_hi("yo"));
        assert!(is_casual_hi("how are you"));
        assert!(!is_casual_hi("hello"));
    }

    #[test]
    fn test_yes_no_vocab() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("Sure!"));
        assert!(is_affirmative("okay."));
        assert!(is_negative("no"));
        assert!(is_negative("not really"));
        assert!(!is_affirmative("yesterday"));
        assert!(!is_negative("november"));
    }

    #[test]
    fn test_skip_detection() {
        assert!(wants_to_skip("skip"));
        assert!(wants_to_skip("i'll skip this one"));
        assert!(wants_to_skip("nope"));
        assert!(!wants_to_skip("0771234567"));
    }

    #[test]
    fn test_work_intent() {
        assert!(is_work_intent("i want to hire you"));
        assert!(is_work_intent("can we collaborate on something"));
        assert!(is_work_intent("looking for mentorship"));
        assert!(!is_work_intent("nice weather today"));
    }

    #[test]
    fn test_name_shaped() {
        assert_eq!(extract_name_shaped("Maya Chen"), Some("Maya Chen".into()));
        assert_eq!(extract_name_shaped("my name is Maya"), Some("Maya".into()));
        assert_eq!(extract_name_shaped("i'm Ravi"), Some("Ravi".into()));
        assert_eq!(extract_name_shaped("i\u{2019}m Maya"), Some("Maya".into()));
        assert_eq!(extract_name_shaped("O\u{2019}Brien"), Some("O\u{2019}Brien".into()));
        assert_eq!(extract_name_shaped("what is your name"), None);
        assert_eq!(extract_name_shaped("i need help with the site"), None);
        assert_eq!(extract_name_shaped("hello asith"), None);
        assert_eq!(extract_name_shaped("one two three four five"), None);
    }

    #[test]
    fn test_topic_categorizer_first_match_wins() {
        assert_eq!(categorize_topic("need a mentor"), TopicCategory::Mentorship);
        assert_eq!(categorize_topic("we are hiring"), TopicCategory::Hiring);
        assert_eq!(categorize_topic("ux audit for my app"), TopicCategory::UxDesign);
        assert_eq!(categorize_topic("a logo refresh"), TopicCategory::Branding);
        assert_eq!(categorize_topic("new website"), TopicCategory::AppWeb);
        assert_eq!(categorize_topic("portfolio feedback"), TopicCategory::Review);
        assert_eq!(categorize_topic("something else entirely"), TopicCategory::General);
    }
}
