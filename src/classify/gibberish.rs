//! Gibberish detection
//!
//! Four independent triggers, any one of which classifies the input as
//! gibberish:
//! 1. a 4+ character home-row keyboard mash ("asdf", "jkljkl")
//! 2. any character repeated 4+ times in a row
//! 3. a single unrecognized word longer than 3 characters
//! 4. fewer than 30% recognized words across more than 2 words
//!
//! A word counts as recognized if it is 2 characters or shorter, or is in
//! a fixed dictionary of common English plus this site's domain vocabulary.

use lazy_static::lazy_static;
use regex::Regex;

/// Common English + domain vocabulary used for the recognized-word ratio.
const COMMON_WORDS: &[&str] = &[
    "hi", "hello", "hey", "yes", "no", "ok", "okay", "sure", "thanks", "thank", "you", "i", "me",
    "my", "we", "us", "the", "a", "an", "is", "are", "was", "were", "be", "been", "have", "has",
    "had", "do", "does", "did", "will", "would", "could", "should", "can", "may", "might", "must",
    "need", "want", "like", "love", "work", "help", "project", "design", "app", "website", "job",
    "hire", "collaborate", "question", "ask", "talk", "chat", "please", "just", "looking",
    "interested", "about", "for", "with", "and", "or", "but", "not", "this", "that", "what",
    "how", "why", "when", "where", "who", "your", "name", "email", "phone", "number", "contact",
    "message", "great", "good", "nice", "awesome", "cool", "amazing", "get", "let", "make",
    "take", "give", "see", "know", "think", "feel", "new", "old", "big", "small", "first",
    "last", "one", "two", "time", "way", "day", "thing", "person", "people", "world", "life",
    "hand", "part", "place", "case", "week", "company", "system", "program", "point", "home",
    "area", "money", "story", "fact", "month", "lot", "right", "study", "book", "word",
    "business", "issue", "side", "kind", "head", "house", "service", "friend", "power", "hour",
    "game", "line", "end", "member", "law", "car", "city", "community", "team", "minute",
    "idea", "body", "information", "back", "face", "level", "office", "door", "health", "art",
    "history", "party", "result", "change", "morning", "reason", "research", "moment",
    "teacher", "force", "education", "mentorship", "mentor", "review", "portfolio", "brand",
    "branding", "product", "ux", "ui", "testing",
];

lazy_static! {
    // Home-row letters only: the classic one-hand keyboard mash.
    static ref KEYBOARD_MASH: Regex = Regex::new(r"^[asdfghjkl]{4,}$").unwrap();
}

/// True if any character appears 4+ times consecutively ("aaaahhhh",
/// "heyyyyy").
fn has_repeated_run(text: &str) -> bool {
    let mut run = 0u32;
    let mut prev = None;
    for c in text.chars() {
        if prev == Some(c) {
            run += 1;
        } else {
            run = 1;
            prev = Some(c);
        }
        if run >= 4 {
            return true;
        }
    }
    false
}

fn is_recognized(word: &str) -> bool {
    word.len() <= 2 || COMMON_WORDS.contains(&word)
}

/// Keyboard-mash signature alone: a home-row run or a 4+ repeated
/// character. Used by the name-shape check, which must not treat a mash
/// as a plausible name.
pub fn looks_mashed(text: &str) -> bool {
    let lower = text.to_lowercase();
    let spaceless: String = lower.chars().filter(|c| !c.is_whitespace()).collect();
    KEYBOARD_MASH.is_match(&spaceless) || has_repeated_run(&lower)
}

/// Classify a raw input string as gibberish. Pure function: identical
/// input always yields the identical verdict.
pub fn is_gibberish(text: &str) -> bool {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();
    let words: Vec<&str> = cleaned.split_whitespace().collect();

    if words.is_empty() {
        return true;
    }

    let spaceless: String = cleaned.chars().filter(|c| !c.is_whitespace()).collect();
    if KEYBOARD_MASH.is_match(&spaceless) || has_repeated_run(&cleaned) {
        return true;
    }

    if words.len() == 1 && words[0].len() > 3 && !COMMON_WORDS.contains(&words[0]) {
        return true;
    }

    let recognized = words.iter().filter(|w| is_recognized(w)).count();
    let ratio = recognized as f32 / words.len() as f32;

    ratio < 0.3 && words.len() > 2
}
