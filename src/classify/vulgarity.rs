//! Vulgar language detection
//!
//! Contract: lowercase substring matching, not word-boundary matching.
//! Embedded-substring false positives (e.g. "shit" inside "shittake") are
//! accepted behavior, so the flagged list avoids entries that commonly
//! occur inside ordinary English words.

/// Static flagged-word list — zero allocation
const VULGAR_WORDS: &[&str] = &[
    "fuck", "shit", "bitch", "damn", "crap", "bastard", "idiot", "stupid", "dumbass", "asshole",
];

/// True if the input contains any flagged word as a substring.
pub fn contains_vulgar(text: &str) -> bool {
    let lower = text.to_lowercase();
    VULGAR_WORDS.iter().any(|word| lower.contains(word))
}
