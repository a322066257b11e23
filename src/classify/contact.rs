//! Email and phone validation / extraction
//!
//! Phone numbers are accepted in three format buckets once separators are
//! stripped: international (`+` then 10-15 digits), leading-zero local
//! (`0` then 9-10 digits), and bare (7-15 digits).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_SHAPE: Regex =
        Regex::new(r"^[A-Za-z0-9._+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").unwrap();
    // Leading phrases people type before their number.
    static ref PHONE_LEAD_IN: Regex = Regex::new(
        r"(?i)^\s*(my\s+(whatsapp\s+|phone\s+)?number\s+is|call\s+me\s+(at|on)|reach\s+me\s+(at|on)|whatsapp\s*[-:]?|text\s+me\s+(at|on)?|contact\s*[-:]?)\s*",
    )
    .unwrap();
    // A digit run of 7-19 characters allowing separators and an optional
    // leading plus.
    static ref PHONE_RUN: Regex = Regex::new(r"\+?[0-9][0-9\s\-\.\(\)]{5,17}[0-9]").unwrap();
    static ref INTL: Regex = Regex::new(r"^\+[0-9]{10,15}$").unwrap();
    static ref LOCAL_ZERO: Regex = Regex::new(r"^0[0-9]{9,10}$").unwrap();
    static ref BARE: Regex = Regex::new(r"^[0-9]{7,15}$").unwrap();
}

/// Structural email check. Never errors; a malformed address is simply a
/// `false` classification.
pub fn is_valid_email(text: &str) -> bool {
    let email = text.trim();
    if email.len() < 5 || email.len() > 254 {
        return false;
    }
    if email.matches('@').count() != 1 || email.contains("..") {
        return false;
    }
    if email.starts_with('.') || email.starts_with('@') || email.ends_with('.') || email.ends_with('@')
    {
        return false;
    }
    EMAIL_SHAPE.is_match(email)
}

fn normalize(run: &str) -> String {
    run.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

fn matches_format(cleaned: &str) -> bool {
    INTL.is_match(cleaned) || LOCAL_ZERO.is_match(cleaned) || BARE.is_match(cleaned)
}

/// Strict phone validation for when the field is explicitly being asked
/// for: the whole trimmed string must be a number, separators aside.
pub fn is_valid_phone(text: &str) -> bool {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect();
    matches_format(&cleaned)
}

/// Pull a phone number out of free text: strip a lead-in phrase, then
/// search the stripped text and finally the original for a valid digit
/// run. Returns the separator-free normalized number.
pub fn extract_phone(text: &str) -> Option<String> {
    let stripped = PHONE_LEAD_IN.replace(text, "");

    for haystack in [stripped.as_ref(), text] {
        for run in PHONE_RUN.find_iter(haystack) {
            let cleaned = normalize(run.as_str());
            if matches_format(&cleaned) {
                return Some(cleaned);
            }
        }
    }
    None
}

/// Phrases that signal the user is talking about their phone number.
/// Disambiguates intent when a bare digit run alone would be ambiguous.
pub fn mentions_phone(text: &str) -> bool {
    let lower = text.to_lowercase();
    ["my number", "call me", "whatsapp", "text me", "phone", "reach me"]
        .iter()
        .any(|phrase| lower.contains(phrase))
}
