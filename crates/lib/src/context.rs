//! # Question Routing
//!
//! Decides whether an incoming question needs database context injected into
//! the model prompt. This is a pure keyword test, not natural-language
//! understanding: a question is data-dependent when it mentions one of the
//! domain terms below, or when the whole message is a bare sample id.

/// Domain terms that mark a question as data-dependent.
pub const TRIGGER_KEYWORDS: &[&str] = &[
    "sample",
    "data",
    "results",
    "test",
    "location",
    "concentration",
];

/// Returns `true` when the message requires current table contents to answer.
///
/// Matching is case-insensitive and positional-agnostic. A trimmed message
/// consisting only of digits is a direct sample-id reference and always
/// routes as data-dependent. Empty or whitespace-only input never matches.
pub fn needs_database_context(message: &str) -> bool {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return false;
    }
    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }
    let lowered = message.to_lowercase();
    TRIGGER_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}
