use std::collections::HashMap;

/// Hidden form field that only bots fill in.
pub const HONEYPOT_FIELD: &str = "company";

/// Check if the honeypot field is filled. Returns true if spam detected.
pub fn is_spam(fields: &HashMap<String, String>) -> bool {
    fields
        .get(HONEYPOT_FIELD)
        .is_some_and(|v| !v.trim().is_empty())
}
