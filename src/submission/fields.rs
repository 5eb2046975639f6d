use std::collections::HashMap;

use chrono::Utc;

use crate::models::submission::{created_at, submission_id};
use crate::models::{StoredFile, Submission};

use super::metadata::RequestMeta;

/// Required form fields, in validation order.
pub const REQUIRED_FIELDS: [&str; 10] = [
    "category",
    "title",
    "description",
    "suburb",
    "postcode",
    "name",
    "mobile",
    "email",
    "contactPref",
    "timing",
];

/// Build a candidate submission from form fields, defaulting every
/// missing field to the empty string.
pub fn build(
    fields: &HashMap<String, String>,
    files: Vec<StoredFile>,
    meta: RequestMeta,
) -> Submission {
    let now = Utc::now();
    let get = |key: &str| fields.get(key).cloned().unwrap_or_default();

    Submission {
        id: submission_id(now),
        created_at: created_at(now),
        category: get("category"),
        title: get("title"),
        description: get("description"),
        suburb: get("suburb"),
        postcode: get("postcode"),
        address: get("address"),
        timing: get("timing"),
        budget: get("budget"),
        name: get("name"),
        mobile: get("mobile"),
        email: get("email"),
        contact_pref: get("contactPref"),
        files,
        user_agent: meta.user_agent,
        client_ip: meta.client_ip,
    }
}

/// Fail-fast validation: the first required field that is empty after
/// trimming, or None when all ten are present.
pub fn first_missing(submission: &Submission) -> Option<&'static str> {
    let values: [(&'static str, &str); 10] = [
        ("category", &submission.category),
        ("title", &submission.title),
        ("description", &submission.description),
        ("suburb", &submission.suburb),
        ("postcode", &submission.postcode),
        ("name", &submission.name),
        ("mobile", &submission.mobile),
        ("email", &submission.email),
        ("contactPref", &submission.contact_pref),
        ("timing", &submission.timing),
    ];

    values
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
}
