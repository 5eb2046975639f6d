use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One accepted task request. Immutable once created; appended to the
/// submission log exactly once and never read back by this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub created_at: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub suburb: String,
    pub postcode: String,
    pub address: String,
    pub timing: String,
    pub budget: String,
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub contact_pref: String,
    pub files: Vec<StoredFile>,
    pub user_agent: String,
    pub client_ip: String,
}

/// Metadata for one stored attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    pub stored_name: String,
    pub original_name: String,
    pub size_bytes: u64,
}

/// Last millisecond value handed out, bumped forward on collision so that
/// ids stay unique within the process even for same-millisecond requests.
static LAST_ID_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Generate a submission id from the given timestamp, `TA-<unix-millis>`.
pub fn submission_id(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis();
    let unique = match LAST_ID_MILLIS.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
        Some(millis.max(last + 1))
    }) {
        Ok(prev) | Err(prev) => millis.max(prev + 1),
    };
    format!("TA-{unique}")
}

/// Format an acceptance timestamp as ISO-8601 with millisecond precision.
pub fn created_at(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
