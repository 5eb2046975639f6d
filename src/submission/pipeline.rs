use std::net::IpAddr;

use axum::http::HeaderMap;

use crate::error::AppError;
use crate::state::SharedState;

use super::fields;
use super::honeypot;
use super::metadata;
use super::parser::TaskForm;

pub struct PipelineResult {
    pub submission_id: Option<String>,
    pub spam: bool,
}

/// Run the intake pipeline: honeypot check, upload storage, record
/// construction, required-field validation, durable append, then a
/// fire-and-forget notification email.
pub async fn run(
    state: &SharedState,
    headers: &HeaderMap,
    peer_addr: Option<IpAddr>,
    form: TaskForm,
) -> Result<PipelineResult, AppError> {
    if honeypot::is_spam(&form.fields) {
        tracing::info!("Honeypot tripped, silently dropping submission");
        return Ok(PipelineResult {
            submission_id: None,
            spam: true,
        });
    }

    let stored = state
        .uploads
        .store_all(&form.files)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to store uploads: {e}")))?;

    let meta = metadata::extract(headers, peer_addr, &state.config.trusted_proxies);
    let submission = fields::build(&form.fields, stored, meta);

    if let Some(missing) = fields::first_missing(&submission) {
        return Err(AppError::BadRequest(format!("Missing {missing}")));
    }

    // Persistence precedes notification: the append must succeed before
    // the response or the email.
    state
        .log
        .append(&submission)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to append submission: {e}")))?;

    tracing::info!(
        "Accepted submission {} ({} files)",
        submission.id,
        submission.files.len()
    );

    let id = submission.id.clone();

    if let Some(notifier) = &state.notifier {
        let notifier = notifier.clone();
        // Fire-and-forget: the response never waits on delivery and
        // delivery failure is logged only.
        tokio::spawn(async move {
            if let Err(e) = notifier.send_task_received(&submission).await {
                tracing::error!("Failed to send notification email: {e}");
            }
        });
    }

    Ok(PipelineResult {
        submission_id: Some(id),
        spam: false,
    })
}
