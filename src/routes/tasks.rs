use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::{parser, pipeline};

/// Intake handler for `POST /api/tasks`.
pub async fn create_task(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let content_type = headers.get("content-type").and_then(|v| v.to_str().ok());
    if !content_type.is_some_and(|ct| ct.contains("multipart/form-data")) {
        return Err(AppError::BadRequest(
            "Expected multipart/form-data".to_string(),
        ));
    }

    let form = parser::parse_multipart(&headers, body)
        .await
        .map_err(AppError::BadRequest)?;

    let result = pipeline::run(&state, &headers, Some(addr.ip()), form).await?;

    if result.spam {
        // Same response shape as a real success so bots learn nothing.
        return Ok((StatusCode::OK, Json(json!({ "ok": true }))).into_response());
    }

    Ok((
        StatusCode::OK,
        Json(json!({ "ok": true, "id": result.submission_id })),
    )
        .into_response())
}
