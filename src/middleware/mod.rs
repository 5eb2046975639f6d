use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::AppError;
use crate::state::SharedState;

/// Per-IP rate limit applied ahead of every API handler.
pub async fn rate_limit(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Err(retry_after) = state.api_limiter.check(
        addr.ip(),
        state.config.rate_limit,
        state.config.rate_limit_window_secs,
    ) {
        return Err(AppError::RateLimited(retry_after));
    }

    Ok(next.run(request).await)
}
