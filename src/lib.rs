pub mod config;
pub mod error;
pub mod state;
pub mod models;
pub mod middleware;
pub mod routes;
pub mod email;
pub mod submission;
pub mod store;
pub mod rate_limit;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::email::Notifier;
use crate::rate_limit::ApiRateLimiter;
use crate::state::{AppState, SharedState};
use crate::store::log::SubmissionLog;
use crate::store::uploads::UploadStore;

pub fn build_app(config: Config) -> Router {
    // Build notifier: requires SMTP credentials and a destination address.
    let notifier = match (&config.smtp, &config.notify.to) {
        (Some(smtp), Some(to)) => {
            match Notifier::new(smtp, config.notify.from.clone(), to.clone()) {
                Ok(n) => {
                    tracing::info!("Email notifications configured for {to}");
                    Some(Arc::new(n))
                }
                Err(e) => {
                    tracing::warn!("Email notifications not available: {e}");
                    None
                }
            }
        }
        _ => {
            tracing::info!("Email notifications not configured");
            None
        }
    };

    let cors_origin = match config.site_origin.parse::<HeaderValue>() {
        Ok(origin) => origin,
        Err(e) => {
            tracing::warn!("Invalid SITE_ORIGIN '{}': {e}", config.site_origin);
            HeaderValue::from_static("http://localhost")
        }
    };
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let state: SharedState = Arc::new(AppState {
        uploads: UploadStore::new(config.upload_dir.clone()),
        log: SubmissionLog::new(&config.data_dir),
        notifier,
        api_limiter: ApiRateLimiter::new(),
        config,
    });

    Router::new()
        .merge(routes::api_routes())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::rate_limit,
        ))
        .layer(DefaultBodyLimit::max(state.config.max_body_size))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
