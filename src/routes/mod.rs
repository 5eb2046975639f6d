pub mod health;
pub mod tasks;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;
use crate::store::uploads::{MAX_FILES, MAX_FILE_BYTES};

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route(
            "/api/tasks",
            post(tasks::create_task).layer(DefaultBodyLimit::max(multipart_body_ceiling())),
        )
        .route("/api/health", get(health::health))
}

/// Multipart ceiling: six full-size files plus form-field overhead.
/// The 1 MiB default from the app layer stays in force everywhere else.
fn multipart_body_ceiling() -> usize {
    (MAX_FILES as u64 * MAX_FILE_BYTES + 1024 * 1024) as usize
}
