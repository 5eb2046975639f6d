use std::sync::Arc;

use crate::config::Config;
use crate::email::Notifier;
use crate::rate_limit::ApiRateLimiter;
use crate::store::log::SubmissionLog;
use crate::store::uploads::UploadStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub uploads: UploadStore,
    pub log: SubmissionLog,
    pub notifier: Option<Arc<Notifier>>,
    pub api_limiter: ApiRateLimiter,
}
