use std::sync::Arc;

use crate::config::Config;
use crate::db::DocumentStore;
use crate::export::FallbackChain;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    /// Browser, then external service, then raw HTML.
    pub exporter: Arc<FallbackChain>,
    pub config: Config,
}
