use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GenerativeModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model backend. Default: GeminiClient.
    pub model: Arc<dyn GenerativeModel>,
    pub config: Config,
}
