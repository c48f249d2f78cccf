use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    /// The generation gateway. `LlmClient` in production, a mock in tests.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
