use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing here is mutable — each request is self-contained.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}
