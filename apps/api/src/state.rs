use crate::config::Config;
use crate::content::store::ContentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: ContentStore,
    pub config: Config,
}
