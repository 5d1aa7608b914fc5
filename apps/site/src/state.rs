use std::sync::Arc;

use crate::config::Config;
use crate::fetch::DocumentSource;
use crate::pipeline::DocumentCell;
use crate::theme::ThemeController;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Upstream document source. Trait object so tests can stub the fetch.
    pub source: Arc<dyn DocumentSource>,
    /// Owns the applied theme preference and its persistence.
    pub theme: Arc<ThemeController>,
    /// Single-flight cell holding the terminal load outcome.
    pub document: Arc<DocumentCell>,
    pub config: Config,
}
