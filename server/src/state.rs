//! Application state

use std::sync::Arc;

use crate::config::Config;
use crate::diagnostics::DiagnosticSink;

/// Shared application state
///
/// Cloned into every handler; all fields are behind `Arc`. Page state is
/// never stored here: each request rebuilds it from the submitted form.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub diagnostics: Arc<DiagnosticSink>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        let diagnostics = Arc::new(DiagnosticSink::new(config.diagnostics_capacity));
        Self {
            config: Arc::new(config),
            diagnostics,
        }
    }
}
