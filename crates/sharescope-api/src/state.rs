//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use sharescope_core::config::AppConfig;
use sharescope_database::AccessStore;
use sharescope_service::{AccessService, ReportService};

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The store every service reads from.
    pub store: Arc<dyn AccessStore>,
    /// Access resolution service.
    pub access_service: AccessService,
    /// Aggregate report service.
    pub report_service: ReportService,
    /// When the process started serving.
    pub started_at: Instant,
}

impl AppState {
    /// Wire the services over a store.
    pub fn new(config: AppConfig, store: Arc<dyn AccessStore>) -> Self {
        Self {
            config: Arc::new(config),
            access_service: AccessService::new(Arc::clone(&store)),
            report_service: ReportService::new(Arc::clone(&store)),
            store,
            started_at: Instant::now(),
        }
    }
}
