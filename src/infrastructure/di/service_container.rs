//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::ScopeService;
use crate::config::Settings;
use crate::infrastructure::traits::{Alert, StdoutAlert};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Output port every line of the chain goes through
    pub alert: Arc<dyn Alert>,
}

impl ServiceContainer {
    /// Create a new service container writing to stdout.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(StdoutAlert))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, alert: Arc<dyn Alert>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, alert }
    }

    /// Service running the closure chain through this container's output port.
    pub fn scope_service(&self) -> ScopeService {
        ScopeService::new(Arc::clone(&self.alert))
    }
}
