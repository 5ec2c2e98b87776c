//! Closure chain service
//!
//! Runs the chain against an injected output port.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{self, Greeting};
use crate::infrastructure::traits::Alert;

/// Service that runs the closure chain once per call.
pub struct ScopeService {
    alert: Arc<dyn Alert>,
}

impl ScopeService {
    /// Create a new service writing through `alert`.
    pub fn new(alert: Arc<dyn Alert>) -> Self {
        Self { alert }
    }

    /// Run the chain, emitting four lines through the output port.
    ///
    /// A failing port stops the chain; lines already emitted stay emitted.
    #[instrument(skip(self))]
    pub fn run(&self, greeting: &Greeting) -> ApplicationResult<()> {
        debug!("run: {}", greeting);
        domain::outer(greeting, |line| self.alert.alert(line))
            .with_output_context("run closure chain")
    }
}
