//! Shared state for the settlement endpoint.

use std::sync::Arc;

use crate::config::{ConfigLoader, SettlementRules};

/// The regime loaded at startup, shared by every request.
///
/// Cloning is cheap: all handlers read the same validated rule table.
#[derive(Clone)]
pub struct AppState {
    regime: Arc<ConfigLoader>,
}

impl AppState {
    /// Wraps a loaded regime for use by the router.
    pub fn new(regime: ConfigLoader) -> Self {
        Self {
            regime: Arc::new(regime),
        }
    }

    /// The settlement rules every calculation runs under.
    pub fn rules(&self) -> &SettlementRules {
        self.regime.rules()
    }

    /// The code reported as `regime_code` in every result.
    pub fn regime_code(&self) -> &str {
        &self.regime.regime().code
    }
}
