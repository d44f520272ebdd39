//! Bridge dispatcher backing the call capability.

use session_registry::{CallDispatcher, DispatchError};
use std::time::Duration;
use tracing::info;

/// Hands outbound calls to the configured desk line.
///
/// This is the integration side of the registry's dispatch seam: the
/// shell registers one of these when telephony is enabled, and callers
/// reach it only through `SessionRegistry::place_call`.
pub struct BridgeDispatcher {
    line: String,
    dial_timeout: Duration,
}

impl BridgeDispatcher {
    pub fn new(line: impl Into<String>, dial_timeout: Duration) -> Self {
        Self {
            line: line.into(),
            dial_timeout,
        }
    }
}

impl CallDispatcher for BridgeDispatcher {
    fn name(&self) -> &str {
        "bridge"
    }

    fn dispatch(&self, number: &str) -> Result<(), DispatchError> {
        // Number validation belongs to the dispatcher, not the registry.
        if number.trim().is_empty() {
            return Err(DispatchError::Rejected("empty number".into()));
        }

        info!(
            number,
            line = %self.line,
            dial_timeout = ?self.dial_timeout,
            "Bridging call to desk line"
        );
        Ok(())
    }
}
