//! Status command - reports session state.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use async_trait::async_trait;
use session_registry::SessionRegistry;
use std::sync::Arc;

pub struct StatusHandler {
    registry: Arc<SessionRegistry>,
}

impl StatusHandler {
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl CommandHandler for StatusHandler {
    fn keyword(&self) -> &str {
        "status"
    }

    fn usage(&self) -> &str {
        "status - show session state"
    }

    async fn execute(&self, _args: &str) -> AppResult<String> {
        let state = if self.registry.is_telephony_enabled() {
            "enabled"
        } else {
            "disabled"
        };
        Ok(format!("Telephony: {state}"))
    }
}
