//! Call command - places a call through the session registry.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use async_trait::async_trait;
use session_registry::SessionRegistry;
use std::sync::Arc;

pub struct CallHandler {
    registry: Arc<SessionRegistry>,
}

impl CallHandler {
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl CommandHandler for CallHandler {
    fn keyword(&self) -> &str {
        "call"
    }

    fn usage(&self) -> &str {
        "call <number> - place a call on the active line"
    }

    async fn execute(&self, args: &str) -> AppResult<String> {
        if !self.registry.is_telephony_enabled() {
            self.registry
                .dialog()
                .alert(
                    "Telephony disabled",
                    "Enable the integration with `telephony on` before calling.",
                )
                .await;
            return Ok("Telephony is disabled.".into());
        }

        // The number goes through as typed; the dispatcher decides what
        // it accepts.
        self.registry.place_call(args)?;
        Ok(format!("Dialing {args}..."))
    }
}
