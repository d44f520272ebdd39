//! Telephony command - toggles the integration flag.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use async_trait::async_trait;
use session_registry::SessionRegistry;
use std::sync::Arc;

pub struct TelephonyHandler {
    registry: Arc<SessionRegistry>,
}

impl TelephonyHandler {
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl CommandHandler for TelephonyHandler {
    fn keyword(&self) -> &str {
        "telephony"
    }

    fn usage(&self) -> &str {
        "telephony on|off - toggle the telephony integration"
    }

    async fn execute(&self, args: &str) -> AppResult<String> {
        match args {
            "on" => {
                self.registry.set_telephony_enabled(true);
                Ok("Telephony enabled.".into())
            }
            "off" => {
                self.registry.set_telephony_enabled(false);
                Ok("Telephony disabled.".into())
            }
            _ => Ok(format!("Usage: {}", self.usage())),
        }
    }
}
