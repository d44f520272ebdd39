//! Help command - displays available commands.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use async_trait::async_trait;

pub struct HelpHandler;

impl HelpHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HelpHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandHandler for HelpHandler {
    fn keyword(&self) -> &str {
        "help"
    }

    fn usage(&self) -> &str {
        "help - show this message"
    }

    async fn execute(&self, _args: &str) -> AppResult<String> {
        Ok(r#"deskline - CRM desk companion

Commands:
- call <number>     place a call on the active line
- telephony on|off  toggle the telephony integration
- status            show session state
- help              show this message
- quit              exit"#
            .into())
    }
}
