//! Shell command handlers.

mod call;
mod help;
mod status;
mod telephony;

pub use call::CallHandler;
pub use help::HelpHandler;
pub use status::StatusHandler;
pub use telephony::TelephonyHandler;

use crate::error::AppResult;
use async_trait::async_trait;

/// Command handler trait.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command keyword (e.g., "call", "status").
    fn keyword(&self) -> &str;

    /// One-line usage string shown by help.
    fn usage(&self) -> &str;

    /// Check if this handler matches the input line.
    fn matches(&self, line: &str) -> bool {
        line.split_whitespace().next() == Some(self.keyword())
    }

    /// Execute the command with everything after the keyword.
    async fn execute(&self, args: &str) -> AppResult<String>;
}

/// Split an input line into keyword and argument remainder.
pub fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    }
}
