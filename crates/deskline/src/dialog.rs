//! Terminal dialog service.

use async_trait::async_trait;
use session_registry::DialogService;
use tracing::debug;

/// Renders dialogs as plain stdout boxes.
///
/// Confirmation prompts auto-accept; the terminal build has no modal
/// input of its own.
pub struct TerminalDialog;

#[async_trait]
impl DialogService for TerminalDialog {
    async fn alert(&self, title: &str, body: &str) {
        println!("┌─ {title}");
        println!("│  {body}");
        println!("└─ [ok]");
    }

    async fn confirm(&self, title: &str, body: &str) -> bool {
        println!("┌─ {title}");
        println!("│  {body}");
        println!("└─ [ok] (auto-accepted)");
        debug!(title, "Confirm dialog auto-accepted");
        true
    }
}
