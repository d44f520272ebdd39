//! Dialog service seam.

use async_trait::async_trait;

/// Modal dialog surface supplied by the host application.
///
/// The registry captures one handle at construction and hands it out
/// unchanged for the rest of the session; it never opens dialogs itself.
#[async_trait]
pub trait DialogService: Send + Sync {
    /// Show an informational dialog.
    async fn alert(&self, title: &str, body: &str);

    /// Ask the user to confirm an action.
    async fn confirm(&self, title: &str, body: &str) -> bool;
}
