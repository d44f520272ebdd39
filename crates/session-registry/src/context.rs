//! Explicit application context.
//!
//! The host builds one context at startup and threads it to every
//! component that needs session state, instead of reaching for an
//! ambient global.

use crate::dialog::DialogService;
use crate::error::RegistryError;
use crate::registry::SessionRegistry;
use std::sync::{Arc, OnceLock};

/// Dependencies the host wires up before the session starts.
///
/// The registry is created lazily on first access and every later call
/// returns the same instance.
#[derive(Default)]
pub struct AppContext {
    dialog: Option<Arc<dyn DialogService>>,
    registry: OnceLock<Arc<SessionRegistry>>,
}

impl AppContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the dialog service the registry will hand out.
    pub fn with_dialog(mut self, dialog: Arc<dyn DialogService>) -> Self {
        self.dialog = Some(dialog);
        self
    }

    /// The session registry, created on first access.
    ///
    /// Fails with [`RegistryError::MissingDependency`] if no dialog
    /// service was supplied.
    pub fn registry(&self) -> Result<Arc<SessionRegistry>, RegistryError> {
        if let Some(registry) = self.registry.get() {
            return Ok(registry.clone());
        }

        let dialog = self
            .dialog
            .clone()
            .ok_or(RegistryError::MissingDependency("dialog service"))?;
        let created = Arc::new(SessionRegistry::new(dialog));

        // Another thread may have won the race; get_or_init keeps the
        // single-instance contract either way.
        Ok(self.registry.get_or_init(|| created).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct NullDialog;

    #[async_trait]
    impl DialogService for NullDialog {
        async fn alert(&self, _title: &str, _body: &str) {}

        async fn confirm(&self, _title: &str, _body: &str) -> bool {
            true
        }
    }

    #[test]
    fn test_registry_requires_dialog() {
        let ctx = AppContext::new();
        let err = ctx.registry().unwrap_err();
        assert!(matches!(
            err,
            RegistryError::MissingDependency("dialog service")
        ));
    }

    #[test]
    fn test_registry_is_created_once() {
        let ctx = AppContext::new().with_dialog(Arc::new(NullDialog));

        let first = ctx.registry().unwrap();
        let second = ctx.registry().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_registry_keeps_supplied_dialog() {
        let dialog: Arc<dyn DialogService> = Arc::new(NullDialog);
        let ctx = AppContext::new().with_dialog(dialog.clone());

        let registry = ctx.registry().unwrap();
        assert!(Arc::ptr_eq(&registry.dialog(), &dialog));
    }
}
