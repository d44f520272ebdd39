//! The session registry itself.

use crate::dialog::DialogService;
use crate::dispatch::{CallDispatcher, NoopDispatcher};
use crate::error::DispatchError;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

/// Single source of truth for the telephony toggle and the active call
/// dispatcher, plus the dialog handle shared across the session.
///
/// All operations are synchronous and safe from any thread; the
/// dispatcher lock is held only for the pointer swap, never across a
/// dispatch.
pub struct SessionRegistry {
    telephony_enabled: watch::Sender<bool>,
    dispatcher: RwLock<Arc<dyn CallDispatcher>>,
    dialog: Arc<dyn DialogService>,
}

impl std::fmt::Debug for SessionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRegistry")
            .field("telephony_enabled", &self.is_telephony_enabled())
            .finish_non_exhaustive()
    }
}

impl SessionRegistry {
    /// Create a registry around the host-supplied dialog handle.
    ///
    /// Telephony starts disabled and the no-op dispatcher is installed,
    /// so `place_call` is safe before any integration registers.
    pub fn new(dialog: Arc<dyn DialogService>) -> Self {
        let (telephony_enabled, _) = watch::channel(false);
        Self {
            telephony_enabled,
            dispatcher: RwLock::new(Arc::new(NoopDispatcher)),
            dialog,
        }
    }

    /// The dialog handle captured at construction.
    ///
    /// Returns the same instance for the lifetime of the session.
    pub fn dialog(&self) -> Arc<dyn DialogService> {
        self.dialog.clone()
    }

    /// Current state of the telephony toggle.
    pub fn is_telephony_enabled(&self) -> bool {
        *self.telephony_enabled.borrow()
    }

    /// Flip the telephony toggle.
    ///
    /// Subscribers from [`subscribe_telephony`](Self::subscribe_telephony)
    /// are notified before this returns, and the new value is visible to
    /// the very next read.
    pub fn set_telephony_enabled(&self, enabled: bool) {
        self.telephony_enabled.send_replace(enabled);
        debug!(enabled, "Telephony toggle updated");
    }

    /// Watch the telephony toggle for changes.
    pub fn subscribe_telephony(&self) -> watch::Receiver<bool> {
        self.telephony_enabled.subscribe()
    }

    /// Replace the active call dispatcher.
    ///
    /// The next `place_call` uses the new dispatcher.
    pub fn set_call_dispatcher(&self, dispatcher: Arc<dyn CallDispatcher>) {
        info!(dispatcher = dispatcher.name(), "Call dispatcher registered");
        *self.dispatcher.write() = dispatcher;
    }

    /// Forward a call to the active dispatcher.
    ///
    /// The number is passed through untouched and any dispatcher error
    /// surfaces to the caller unchanged.
    pub fn place_call(&self, number: &str) -> Result<(), DispatchError> {
        let dispatcher = self.dispatcher.read().clone();
        debug!(dispatcher = dispatcher.name(), "Dispatching call");
        dispatcher.dispatch(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    struct NullDialog;

    #[async_trait]
    impl DialogService for NullDialog {
        async fn alert(&self, _title: &str, _body: &str) {}

        async fn confirm(&self, _title: &str, _body: &str) -> bool {
            true
        }
    }

    struct RecordingDispatcher {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingDispatcher {
        fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
            let calls = Arc::new(Mutex::new(Vec::new()));
            (Self { calls: calls.clone() }, calls)
        }
    }

    impl CallDispatcher for RecordingDispatcher {
        fn name(&self) -> &str {
            "recording"
        }

        fn dispatch(&self, number: &str) -> Result<(), DispatchError> {
            self.calls.lock().push(number.to_string());
            Ok(())
        }
    }

    struct FailingDispatcher;

    impl CallDispatcher for FailingDispatcher {
        fn name(&self) -> &str {
            "failing"
        }

        fn dispatch(&self, _number: &str) -> Result<(), DispatchError> {
            Err(DispatchError::Unavailable("bridge offline".into()))
        }
    }

    fn registry() -> SessionRegistry {
        SessionRegistry::new(Arc::new(NullDialog))
    }

    #[test]
    fn test_telephony_toggle_round_trip() {
        let registry = registry();
        assert!(!registry.is_telephony_enabled());

        registry.set_telephony_enabled(true);
        assert!(registry.is_telephony_enabled());

        registry.set_telephony_enabled(false);
        assert!(!registry.is_telephony_enabled());
    }

    #[test]
    fn test_place_call_before_registration_is_noop() {
        let registry = registry();
        assert!(registry.place_call("555-0100").is_ok());
    }

    #[test]
    fn test_registered_dispatcher_invoked_once() {
        let registry = registry();
        let (dispatcher, calls) = RecordingDispatcher::new();
        registry.set_call_dispatcher(Arc::new(dispatcher));

        registry.place_call("555-0100").unwrap();

        assert_eq!(calls.lock().as_slice(), ["555-0100"]);
    }

    #[test]
    fn test_replacement_dispatcher_takes_over() {
        let registry = registry();
        let (first, first_calls) = RecordingDispatcher::new();
        let (second, second_calls) = RecordingDispatcher::new();

        registry.set_call_dispatcher(Arc::new(first));
        registry.set_call_dispatcher(Arc::new(second));
        registry.place_call("555-0199").unwrap();

        assert!(first_calls.lock().is_empty());
        assert_eq!(second_calls.lock().as_slice(), ["555-0199"]);
    }

    #[test]
    fn test_dispatcher_error_surfaces_and_state_survives() {
        let registry = registry();
        registry.set_telephony_enabled(true);
        registry.set_call_dispatcher(Arc::new(FailingDispatcher));

        let err = registry.place_call("555-0100").unwrap_err();
        assert!(matches!(err, DispatchError::Unavailable(_)));

        // Flag untouched, same dispatcher still registered.
        assert!(registry.is_telephony_enabled());
        let err = registry.place_call("555-0100").unwrap_err();
        assert!(matches!(err, DispatchError::Unavailable(_)));
    }

    #[test]
    fn test_dialog_handle_is_reference_stable() {
        let registry = registry();
        let first = registry.dialog();
        let second = registry.dialog();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_subscriber_sees_toggle_change() {
        let registry = registry();
        let mut watcher = registry.subscribe_telephony();
        assert!(!*watcher.borrow());

        registry.set_telephony_enabled(true);

        watcher.changed().await.unwrap();
        assert!(*watcher.borrow());
    }
}
