//! The pluggable call-dispatch capability.

use crate::error::DispatchError;

/// A capability that places an outbound call.
///
/// Implementations come from whichever telephony integration is active;
/// the registry only stores and invokes the current one. Dispatch is
/// synchronous and must not block.
pub trait CallDispatcher: Send + Sync {
    /// Dispatcher name used in logs.
    fn name(&self) -> &str;

    /// Place a call to `number`.
    ///
    /// The number arrives exactly as the caller supplied it; format and
    /// validity are the dispatcher's concern.
    fn dispatch(&self, number: &str) -> Result<(), DispatchError>;
}

/// Dispatcher installed before any integration registers one.
///
/// Keeps `place_call` safe to invoke at any point in the session; a
/// dispatched call goes nowhere and reports success.
pub struct NoopDispatcher;

impl CallDispatcher for NoopDispatcher {
    fn name(&self) -> &str {
        "noop"
    }

    fn dispatch(&self, _number: &str) -> Result<(), DispatchError> {
        Ok(())
    }
}
