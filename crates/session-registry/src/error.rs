//! Registry and dispatch errors.

use thiserror::Error;

/// Errors raised while wiring up the session registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A required dependency was never supplied by the host application.
    #[error("Missing dependency: {0}")]
    MissingDependency(&'static str),
}

/// Errors surfaced by a call dispatcher.
///
/// The registry forwards these to the caller of `place_call` unchanged;
/// it never retries, catches, or wraps them.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The telephony backend is not reachable.
    #[error("Telephony backend unavailable: {0}")]
    Unavailable(String),

    /// The backend refused to place the call.
    #[error("Call rejected: {0}")]
    Rejected(String),

    /// Any other integration-specific failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
