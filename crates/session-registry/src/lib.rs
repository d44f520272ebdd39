//! Session-wide state and capability registry for the deskline client.
//!
//! One registry exists per application session. It holds the telephony
//! toggle, the currently active call dispatcher, and the dialog service
//! handle the host supplied at startup. Consumers share it by `Arc` and
//! stay decoupled from whichever integration actually places calls.

mod context;
mod dialog;
mod dispatch;
mod error;
mod registry;

pub use context::AppContext;
pub use dialog::DialogService;
pub use dispatch::{CallDispatcher, NoopDispatcher};
pub use error::{DispatchError, RegistryError};
pub use registry::SessionRegistry;
