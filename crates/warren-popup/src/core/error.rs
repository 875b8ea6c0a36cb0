//! Popup-level errors
//!
//! The first four variants are fatal programming errors: they indicate a
//! core invariant was already broken, so they are returned loudly and
//! never recovered. Host and storage failures arrive wrapped as
//! [`warren_core::WarrenError`] and are caught at the call site where a
//! graceful fallback exists.

use crate::navigation::Panel;
use warren_core::WarrenError;

/// Error type for popup controller operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PopupError {
    /// A panel variant has no registered handler
    #[error("no handler registered for panel {0:?}")]
    PanelNotRegistered(Panel),

    /// A panel was registered twice
    #[error("panel {0:?} is already registered")]
    AlreadyRegistered(Panel),

    /// Navigate-back was called with no previous panel recorded
    #[error("navigate back with no previous panel")]
    NoPreviousPanel,

    /// The current panel context carries no identity
    #[error("no identity attached to the current panel")]
    NoIdentityContext,

    /// The current panel context is not a transition pick
    #[error("current panel context is not a transition pick")]
    NoPickContext,

    /// Error from the core boundary (host, storage, validation)
    #[error(transparent)]
    Core(#[from] WarrenError),
}
