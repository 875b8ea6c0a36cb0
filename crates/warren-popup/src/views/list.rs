//! Container-list view state

use serde::{Deserialize, Serialize};
use warren_core::Identity;

/// One row of the container list
///
/// Rows are emitted in identity-directory snapshot order; index-based
/// keyboard shortcuts depend on that order matching the visual order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerRow {
    /// The identity rendered in this row
    pub identity: Identity,
    /// Zero-based position, doubling as the keyboard-shortcut index
    pub shortcut_index: usize,
    /// Whether the foreground tab's site is assigned to this container
    pub assigned_current_site: bool,
}

/// The container-list panel view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainersListView {
    /// Rows in snapshot order
    pub rows: Vec<ContainerRow>,
    /// Whether an incompatible add-on was detected
    pub incompatible_addons: bool,
    /// Whether the "what's new" badge should show for this version
    pub whats_new_badge: bool,
}
