//! Container-editor and deletion-confirm view state

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use warren_core::{Identity, SiteAssignment, SiteKey};

/// The container create/update form view
///
/// One form serves both modes: `editing` is `None` when creating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorView {
    /// Identity being edited, `None` for a new container
    pub editing: Option<Identity>,
    /// Name pre-filled into the form
    pub name: String,
    /// Icon tag pre-selected in the form
    pub icon: String,
    /// Color tag pre-selected in the form
    pub color: String,
    /// Site assignments pointing at this container, by site key
    pub assignments: BTreeMap<SiteKey, SiteAssignment>,
}

/// The deletion-confirm view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteConfirmView {
    /// Identity queued for deletion
    pub identity: Identity,
    /// How many open tabs deletion would close
    pub open_tab_count: usize,
}
