//! Transition-rule view state

use serde::{Deserialize, Serialize};
use warren_core::{Identity, TransitionEditMode};

/// One row of the transition-rule panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionRow {
    /// Source identity the rule originates from
    pub source: Identity,
    /// Resolved target identity, `None` when no rule is set or the
    /// stored target is unknown (e.g. a default-container rule)
    pub target: Option<Identity>,
    /// Whether the pick-target affordance is exposed on this row
    pub pick_affordance: bool,
}

/// The transition-rule panel view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionsView {
    /// Active edit mode, `None` for the read-only summary
    pub mode: Option<TransitionEditMode>,
    /// URL the displayed rules apply to (empty for default rules)
    pub url: String,
    /// Rows in snapshot order
    pub rows: Vec<TransitionRow>,
}

/// The transition-target picker view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerView {
    /// Identity a target is being picked for
    pub source: Identity,
    /// Pickable targets: the default container first, then every other
    /// identity except the source, in snapshot order
    pub candidates: Vec<Identity>,
}
