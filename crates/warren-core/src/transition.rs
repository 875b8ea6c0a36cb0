//! Transition-rule types
//!
//! A transition rule routes a navigation originating from identity S to
//! URL U into identity T instead. The unqualified default rule uses the
//! empty URL sentinel.

use serde::{Deserialize, Serialize};

/// URL sentinel that denotes the default (no-specific-URL) rule
pub const DEFAULT_RULE_URL: &str = "";

/// Which kind of transition rule is being edited
///
/// The popup's edit state is `Option<TransitionEditMode>`; `None` is the
/// read-only view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionEditMode {
    /// Editing rules for the URL of the foreground tab
    PerUrl,
    /// Editing the unqualified default rules
    Default,
}
