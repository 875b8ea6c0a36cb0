//! # View State Module
//!
//! Typed, serializable view state built by panel `prepare` and handed to
//! the [`crate::PopupSurface`] renderer. DOM construction from these
//! values is out of scope for the core; the shapes here are the entire
//! rendering contract.

pub mod editor;
pub mod list;
pub mod onboarding;
pub mod transitions;

pub use editor::{DeleteConfirmView, EditorView};
pub use list::{ContainerRow, ContainersListView};
pub use onboarding::{AchievementsView, OnboardingView};
pub use transitions::{PickerView, TransitionRow, TransitionsView};

use serde::{Deserialize, Serialize};

/// Every view the popup can present, one variant per panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PanelView {
    /// One onboarding step
    Onboarding(OnboardingView),
    /// Container list
    ContainersList(ContainersListView),
    /// Container create/update form
    Editor(EditorView),
    /// Deletion confirm
    DeleteConfirm(DeleteConfirmView),
    /// Transition-rule summary/editor
    Transitions(TransitionsView),
    /// Transition-target picker
    Picker(PickerView),
    /// Achievements
    Achievements(AchievementsView),
}

impl PanelView {
    /// The panel this view belongs to
    pub fn panel(&self) -> crate::navigation::Panel {
        use crate::navigation::Panel;
        match self {
            Self::Onboarding(view) => view.panel(),
            Self::ContainersList(_) => Panel::ContainersList,
            Self::Editor(_) => Panel::ContainerEdit,
            Self::DeleteConfirm(_) => Panel::ContainerDelete,
            Self::Transitions(_) => Panel::Transitions,
            Self::Picker(_) => Panel::TransitionPicker,
            Self::Achievements(_) => Panel::Achievements,
        }
    }
}
