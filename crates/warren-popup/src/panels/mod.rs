//! # Panel Handlers
//!
//! One [`crate::navigation::PanelHandler`] per logical panel. Handlers
//! rebuild their view from current state in `prepare`; the only handler
//! with teardown is the container list, whose tab-update listener must
//! not outlive its visibility.

pub mod achievements;
pub mod container_delete;
pub mod container_edit;
pub mod containers_list;
pub mod onboarding;
pub mod picker;
pub mod transitions;

use std::sync::Arc;

use crate::navigation::PanelHandler;

pub use achievements::AchievementsPanel;
pub use container_delete::ContainerDeletePanel;
pub use container_edit::ContainerEditPanel;
pub use containers_list::ContainersListPanel;
pub use onboarding::OnboardingPanel;
pub use picker::TransitionPickerPanel;
pub use transitions::TransitionsPanel;

/// The full standard panel set, in registration order
pub fn default_panels() -> Vec<Arc<dyn PanelHandler>> {
    let mut panels: Vec<Arc<dyn PanelHandler>> = Vec::new();
    for step in 1..=5 {
        panels.push(Arc::new(OnboardingPanel::step(step)));
    }
    panels.push(Arc::new(ContainersListPanel::new()));
    panels.push(Arc::new(ContainerEditPanel));
    panels.push(Arc::new(ContainerDeletePanel));
    panels.push(Arc::new(TransitionsPanel));
    panels.push(Arc::new(TransitionPickerPanel));
    panels.push(Arc::new(AchievementsPanel));
    panels
}
