//! Container list panel
//!
//! The home panel. Its `prepare` refetches the identity snapshot and
//! registers the tab-update listener; `unregister` tears the listener
//! down, scoping its lifetime exactly to panel visibility.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::core::{PopupCore, PopupError};
use crate::navigation::{Panel, PanelHandler};
use crate::surface::Selector;
use crate::views::{ContainerRow, ContainersListView, PanelView};
use warren_core::SubscriptionId;

const LIST_SELECTOR: Selector = Selector("#containers-list-panel");

/// Handler for the container list
pub struct ContainersListPanel {
    subscription: Mutex<Option<SubscriptionId>>,
}

impl ContainersListPanel {
    /// Fresh handler with no listener registered
    pub fn new() -> Self {
        Self {
            subscription: Mutex::new(None),
        }
    }
}

impl Default for ContainersListPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PanelHandler for ContainersListPanel {
    fn panel(&self) -> Panel {
        Panel::ContainersList
    }

    fn selector(&self) -> Selector {
        LIST_SELECTOR
    }

    async fn prepare(&self, core: &PopupCore) -> Result<(), PopupError> {
        if let Err(error) = core.refresh_identities().await {
            tracing::warn!(error = %error, "identity refresh failed, closing popup");
            core.surface().close_popup();
            return Ok(());
        }

        // Blocks rendering accurate content, so a failure here raises.
        let incompatible_addons = core.host().check_incompatible_addons().await?;

        let assigned_index = match core.host().active_tab(core.config().window_id).await {
            Ok(Some(tab)) => match core.host().get_assignment(tab.id).await {
                Ok(assignment) => assignment.map(|a| a.user_context_id),
                Err(error) => {
                    tracing::warn!(error = %error, "assignment lookup failed");
                    None
                }
            },
            Ok(None) => None,
            Err(error) => {
                tracing::warn!(error = %error, "active tab lookup failed");
                None
            }
        };

        let rows: Vec<ContainerRow> = core
            .identities()
            .await
            .into_iter()
            .enumerate()
            .map(|(shortcut_index, identity)| ContainerRow {
                assigned_current_site: identity.user_context_id == assigned_index
                    && assigned_index.is_some(),
                identity,
                shortcut_index,
            })
            .collect();

        let whats_new_badge = core.whats_new_badge().await;

        let needs_subscription = self.subscription.lock().is_none();
        if needs_subscription {
            match core.host().subscribe_tab_updates().await {
                Ok(id) => *self.subscription.lock() = Some(id),
                Err(error) => {
                    tracing::warn!(error = %error, "tab-update subscription failed");
                }
            }
        }

        core.surface()
            .present(&PanelView::ContainersList(ContainersListView {
                rows,
                incompatible_addons,
                whats_new_badge,
            }));
        Ok(())
    }

    async fn unregister(&self, core: &PopupCore) -> Result<(), PopupError> {
        let subscription = self.subscription.lock().take();
        if let Some(id) = subscription {
            if let Err(error) = core.host().unsubscribe_tab_updates(id).await {
                tracing::warn!(error = %error, "tab-update unsubscribe failed");
            }
        }
        Ok(())
    }
}
