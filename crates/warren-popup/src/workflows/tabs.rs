//! Tab and container actions reachable from the list panel
//!
//! Host failures during destructive or navigational actions close the
//! popup rather than leaving it in an indeterminate state; failures of
//! non-destructive actions are logged and the list stays up.

use crate::core::{PopupCore, PopupError};
use crate::navigation::{Panel, PanelContext};
use warren_core::Identity;

impl PopupCore {
    /// Sort all container tabs
    pub async fn sort_tabs(&self) -> Result<(), PopupError> {
        if let Err(error) = self.host().sort_tabs().await {
            tracing::warn!(error = %error, "tab sort failed");
        }
        Ok(())
    }

    /// Hide a container's open tabs
    pub async fn hide_container_tabs(&self, identity: &Identity) -> Result<(), PopupError> {
        let window_id = self.config().window_id;
        if let Err(error) = self
            .host()
            .hide_tabs(window_id, &identity.cookie_store_id)
            .await
        {
            tracing::warn!(error = %error, store = %identity.cookie_store_id, "hide tabs failed");
            return Ok(());
        }
        self.refresh_after_mutation().await
    }

    /// Show a container's hidden tabs
    pub async fn show_container_tabs(&self, identity: &Identity) -> Result<(), PopupError> {
        let window_id = self.config().window_id;
        if let Err(error) = self
            .host()
            .show_tabs(window_id, &identity.cookie_store_id)
            .await
        {
            tracing::warn!(error = %error, store = %identity.cookie_store_id, "show tabs failed");
            return Ok(());
        }
        self.refresh_after_mutation().await
    }

    /// Move a container's tabs to a new window
    ///
    /// The popup closes either way: on success the window focus moves,
    /// on failure there is no coherent state left to show.
    pub async fn move_container_tabs_to_window(
        &self,
        identity: &Identity,
    ) -> Result<(), PopupError> {
        let window_id = self.config().window_id;
        if let Err(error) = self
            .host()
            .move_tabs_to_window(window_id, &identity.cookie_store_id)
            .await
        {
            tracing::warn!(error = %error, store = %identity.cookie_store_id, "move tabs failed");
        }
        self.surface().close_popup();
        Ok(())
    }

    /// Delete a container after the confirm panel
    pub async fn delete_container(&self, identity: &Identity) -> Result<(), PopupError> {
        let Some(user_context_id) = identity.user_context_id else {
            return Err(PopupError::NoIdentityContext);
        };
        if let Err(error) = self.host().delete_container(user_context_id).await {
            tracing::warn!(error = %error, store = %identity.cookie_store_id,
                "container deletion failed, closing popup");
            self.surface().close_popup();
            return Ok(());
        }
        if let Err(error) = self.refresh_identities().await {
            tracing::warn!(error = %error, "identity refresh after deletion failed");
        }
        self.navigate(Panel::ContainersList, PanelContext::None)
            .await
    }

    /// Assign or unassign the foreground tab's site to a container
    pub async fn assign_current_site(
        &self,
        identity: &Identity,
        assign: bool,
    ) -> Result<(), PopupError> {
        let Some(user_context_id) = identity.user_context_id else {
            return Err(PopupError::NoIdentityContext);
        };
        let tab = match self.host().active_tab(self.config().window_id).await {
            Ok(Some(tab)) => tab,
            Ok(None) => return Ok(()),
            Err(error) => {
                tracing::warn!(error = %error, "active tab lookup failed");
                return Ok(());
            }
        };
        if let Err(error) = self
            .host()
            .set_or_remove_assignment(tab.id, &tab.url, user_context_id, !assign)
            .await
        {
            tracing::warn!(error = %error, "site assignment update failed");
            return Ok(());
        }
        self.refresh_current_panel().await
    }

    /// Refresh the snapshot and re-render after a tab-state mutation
    async fn refresh_after_mutation(&self) -> Result<(), PopupError> {
        if let Err(error) = self.refresh_identities().await {
            tracing::warn!(error = %error, "identity refresh failed");
            return Ok(());
        }
        self.refresh_current_panel().await
    }
}
