//! Container editor submit protocol
//!
//! One form serves create and update; the upsert target distinguishes
//! them. A failed upsert force-navigates to the container list: the
//! editor's data may no longer match the Host's state, so returning the
//! user into it would be worse than starting over.

use crate::core::{PopupCore, PopupError};
use crate::navigation::{Panel, PanelContext};
use warren_core::{
    ContainerParams, ContainerUpsert, SiteKey, UpsertId, DEFAULT_COLOR, DEFAULT_ICON,
};

/// Raw form field reads, possibly blank
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorForm {
    /// Name field
    pub name: String,
    /// Icon tag, empty if unset
    pub icon: String,
    /// Color tag, empty if unset
    pub color: String,
}

impl PopupCore {
    /// Submit the editor form for the container in the current context
    ///
    /// Blank fields fall back to a generated name and the fixed default
    /// icon and color tags. On success the snapshot is refreshed and
    /// navigation returns to the caller.
    pub async fn submit_container_edit(&self, form: EditorForm) -> Result<(), PopupError> {
        let id = match self.current_context().await {
            PanelContext::Identity(identity) => match identity.user_context_id {
                Some(user_context_id) => UpsertId::Existing(user_context_id),
                None => return Err(PopupError::NoIdentityContext),
            },
            _ => UpsertId::New,
        };

        let name = if form.name.trim().is_empty() {
            self.generate_default_name().await
        } else {
            form.name
        };
        let icon = if form.icon.is_empty() {
            DEFAULT_ICON.to_string()
        } else {
            form.icon
        };
        let color = if form.color.is_empty() {
            DEFAULT_COLOR.to_string()
        } else {
            form.color
        };

        let upsert = ContainerUpsert {
            id,
            params: ContainerParams { name, icon, color },
        };
        if let Err(error) = self.host().create_or_update_container(upsert).await {
            tracing::warn!(error = %error, "container upsert failed, returning to list");
            return self
                .navigate(Panel::ContainersList, PanelContext::None)
                .await;
        }

        if let Err(error) = self.refresh_identities().await {
            tracing::warn!(error = %error, "identity refresh after upsert failed");
        }
        self.navigate_back().await
    }

    /// Remove one site assignment from the container being edited
    pub async fn delete_site_assignment(&self, site_key: &SiteKey) -> Result<(), PopupError> {
        if let Err(error) = self.host().remove_assignment_by_key(site_key).await {
            tracing::warn!(error = %error, site_key, "assignment removal failed");
            return Ok(());
        }
        self.refresh_current_panel().await
    }
}
