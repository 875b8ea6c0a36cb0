//! Transition-rule editing protocol
//!
//! Two mutually exclusive edit entry points (per-URL and default) over
//! the same panel, plus the generic target picker. The picker's context
//! carries an explicit `resume` continuation, so returning from it
//! restores whichever mode the caller was in without inspecting ambient
//! state.

use crate::core::{PopupCore, PopupError};
use crate::navigation::{Panel, PanelContext};
use crate::panels::transitions::EDIT_CONTROLS_SELECTOR;
use crate::views::TransitionRow;
use warren_core::{Identity, TransitionEditMode, DEFAULT_RULE_URL};

impl PopupCore {
    /// Enter transition editing in the given mode
    ///
    /// Entering implicitly resets any prior edit state.
    pub async fn edit_transitions(&self, mode: TransitionEditMode) -> Result<(), PopupError> {
        self.set_transition_edit_mode(Some(mode)).await;
        self.navigate(Panel::Transitions, PanelContext::None).await
    }

    /// Open the target picker for one source identity
    ///
    /// Only reachable from an active edit mode; the mode is captured
    /// into the picker's context as the resume continuation.
    pub async fn open_transition_picker(&self, source: Identity) -> Result<(), PopupError> {
        let resume = self
            .transition_edit_mode()
            .await
            .ok_or(PopupError::NoPickContext)?;
        self.navigate(Panel::TransitionPicker, PanelContext::Pick { source, resume })
            .await
    }

    /// Apply a picked target and return to the caller
    ///
    /// Picking the default container removes the rule (routes back to
    /// "no override"). The edit mode is restored from the continuation
    /// before navigating back, so the editor resumes its own sub-state.
    pub async fn pick_transition_target(&self, target: &Identity) -> Result<(), PopupError> {
        let (source, resume) = match self.current_context().await {
            PanelContext::Pick { source, resume } => (source, resume),
            _ => return Err(PopupError::NoPickContext),
        };
        let url = self.rule_url(resume).await;
        if let Err(error) = self
            .host()
            .set_or_remove_transition_setting(
                &source.cookie_store_id,
                &url,
                target.user_context_id,
            )
            .await
        {
            tracing::warn!(error = %error, source = %source.cookie_store_id,
                "transition rule update failed");
        }
        self.set_transition_edit_mode(Some(resume)).await;
        self.navigate_back().await
    }

    /// Remove every identity's rule for the current URL
    ///
    /// Default rules are untouched. Exits edit mode afterwards.
    pub async fn reset_transitions(&self) -> Result<(), PopupError> {
        let url = self.active_tab_url().await;
        for identity in self.identities().await {
            if let Err(error) = self
                .host()
                .set_or_remove_transition_setting(&identity.cookie_store_id, &url, None)
                .await
            {
                tracing::warn!(error = %error, source = %identity.cookie_store_id,
                    "transition rule removal failed");
            }
        }
        self.finish_edit_transitions().await
    }

    /// Leave edit mode and show the read-only summary
    ///
    /// Safe to call when not editing: both the reset and the finish
    /// flows call it unconditionally.
    pub async fn finish_edit_transitions(&self) -> Result<(), PopupError> {
        self.set_transition_edit_mode(None).await;
        self.surface().hide(EDIT_CONTROLS_SELECTOR);
        if self.current_panel().await == Some(Panel::Transitions) {
            self.refresh_current_panel().await?;
        }
        Ok(())
    }

    /// The URL rules apply to in the given mode
    pub(crate) async fn rule_url(&self, mode: TransitionEditMode) -> String {
        match mode {
            TransitionEditMode::PerUrl => self.active_tab_url().await,
            TransitionEditMode::Default => DEFAULT_RULE_URL.to_string(),
        }
    }

    /// URL of the foreground tab, empty when unavailable
    pub(crate) async fn active_tab_url(&self) -> String {
        match self.host().active_tab(self.config().window_id).await {
            Ok(Some(tab)) => tab.url,
            Ok(None) => String::new(),
            Err(error) => {
                tracing::warn!(error = %error, "active tab lookup failed");
                String::new()
            }
        }
    }

    /// Build the per-identity rule rows for the transitions panel
    ///
    /// Rows follow directory snapshot order. A failed rule lookup or an
    /// unresolvable target index renders as "no target"; both are
    /// ordinary outcomes, not errors.
    pub(crate) async fn transition_rows(
        &self,
        url: &str,
        pick_affordance: bool,
    ) -> Vec<TransitionRow> {
        let mut rows = Vec::new();
        for identity in self.identities().await {
            let target = match self
                .host()
                .get_transition_setting(&identity.cookie_store_id, url)
                .await
            {
                Ok(Some(index)) => self.lookup_identity_by_index(index).await,
                Ok(None) => None,
                Err(error) => {
                    tracing::warn!(error = %error, source = %identity.cookie_store_id,
                        "transition rule lookup failed");
                    None
                }
            };
            rows.push(TransitionRow {
                source: identity,
                target,
                pick_affordance,
            });
        }
        rows
    }
}
