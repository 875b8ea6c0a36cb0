//! Transition-rule panel
//!
//! Shows the read-only rule summary, or the editing view when an edit
//! mode is active. The edit-control cluster has its own selector so
//! leaving edit mode can hide it without re-rendering the whole panel.

use async_trait::async_trait;

use crate::core::{PopupCore, PopupError};
use crate::navigation::{Panel, PanelHandler};
use crate::surface::Selector;
use crate::views::{PanelView, TransitionsView};

const TRANSITIONS_SELECTOR: Selector = Selector("#transitions-panel");

/// Selector of the edit-specific control cluster
pub(crate) const EDIT_CONTROLS_SELECTOR: Selector = Selector("#transitions-edit-controls");

/// Handler for the transition-rule panel
pub struct TransitionsPanel;

#[async_trait]
impl PanelHandler for TransitionsPanel {
    fn panel(&self) -> Panel {
        Panel::Transitions
    }

    fn selector(&self) -> Selector {
        TRANSITIONS_SELECTOR
    }

    async fn prepare(&self, core: &PopupCore) -> Result<(), PopupError> {
        let mode = core.transition_edit_mode().await;
        let url = match mode {
            Some(mode) => core.rule_url(mode).await,
            None => core.active_tab_url().await,
        };
        let rows = core.transition_rows(&url, mode.is_some()).await;

        if mode.is_some() {
            core.surface().show(EDIT_CONTROLS_SELECTOR);
        } else {
            core.surface().hide(EDIT_CONTROLS_SELECTOR);
        }

        core.surface()
            .present(&PanelView::Transitions(TransitionsView { mode, url, rows }));
        Ok(())
    }
}
