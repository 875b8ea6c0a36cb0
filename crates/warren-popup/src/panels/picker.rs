//! Transition-target picker panel
//!
//! Generic and reused by both editing flows; the context's `Pick`
//! continuation names the source identity and the mode to resume in.

use async_trait::async_trait;

use crate::core::{PopupCore, PopupError};
use crate::navigation::{Panel, PanelContext, PanelHandler};
use crate::surface::Selector;
use crate::views::{PanelView, PickerView};
use warren_core::Identity;

const PICKER_SELECTOR: Selector = Selector("#transition-picker-panel");

/// Handler for the target picker
pub struct TransitionPickerPanel;

#[async_trait]
impl PanelHandler for TransitionPickerPanel {
    fn panel(&self) -> Panel {
        Panel::TransitionPicker
    }

    fn selector(&self) -> Selector {
        PICKER_SELECTOR
    }

    async fn prepare(&self, core: &PopupCore) -> Result<(), PopupError> {
        let source = match core.current_context().await {
            PanelContext::Pick { source, .. } => source,
            _ => return Err(PopupError::NoPickContext),
        };

        let mut candidates = vec![Identity::default_container()];
        candidates.extend(
            core.identities()
                .await
                .into_iter()
                .filter(|identity| identity.cookie_store_id != source.cookie_store_id),
        );

        core.surface()
            .present(&PanelView::Picker(PickerView { source, candidates }));
        Ok(())
    }
}
