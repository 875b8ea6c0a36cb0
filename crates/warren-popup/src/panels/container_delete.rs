//! Container deletion confirm panel

use async_trait::async_trait;

use crate::core::{PopupCore, PopupError};
use crate::navigation::{Panel, PanelHandler};
use crate::surface::Selector;
use crate::views::{DeleteConfirmView, PanelView};

const DELETE_SELECTOR: Selector = Selector("#container-delete-panel");

/// Handler for the deletion confirm
pub struct ContainerDeletePanel;

#[async_trait]
impl PanelHandler for ContainerDeletePanel {
    fn panel(&self) -> Panel {
        Panel::ContainerDelete
    }

    fn selector(&self) -> Selector {
        DELETE_SELECTOR
    }

    async fn prepare(&self, core: &PopupCore) -> Result<(), PopupError> {
        let identity = core.current_identity().await?;
        let open_tab_count = match core
            .host()
            .get_tabs(core.config().window_id, &identity.cookie_store_id)
            .await
        {
            Ok(tabs) => tabs.len(),
            Err(error) => {
                tracing::warn!(error = %error, "tab listing failed");
                0
            }
        };
        core.surface()
            .present(&PanelView::DeleteConfirm(DeleteConfirmView {
                identity,
                open_tab_count,
            }));
        Ok(())
    }
}
