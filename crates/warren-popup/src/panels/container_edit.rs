//! Container editor panel
//!
//! One form for create and update, selected by the panel context: an
//! identity context edits that container, no context creates a new one.

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::core::{PopupCore, PopupError};
use crate::navigation::{Panel, PanelContext, PanelHandler};
use crate::surface::Selector;
use crate::views::{EditorView, PanelView};
use warren_core::{DEFAULT_COLOR, DEFAULT_ICON};

const EDIT_SELECTOR: Selector = Selector("#container-edit-panel");
const NAME_INPUT_SELECTOR: Selector = Selector("#container-edit-name");

/// Handler for the container create/update form
pub struct ContainerEditPanel;

#[async_trait]
impl PanelHandler for ContainerEditPanel {
    fn panel(&self) -> Panel {
        Panel::ContainerEdit
    }

    fn selector(&self) -> Selector {
        EDIT_SELECTOR
    }

    async fn prepare(&self, core: &PopupCore) -> Result<(), PopupError> {
        let view = match core.current_context().await {
            PanelContext::Identity(identity) => {
                let assignments = match identity.user_context_id {
                    Some(user_context_id) => {
                        match core
                            .host()
                            .get_assignments_by_container(user_context_id)
                            .await
                        {
                            Ok(assignments) => assignments,
                            Err(error) => {
                                tracing::warn!(error = %error, "assignment fetch failed");
                                BTreeMap::new()
                            }
                        }
                    }
                    None => BTreeMap::new(),
                };
                EditorView {
                    name: identity.name.clone(),
                    icon: identity.icon.clone(),
                    color: identity.color.clone(),
                    editing: Some(identity),
                    assignments,
                }
            }
            _ => EditorView {
                editing: None,
                name: core.generate_default_name().await,
                icon: DEFAULT_ICON.to_string(),
                color: DEFAULT_COLOR.to_string(),
                assignments: BTreeMap::new(),
            },
        };
        core.surface().present(&PanelView::Editor(view));
        core.surface().focus_soon(NAME_INPUT_SELECTOR);
        Ok(())
    }
}
