//! Achievement panel

use async_trait::async_trait;

use crate::core::{PopupCore, PopupError};
use crate::navigation::{Panel, PanelHandler};
use crate::surface::Selector;
use crate::views::{AchievementsView, PanelView};

const ACHIEVEMENTS_SELECTOR: Selector = Selector("#achievements-panel");

/// Handler for the achievement display
pub struct AchievementsPanel;

#[async_trait]
impl PanelHandler for AchievementsPanel {
    fn panel(&self) -> Panel {
        Panel::Achievements
    }

    fn selector(&self) -> Selector {
        ACHIEVEMENTS_SELECTOR
    }

    async fn prepare(&self, core: &PopupCore) -> Result<(), PopupError> {
        let pending = match core.prefs().achievements().await {
            Ok(achievements) => achievements
                .into_iter()
                .filter(|achievement| !achievement.done)
                .collect(),
            Err(error) => {
                tracing::warn!(error = %error, "achievement read failed");
                Vec::new()
            }
        };
        core.surface()
            .present(&PanelView::Achievements(AchievementsView { pending }));
        Ok(())
    }
}
