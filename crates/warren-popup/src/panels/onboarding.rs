//! Onboarding step panels
//!
//! Five steps share one handler type; each registration serves one
//! logical panel. Every step also defines a compact-variation selector,
//! so the condensed onboarding subtree can stand in under the same
//! panel identity.

use async_trait::async_trait;

use crate::core::{PopupCore, PopupError};
use crate::navigation::{Panel, PanelHandler};
use crate::surface::Selector;
use crate::views::{OnboardingView, PanelView};

const SELECTORS: [Selector; 5] = [
    Selector("#onboarding-panel-1"),
    Selector("#onboarding-panel-2"),
    Selector("#onboarding-panel-3"),
    Selector("#onboarding-panel-4"),
    Selector("#onboarding-panel-5"),
];

const COMPACT_SELECTORS: [Selector; 5] = [
    Selector("#onboarding-panel-1-compact"),
    Selector("#onboarding-panel-2-compact"),
    Selector("#onboarding-panel-3-compact"),
    Selector("#onboarding-panel-4-compact"),
    Selector("#onboarding-panel-5-compact"),
];

/// Handler for one onboarding step (1-based)
pub struct OnboardingPanel {
    step: u8,
}

impl OnboardingPanel {
    /// Handler for step `step`, which must be in 1..=5
    pub fn step(step: u8) -> Self {
        debug_assert!((1..=5).contains(&step));
        Self { step }
    }
}

#[async_trait]
impl PanelHandler for OnboardingPanel {
    fn panel(&self) -> Panel {
        match self.step {
            1 => Panel::Onboarding1,
            2 => Panel::Onboarding2,
            3 => Panel::Onboarding3,
            4 => Panel::Onboarding4,
            _ => Panel::Onboarding5,
        }
    }

    fn selector(&self) -> Selector {
        SELECTORS[usize::from(self.step - 1)]
    }

    fn variant_selector(&self) -> Option<Selector> {
        Some(COMPACT_SELECTORS[usize::from(self.step - 1)])
    }

    async fn prepare(&self, core: &PopupCore) -> Result<(), PopupError> {
        core.surface()
            .present(&PanelView::Onboarding(OnboardingView { step: self.step }));
        Ok(())
    }
}
