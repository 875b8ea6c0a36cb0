//! Onboarding and achievement view state

use serde::{Deserialize, Serialize};
use warren_core::Achievement;

use crate::navigation::Panel;

/// One onboarding step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingView {
    /// Step number, 1-based (step N presents stage N-1)
    pub step: u8,
}

impl OnboardingView {
    /// The panel presenting this step
    pub fn panel(&self) -> Panel {
        match self.step {
            1 => Panel::Onboarding1,
            2 => Panel::Onboarding2,
            3 => Panel::Onboarding3,
            4 => Panel::Onboarding4,
            _ => Panel::Onboarding5,
        }
    }
}

/// The achievements panel view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementsView {
    /// Achievements not yet dismissed, in persisted order
    pub pending: Vec<Achievement>,
}
