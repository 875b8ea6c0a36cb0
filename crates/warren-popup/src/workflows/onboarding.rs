//! Onboarding sequencer and achievement progression
//!
//! A small state machine over the persisted stage integer: stages 0–4
//! each map to one onboarding panel, stage 5 means done and is looped
//! back to on every future startup. The stage only ever advances, one
//! step at a time, on explicit user action.

use crate::core::{PopupCore, PopupError};
use crate::navigation::{Panel, PanelContext};
use warren_core::OnboardingStage;

/// The onboarding panel presenting a not-yet-done stage
fn panel_for_stage(stage: OnboardingStage) -> Panel {
    match stage.value() {
        0 => Panel::Onboarding1,
        1 => Panel::Onboarding2,
        2 => Panel::Onboarding3,
        3 => Panel::Onboarding4,
        _ => Panel::Onboarding5,
    }
}

impl PopupCore {
    /// The panel to show at startup, from the persisted stage
    ///
    /// Cold start (no stage ever persisted) initializes the stage to 0
    /// and shows the first onboarding panel; this is the only default,
    /// never inferred from any other signal.
    pub(crate) async fn startup_panel(&self) -> Result<(Panel, PanelContext), PopupError> {
        let stage = match self.prefs().onboarding_stage().await {
            Ok(Some(stage)) => stage,
            Ok(None) => {
                let stage = OnboardingStage::default();
                self.prefs().set_onboarding_stage(stage).await?;
                stage
            }
            Err(error) => {
                tracing::warn!(error = %error, "onboarding stage read failed, assuming done");
                OnboardingStage::DONE
            }
        };
        if stage.is_done() {
            Ok((self.post_onboarding_panel().await, PanelContext::None))
        } else {
            Ok((panel_for_stage(stage), PanelContext::None))
        }
    }

    /// Advance onboarding by exactly one step and show the next panel
    ///
    /// Leaving the last onboarding stage lands on the container list, or
    /// on the achievement panel when an undismissed achievement exists.
    pub async fn advance_onboarding(&self) -> Result<(), PopupError> {
        let stage = self
            .prefs()
            .onboarding_stage()
            .await?
            .unwrap_or_default()
            .next();
        self.prefs().set_onboarding_stage(stage).await?;
        let panel = if stage.is_done() {
            self.post_onboarding_panel().await
        } else {
            panel_for_stage(stage)
        };
        self.navigate(panel, PanelContext::None).await
    }

    /// Achievement check: the list panel, unless an undismissed
    /// achievement should be surfaced first
    async fn post_onboarding_panel(&self) -> Panel {
        let achievements = match self.prefs().achievements().await {
            Ok(achievements) => achievements,
            Err(error) => {
                tracing::warn!(error = %error, "achievement read failed");
                Vec::new()
            }
        };
        if achievements.iter().any(|achievement| !achievement.done) {
            Panel::Achievements
        } else {
            Panel::ContainersList
        }
    }

    /// Mark an achievement done, matching by name
    ///
    /// Idempotent, a no-op for unknown names, and never navigates: the
    /// user dismisses the achievement panel explicitly.
    pub async fn mark_achievement_done(&self, name: &str) -> Result<(), PopupError> {
        let mut achievements = self.prefs().achievements().await?;
        let mut changed = false;
        for achievement in &mut achievements {
            if achievement.name == name && !achievement.done {
                achievement.done = true;
                changed = true;
            }
        }
        if changed {
            self.prefs().set_achievements(achievements).await?;
        }
        Ok(())
    }

    /// Dismiss one achievement and return to the container list
    pub async fn dismiss_achievement(&self, name: &str) -> Result<(), PopupError> {
        self.mark_achievement_done(name).await?;
        self.navigate(Panel::ContainersList, PanelContext::None)
            .await
    }
}
