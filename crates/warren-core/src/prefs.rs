//! Persisted preference types
//!
//! The popup persists three things: the onboarding stage, the
//! achievement list, and the set of extension versions whose startup
//! badge has been acknowledged. All are durable across restarts and
//! owned by the storage layer behind [`crate::PrefsEffects`].

use serde::{Deserialize, Serialize};

use crate::errors::WarrenError;

/// Onboarding progression marker
///
/// 0 = not started; 1–4 = completed step N; 5 = onboarding complete.
/// Mutated only by advancing exactly one step at a time, never
/// decremented.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct OnboardingStage(u8);

impl OnboardingStage {
    /// Terminal stage: onboarding complete
    pub const DONE: OnboardingStage = OnboardingStage(5);

    /// Wrap a persisted stage value, rejecting out-of-range integers
    pub fn new(stage: u8) -> Result<Self, WarrenError> {
        if stage > Self::DONE.0 {
            return Err(WarrenError::invalid(format!(
                "onboarding stage out of range: {stage}"
            )));
        }
        Ok(Self(stage))
    }

    /// The raw stage integer
    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether onboarding has completed
    pub fn is_done(self) -> bool {
        self >= Self::DONE
    }

    /// The stage after this one, saturating at [`Self::DONE`]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::DONE.0))
    }
}

/// One achievement entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Stable achievement name
    pub name: String,
    /// Whether the user has dismissed it
    pub done: bool,
}

impl Achievement {
    /// A fresh, not-yet-dismissed achievement
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_advances_one_step_and_saturates() {
        let stage = OnboardingStage::default();
        assert_eq!(stage.value(), 0);
        assert_eq!(stage.next().value(), 1);
        assert_eq!(OnboardingStage::DONE.next(), OnboardingStage::DONE);
    }

    #[test]
    fn test_stage_rejects_out_of_range() {
        assert!(OnboardingStage::new(6).is_err());
        assert!(OnboardingStage::new(5).unwrap().is_done());
    }
}
