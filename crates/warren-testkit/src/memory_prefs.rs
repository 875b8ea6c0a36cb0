//! In-memory preference storage

#![allow(clippy::expect_used)]

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

use warren_core::{Achievement, OnboardingStage, PrefsEffects, WarrenError};

#[derive(Debug, Default)]
struct PrefsState {
    stage: Option<OnboardingStage>,
    achievements: Vec<Achievement>,
    acknowledged: BTreeSet<String>,
    failing: bool,
}

/// In-memory [`PrefsEffects`] implementation
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    state: Arc<Mutex<PrefsState>>,
}

impl MemoryPrefs {
    /// Empty storage (cold start)
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, PrefsState> {
        self.state.lock().expect("prefs state poisoned")
    }

    fn check_failure(&self) -> Result<(), WarrenError> {
        if self.lock().failing {
            return Err(WarrenError::storage("mock storage failure"));
        }
        Ok(())
    }

    /// Make every operation fail until cleared
    pub fn fail(&self) {
        self.lock().failing = true;
    }

    /// Seed the persisted stage
    pub fn seed_stage(&self, stage: OnboardingStage) {
        self.lock().stage = Some(stage);
    }

    /// Seed the achievement list
    pub fn seed_achievements(&self, achievements: Vec<Achievement>) {
        self.lock().achievements = achievements;
    }

    /// The persisted stage, bypassing the effect interface
    pub fn stored_stage(&self) -> Option<OnboardingStage> {
        self.lock().stage
    }

    /// The persisted achievements, bypassing the effect interface
    pub fn stored_achievements(&self) -> Vec<Achievement> {
        self.lock().achievements.clone()
    }
}

#[async_trait]
impl PrefsEffects for MemoryPrefs {
    async fn onboarding_stage(&self) -> Result<Option<OnboardingStage>, WarrenError> {
        self.check_failure()?;
        Ok(self.lock().stage)
    }

    async fn set_onboarding_stage(&self, stage: OnboardingStage) -> Result<(), WarrenError> {
        self.check_failure()?;
        self.lock().stage = Some(stage);
        Ok(())
    }

    async fn achievements(&self) -> Result<Vec<Achievement>, WarrenError> {
        self.check_failure()?;
        Ok(self.lock().achievements.clone())
    }

    async fn set_achievements(&self, achievements: Vec<Achievement>) -> Result<(), WarrenError> {
        self.check_failure()?;
        self.lock().achievements = achievements;
        Ok(())
    }

    async fn acknowledged_versions(&self) -> Result<BTreeSet<String>, WarrenError> {
        self.check_failure()?;
        Ok(self.lock().acknowledged.clone())
    }

    async fn acknowledge_version(&self, version: &str) -> Result<(), WarrenError> {
        self.check_failure()?;
        self.lock().acknowledged.insert(version.to_string());
        Ok(())
    }
}
