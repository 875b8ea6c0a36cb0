//! Persisted-preference effect interface
//!
//! Durable key/value state behind the popup: onboarding stage,
//! achievement list, and acknowledged startup-badge versions.

use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::errors::WarrenError;
use crate::prefs::{Achievement, OnboardingStage};

/// Durable preference storage
#[async_trait]
pub trait PrefsEffects: Send + Sync {
    /// The persisted onboarding stage, `None` if never set
    async fn onboarding_stage(&self) -> Result<Option<OnboardingStage>, WarrenError>;

    /// Persist the onboarding stage
    async fn set_onboarding_stage(&self, stage: OnboardingStage) -> Result<(), WarrenError>;

    /// The persisted achievement list, empty by default
    async fn achievements(&self) -> Result<Vec<Achievement>, WarrenError>;

    /// Replace the persisted achievement list
    async fn set_achievements(&self, achievements: Vec<Achievement>) -> Result<(), WarrenError>;

    /// Extension versions whose startup badge has been acknowledged
    async fn acknowledged_versions(&self) -> Result<BTreeSet<String>, WarrenError>;

    /// Record that the badge for one version has been acknowledged
    async fn acknowledge_version(&self, version: &str) -> Result<(), WarrenError>;
}
