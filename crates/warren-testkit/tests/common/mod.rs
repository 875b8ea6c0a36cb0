//! Shared test scaffolding

#![allow(dead_code)]

use std::sync::Arc;

use warren_core::{Identity, IdentityRecord, WindowId};
use warren_popup::{OnboardingVariant, PopupConfig, PopupCore};
use warren_testkit::{identity_record, MemoryPrefs, MockHost, RecordingSurface};

/// Extension version every test core runs as
pub const VERSION: &str = "1.2.3";

/// Window every test core is attached to
pub const WINDOW: WindowId = WindowId(1);

/// Full harness around one controller
pub struct Harness {
    pub host: MockHost,
    pub prefs: MemoryPrefs,
    pub surface: RecordingSurface,
    pub core: PopupCore,
}

/// Controller with the standard panel set and the given identities
pub async fn harness(identities: Vec<IdentityRecord>) -> Harness {
    harness_with_variant(identities, OnboardingVariant::Standard).await
}

/// Harness with an explicit onboarding variation
pub async fn harness_with_variant(
    identities: Vec<IdentityRecord>,
    variant: OnboardingVariant,
) -> Harness {
    let host = MockHost::with_identities(identities);
    let prefs = MemoryPrefs::new();
    let surface = RecordingSurface::new();
    let mut config = PopupConfig::for_window(WINDOW, VERSION);
    config.onboarding_variant = variant;
    let core = PopupCore::with_default_panels(
        config,
        Arc::new(host.clone()),
        Arc::new(prefs.clone()),
        Arc::new(surface.clone()),
    )
    .await
    .unwrap();
    Harness {
        host,
        prefs,
        surface,
        core,
    }
}

/// Identity with the given index and name, matching `identity_record`
pub fn identity(user_context_id: u32, name: &str) -> Identity {
    Identity::from_record(identity_record(user_context_id, name)).unwrap()
}
