//! Popup configuration

use serde::{Deserialize, Serialize};
use warren_core::WindowId;

/// Process-wide onboarding variation flag
///
/// When set to a recognized non-standard value, panels that define an
/// alternate selector are shown through it, letting two visually
/// distinct DOM subtrees share one logical panel identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OnboardingVariant {
    /// Default onboarding presentation
    #[default]
    Standard,
    /// Condensed onboarding presentation (alternate selectors)
    Compact,
}

/// Configuration captured once at popup startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupConfig {
    /// Window the popup is attached to
    pub window_id: WindowId,
    /// Active onboarding variation
    pub onboarding_variant: OnboardingVariant,
    /// Extension version, used for the startup "what's new" badge
    pub extension_version: String,
}

impl PopupConfig {
    /// Configuration for the given window with default variation
    pub fn for_window(window_id: WindowId, extension_version: impl Into<String>) -> Self {
        Self {
            window_id,
            onboarding_variant: OnboardingVariant::default(),
            extension_version: extension_version.into(),
        }
    }
}
