//! # Warren Core
//!
//! Pure types and effect interfaces for the Warren popup: the identity
//! model, transition-rule and site-assignment types, persisted preference
//! types, and the [`HostEffects`]/[`PrefsEffects`] boundary traits the
//! popup core talks through.
//!
//! This crate holds no behavior beyond data transforms. Everything that
//! touches the browser (tabs, windows, containers, storage) lives behind
//! the effect traits and is implemented by an outer layer.

pub mod assignment;
pub mod effects;
pub mod errors;
pub mod identity;
pub mod prefs;
pub mod tabs;
pub mod transition;

pub use assignment::{SiteAssignment, SiteKey};
pub use effects::{HostEffects, PrefsEffects, SubscriptionId};
pub use errors::WarrenError;
pub use identity::{
    ContainerParams, ContainerUpsert, CookieStoreId, Identity, IdentityRecord, IdentityTabState,
    UpsertId, DEFAULT_COLOR, DEFAULT_ICON,
};
pub use prefs::{Achievement, OnboardingStage};
pub use tabs::{TabId, TabInfo, WindowId};
pub use transition::{TransitionEditMode, DEFAULT_RULE_URL};
