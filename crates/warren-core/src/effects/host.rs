//! Host effect interface
//!
//! One method per background-process message. All calls are single
//! request/response with no streaming; a non-responding Host stalls the
//! call, so callers that cannot tolerate that must catch and degrade.
//!
//! Expected negatives ("no rule for this identity", "no assignment for
//! this site") are `Option`s, never errors.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use uuid::Uuid;

use crate::assignment::{SiteAssignment, SiteKey};
use crate::errors::WarrenError;
use crate::identity::{ContainerUpsert, CookieStoreId, IdentityRecord, IdentityTabState};
use crate::tabs::{TabId, TabInfo, WindowId};

/// Handle to a registered tab-update listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub Uuid);

impl SubscriptionId {
    /// Mint a fresh subscription id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription-{}", self.0)
    }
}

/// Request/response boundary to the background coordination process
#[async_trait]
pub trait HostEffects: Send + Sync {
    /// Fetch the full identity set, in the Host's insertion order
    async fn query_identities(&self) -> Result<Vec<IdentityRecord>, WarrenError>;

    /// Fetch per-identity live tab state for one window, keyed by handle
    async fn query_identities_state(
        &self,
        window_id: WindowId,
    ) -> Result<HashMap<CookieStoreId, IdentityTabState>, WarrenError>;

    /// Delete the container with the given index
    async fn delete_container(&self, user_context_id: u32) -> Result<(), WarrenError>;

    /// Look up the transition rule `(source, url)`, `None` if unset
    ///
    /// The default rule uses the empty-URL sentinel.
    async fn get_transition_setting(
        &self,
        source: &CookieStoreId,
        url: &str,
    ) -> Result<Option<u32>, WarrenError>;

    /// Upsert or remove the transition rule `(source, url)`
    ///
    /// `Some(target)` upserts, `None` removes (routes back to "no
    /// override").
    async fn set_or_remove_transition_setting(
        &self,
        source: &CookieStoreId,
        url: &str,
        target: Option<u32>,
    ) -> Result<(), WarrenError>;

    /// Look up the site assignment for the given tab, `None` if unassigned
    async fn get_assignment(&self, tab_id: TabId) -> Result<Option<SiteAssignment>, WarrenError>;

    /// Fetch all site assignments pointing at one container
    async fn get_assignments_by_container(
        &self,
        user_context_id: u32,
    ) -> Result<BTreeMap<SiteKey, SiteAssignment>, WarrenError>;

    /// Set or remove the site assignment for a tab's site
    async fn set_or_remove_assignment(
        &self,
        tab_id: TabId,
        url: &str,
        user_context_id: u32,
        remove: bool,
    ) -> Result<(), WarrenError>;

    /// Remove one site assignment by its stored key
    ///
    /// Used by the container editor, which iterates assignments without
    /// any tab at hand.
    async fn remove_assignment_by_key(&self, site_key: &SiteKey) -> Result<(), WarrenError>;

    /// Create or update a container in a single request
    async fn create_or_update_container(&self, upsert: ContainerUpsert)
        -> Result<(), WarrenError>;

    /// Sort all container tabs
    async fn sort_tabs(&self) -> Result<(), WarrenError>;

    /// Hide a container's tabs in one window
    async fn hide_tabs(
        &self,
        window_id: WindowId,
        store: &CookieStoreId,
    ) -> Result<(), WarrenError>;

    /// Show a container's hidden tabs in one window
    async fn show_tabs(
        &self,
        window_id: WindowId,
        store: &CookieStoreId,
    ) -> Result<(), WarrenError>;

    /// Move a container's tabs to a new window
    async fn move_tabs_to_window(
        &self,
        window_id: WindowId,
        store: &CookieStoreId,
    ) -> Result<(), WarrenError>;

    /// List a container's tabs in one window
    async fn get_tabs(
        &self,
        window_id: WindowId,
        store: &CookieStoreId,
    ) -> Result<Vec<TabInfo>, WarrenError>;

    /// Whether an incompatible add-on is installed
    async fn check_incompatible_addons(&self) -> Result<bool, WarrenError>;

    /// The active tab of the given window, `None` if there is none
    async fn active_tab(&self, window_id: WindowId) -> Result<Option<TabInfo>, WarrenError>;

    /// Register a tab-metadata-change listener
    ///
    /// The listener's lifetime is scoped by the caller; the popup only
    /// holds one while the container list is visible.
    async fn subscribe_tab_updates(&self) -> Result<SubscriptionId, WarrenError>;

    /// Tear down a previously registered tab-update listener
    async fn unsubscribe_tab_updates(&self, id: SubscriptionId) -> Result<(), WarrenError>;
}
