//! Mock Host implementation
//!
//! In-memory stand-in for the background coordination process with a
//! recorded call log, scriptable failures, and just enough container
//! semantics (upsert, delete, rules, assignments) for the popup flows
//! to behave end to end.

#![allow(clippy::expect_used)]

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use warren_core::{
    ContainerUpsert, CookieStoreId, HostEffects, IdentityRecord, IdentityTabState,
    SiteAssignment, SiteKey, SubscriptionId, TabId, TabInfo, UpsertId, WarrenError, WindowId,
};

/// One recorded Host call
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    /// `query_identities`
    QueryIdentities,
    /// `query_identities_state`
    QueryIdentitiesState(WindowId),
    /// `delete_container`
    DeleteContainer(u32),
    /// `get_transition_setting`
    GetTransitionSetting {
        /// Source handle
        source: String,
        /// Rule URL
        url: String,
    },
    /// `set_or_remove_transition_setting`
    SetOrRemoveTransitionSetting {
        /// Source handle
        source: String,
        /// Rule URL
        url: String,
        /// Target index, `None` for removal
        target: Option<u32>,
    },
    /// `get_assignment`
    GetAssignment(TabId),
    /// `get_assignments_by_container`
    GetAssignmentsByContainer(u32),
    /// `set_or_remove_assignment`
    SetOrRemoveAssignment {
        /// Tab the site was read from
        tab_id: TabId,
        /// Site URL
        url: String,
        /// Container index
        user_context_id: u32,
        /// Removal flag
        remove: bool,
    },
    /// `remove_assignment_by_key`
    RemoveAssignmentByKey(SiteKey),
    /// `create_or_update_container`
    CreateOrUpdateContainer(ContainerUpsert),
    /// `sort_tabs`
    SortTabs,
    /// `hide_tabs`
    HideTabs(String),
    /// `show_tabs`
    ShowTabs(String),
    /// `move_tabs_to_window`
    MoveTabsToWindow(String),
    /// `get_tabs`
    GetTabs(String),
    /// `check_incompatible_addons`
    CheckIncompatibleAddons,
    /// `active_tab`
    ActiveTab(WindowId),
    /// `subscribe_tab_updates`
    SubscribeTabUpdates,
    /// `unsubscribe_tab_updates`
    UnsubscribeTabUpdates(SubscriptionId),
}

#[derive(Debug, Default)]
struct MockHostState {
    identities: Vec<IdentityRecord>,
    tab_state: HashMap<CookieStoreId, IdentityTabState>,
    transitions: HashMap<(String, String), u32>,
    assignments: BTreeMap<SiteKey, SiteAssignment>,
    tabs: HashMap<String, Vec<TabInfo>>,
    active_tab: Option<TabInfo>,
    incompatible_addons: bool,
    subscriptions: Vec<SubscriptionId>,
    unsubscribe_count: usize,
    failing_ops: BTreeSet<&'static str>,
    calls: Vec<HostCall>,
}

/// Deterministic mock Host
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    state: Arc<Mutex<MockHostState>>,
}

impl MockHost {
    /// Empty mock with no identities
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock pre-seeded with an identity set
    pub fn with_identities(identities: Vec<IdentityRecord>) -> Self {
        let host = Self::new();
        host.lock().identities = identities;
        host
    }

    fn lock(&self) -> MutexGuard<'_, MockHostState> {
        self.state.lock().expect("mock host state poisoned")
    }

    fn check_failure(&self, op: &'static str) -> Result<(), WarrenError> {
        if self.lock().failing_ops.contains(op) {
            return Err(WarrenError::host(format!("mock failure in {op}")));
        }
        Ok(())
    }

    /// Make one operation fail until cleared
    pub fn fail_on(&self, op: &'static str) {
        self.lock().failing_ops.insert(op);
    }

    /// Seed live tab state for one handle
    pub fn set_tab_state(&self, store: CookieStoreId, state: IdentityTabState) {
        self.lock().tab_state.insert(store, state);
    }

    /// Seed a transition rule
    pub fn set_transition(&self, source: &CookieStoreId, url: &str, target: u32) {
        self.lock()
            .transitions
            .insert((source.as_str().to_string(), url.to_string()), target);
    }

    /// Current rule for `(source, url)`, if any
    pub fn transition(&self, source: &CookieStoreId, url: &str) -> Option<u32> {
        self.lock()
            .transitions
            .get(&(source.as_str().to_string(), url.to_string()))
            .copied()
    }

    /// Seed a site assignment
    pub fn set_assignment(&self, site_key: impl Into<SiteKey>, assignment: SiteAssignment) {
        self.lock().assignments.insert(site_key.into(), assignment);
    }

    /// Seed the foreground tab
    pub fn set_active_tab(&self, tab: TabInfo) {
        self.lock().active_tab = Some(tab);
    }

    /// Seed a container's tab list
    pub fn set_tabs(&self, store: &CookieStoreId, tabs: Vec<TabInfo>) {
        self.lock().tabs.insert(store.as_str().to_string(), tabs);
    }

    /// Seed the incompatible-add-on answer
    pub fn set_incompatible_addons(&self, incompatible: bool) {
        self.lock().incompatible_addons = incompatible;
    }

    /// The recorded call log
    pub fn calls(&self) -> Vec<HostCall> {
        self.lock().calls.clone()
    }

    /// Count of currently live tab-update subscriptions
    pub fn active_subscriptions(&self) -> usize {
        self.lock().subscriptions.len()
    }

    /// How many times a subscription was torn down
    pub fn unsubscribe_count(&self) -> usize {
        self.lock().unsubscribe_count
    }

    /// Snapshot of the mock's identity records
    pub fn identity_records(&self) -> Vec<IdentityRecord> {
        self.lock().identities.clone()
    }

    fn record(&self, call: HostCall) {
        self.lock().calls.push(call);
    }

    fn next_user_context_id(state: &MockHostState) -> u32 {
        state
            .identities
            .iter()
            .filter_map(|record| record.cookie_store_id.user_context_id().ok().flatten())
            .max()
            .map_or(1, |max| max + 1)
    }
}

#[async_trait]
impl HostEffects for MockHost {
    async fn query_identities(&self) -> Result<Vec<IdentityRecord>, WarrenError> {
        self.record(HostCall::QueryIdentities);
        self.check_failure("query_identities")?;
        Ok(self.lock().identities.clone())
    }

    async fn query_identities_state(
        &self,
        window_id: WindowId,
    ) -> Result<HashMap<CookieStoreId, IdentityTabState>, WarrenError> {
        self.record(HostCall::QueryIdentitiesState(window_id));
        self.check_failure("query_identities_state")?;
        Ok(self.lock().tab_state.clone())
    }

    async fn delete_container(&self, user_context_id: u32) -> Result<(), WarrenError> {
        self.record(HostCall::DeleteContainer(user_context_id));
        self.check_failure("delete_container")?;
        let store = CookieStoreId::from_user_context_id(user_context_id);
        self.lock()
            .identities
            .retain(|record| record.cookie_store_id != store);
        Ok(())
    }

    async fn get_transition_setting(
        &self,
        source: &CookieStoreId,
        url: &str,
    ) -> Result<Option<u32>, WarrenError> {
        self.record(HostCall::GetTransitionSetting {
            source: source.as_str().to_string(),
            url: url.to_string(),
        });
        self.check_failure("get_transition_setting")?;
        Ok(self.transition(source, url))
    }

    async fn set_or_remove_transition_setting(
        &self,
        source: &CookieStoreId,
        url: &str,
        target: Option<u32>,
    ) -> Result<(), WarrenError> {
        self.record(HostCall::SetOrRemoveTransitionSetting {
            source: source.as_str().to_string(),
            url: url.to_string(),
            target,
        });
        self.check_failure("set_or_remove_transition_setting")?;
        let key = (source.as_str().to_string(), url.to_string());
        let mut state = self.lock();
        match target {
            Some(index) => {
                state.transitions.insert(key, index);
            }
            None => {
                state.transitions.remove(&key);
            }
        }
        Ok(())
    }

    async fn get_assignment(&self, tab_id: TabId) -> Result<Option<SiteAssignment>, WarrenError> {
        self.record(HostCall::GetAssignment(tab_id));
        self.check_failure("get_assignment")?;
        let state = self.lock();
        let Some(tab) = state.active_tab.as_ref().filter(|tab| tab.id == tab_id) else {
            return Ok(None);
        };
        Ok(state
            .assignments
            .values()
            .find(|assignment| tab.url.contains(&assignment.hostname))
            .cloned())
    }

    async fn get_assignments_by_container(
        &self,
        user_context_id: u32,
    ) -> Result<BTreeMap<SiteKey, SiteAssignment>, WarrenError> {
        self.record(HostCall::GetAssignmentsByContainer(user_context_id));
        self.check_failure("get_assignments_by_container")?;
        Ok(self
            .lock()
            .assignments
            .iter()
            .filter(|(_, assignment)| assignment.user_context_id == user_context_id)
            .map(|(key, assignment)| (key.clone(), assignment.clone()))
            .collect())
    }

    async fn set_or_remove_assignment(
        &self,
        tab_id: TabId,
        url: &str,
        user_context_id: u32,
        remove: bool,
    ) -> Result<(), WarrenError> {
        self.record(HostCall::SetOrRemoveAssignment {
            tab_id,
            url: url.to_string(),
            user_context_id,
            remove,
        });
        self.check_failure("set_or_remove_assignment")?;
        let key = format!("siteContainerMap@@_{url}");
        let mut state = self.lock();
        if remove {
            state.assignments.remove(&key);
        } else {
            state.assignments.insert(
                key,
                SiteAssignment {
                    hostname: url.to_string(),
                    user_context_id,
                },
            );
        }
        Ok(())
    }

    async fn remove_assignment_by_key(&self, site_key: &SiteKey) -> Result<(), WarrenError> {
        self.record(HostCall::RemoveAssignmentByKey(site_key.clone()));
        self.check_failure("remove_assignment_by_key")?;
        self.lock().assignments.remove(site_key);
        Ok(())
    }

    async fn create_or_update_container(
        &self,
        upsert: ContainerUpsert,
    ) -> Result<(), WarrenError> {
        self.record(HostCall::CreateOrUpdateContainer(upsert.clone()));
        self.check_failure("create_or_update_container")?;
        let mut state = self.lock();
        match upsert.id {
            UpsertId::New => {
                let user_context_id = Self::next_user_context_id(&state);
                state.identities.push(IdentityRecord {
                    cookie_store_id: CookieStoreId::from_user_context_id(user_context_id),
                    name: upsert.params.name,
                    icon: upsert.params.icon,
                    color: upsert.params.color,
                });
            }
            UpsertId::Existing(user_context_id) => {
                let store = CookieStoreId::from_user_context_id(user_context_id);
                if let Some(record) = state
                    .identities
                    .iter_mut()
                    .find(|record| record.cookie_store_id == store)
                {
                    record.name = upsert.params.name;
                    record.icon = upsert.params.icon;
                    record.color = upsert.params.color;
                }
            }
        }
        Ok(())
    }

    async fn sort_tabs(&self) -> Result<(), WarrenError> {
        self.record(HostCall::SortTabs);
        self.check_failure("sort_tabs")
    }

    async fn hide_tabs(
        &self,
        _window_id: WindowId,
        store: &CookieStoreId,
    ) -> Result<(), WarrenError> {
        self.record(HostCall::HideTabs(store.as_str().to_string()));
        self.check_failure("hide_tabs")
    }

    async fn show_tabs(
        &self,
        _window_id: WindowId,
        store: &CookieStoreId,
    ) -> Result<(), WarrenError> {
        self.record(HostCall::ShowTabs(store.as_str().to_string()));
        self.check_failure("show_tabs")
    }

    async fn move_tabs_to_window(
        &self,
        _window_id: WindowId,
        store: &CookieStoreId,
    ) -> Result<(), WarrenError> {
        self.record(HostCall::MoveTabsToWindow(store.as_str().to_string()));
        self.check_failure("move_tabs_to_window")
    }

    async fn get_tabs(
        &self,
        _window_id: WindowId,
        store: &CookieStoreId,
    ) -> Result<Vec<TabInfo>, WarrenError> {
        self.record(HostCall::GetTabs(store.as_str().to_string()));
        self.check_failure("get_tabs")?;
        Ok(self
            .lock()
            .tabs
            .get(store.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn check_incompatible_addons(&self) -> Result<bool, WarrenError> {
        self.record(HostCall::CheckIncompatibleAddons);
        self.check_failure("check_incompatible_addons")?;
        Ok(self.lock().incompatible_addons)
    }

    async fn active_tab(&self, window_id: WindowId) -> Result<Option<TabInfo>, WarrenError> {
        self.record(HostCall::ActiveTab(window_id));
        self.check_failure("active_tab")?;
        Ok(self.lock().active_tab.clone())
    }

    async fn subscribe_tab_updates(&self) -> Result<SubscriptionId, WarrenError> {
        self.record(HostCall::SubscribeTabUpdates);
        self.check_failure("subscribe_tab_updates")?;
        let id = SubscriptionId::new();
        self.lock().subscriptions.push(id);
        Ok(id)
    }

    async fn unsubscribe_tab_updates(&self, id: SubscriptionId) -> Result<(), WarrenError> {
        self.record(HostCall::UnsubscribeTabUpdates(id));
        self.check_failure("unsubscribe_tab_updates")?;
        let mut state = self.lock();
        state.subscriptions.retain(|existing| *existing != id);
        state.unsubscribe_count += 1;
        Ok(())
    }
}
