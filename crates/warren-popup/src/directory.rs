//! Identity directory
//!
//! The most recently fetched snapshot of the Host's identity set, in the
//! Host's insertion order. Every refresh replaces the whole snapshot;
//! the Host is the sole source of truth, so callers re-fetch after any
//! mutation they perform and no optimistic local update is applied.

use std::collections::HashMap;

use warren_core::{
    CookieStoreId, Identity, IdentityRecord, IdentityTabState, WarrenError,
};

/// Fixed prefix scanned by default-name generation
const DEFAULT_NAME_PREFIX: &str = "Container #";

/// Snapshot of the Host's identity set
#[derive(Debug, Clone, Default)]
pub struct IdentityDirectory {
    identities: Vec<Identity>,
}

impl IdentityDirectory {
    /// Empty directory (before the first refresh)
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with a freshly fetched base set merged with
    /// per-identity live tab state
    ///
    /// Identities missing from the live-state map keep zero counts
    /// rather than failing; a malformed handle in the base set is a Host
    /// bug and surfaces as an error.
    pub fn replace(
        &mut self,
        records: Vec<IdentityRecord>,
        mut live_state: HashMap<CookieStoreId, IdentityTabState>,
    ) -> Result<(), WarrenError> {
        let mut identities = Vec::with_capacity(records.len());
        for record in records {
            let mut identity = Identity::from_record(record)?;
            if let Some(state) = live_state.remove(&identity.cookie_store_id) {
                identity.tab_state = state;
            }
            identities.push(identity);
        }
        self.identities = identities;
        Ok(())
    }

    /// The snapshot, in Host insertion order
    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }

    /// Look up an identity by handle
    pub fn get(&self, store: &CookieStoreId) -> Option<&Identity> {
        self.identities
            .iter()
            .find(|identity| &identity.cookie_store_id == store)
    }

    /// Translate an integer index back to its identity
    ///
    /// `None` is a legitimate outcome: transition rules may point at the
    /// default container or at an identity deleted since the rule was
    /// written.
    pub fn lookup_by_index(&self, user_context_id: u32) -> Option<&Identity> {
        self.identities
            .iter()
            .find(|identity| identity.user_context_id == Some(user_context_id))
    }

    /// Generate the next free "Container #NN" name
    ///
    /// Re-derived fresh on every call; identities can be created or
    /// removed concurrently by the Host, so the result is never cached.
    pub fn generate_default_name(&self) -> String {
        let used: Vec<u32> = self
            .identities
            .iter()
            .filter_map(|identity| identity.name.strip_prefix(DEFAULT_NAME_PREFIX))
            .filter_map(|digits| digits.parse::<u32>().ok())
            .collect();
        let mut candidate = 1u32;
        while used.contains(&candidate) {
            candidate += 1;
        }
        if candidate < 10 {
            format!("{DEFAULT_NAME_PREFIX}0{candidate}")
        } else {
            format!("{DEFAULT_NAME_PREFIX}{candidate}")
        }
    }
}
