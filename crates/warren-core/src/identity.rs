//! Identity (container) model
//!
//! An identity is one isolated browsing context. The Host owns the
//! authoritative set; the popup only ever holds a read-mostly snapshot
//! refreshed after every mutating action.
//!
//! Handles and indices are two spellings of the same identifier: the
//! opaque per-identity string the Host uses (`CookieStoreId`) and the
//! small integer derived from it for display and rule storage
//! (`user_context_id`). The prefix-strip and prefix-add transforms are
//! inverses for every valid container handle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::WarrenError;

/// Fixed prefix of every real container handle
pub const CONTAINER_STORE_PREFIX: &str = "container-";

/// Distinguished handle of the synthetic default identity ("no container")
pub const DEFAULT_STORE_ID: &str = "default";

/// Icon tag used when the editor form leaves the icon unset
pub const DEFAULT_ICON: &str = "fingerprint";

/// Color tag used when the editor form leaves the color unset
pub const DEFAULT_COLOR: &str = "blue";

/// Opaque per-identity handle issued by the Host
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CookieStoreId(String);

impl CookieStoreId {
    /// Wrap a raw handle string
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The handle of the synthetic default identity
    pub fn default_store() -> Self {
        Self(DEFAULT_STORE_ID.to_string())
    }

    /// Build a container handle from its integer index (prefix-add)
    pub fn from_user_context_id(user_context_id: u32) -> Self {
        Self(format!("{CONTAINER_STORE_PREFIX}{user_context_id}"))
    }

    /// Whether this is the default ("no container") handle
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_STORE_ID
    }

    /// Recover the integer index from the handle (prefix-strip)
    ///
    /// Returns `None` for the default handle, which carries no index.
    /// A non-default handle that does not parse is an invariant breach
    /// and surfaces as an error.
    pub fn user_context_id(&self) -> Result<Option<u32>, WarrenError> {
        if self.is_default() {
            return Ok(None);
        }
        let digits = self.0.strip_prefix(CONTAINER_STORE_PREFIX).ok_or_else(|| {
            WarrenError::invalid(format!("malformed container handle: {}", self.0))
        })?;
        let id = digits.parse::<u32>().map_err(|_| {
            WarrenError::invalid(format!("malformed container handle: {}", self.0))
        })?;
        Ok(Some(id))
    }

    /// The raw handle string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CookieStoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Base identity record as returned by the Host's identity query
///
/// Carries no live tab state; that arrives separately and is merged by
/// the directory refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// Handle issued by the Host
    pub cookie_store_id: CookieStoreId,
    /// Display name
    pub name: String,
    /// Icon tag
    pub icon: String,
    /// Color tag
    pub color: String,
}

/// Live per-identity tab state, keyed by handle in the Host's response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IdentityTabState {
    /// Whether the identity has any open tabs
    pub has_open_tabs: bool,
    /// Whether the identity has any hidden tabs
    pub has_hidden_tabs: bool,
    /// Count of open tabs
    pub number_of_open_tabs: u32,
    /// Count of hidden tabs
    pub number_of_hidden_tabs: u32,
}

/// One container identity: the merged snapshot the popup renders from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Handle issued by the Host
    pub cookie_store_id: CookieStoreId,
    /// Integer index derived from the handle (`None` for the default identity)
    pub user_context_id: Option<u32>,
    /// Display name
    pub name: String,
    /// Icon tag
    pub icon: String,
    /// Color tag
    pub color: String,
    /// Live tab state (zero/unknown until a refresh supplies it)
    pub tab_state: IdentityTabState,
}

impl Identity {
    /// Build an identity from a base record with no live tab state yet
    ///
    /// Fails only on a malformed handle, which indicates a Host bug.
    pub fn from_record(record: IdentityRecord) -> Result<Self, WarrenError> {
        let user_context_id = record.cookie_store_id.user_context_id()?;
        Ok(Self {
            cookie_store_id: record.cookie_store_id,
            user_context_id,
            name: record.name,
            icon: record.icon,
            color: record.color,
            tab_state: IdentityTabState::default(),
        })
    }

    /// The synthetic "no container" identity
    ///
    /// Representable and renderable identically to a real identity
    /// wherever the UI offers "open in default container".
    pub fn default_container() -> Self {
        Self {
            cookie_store_id: CookieStoreId::default_store(),
            user_context_id: None,
            name: "Default".to_string(),
            icon: DEFAULT_ICON.to_string(),
            color: DEFAULT_COLOR.to_string(),
            tab_state: IdentityTabState::default(),
        }
    }

    /// Whether this is the synthetic default identity
    pub fn is_default(&self) -> bool {
        self.cookie_store_id.is_default()
    }
}

/// Target of a container create-or-update request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpsertId {
    /// Create a new container
    New,
    /// Update the container with this index
    Existing(u32),
}

/// Editable container attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerParams {
    /// Display name
    pub name: String,
    /// Icon tag
    pub icon: String,
    /// Color tag
    pub color: String,
}

/// A single create-or-update request to the Host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerUpsert {
    /// Create-vs-update sentinel
    pub id: UpsertId,
    /// Attributes to apply
    pub params: ContainerParams,
}
