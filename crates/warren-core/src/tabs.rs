//! Tab and window identifiers
//!
//! Thin identifier newtypes for the Host's tab/window vocabulary, plus
//! the tab metadata record a few panels render.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Host-issued tab identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab-{}", self.0)
    }
}

/// Host-issued window identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// Metadata of one open tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    /// Tab identifier
    pub id: TabId,
    /// Window the tab lives in
    pub window_id: WindowId,
    /// Tab title
    pub title: String,
    /// Tab URL
    pub url: String,
}
