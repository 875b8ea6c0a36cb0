//! Site-assignment types
//!
//! Assignments map a site key to the container a site should open in.
//! The popup treats them as opaque except for iteration and deletion by
//! key inside the container editor; the Host owns their semantics.

use serde::{Deserialize, Serialize};

/// Opaque site key under which the Host stores an assignment
pub type SiteKey = String;

/// One host-provided site assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteAssignment {
    /// Hostname the assignment applies to
    pub hostname: String,
    /// Index of the container the site is assigned to
    pub user_context_id: u32,
}
