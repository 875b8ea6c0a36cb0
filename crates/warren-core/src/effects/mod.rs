//! Effect interfaces
//!
//! Pure traits describing everything the popup needs from the outside
//! world. Production handlers live in the frontend layer; deterministic
//! mocks live in `warren-testkit`.

mod host;
mod prefs;

pub use host::{HostEffects, SubscriptionId};
pub use prefs::PrefsEffects;
