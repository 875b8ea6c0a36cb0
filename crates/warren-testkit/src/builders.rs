//! Fixture builders

use warren_core::{
    Achievement, CookieStoreId, IdentityRecord, TabId, TabInfo, WindowId,
};

/// Identity record with the given index and name, default icon/color
pub fn identity_record(user_context_id: u32, name: &str) -> IdentityRecord {
    IdentityRecord {
        cookie_store_id: CookieStoreId::from_user_context_id(user_context_id),
        name: name.to_string(),
        icon: "fingerprint".to_string(),
        color: "blue".to_string(),
    }
}

/// Tab in the given window
pub fn tab(id: u64, window_id: WindowId, url: &str) -> TabInfo {
    TabInfo {
        id: TabId(id),
        window_id,
        title: format!("Tab {id}"),
        url: url.to_string(),
    }
}

/// Achievement entry
pub fn achievement(name: &str, done: bool) -> Achievement {
    Achievement {
        name: name.to_string(),
        done,
    }
}
