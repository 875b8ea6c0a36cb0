//! Container-list panel rendering and listener lifetime

mod common;

use common::{harness, identity, WINDOW};
use warren_core::{OnboardingStage, SiteAssignment};
use warren_popup::{Panel, PanelContext, PanelView, PopupError};
use warren_testkit::{identity_record, tab};

async fn list_harness(identities: Vec<warren_core::IdentityRecord>) -> common::Harness {
    let h = harness(identities).await;
    h.prefs.seed_stage(OnboardingStage::DONE);
    h
}

fn list_view(h: &common::Harness) -> warren_popup::views::ContainersListView {
    match h.surface.last_view() {
        Some(PanelView::ContainersList(view)) => view,
        other => panic!("expected list view, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rows_follow_snapshot_order_with_shortcut_indices() {
    let h = list_harness(vec![
        identity_record(5, "Five"),
        identity_record(2, "Two"),
        identity_record(9, "Nine"),
    ])
    .await;
    h.core.init().await.unwrap();

    let view = list_view(&h);
    let names: Vec<&str> = view.rows.iter().map(|r| r.identity.name.as_str()).collect();
    assert_eq!(names, ["Five", "Two", "Nine"]);
    let indices: Vec<usize> = view.rows.iter().map(|r| r.shortcut_index).collect();
    assert_eq!(indices, [0, 1, 2]);
}

#[tokio::test]
async fn test_tab_listener_lives_exactly_as_long_as_the_panel() {
    let h = list_harness(vec![identity_record(1, "Work")]).await;
    h.core.init().await.unwrap();
    assert_eq!(h.host.active_subscriptions(), 1);

    // Re-preparing the visible panel must not stack a second listener.
    h.core.acknowledge_whats_new().await.unwrap();
    assert_eq!(h.host.active_subscriptions(), 1);

    h.core
        .navigate(Panel::Transitions, PanelContext::None)
        .await
        .unwrap();
    assert_eq!(h.host.active_subscriptions(), 0);
    assert_eq!(h.host.unsubscribe_count(), 1);

    h.core
        .navigate(Panel::ContainersList, PanelContext::None)
        .await
        .unwrap();
    assert_eq!(h.host.active_subscriptions(), 1);

    h.core
        .navigate(
            Panel::ContainerEdit,
            PanelContext::Identity(identity(1, "Work")),
        )
        .await
        .unwrap();
    assert_eq!(h.host.active_subscriptions(), 0);
    assert_eq!(h.host.unsubscribe_count(), 2);
}

#[tokio::test]
async fn test_incompatible_addon_flag_reaches_the_view() {
    let h = list_harness(vec![identity_record(1, "Work")]).await;
    h.host.set_incompatible_addons(true);
    h.core.init().await.unwrap();

    assert!(list_view(&h).incompatible_addons);
}

#[tokio::test]
async fn test_incompatible_addon_check_failure_propagates() {
    let h = list_harness(vec![identity_record(1, "Work")]).await;
    h.host.fail_on("check_incompatible_addons");

    let result = h
        .core
        .navigate(Panel::ContainersList, PanelContext::None)
        .await;
    assert!(matches!(result, Err(PopupError::Core(_))));
}

#[tokio::test]
async fn test_identity_fetch_failure_at_startup_closes_the_popup() {
    let h = list_harness(vec![identity_record(1, "Work")]).await;
    h.host.fail_on("query_identities");

    h.core.init().await.unwrap();

    assert!(h.surface.is_closed());
    assert_eq!(h.core.current_panel().await, None);
}

#[tokio::test]
async fn test_assigned_site_is_marked_on_its_row() {
    let h = list_harness(vec![identity_record(1, "Work"), identity_record(2, "Home")]).await;
    h.host.set_active_tab(tab(7, WINDOW, "https://example.com/x"));
    h.host.set_assignment(
        "siteContainerMap@@_example.com".to_string(),
        SiteAssignment {
            hostname: "example.com".to_string(),
            user_context_id: 2,
        },
    );
    h.core.init().await.unwrap();

    let view = list_view(&h);
    assert!(!view.rows[0].assigned_current_site);
    assert!(view.rows[1].assigned_current_site);
}

#[tokio::test]
async fn test_whats_new_badge_clears_after_acknowledgement() {
    let h = list_harness(vec![identity_record(1, "Work")]).await;
    h.core.init().await.unwrap();
    assert!(list_view(&h).whats_new_badge);

    h.core.acknowledge_whats_new().await.unwrap();

    assert!(!list_view(&h).whats_new_badge);
}

#[tokio::test]
async fn test_live_tab_state_merges_into_identities() {
    let h = list_harness(vec![identity_record(1, "Work")]).await;
    let store = warren_core::CookieStoreId::from_user_context_id(1);
    h.host.set_tab_state(
        store,
        warren_core::IdentityTabState {
            has_open_tabs: true,
            has_hidden_tabs: true,
            number_of_open_tabs: 4,
            number_of_hidden_tabs: 1,
        },
    );
    h.core.init().await.unwrap();

    let view = list_view(&h);
    assert_eq!(view.rows[0].identity.tab_state.number_of_open_tabs, 4);
    assert!(view.rows[0].identity.tab_state.has_hidden_tabs);
}
