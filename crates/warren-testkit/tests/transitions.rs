//! Transition-rule editing, picking, and reset

mod common;

use common::{harness, identity};
use warren_core::{
    CookieStoreId, Identity, OnboardingStage, TransitionEditMode, DEFAULT_RULE_URL,
};
use warren_popup::{Panel, PanelView, PopupError};
use warren_testkit::{identity_record, tab, HostCall};

const PAGE_URL: &str = "https://example.com/inbox";

async fn transitions_harness() -> common::Harness {
    let h = harness(vec![identity_record(1, "Work"), identity_record(2, "Home")]).await;
    h.prefs.seed_stage(OnboardingStage::DONE);
    h.host.set_active_tab(tab(7, common::WINDOW, PAGE_URL));
    h.core.init().await.unwrap();
    h
}

#[tokio::test]
async fn test_per_url_pick_sets_rule_and_resumes_editing() {
    let h = transitions_harness().await;
    h.core.edit_transitions(TransitionEditMode::PerUrl).await.unwrap();
    h.core.open_transition_picker(identity(1, "Work")).await.unwrap();
    assert_eq!(h.core.current_panel().await, Some(Panel::TransitionPicker));

    h.core.pick_transition_target(&identity(2, "Home")).await.unwrap();

    assert!(h.host.calls().contains(&HostCall::SetOrRemoveTransitionSetting {
        source: "container-1".to_string(),
        url: PAGE_URL.to_string(),
        target: Some(2),
    }));
    assert_eq!(
        h.host.transition(&CookieStoreId::from_user_context_id(1), PAGE_URL),
        Some(2)
    );
    assert_eq!(h.core.current_panel().await, Some(Panel::Transitions));
    assert_eq!(
        h.core.transition_edit_mode().await,
        Some(TransitionEditMode::PerUrl)
    );
    match h.surface.last_view() {
        Some(PanelView::Transitions(view)) => {
            assert_eq!(view.mode, Some(TransitionEditMode::PerUrl));
            assert_eq!(view.url, PAGE_URL);
            assert_eq!(view.rows[0].target.as_ref().map(|t| t.name.as_str()), Some("Home"));
        }
        other => panic!("expected transitions view, got {other:?}"),
    }
}

#[tokio::test]
async fn test_picking_default_container_removes_the_rule() {
    let h = transitions_harness().await;
    let store = CookieStoreId::from_user_context_id(1);
    h.host.set_transition(&store, PAGE_URL, 2);

    h.core.edit_transitions(TransitionEditMode::PerUrl).await.unwrap();
    h.core.open_transition_picker(identity(1, "Work")).await.unwrap();
    h.core
        .pick_transition_target(&Identity::default_container())
        .await
        .unwrap();

    assert!(h.host.calls().contains(&HostCall::SetOrRemoveTransitionSetting {
        source: "container-1".to_string(),
        url: PAGE_URL.to_string(),
        target: None,
    }));
    assert_eq!(h.host.transition(&store, PAGE_URL), None);
}

#[tokio::test]
async fn test_default_mode_edits_the_empty_rule_url() {
    let h = transitions_harness().await;
    h.core.edit_transitions(TransitionEditMode::Default).await.unwrap();

    match h.surface.last_view() {
        Some(PanelView::Transitions(view)) => assert_eq!(view.url, DEFAULT_RULE_URL),
        other => panic!("expected transitions view, got {other:?}"),
    }

    h.core.open_transition_picker(identity(1, "Work")).await.unwrap();
    h.core.pick_transition_target(&identity(2, "Home")).await.unwrap();

    assert_eq!(
        h.host
            .transition(&CookieStoreId::from_user_context_id(1), DEFAULT_RULE_URL),
        Some(2)
    );
    assert_eq!(
        h.core.transition_edit_mode().await,
        Some(TransitionEditMode::Default)
    );
}

#[tokio::test]
async fn test_picker_is_unreachable_outside_edit_mode() {
    let h = transitions_harness().await;

    let result = h.core.open_transition_picker(identity(1, "Work")).await;
    assert!(matches!(result, Err(PopupError::NoPickContext)));
}

#[tokio::test]
async fn test_pick_without_picker_context_fails() {
    let h = transitions_harness().await;
    h.core.edit_transitions(TransitionEditMode::PerUrl).await.unwrap();

    let result = h.core.pick_transition_target(&identity(2, "Home")).await;
    assert!(matches!(result, Err(PopupError::NoPickContext)));
}

#[tokio::test]
async fn test_picker_offers_default_container_and_excludes_source() {
    let h = transitions_harness().await;
    h.core.edit_transitions(TransitionEditMode::PerUrl).await.unwrap();
    h.core.open_transition_picker(identity(1, "Work")).await.unwrap();

    match h.surface.last_view() {
        Some(PanelView::Picker(view)) => {
            assert_eq!(view.source.name, "Work");
            let names: Vec<&str> = view.candidates.iter().map(|c| c.name.as_str()).collect();
            assert!(view.candidates[0].cookie_store_id.is_default());
            assert!(names.contains(&"Home"));
            assert!(!names.contains(&"Work"));
        }
        other => panic!("expected picker view, got {other:?}"),
    }
}

#[tokio::test]
async fn test_reset_clears_per_url_rules_but_spares_defaults() {
    let h = transitions_harness().await;
    let work = CookieStoreId::from_user_context_id(1);
    let home = CookieStoreId::from_user_context_id(2);
    h.host.set_transition(&work, PAGE_URL, 2);
    h.host.set_transition(&home, PAGE_URL, 1);
    h.host.set_transition(&work, DEFAULT_RULE_URL, 2);

    h.core.edit_transitions(TransitionEditMode::PerUrl).await.unwrap();
    h.core.reset_transitions().await.unwrap();

    assert_eq!(h.host.transition(&work, PAGE_URL), None);
    assert_eq!(h.host.transition(&home, PAGE_URL), None);
    assert_eq!(h.host.transition(&work, DEFAULT_RULE_URL), Some(2));
    assert_eq!(h.core.transition_edit_mode().await, None);
    match h.surface.last_view() {
        Some(PanelView::Transitions(view)) => assert_eq!(view.mode, None),
        other => panic!("expected transitions view, got {other:?}"),
    }
}

#[tokio::test]
async fn test_finish_hides_edit_controls_and_is_idempotent() {
    let h = transitions_harness().await;
    h.core.edit_transitions(TransitionEditMode::PerUrl).await.unwrap();
    assert!(h.surface.visible().contains("#transitions-edit-controls"));

    h.core.finish_edit_transitions().await.unwrap();
    h.core.finish_edit_transitions().await.unwrap();

    assert_eq!(h.core.transition_edit_mode().await, None);
    assert!(!h.surface.visible().contains("#transitions-edit-controls"));
    assert_eq!(h.core.current_panel().await, Some(Panel::Transitions));
}

#[tokio::test]
async fn test_finish_when_not_editing_is_a_no_op() {
    let h = transitions_harness().await;
    let views_before = h.surface.views().len();

    h.core.finish_edit_transitions().await.unwrap();

    assert_eq!(h.core.transition_edit_mode().await, None);
    assert_eq!(h.core.current_panel().await, Some(Panel::ContainersList));
    assert_eq!(h.surface.views().len(), views_before);
}

#[tokio::test]
async fn test_unresolvable_target_index_renders_as_no_target() {
    let h = transitions_harness().await;
    let work = CookieStoreId::from_user_context_id(1);
    h.host.set_transition(&work, PAGE_URL, 99);

    h.core
        .navigate(Panel::Transitions, warren_popup::PanelContext::None)
        .await
        .unwrap();

    match h.surface.last_view() {
        Some(PanelView::Transitions(view)) => {
            assert_eq!(view.mode, None);
            assert!(view.rows[0].target.is_none());
            assert!(!view.rows[0].pick_affordance);
        }
        other => panic!("expected transitions view, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rule_write_failure_still_returns_to_editor() {
    let h = transitions_harness().await;
    h.core.edit_transitions(TransitionEditMode::PerUrl).await.unwrap();
    h.core.open_transition_picker(identity(1, "Work")).await.unwrap();
    h.host.fail_on("set_or_remove_transition_setting");

    h.core.pick_transition_target(&identity(2, "Home")).await.unwrap();

    assert_eq!(h.core.current_panel().await, Some(Panel::Transitions));
    assert_eq!(
        h.core.transition_edit_mode().await,
        Some(TransitionEditMode::PerUrl)
    );
    assert!(!h.surface.is_closed());
}
