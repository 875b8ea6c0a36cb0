//! Container editor submit protocol

mod common;

use common::{harness, identity};
use warren_core::{OnboardingStage, SiteAssignment, UpsertId, DEFAULT_COLOR, DEFAULT_ICON};
use warren_popup::{EditorForm, Panel, PanelContext, PanelView, Selector};
use warren_testkit::{identity_record, HostCall, SurfaceEvent};

#[tokio::test]
async fn test_blank_form_creates_container_with_defaults() {
    let h = harness(Vec::new()).await;
    h.prefs.seed_stage(OnboardingStage::DONE);
    h.core.init().await.unwrap();
    h.core
        .navigate(Panel::ContainerEdit, PanelContext::None)
        .await
        .unwrap();

    h.core.submit_container_edit(EditorForm::default()).await.unwrap();

    let upsert = h
        .host
        .calls()
        .into_iter()
        .find_map(|call| match call {
            HostCall::CreateOrUpdateContainer(upsert) => Some(upsert),
            _ => None,
        })
        .expect("no upsert recorded");
    assert_eq!(upsert.id, UpsertId::New);
    assert_eq!(upsert.params.name, "Container #01");
    assert_eq!(upsert.params.icon, DEFAULT_ICON);
    assert_eq!(upsert.params.color, DEFAULT_COLOR);

    // Snapshot refreshed, then back to the caller.
    assert_eq!(h.core.identities().await.len(), 1);
    assert_eq!(h.core.current_panel().await, Some(Panel::ContainersList));
}

#[tokio::test]
async fn test_submit_with_identity_context_updates_in_place() {
    let h = harness(vec![identity_record(1, "Work")]).await;
    h.prefs.seed_stage(OnboardingStage::DONE);
    h.core.init().await.unwrap();
    h.core
        .navigate(
            Panel::ContainerEdit,
            PanelContext::Identity(identity(1, "Work")),
        )
        .await
        .unwrap();

    h.core
        .submit_container_edit(EditorForm {
            name: "Personal".to_string(),
            icon: "briefcase".to_string(),
            color: "red".to_string(),
        })
        .await
        .unwrap();

    assert!(h.host.calls().iter().any(|call| matches!(
        call,
        HostCall::CreateOrUpdateContainer(upsert)
            if upsert.id == UpsertId::Existing(1) && upsert.params.name == "Personal"
    )));
    let identities = h.core.identities().await;
    assert_eq!(identities.len(), 1);
    assert_eq!(identities[0].name, "Personal");
    assert_eq!(identities[0].icon, "briefcase");
}

#[tokio::test]
async fn test_upsert_failure_forces_the_container_list() {
    let h = harness(vec![identity_record(1, "Work")]).await;
    h.prefs.seed_stage(OnboardingStage::DONE);
    h.core.init().await.unwrap();
    // Enter the editor from a panel that is not the list, so a plain
    // navigate-back would land somewhere else.
    h.core
        .navigate(Panel::Transitions, PanelContext::None)
        .await
        .unwrap();
    h.core
        .navigate(Panel::ContainerEdit, PanelContext::None)
        .await
        .unwrap();
    h.host.fail_on("create_or_update_container");

    h.core.submit_container_edit(EditorForm::default()).await.unwrap();

    assert_eq!(h.core.current_panel().await, Some(Panel::ContainersList));
    assert!(!h.surface.is_closed());
}

#[tokio::test]
async fn test_editor_prefills_fields_and_lists_assignments() {
    let h = harness(vec![identity_record(1, "Work")]).await;
    h.prefs.seed_stage(OnboardingStage::DONE);
    let key = "siteContainerMap@@_example.com".to_string();
    h.host.set_assignment(
        key.clone(),
        SiteAssignment {
            hostname: "example.com".to_string(),
            user_context_id: 1,
        },
    );
    h.core.init().await.unwrap();

    h.core
        .navigate(
            Panel::ContainerEdit,
            PanelContext::Identity(identity(1, "Work")),
        )
        .await
        .unwrap();

    match h.surface.last_view() {
        Some(PanelView::Editor(view)) => {
            assert_eq!(view.editing.as_ref().map(|i| i.name.as_str()), Some("Work"));
            assert_eq!(view.name, "Work");
            assert_eq!(view.assignments.len(), 1);
            assert!(view.assignments.contains_key(&key));
        }
        other => panic!("expected editor view, got {other:?}"),
    }
    assert!(h
        .surface
        .position_of(&SurfaceEvent::FocusRequested(Selector("#container-edit-name")))
        .is_some());
}

#[tokio::test]
async fn test_delete_site_assignment_refreshes_the_editor() {
    let h = harness(vec![identity_record(1, "Work")]).await;
    h.prefs.seed_stage(OnboardingStage::DONE);
    let key = "siteContainerMap@@_example.com".to_string();
    h.host.set_assignment(
        key.clone(),
        SiteAssignment {
            hostname: "example.com".to_string(),
            user_context_id: 1,
        },
    );
    h.core.init().await.unwrap();
    h.core
        .navigate(
            Panel::ContainerEdit,
            PanelContext::Identity(identity(1, "Work")),
        )
        .await
        .unwrap();

    h.core.delete_site_assignment(&key).await.unwrap();

    assert!(h
        .host
        .calls()
        .contains(&HostCall::RemoveAssignmentByKey(key)));
    assert_eq!(h.core.current_panel().await, Some(Panel::ContainerEdit));
    match h.surface.last_view() {
        Some(PanelView::Editor(view)) => assert!(view.assignments.is_empty()),
        other => panic!("expected editor view, got {other:?}"),
    }
}

#[tokio::test]
async fn test_generated_names_fill_index_gaps() {
    let h = harness(vec![
        identity_record(1, "Container #01"),
        identity_record(2, "Container #03"),
    ])
    .await;
    h.prefs.seed_stage(OnboardingStage::DONE);
    h.core.init().await.unwrap();

    assert_eq!(h.core.generate_default_name().await, "Container #02");
}
