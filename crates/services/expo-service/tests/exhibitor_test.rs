//! Exhibitor approval workflow against a real store.

mod common;

use common::{create_booth, create_expo, date, new_exhibitor, setup};
use domain::{ExhibitorChanges, ExhibitorStatus};
use expo_service_lib::repository::{ExhibitorRepository, ExhibitorStore};
use expo_service_lib::ServiceContainer;
use futures::future::join_all;

#[tokio::test]
async fn test_approval_assigns_selected_booth() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Robotics", date(2025, 6, 1), 2).await;
    let booth = create_booth(&services, expo.id, 1, "A1").await;
    let exhibitor = services
        .exhibitors()
        .apply(new_exhibitor(expo.id, Some(booth.id)))
        .await
        .unwrap();
    assert_eq!(exhibitor.status, ExhibitorStatus::Pending);

    let approved = services.exhibitors().approve(exhibitor.id).await.unwrap();

    assert_eq!(approved.status, ExhibitorStatus::Approved);
    let booth = services.booths().get_booth(booth.id).await.unwrap();
    assert_eq!(booth.assigned_to, Some(exhibitor.id));
}

#[tokio::test]
async fn test_approval_without_selection_touches_no_booth() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Robotics", date(2025, 6, 1), 1).await;
    let booth = create_booth(&services, expo.id, 1, "A1").await;
    let exhibitor = services
        .exhibitors()
        .apply(new_exhibitor(expo.id, None))
        .await
        .unwrap();
    let before = services.booths().get_booth(booth.id).await.unwrap();

    services.exhibitors().approve(exhibitor.id).await.unwrap();

    let untouched = services.booths().get_booth(booth.id).await.unwrap();
    assert_eq!(untouched.assigned_to, None);
    assert_eq!(untouched.updated_at, before.updated_at);
}

#[tokio::test]
async fn test_repeated_approval_is_a_no_op() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Robotics", date(2025, 6, 1), 1).await;
    let booth = create_booth(&services, expo.id, 1, "A1").await;
    let exhibitor = services
        .exhibitors()
        .apply(new_exhibitor(expo.id, Some(booth.id)))
        .await
        .unwrap();

    let first = services.exhibitors().approve(exhibitor.id).await.unwrap();
    let assigned = services.booths().get_booth(booth.id).await.unwrap();

    let second = services.exhibitors().approve(exhibitor.id).await.unwrap();
    let after = services.booths().get_booth(booth.id).await.unwrap();

    assert_eq!(second.status, ExhibitorStatus::Approved);
    assert_eq!(second.updated_at, first.updated_at);
    assert_eq!(after.assigned_to, Some(exhibitor.id));
    assert_eq!(after.updated_at, assigned.updated_at);
}

#[tokio::test]
async fn test_booth_held_by_another_exhibitor_blocks_approval() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Robotics", date(2025, 6, 1), 1).await;
    let booth = create_booth(&services, expo.id, 1, "A1").await;
    let exhibitors = services.exhibitors();

    let first = exhibitors
        .apply(new_exhibitor(expo.id, Some(booth.id)))
        .await
        .unwrap();
    let second = exhibitors
        .apply(new_exhibitor(expo.id, Some(booth.id)))
        .await
        .unwrap();

    exhibitors.approve(first.id).await.unwrap();
    let err = exhibitors.approve(second.id).await.unwrap_err();

    assert_eq!(err.code(), "CONFLICT");
    assert_eq!(
        err.user_message(),
        "Booth A1 is already assigned to another exhibitor"
    );

    // The failed approval rolled back: still pending, booth unchanged
    let second = exhibitors.get_exhibitor(second.id).await.unwrap();
    assert_eq!(second.status, ExhibitorStatus::Pending);
    let booth = services.booths().get_booth(booth.id).await.unwrap();
    assert_eq!(booth.assigned_to, Some(first.id));
}

#[tokio::test]
async fn test_decisions_are_final() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Robotics", date(2025, 6, 1), 1).await;
    let exhibitors = services.exhibitors();
    let exhibitor = exhibitors
        .apply(new_exhibitor(expo.id, None))
        .await
        .unwrap();

    let rejected = exhibitors.reject(exhibitor.id).await.unwrap();
    assert_eq!(rejected.status, ExhibitorStatus::Rejected);
    assert_eq!(
        exhibitors.reject(exhibitor.id).await.unwrap().status,
        ExhibitorStatus::Rejected
    );

    let err = exhibitors.approve(exhibitor.id).await.unwrap_err();
    assert_eq!(
        err.user_message(),
        "Cannot change status from rejected to approved"
    );

    let err = exhibitors
        .update_exhibitor(
            exhibitor.id,
            ExhibitorChanges {
                company_name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "CONFLICT");
}

#[tokio::test]
async fn test_selection_must_belong_to_expo() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Robotics", date(2025, 6, 1), 1).await;
    let other = create_expo(&services, "Textiles", date(2025, 6, 2), 1).await;
    let foreign_booth = create_booth(&services, other.id, 1, "T1").await;

    let err = services
        .exhibitors()
        .apply(new_exhibitor(expo.id, Some(foreign_booth.id)))
        .await
        .unwrap_err();

    assert_eq!(err.code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_releases_booth() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Robotics", date(2025, 6, 1), 1).await;
    let booth = create_booth(&services, expo.id, 1, "A1").await;
    let exhibitors = services.exhibitors();
    let exhibitor = exhibitors
        .apply(new_exhibitor(expo.id, Some(booth.id)))
        .await
        .unwrap();
    exhibitors.approve(exhibitor.id).await.unwrap();

    exhibitors.delete_exhibitor(exhibitor.id).await.unwrap();

    let booth = services.booths().get_booth(booth.id).await.unwrap();
    assert_eq!(booth.assigned_to, None);
    let err = exhibitors.get_exhibitor(exhibitor.id).await.unwrap_err();
    assert_eq!(err.user_message(), "Exhibitor not found");
}

#[tokio::test]
async fn test_concurrent_approvals_of_one_booth_single_winner() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Robotics", date(2025, 6, 1), 1).await;
    let booth = create_booth(&services, expo.id, 1, "A1").await;
    let exhibitors = services.exhibitors();

    let mut applicants = Vec::new();
    for _ in 0..2 {
        let applicant = exhibitors
            .apply(new_exhibitor(expo.id, Some(booth.id)))
            .await
            .unwrap();
        applicants.push(applicant.id);
    }

    let results = join_all(applicants.iter().map(|id| exhibitors.approve(*id))).await;

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    let (winner, loser) = if results[0].is_ok() {
        (applicants[0], applicants[1])
    } else {
        (applicants[1], applicants[0])
    };
    let err = results
        .into_iter()
        .find_map(Result::err)
        .expect("one approval fails");
    assert_eq!(err.code(), "CONFLICT");

    let loser = exhibitors.get_exhibitor(loser).await.unwrap();
    assert_eq!(loser.status, ExhibitorStatus::Pending);
    let booth = services.booths().get_booth(booth.id).await.unwrap();
    assert_eq!(booth.assigned_to, Some(winner));
}

#[tokio::test]
async fn test_edit_after_decision_is_refused_by_store() {
    let (db, services) = setup().await;
    let expo = create_expo(&services, "Robotics", date(2025, 6, 1), 1).await;
    let chosen = create_booth(&services, expo.id, 1, "A1").await;
    let other = create_booth(&services, expo.id, 1, "A2").await;
    let exhibitor = services
        .exhibitors()
        .apply(new_exhibitor(expo.id, Some(chosen.id)))
        .await
        .unwrap();
    services.exhibitors().approve(exhibitor.id).await.unwrap();

    // A write that read the exhibitor while it was still pending
    let store = ExhibitorStore::new(db.get_connection());
    let err = store
        .update(
            exhibitor.id,
            ExhibitorChanges {
                booth_selection: Some(Some(other.id)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.code(), "CONFLICT");
    assert_eq!(
        err.user_message(),
        "Exhibitor is approved and can no longer be edited"
    );
    let stored = services.exhibitors().get_exhibitor(exhibitor.id).await.unwrap();
    assert_eq!(stored.booth_selection, Some(chosen.id));

    let err = store
        .update(uuid::Uuid::new_v4(), ExhibitorChanges::default())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_pending_selection_can_be_withdrawn() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Robotics", date(2025, 6, 1), 1).await;
    let booth = create_booth(&services, expo.id, 1, "A1").await;
    let exhibitors = services.exhibitors();
    let exhibitor = exhibitors
        .apply(new_exhibitor(expo.id, Some(booth.id)))
        .await
        .unwrap();

    let renamed = exhibitors
        .update_exhibitor(
            exhibitor.id,
            ExhibitorChanges {
                company_name: Some("Acme Ltd".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.booth_selection, Some(booth.id));

    let withdrawn = exhibitors
        .update_exhibitor(
            exhibitor.id,
            ExhibitorChanges {
                booth_selection: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(withdrawn.booth_selection, None);
    assert_eq!(withdrawn.company_name, "Acme Ltd");
}
