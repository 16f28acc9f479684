//! Expo conflict guard and floor availability against a real store.

mod common;

use common::{create_booth, create_expo, date, new_expo, setup};
use domain::{ExpoChanges, ExpoStatus, PlacementCheck};
use expo_service_lib::ServiceContainer;

#[tokio::test]
async fn test_second_expo_on_same_date_and_floors_conflicts() {
    let (_db, services) = setup().await;
    let first = create_expo(&services, "Tech Summit", date(2025, 6, 1), 2).await;

    let err = services
        .expos()
        .create_expo(new_expo("Gadget Fair", date(2025, 6, 1), 2))
        .await
        .unwrap_err();

    assert_eq!(err.code(), "CONFLICT");
    assert_eq!(
        err.user_message(),
        "An expo already exists on 2025-06-01 with 2 floors: \"Tech Summit\""
    );
    assert_eq!(
        err.details().unwrap()["existing_expo"]["id"],
        first.id.to_string()
    );
}

#[tokio::test]
async fn test_same_date_with_other_floor_count_allowed() {
    let (_db, services) = setup().await;
    create_expo(&services, "Tech Summit", date(2025, 6, 1), 2).await;

    let second = create_expo(&services, "Gadget Fair", date(2025, 6, 1), 3).await;
    let third = create_expo(&services, "Tech Summit II", date(2025, 6, 2), 2).await;

    assert_eq!(second.floors, 3);
    assert_eq!(third.date, date(2025, 6, 2));
}

#[tokio::test]
async fn test_concurrent_expo_creation_single_winner() {
    let (_db, services) = setup().await;
    let expos = services.expos();

    let (a, b) = tokio::join!(
        expos.create_expo(new_expo("North Hall", date(2025, 7, 4), 1)),
        expos.create_expo(new_expo("South Hall", date(2025, 7, 4), 1)),
    );

    let results = [a, b];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    let err = results.into_iter().find_map(Result::err).unwrap();
    assert_eq!(err.code(), "CONFLICT");
}

#[tokio::test]
async fn test_available_floors_partition_universe() {
    let (_db, services) = setup().await;
    let day = date(2025, 6, 1);
    create_expo(&services, "One", day, 1).await;
    create_expo(&services, "Three", day, 3).await;
    create_expo(&services, "Elsewhere", date(2025, 6, 2), 2).await;

    let floors = services.expos().available_floors(day).await.unwrap();
    assert_eq!(floors.available, vec![2, 4]);
    assert_eq!(floors.occupied, vec![1, 3]);

    let empty = services
        .expos()
        .available_floors(date(2030, 1, 1))
        .await
        .unwrap();
    assert_eq!(empty.available, vec![1, 2, 3, 4]);
    assert!(empty.occupied.is_empty());
}

#[tokio::test]
async fn test_placement_check_excludes_the_expo_itself() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Tech Summit", date(2025, 6, 1), 2).await;
    let expos = services.expos();

    let against_self = expos
        .check_placement(expo.date, expo.floors, Some(expo.id))
        .await
        .unwrap();
    assert!(against_self.is_ok());

    let fresh = expos
        .check_placement(expo.date, expo.floors, None)
        .await
        .unwrap();
    assert_eq!(fresh, PlacementCheck::Conflict(expo.summary()));
}

#[tokio::test]
async fn test_update_moving_onto_taken_slot_conflicts() {
    let (_db, services) = setup().await;
    create_expo(&services, "Anchor", date(2025, 6, 1), 2).await;
    let mover = create_expo(&services, "Mover", date(2025, 6, 8), 2).await;

    let err = services
        .expos()
        .update_expo(
            mover.id,
            ExpoChanges {
                date: Some(date(2025, 6, 1)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(err.user_message().contains("Anchor"));

    let renamed = services
        .expos()
        .update_expo(
            mover.id,
            ExpoChanges {
                title: Some("Mover Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.title, "Mover Renamed");
}

#[tokio::test]
async fn test_floors_cannot_drop_below_existing_booths() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Tall Expo", date(2025, 8, 1), 3).await;
    create_booth(&services, expo.id, 3, "T1").await;

    let err = services
        .expos()
        .update_expo(
            expo.id,
            ExpoChanges {
                floors: Some(2),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.code(), "CONFLICT");
}

#[tokio::test]
async fn test_status_filter_and_cascade_delete() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Short Lived", date(2025, 5, 1), 1).await;
    create_expo(&services, "Keeper", date(2025, 5, 2), 1).await;
    let booth = create_booth(&services, expo.id, 1, "A1").await;

    services
        .expos()
        .set_expo_status(expo.id, ExpoStatus::Cancelled)
        .await
        .unwrap();
    let cancelled = services
        .expos()
        .list_expos(Some(ExpoStatus::Cancelled))
        .await
        .unwrap();
    assert_eq!(cancelled.len(), 1);
    assert_eq!(cancelled[0].id, expo.id);

    services.expos().delete_expo(expo.id).await.unwrap();

    let err = services.booths().get_booth(booth.id).await.unwrap_err();
    assert_eq!(err.user_message(), "Booth not found");
    assert_eq!(services.expos().list_expos(None).await.unwrap().len(), 1);
}
