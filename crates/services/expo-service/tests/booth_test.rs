//! Booth allocator against a real store, including the creation race.

mod common;

use common::{create_booth, create_expo, date, new_booth, new_exhibitor, setup};
use domain::{BoothChanges, BoothStatus, ExhibitorStatus, ExpoChanges};
use rust_decimal::Decimal;
use expo_service_lib::ServiceContainer;
use futures::future::join_all;

#[tokio::test]
async fn test_floor_beyond_expo_rejected() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Two Floors", date(2025, 6, 1), 2).await;

    let err = services
        .booths()
        .create_booth(new_booth(expo.id, 3, "A1"))
        .await
        .unwrap_err();

    assert_eq!(
        err.user_message(),
        "Floor 3 is not available for this expo. Maximum floors: 2"
    );
    assert!(services
        .booths()
        .list_booths(expo.id, None, None)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_booth_number_unique_per_floor() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Two Floors", date(2025, 6, 1), 2).await;
    create_booth(&services, expo.id, 1, "A1").await;

    let err = services
        .booths()
        .create_booth(new_booth(expo.id, 1, "A1"))
        .await
        .unwrap_err();
    assert_eq!(
        err.user_message(),
        "Booth number A1 already exists on floor 1 for this expo"
    );

    // Same number on another floor or in another expo is fine
    create_booth(&services, expo.id, 2, "A1").await;
    let other = create_expo(&services, "Other", date(2025, 6, 2), 1).await;
    create_booth(&services, other.id, 1, "A1").await;
}

#[tokio::test]
async fn test_concurrent_creation_exactly_one_succeeds() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Race Expo", date(2025, 6, 1), 2).await;
    let booths = services.booths();

    let attempts = (0..4).map(|_| booths.create_booth(new_booth(expo.id, 2, "R9")));
    let results = join_all(attempts).await;

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    for err in results.into_iter().filter_map(Result::err) {
        assert_eq!(
            err.user_message(),
            "Booth number R9 already exists on floor 2 for this expo"
        );
    }
    assert_eq!(booths.list_booths(expo.id, None, None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_rechecks_key_and_floor() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Two Floors", date(2025, 6, 1), 2).await;
    create_booth(&services, expo.id, 1, "A1").await;
    let b2 = create_booth(&services, expo.id, 1, "A2").await;

    let renumber = services
        .booths()
        .update_booth(
            b2.id,
            BoothChanges {
                booth_number: Some("A1".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(renumber.code(), "CONFLICT");

    let too_high = services
        .booths()
        .update_booth(
            b2.id,
            BoothChanges {
                floor: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(too_high.user_message().starts_with("Floor 3 is not available"));

    let moved = services
        .booths()
        .update_booth(
            b2.id,
            BoothChanges {
                floor: Some(2),
                is_corner_booth: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.floor, 2);
    assert!(moved.is_corner_booth);
}

#[tokio::test]
async fn test_list_filters_by_floor_and_status() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Filters", date(2025, 6, 1), 2).await;
    let a = create_booth(&services, expo.id, 1, "A1").await;
    create_booth(&services, expo.id, 2, "B1").await;

    services
        .booths()
        .set_booth_status(a.id, BoothStatus::UnderMaintenance)
        .await
        .unwrap();

    let floor_two = services
        .booths()
        .list_booths(expo.id, Some(2), None)
        .await
        .unwrap();
    assert_eq!(floor_two.len(), 1);
    assert_eq!(floor_two[0].booth_number, "B1");

    let maintenance = services
        .booths()
        .list_booths(expo.id, None, Some(BoothStatus::UnderMaintenance))
        .await
        .unwrap();
    assert_eq!(maintenance.len(), 1);
    assert_eq!(maintenance[0].id, a.id);

    services.booths().delete_booth(a.id).await.unwrap();
    let err = services.booths().delete_booth(a.id).await.unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_selected_booth_stays_in_its_expo() {
    let (_db, services) = setup().await;
    let home = create_expo(&services, "Home", date(2025, 6, 1), 2).await;
    let elsewhere = create_expo(&services, "Elsewhere", date(2025, 6, 2), 2).await;
    let booth = create_booth(&services, home.id, 1, "A1").await;
    let exhibitor = services
        .exhibitors()
        .apply(new_exhibitor(home.id, Some(booth.id)))
        .await
        .unwrap();

    let move_away = BoothChanges {
        expo_id: Some(elsewhere.id),
        ..Default::default()
    };
    let err = services
        .booths()
        .update_booth(booth.id, move_away.clone())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "CONFLICT");
    assert_eq!(
        err.user_message(),
        "Booth A1 is selected by an exhibitor and cannot move to another expo"
    );
    assert_eq!(
        services.booths().get_booth(booth.id).await.unwrap().expo_id,
        home.id
    );

    // Once approved the booth is assigned and still cannot leave
    let approved = services.exhibitors().approve(exhibitor.id).await.unwrap();
    assert_eq!(approved.status, ExhibitorStatus::Approved);
    let assigned = services.booths().get_booth(booth.id).await.unwrap();
    assert_eq!(assigned.expo_id, home.id);
    assert_eq!(assigned.assigned_to, Some(exhibitor.id));

    let err = services
        .booths()
        .update_booth(booth.id, move_away)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "CONFLICT");
}

#[tokio::test]
async fn test_unclaimed_booth_can_move_expo() {
    let (_db, services) = setup().await;
    let home = create_expo(&services, "Home", date(2025, 6, 1), 2).await;
    let elsewhere = create_expo(&services, "Elsewhere", date(2025, 6, 2), 2).await;
    let booth = create_booth(&services, home.id, 2, "B4").await;

    let moved = services
        .booths()
        .update_booth(
            booth.id,
            BoothChanges {
                expo_id: Some(elsewhere.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(moved.expo_id, elsewhere.id);
    assert_eq!(moved.floor, 2);
}

#[tokio::test]
async fn test_price_can_be_cleared() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Pricing", date(2025, 6, 1), 1).await;
    let booth = create_booth(&services, expo.id, 1, "P1").await;

    let priced = services
        .booths()
        .update_booth(
            booth.id,
            BoothChanges {
                price: Some(Some(Decimal::new(150_000, 2))),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(priced.price, Some(Decimal::new(150_000, 2)));

    let unchanged = services
        .booths()
        .update_booth(
            booth.id,
            BoothChanges {
                notes: Some("by the stage".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(unchanged.price, Some(Decimal::new(150_000, 2)));

    let cleared = services
        .booths()
        .update_booth(
            booth.id,
            BoothChanges {
                price: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.price, None);
}

#[tokio::test]
async fn test_booth_and_shrink_race_keeps_floors_consistent() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Shrinking", date(2025, 6, 1), 3).await;
    let shrink = ExpoChanges {
        floors: Some(2),
        ..Default::default()
    };

    let (booths, expos) = (services.booths(), services.expos());

    let (booth, shrunk) = futures::join!(
        booths.create_booth(new_booth(expo.id, 3, "T1")),
        expos.update_expo(expo.id, shrink),
    );

    assert!(booth.is_ok() != shrunk.is_ok());
    let expo = expos.get_expo(expo.id).await.unwrap();
    let placed = booths.list_booths(expo.id, None, None).await.unwrap();
    assert!(placed.iter().all(|b| b.floor <= expo.floors));
}
