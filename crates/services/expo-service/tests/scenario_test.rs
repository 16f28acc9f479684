//! End-to-end flows across the expo, booth, exhibitor and attendee services.

mod common;

use common::{create_booth, create_expo, date, new_attendee, new_booth, new_exhibitor, new_expo, setup};
use expo_service_lib::ServiceContainer;

#[tokio::test]
async fn scenario_duplicate_expo_slot_names_first_expo() {
    let (_db, services) = setup().await;
    create_expo(&services, "Summer Build", date(2025, 6, 1), 2).await;

    let err = services
        .expos()
        .create_expo(new_expo("Summer Build Again", date(2025, 6, 1), 2))
        .await
        .unwrap_err();

    assert_eq!(err.code(), "CONFLICT");
    assert!(err.user_message().contains("\"Summer Build\""));
}

#[tokio::test]
async fn scenario_booth_above_floor_count() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Summer Build", date(2025, 6, 1), 2).await;

    let err = services
        .booths()
        .create_booth(new_booth(expo.id, 3, "C1"))
        .await
        .unwrap_err();

    assert_eq!(
        err.user_message(),
        "Floor 3 is not available for this expo. Maximum floors: 2"
    );
}

#[tokio::test]
async fn scenario_approval_assigns_booth() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Summer Build", date(2025, 6, 1), 2).await;
    let booth = create_booth(&services, expo.id, 1, "A1").await;
    let exhibitor = services
        .exhibitors()
        .apply(new_exhibitor(expo.id, Some(booth.id)))
        .await
        .unwrap();

    services.exhibitors().approve(exhibitor.id).await.unwrap();

    let booth = services.booths().get_booth(booth.id).await.unwrap();
    assert_eq!(booth.assigned_to, Some(exhibitor.id));
}

#[tokio::test]
async fn scenario_attendee_email_per_expo() {
    let (_db, services) = setup().await;
    let e1 = create_expo(&services, "E1", date(2025, 6, 1), 1).await;
    let e2 = create_expo(&services, "E2", date(2025, 6, 1), 2).await;
    let attendees = services.attendees();

    attendees
        .register(new_attendee(e1.id, "a@x.com"))
        .await
        .unwrap();
    let err = attendees
        .register(new_attendee(e1.id, "a@x.com"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "CONFLICT");

    attendees
        .register(new_attendee(e2.id, "a@x.com"))
        .await
        .unwrap();
}
