//! Attendee registration against a real store.

mod common;

use common::{create_expo, date, new_attendee, setup};
use domain::AttendeeStatus;
use expo_service_lib::ServiceContainer;
use tokio_test::{assert_err, assert_ok};

#[tokio::test]
async fn test_one_registration_per_email_per_expo() {
    let (_db, services) = setup().await;
    let e1 = create_expo(&services, "Expo One", date(2025, 6, 1), 1).await;
    let e2 = create_expo(&services, "Expo Two", date(2025, 6, 2), 1).await;
    let attendees = services.attendees();

    let first = attendees
        .register(new_attendee(e1.id, "a@x.com"))
        .await
        .unwrap();
    let err = attendees
        .register(new_attendee(e1.id, "a@x.com"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "CONFLICT");

    let elsewhere = attendees
        .register(new_attendee(e2.id, "a@x.com"))
        .await
        .unwrap();
    assert_ne!(first.badge_id, elsewhere.badge_id);
}

#[tokio::test]
async fn test_email_case_does_not_bypass_uniqueness() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Expo One", date(2025, 6, 1), 1).await;
    let attendees = services.attendees();

    attendees
        .register(new_attendee(expo.id, "a@x.com"))
        .await
        .unwrap();
    let err = attendees
        .register(new_attendee(expo.id, " A@X.COM"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "a@x.com is already registered for this expo");
}

#[tokio::test]
async fn test_badge_lookup_and_check_in() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Expo One", date(2025, 6, 1), 1).await;
    let attendees = services.attendees();

    let registered = attendees
        .register(new_attendee(expo.id, "b@x.com"))
        .await
        .unwrap();
    assert_eq!(registered.status, AttendeeStatus::Registered);

    let found = attendees.find_by_badge(&registered.badge_id).await.unwrap();
    assert_eq!(found.id, registered.id);

    let checked_in = attendees
        .set_attendee_status(registered.id, AttendeeStatus::CheckedIn)
        .await
        .unwrap();
    assert_eq!(checked_in.status, AttendeeStatus::CheckedIn);

    assert_eq!(attendees.list_attendees(expo.id).await.unwrap().len(), 1);
    assert_ok!(attendees.delete_attendee(registered.id).await);
    assert_err!(attendees.find_by_badge(&registered.badge_id).await);
    assert!(attendees.list_attendees(expo.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_registration_requires_expo() {
    let (_db, services) = setup().await;

    let err = services
        .attendees()
        .register(new_attendee(uuid::Uuid::new_v4(), "c@x.com"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Expo not found");
}
