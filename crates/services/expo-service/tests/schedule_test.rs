//! Expo sessions against a real store.

mod common;

use chrono::{DateTime, Duration, TimeZone, Utc};
use common::{create_expo, date, setup};
use domain::{NewSchedule, ScheduleChanges, TimeSlot};
use expo_service_lib::ServiceContainer;
use tokio_test::assert_ok;

#[tokio::test]
async fn test_sessions_ordered_and_slot_validated_on_update() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Expo One", date(2025, 6, 1), 1).await;
    let schedules = services.schedules();
    let nine = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();

    let session = |name: &str, start: DateTime<Utc>| NewSchedule {
        expo_id: expo.id,
        session_name: name.to_string(),
        time_slot: TimeSlot {
            start,
            end: start + Duration::hours(1),
        },
        speaker: "Speaker".to_string(),
        location: "Stage".to_string(),
        description: String::new(),
    };

    let late = schedules
        .create_schedule(session("Closing", nine + Duration::hours(6)))
        .await
        .unwrap();
    schedules
        .create_schedule(session("Opening", nine))
        .await
        .unwrap();

    let listed = schedules.list_schedules(expo.id).await.unwrap();
    let names: Vec<_> = listed.iter().map(|s| s.session_name.as_str()).collect();
    assert_eq!(names, ["Opening", "Closing"]);

    let err = schedules
        .update_schedule(
            late.id,
            ScheduleChanges {
                end: Some(nine),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");

    let moved = schedules
        .update_schedule(
            late.id,
            ScheduleChanges {
                speaker: Some("Keynote Speaker".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.speaker, "Keynote Speaker");
    assert_eq!(moved.time_slot, late.time_slot);
}

#[tokio::test]
async fn test_sessions_go_with_their_expo() {
    let (_db, services) = setup().await;
    let expo = create_expo(&services, "Expo One", date(2025, 6, 1), 1).await;
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();

    let session = services
        .schedules()
        .create_schedule(NewSchedule {
            expo_id: expo.id,
            session_name: "Panel".to_string(),
            time_slot: TimeSlot {
                start,
                end: start + Duration::minutes(45),
            },
            speaker: "Moderator".to_string(),
            location: "Hall B".to_string(),
            description: String::new(),
        })
        .await
        .unwrap();

    assert_ok!(services.expos().delete_expo(expo.id).await);

    let err = services
        .schedules()
        .get_schedule(session.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
}
