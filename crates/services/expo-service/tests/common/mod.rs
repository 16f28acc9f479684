//! Shared setup for store-backed integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use sea_orm::ConnectOptions;
use uuid::Uuid;

use domain::{
    Booth, BoothStatus, ContactInfo, Expo, FloorUniverse, NewAttendee, NewBooth, NewExhibitor,
    NewExpo, SizeUnit,
};
use expo_service_lib::infra::Database;
use expo_service_lib::{ServiceContainer, Services};

/// Fresh in-memory SQLite database with every migration applied.
///
/// The pool holds a single connection so the in-memory database lives as
/// long as the pool does.
pub async fn setup() -> (Database, Services) {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect_with_options(options)
        .await
        .expect("connect to in-memory sqlite");
    db.run_migrations().await.expect("run migrations");

    let services = Services::from_connection(db.get_connection(), FloorUniverse::default());
    (db, services)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn new_expo(title: &str, date: NaiveDate, floors: i32) -> NewExpo {
    NewExpo {
        title: title.to_string(),
        date,
        location: "Convention Center".to_string(),
        description: "Annual trade show".to_string(),
        theme: "Technology".to_string(),
        floors,
        image: None,
    }
}

pub fn new_booth(expo_id: Uuid, floor: i32, number: &str) -> NewBooth {
    NewBooth {
        expo_id,
        floor,
        booth_number: number.to_string(),
        length: 10.0,
        width: 10.0,
        size_unit: SizeUnit::Ft,
        status: BoothStatus::Available,
        price: None,
        has_power: true,
        has_wifi: true,
        is_corner_booth: false,
        notes: String::new(),
    }
}

pub fn new_exhibitor(expo_id: Uuid, booth_selection: Option<Uuid>) -> NewExhibitor {
    NewExhibitor {
        expo_id,
        user_id: None,
        company_name: "Acme Robotics".to_string(),
        product_description: "Warehouse robots".to_string(),
        booth_selection,
        contact_info: ContactInfo {
            email: "sales@acme.test".to_string(),
            phone: "+15550100".to_string(),
        },
    }
}

pub fn new_attendee(expo_id: Uuid, email: &str) -> NewAttendee {
    NewAttendee {
        expo_id,
        full_name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        phone: "+15550101".to_string(),
        organization: "Analytical Engines".to_string(),
        attachment: None,
    }
}

pub async fn create_expo(services: &Services, title: &str, date: NaiveDate, floors: i32) -> Expo {
    services
        .expos()
        .create_expo(new_expo(title, date, floors))
        .await
        .expect("create expo")
}

pub async fn create_booth(services: &Services, expo_id: Uuid, floor: i32, number: &str) -> Booth {
    services
        .booths()
        .create_booth(new_booth(expo_id, floor, number))
        .await
        .expect("create booth")
}
