//! Shared test utilities for kitten-db unit tests.

pub(crate) mod helpers {
    use chrono::{DateTime, TimeZone, Utc};
    use kitten_core::entities::{NewKitten, NewMeasurement};

    use crate::service::KittenService;

    /// Create an in-memory, migrated `KittenService`.
    pub async fn test_service() -> KittenService {
        let svc = KittenService::new_local(":memory:").await.unwrap();
        svc.migrate().await.unwrap();
        svc
    }

    /// Fixed reference instant for deterministic measurement dates.
    pub fn day0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
    }

    /// Insert a kitten with only a name and return its id.
    pub async fn add_kitten(svc: &KittenService, name: &str) -> i64 {
        svc.create_kitten(&NewKitten::named(name)).await.unwrap()
    }

    /// Insert a measurement taken at `at` and return its id.
    pub async fn add_weight(
        svc: &KittenService,
        kitten_id: i64,
        weight_grams: i64,
        at: DateTime<Utc>,
    ) -> i64 {
        svc.create_measurement(&NewMeasurement {
            kitten_id,
            weight_grams,
            measurement_date: Some(at),
            notes: None,
        })
        .await
        .unwrap()
    }
}
