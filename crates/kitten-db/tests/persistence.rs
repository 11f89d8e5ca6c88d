//! On-disk persistence: data written through one service survives a reopen.

use chrono::{Duration, TimeZone, Utc};
use kitten_core::entities::{NewKitten, NewMeasurement};
use kitten_core::enums::KittenStatus;
use kitten_db::service::KittenService;
use kitten_db::updates::kitten::KittenUpdateBuilder;
use pretty_assertions::assert_eq;

async fn open(path: &str) -> KittenService {
    let svc = KittenService::new_local(path).await.unwrap();
    svc.migrate().await.unwrap();
    svc
}

#[tokio::test]
async fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kittens.db");
    let path = path.to_str().unwrap();
    let day0 = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();

    let svc = open(path).await;
    let id = svc.create_kitten(&NewKitten::named("Mittens")).await.unwrap();
    for (offset, grams) in [(0, 100), (3, 150)] {
        svc.create_measurement(&NewMeasurement {
            kitten_id: id,
            weight_grams: grams,
            measurement_date: Some(day0 + Duration::days(offset)),
            notes: None,
        })
        .await
        .unwrap();
    }
    svc.close();

    // Second open re-runs the migration against an existing schema.
    let svc = open(path).await;
    let summaries = svc.list_kitten_summaries().await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].kitten.name, "Mittens");
    assert_eq!(summaries[0].latest_weight, Some(150));
    assert_eq!(summaries[0].weight_change, Some(50));
    assert_eq!(summaries[0].weight_change_days, Some(3));
    svc.close();
}

#[tokio::test]
async fn cascade_holds_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cascade.db");
    let path = path.to_str().unwrap();

    let svc = open(path).await;
    let id = svc.create_kitten(&NewKitten::named("Brief")).await.unwrap();
    svc.create_measurement(&NewMeasurement {
        kitten_id: id,
        weight_grams: 90,
        measurement_date: None,
        notes: None,
    })
    .await
    .unwrap();
    svc.close();

    let svc = open(path).await;
    assert!(svc.delete_kitten(id).await.unwrap());
    assert!(svc.list_measurements_for_kitten(id).await.unwrap().is_empty());
    assert!(svc.list_recent_measurements(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn status_change_moves_kitten_to_the_end() {
    let svc = open(":memory:").await;
    let able = svc.create_kitten(&NewKitten::named("Able")).await.unwrap();
    svc.create_kitten(&NewKitten::named("Baker")).await.unwrap();

    let first: Vec<String> = svc
        .list_kittens()
        .await
        .unwrap()
        .into_iter()
        .map(|k| k.name)
        .collect();
    assert_eq!(first, vec!["Able", "Baker"]);

    svc.update_kitten(
        able,
        KittenUpdateBuilder::new()
            .status(KittenStatus::Deceased)
            .build(),
    )
    .await
    .unwrap();

    let second: Vec<String> = svc
        .list_kitten_summaries()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.kitten.name)
        .collect();
    assert_eq!(second, vec!["Baker", "Able"]);
}

#[tokio::test]
async fn seed_then_clear_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.db");
    let path = path.to_str().unwrap();
    let today = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();

    let svc = open(path).await;
    let report = svc.seed_sample_data(today).await.unwrap();
    assert_eq!(report.kittens, 3);
    svc.close();

    let svc = open(path).await;
    assert_eq!(svc.list_kittens().await.unwrap().len(), 3);
    assert_eq!(svc.clear_all_data().await.unwrap(), 3);
    assert!(svc.list_kitten_summaries().await.unwrap().is_empty());
}
