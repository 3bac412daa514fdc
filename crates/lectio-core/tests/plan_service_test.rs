//! Integration tests for the plan service layer against a real database.

use chrono::NaiveDate;

use lectio_core::plan::service;
use lectio_db::models::PLAN_START_DATE;
use lectio_db::queries::{progress, settings};
use lectio_test_utils::{create_test_db, drop_test_db};

#[tokio::test]
async fn start_date_is_none_until_set() {
    let (pool, db_name) = create_test_db().await;

    let date = service::start_date(&pool).await.unwrap();
    assert!(date.is_none());

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn set_start_date_roundtrips() {
    let (pool, db_name) = create_test_db().await;

    let parsed = service::set_start_date(&pool, "2024-03-15").await.unwrap();
    assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());

    let loaded = service::start_date(&pool).await.unwrap();
    assert_eq!(loaded, Some(parsed));

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn set_start_date_rejects_malformed_input() {
    let (pool, db_name) = create_test_db().await;

    assert!(service::set_start_date(&pool, "15/03/2024").await.is_err());
    assert!(service::set_start_date(&pool, "soon").await.is_err());
    // Nothing should have been persisted.
    assert!(service::start_date(&pool).await.unwrap().is_none());

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn load_plan_uses_persisted_start_date() {
    let (pool, db_name) = create_test_db().await;

    service::set_start_date(&pool, "2024-02-01").await.unwrap();
    let plan = service::load_plan(&pool).await.unwrap();

    assert_eq!(plan.len(), 365);
    assert_eq!(plan[0].date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    assert_eq!(plan[0].label, "Genesis 1-3");

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn load_plan_overlays_completed_days() {
    let (pool, db_name) = create_test_db().await;

    service::set_start_date(&pool, "2024-01-01").await.unwrap();
    progress::mark_day_complete(&pool, 1).await.unwrap();
    progress::mark_day_complete(&pool, 2).await.unwrap();

    let plan = service::load_plan(&pool).await.unwrap();

    assert!(plan[0].completed);
    assert!(plan[1].completed);
    assert!(!plan[2].completed);

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn load_plan_errors_on_corrupt_stored_date() {
    let (pool, db_name) = create_test_db().await;

    // Bypass the service validation to simulate external corruption.
    settings::set_setting(&pool, PLAN_START_DATE, "not-a-date")
        .await
        .unwrap();

    let result = service::load_plan(&pool).await;
    assert!(result.is_err(), "corrupt start date should surface loudly");

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn changing_start_date_regenerates_dates_only() {
    let (pool, db_name) = create_test_db().await;

    service::set_start_date(&pool, "2024-01-01").await.unwrap();
    progress::mark_day_complete(&pool, 5).await.unwrap();
    let before = service::load_plan(&pool).await.unwrap();

    service::set_start_date(&pool, "2024-06-01").await.unwrap();
    let after = service::load_plan(&pool).await.unwrap();

    // Passages and completion survive; dates shift with the start.
    assert_eq!(before[4].passages, after[4].passages);
    assert!(after[4].completed);
    assert_eq!(after[0].date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

    pool.close().await;
    drop_test_db(&db_name).await;
}
