//! End-to-end flow tests: the same sequence of operations the CLI
//! commands perform, against a real PostgreSQL instance.

use chrono::NaiveDate;

use lectio_core::plan::{PLAN_DAYS, PlanStats, service};
use lectio_db::queries::{notes, progress};
use lectio_test_utils::{create_test_db, drop_test_db};

#[tokio::test]
async fn first_run_defaults_to_january_first() {
    let (pool, db_name) = create_test_db().await;

    // No start date set: the plan generates from Jan 1 of this year.
    let plan = service::load_plan(&pool).await.unwrap();
    assert_eq!(plan.len(), PLAN_DAYS as usize);
    assert_eq!(plan[0].date.format("%m-%d").to_string(), "01-01");

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn completing_days_moves_the_dashboard_forward() {
    let (pool, db_name) = create_test_db().await;

    service::set_start_date(&pool, "2024-01-01").await.unwrap();

    // Read the first three days.
    for day in 1..=3 {
        progress::mark_day_complete(&pool, day).await.unwrap();
    }

    let plan = service::load_plan(&pool).await.unwrap();
    let completed = progress::completed_count(&pool).await.unwrap() as u32;
    let stats = PlanStats::summarize(&plan, completed, plan[0].date);

    assert_eq!(stats.completed_days, 3);
    assert_eq!(stats.current_day, 4);
    // Day 4 is a four-chapter day starting at Genesis 10.
    assert_eq!(stats.today_passage.as_deref(), Some("Genesis 10"));
    assert_eq!(
        stats.finish_date,
        NaiveDate::from_ymd_opt(2024, 12, 30).unwrap()
    );

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn double_completion_does_not_inflate_progress() {
    let (pool, db_name) = create_test_db().await;

    service::set_start_date(&pool, "2024-01-01").await.unwrap();
    progress::mark_day_complete(&pool, 1).await.unwrap();
    progress::mark_day_complete(&pool, 1).await.unwrap();

    let completed = progress::completed_count(&pool).await.unwrap();
    assert_eq!(completed, 1);

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn notes_attach_to_plan_references() {
    let (pool, db_name) = create_test_db().await;

    service::set_start_date(&pool, "2024-01-01").await.unwrap();
    let plan = service::load_plan(&pool).await.unwrap();

    // Note against the first passage of day 1, as the reader would.
    let reference = &plan[0].passages[0];
    notes::insert_note(&pool, reference, "Creation out of nothing.")
        .await
        .unwrap();

    let all = notes::list_notes(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].reference, "Genesis 1");

    pool.close().await;
    drop_test_db(&db_name).await;
}
