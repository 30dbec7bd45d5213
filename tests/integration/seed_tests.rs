//! Integration tests for idempotent startup seeding.

use rs_people::store::db;
use rs_people::store::seed::seed_demo_data;
use sqlx::SqlitePool;

async fn count(pool: &SqlitePool, table: &str) -> i64 {
    let query = format!("SELECT COUNT(*) FROM {table}");
    let row: (i64,) = sqlx::query_as(&query)
        .fetch_one(pool)
        .await
        .expect("count query");
    row.0
}

#[tokio::test]
async fn seed_populates_all_four_collections() {
    let pool = db::connect_memory().await.expect("connect");
    seed_demo_data(&pool).await.expect("seed");

    assert_eq!(count(&pool, "employee").await, 5);
    assert_eq!(count(&pool, "payroll_run").await, 4);
    assert_eq!(count(&pool, "job_posting").await, 4);
    assert_eq!(count(&pool, "time_off_request").await, 4);
}

#[tokio::test]
async fn re_seeding_is_a_no_op() {
    let pool = db::connect_memory().await.expect("connect");
    seed_demo_data(&pool).await.expect("first seed");
    seed_demo_data(&pool).await.expect("second seed");
    seed_demo_data(&pool).await.expect("third seed");

    assert_eq!(count(&pool, "employee").await, 5);
    assert_eq!(count(&pool, "payroll_run").await, 4);
    assert_eq!(count(&pool, "job_posting").await, 4);
    assert_eq!(count(&pool, "time_off_request").await, 4);
}

#[tokio::test]
async fn employee_seed_skips_per_email_not_per_run() {
    // Pre-existing employee with a seed email: that one is skipped while
    // the remaining four are still seeded.
    let pool = db::connect_memory().await.expect("connect");
    sqlx::query(
        "INSERT INTO employee (name, email, department, status, salary, hire_date)
         VALUES ('Alex J', 'alex.johnson@rslimited.com', 'Innovations', 'Active',
                 '1', '2020-05-15T00:00:00.000Z')",
    )
    .execute(&pool)
    .await
    .expect("raw insert");

    seed_demo_data(&pool).await.expect("seed");
    assert_eq!(count(&pool, "employee").await, 5);

    // The pre-existing row was not overwritten.
    let row: (String,) =
        sqlx::query_as("SELECT name FROM employee WHERE email = 'alex.johnson@rslimited.com'")
            .fetch_one(&pool)
            .await
            .expect("fetch");
    assert_eq!(row.0, "Alex J");
}

#[tokio::test]
async fn non_employee_collections_skip_seeding_when_non_empty() {
    let pool = db::connect_memory().await.expect("connect");
    sqlx::query(
        "INSERT INTO payroll_run (id, period, pay_date, employees_paid, total_amount, status)
         VALUES ('pr-existing', 'Jan 2025', '2025-01-15T00:00:00.000Z', 1, '100', 'Completed')",
    )
    .execute(&pool)
    .await
    .expect("raw insert");

    seed_demo_data(&pool).await.expect("seed");
    // One pre-existing run blocks the whole payroll seed batch.
    assert_eq!(count(&pool, "payroll_run").await, 1);
    // Unrelated collections still seed.
    assert_eq!(count(&pool, "job_posting").await, 4);
}
