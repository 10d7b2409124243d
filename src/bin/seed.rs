//! Seed the student table with sample data.
//!
//! Uses the same database environment variables as the server.

use anyhow::Context;
use tracing::info;

use student_service::seed::{sample_students, seed_students};
use student_service::{init_tracing, Config, PgStudentStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env().context("Failed to load configuration")?;
    let store = PgStudentStore::connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    store
        .ensure_table()
        .await
        .context("Failed to create student table")?;

    let students = sample_students();
    let inserted = seed_students(&store, &students)
        .await
        .context("Failed to seed students")?;
    info!("Seeded {} of {} sample students", inserted, students.len());

    store.close().await;
    Ok(())
}
