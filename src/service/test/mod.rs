mod company;
mod order;
mod rating;
mod user;

use chrono::{Duration, NaiveDate, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Date `offset` days from today, matching the clock the services validate against.
pub fn days_from_today(offset: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(offset)
}

/// Opens an in-memory database with the schema built by the migrations.
///
/// Unlike `TestBuilder`, this carries the composite indexes that only the migrations declare.
pub async fn migrated_database() -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await?;
    Migrator::up(&db, None).await?;

    Ok(db)
}
