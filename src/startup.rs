use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, model::company::Company, service::company::CompanyService};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter when it is set.
///
/// # Arguments
/// - `config` - Application configuration containing the default log filter
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// The backend is picked from the URL scheme, so both `sqlite://` and `postgres://`
/// URLs are accepted.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Makes sure the SYSTEM company hosting member cars exists.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration naming the system company and its account
///
/// # Returns
/// - `Ok(Company)` - Existing or newly created system company
/// - `Err(AppError)` - Database error during lookup or creation
pub async fn bootstrap(db: &DatabaseConnection, config: &Config) -> Result<Company, AppError> {
    CompanyService::new(db)
        .ensure_system_company(&config.system_company_name, &config.system_user_email)
        .await
}
