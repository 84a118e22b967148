use cargorent::{config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    let db = startup::connect_to_database(&config).await?;
    let system_company = startup::bootstrap(&db, &config).await?;

    tracing::info!(
        "Booking core ready, member cars are hosted by company {} ({})",
        system_company.id,
        system_company.company_name
    );

    Ok(())
}
