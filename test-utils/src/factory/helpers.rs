//! Shared helper utilities for factory methods.
//!
//! Provides ID generation used across all factory modules and shortcuts for creating
//! entities together with the rows they depend on.

use entity::sea_orm_active_enums::{CompanyType, Role};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{car::CarFactory, company::CompanyFactory, user::UserFactory};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a company account user together with an active company profile.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, company))` - Created account and profile
/// - `Err(DbErr)` - Database error during creation
pub async fn create_company_with_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::company::Model), DbErr> {
    let user = UserFactory::new(db).role(Role::Company).build().await?;
    let company = CompanyFactory::new(db, user.id).build().await?;

    Ok((user, company))
}

/// Creates a company account, its profile, and one active car listed by the company.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, company, car))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_company_car(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::company::Model,
        entity::car::Model,
    ),
    DbErr,
> {
    let (user, company) = create_company_with_user(db).await?;
    let car = CarFactory::new(db, company.id).build().await?;

    Ok((user, company, car))
}

/// Creates the system user and the system company that hosts member cars.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, company))` - System admin account and system company
/// - `Err(DbErr)` - Database error during creation
pub async fn create_system_company(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::company::Model), DbErr> {
    let user = UserFactory::new(db).role(Role::Admin).build().await?;
    let company = CompanyFactory::new(db, user.id)
        .company_name("Members Fleet")
        .company_type(CompanyType::System)
        .build()
        .await?;

    Ok((user, company))
}

/// Creates a member user with one active car hosted by the system company.
///
/// The system company is created as well, so call this once per test or build the
/// member car with `CarFactory` against an existing system company.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((member, system_company, car))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member_car(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::company::Model,
        entity::car::Model,
    ),
    DbErr,
> {
    let (_, system) = create_system_company(db).await?;
    let member = UserFactory::new(db).role(Role::Member).build().await?;
    let car = CarFactory::new(db, system.id).owner_id(member.id).build().await?;

    Ok((member, system, car))
}
