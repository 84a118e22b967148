//! Company factory for creating test company profiles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::CompanyType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test company profiles.
///
/// # Example
///
/// ```rust,ignore
/// let company = CompanyFactory::new(&db, user.id)
///     .is_active(false)
///     .build()
///     .await?;
/// ```
pub struct CompanyFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    company_name: String,
    address: String,
    is_active: bool,
    company_type: CompanyType,
}

impl<'a> CompanyFactory<'a> {
    /// Creates a new CompanyFactory with default values.
    ///
    /// Defaults:
    /// - company_name: `"Company {id}"`
    /// - address: `"{id} Main Street"`
    /// - is_active: `true`
    /// - company_type: `CompanyType::Normal`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Account that owns the profile
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            company_name: format!("Company {}", id),
            address: format!("{} Main Street", id),
            is_active: true,
            company_type: CompanyType::Normal,
        }
    }

    pub fn company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = company_name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn company_type(mut self, company_type: CompanyType) -> Self {
        self.company_type = company_type;
        self
    }

    /// Builds and inserts the company entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::company::Model)` - Created company entity
    /// - `Err(DbErr)` - Database error during insert, including a second profile for the
    ///   same user
    pub async fn build(self) -> Result<entity::company::Model, DbErr> {
        entity::company::ActiveModel {
            company_name: ActiveValue::Set(self.company_name),
            address: ActiveValue::Set(self.address),
            is_active: ActiveValue::Set(self.is_active),
            user_id: ActiveValue::Set(self.user_id),
            company_type: ActiveValue::Set(self.company_type),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active normal company for the given user.
pub async fn create_company(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::company::Model, DbErr> {
    CompanyFactory::new(db, user_id).build().await
}
