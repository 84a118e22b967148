use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::company::{Company, CompanyType, CreateCompanyParams};

pub struct CompanyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompanyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a company profile.
    ///
    /// # Arguments
    /// - `params`: Profile fields including the owning user and company type
    ///
    /// # Returns
    /// - `Ok(Company)`: The created company
    /// - `Err(DbErr)`: Database error, including a second profile for the same user
    pub async fn create(&self, params: CreateCompanyParams) -> Result<Company, DbErr> {
        let company = entity::company::ActiveModel {
            company_name: ActiveValue::Set(params.company_name),
            address: ActiveValue::Set(params.address),
            is_active: ActiveValue::Set(params.is_active),
            user_id: ActiveValue::Set(params.user_id),
            company_type: ActiveValue::Set(params.company_type.into()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Company::from_entity(company))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Company>, DbErr> {
        let company = entity::prelude::Company::find_by_id(id).one(self.db).await?;

        Ok(company.map(Company::from_entity))
    }

    /// Finds the profile owned by a company account.
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Company>, DbErr> {
        let company = entity::prelude::Company::find()
            .filter(entity::company::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(company.map(Company::from_entity))
    }

    /// Finds the SYSTEM company hosting member cars.
    ///
    /// # Returns
    /// - `Ok(Some(Company))`: The oldest SYSTEM company
    /// - `Ok(None)`: The bootstrap has not run yet
    /// - `Err(DbErr)`: Database error
    pub async fn find_system(&self) -> Result<Option<Company>, DbErr> {
        let company = entity::prelude::Company::find()
            .filter(
                entity::company::Column::CompanyType
                    .eq(entity::sea_orm_active_enums::CompanyType::from(CompanyType::System)),
            )
            .order_by_asc(entity::company::Column::Id)
            .one(self.db)
            .await?;

        Ok(company.map(Company::from_entity))
    }

    /// Gets companies by id, keyed by id.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, Company>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let companies = entity::prelude::Company::find()
            .filter(entity::company::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(companies
            .into_iter()
            .map(|c| (c.id, Company::from_entity(c)))
            .collect())
    }
}
