//! Company domain models.
//!
//! Every company belongs to exactly one user. A single SYSTEM company pools the cars
//! listed by individual members, all other companies are NORMAL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder address for profiles created during registration.
pub const ADDRESS_NOT_PROVIDED: &str = "Location not provided";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompanyType {
    Normal,
    System,
}

impl From<entity::sea_orm_active_enums::CompanyType> for CompanyType {
    fn from(value: entity::sea_orm_active_enums::CompanyType) -> Self {
        match value {
            entity::sea_orm_active_enums::CompanyType::Normal => CompanyType::Normal,
            entity::sea_orm_active_enums::CompanyType::System => CompanyType::System,
        }
    }
}

impl From<CompanyType> for entity::sea_orm_active_enums::CompanyType {
    fn from(value: CompanyType) -> Self {
        match value {
            CompanyType::Normal => entity::sea_orm_active_enums::CompanyType::Normal,
            CompanyType::System => entity::sea_orm_active_enums::CompanyType::System,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: i32,
    pub company_name: String,
    pub address: String,
    /// Approval gate. Cars of inactive companies are hidden from public listings.
    pub is_active: bool,
    pub user_id: i32,
    pub company_type: CompanyType,
    pub created_at: DateTime<Utc>,
}

impl Company {
    pub fn from_entity(entity: entity::company::Model) -> Self {
        Self {
            id: entity.id,
            company_name: entity.company_name,
            address: entity.address,
            is_active: entity.is_active,
            user_id: entity.user_id,
            company_type: entity.company_type.into(),
            created_at: entity.created_at,
        }
    }

    pub fn is_system(&self) -> bool {
        self.company_type == CompanyType::System
    }
}

#[derive(Debug, Clone)]
pub struct CreateCompanyParams {
    pub company_name: String,
    pub address: String,
    pub is_active: bool,
    pub user_id: i32,
    pub company_type: CompanyType,
}
