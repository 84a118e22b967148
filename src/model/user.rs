//! User domain models.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::UnknownVariant;

/// Closed set of account roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Customer,
    Company,
    Member,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "CUSTOMER",
            Role::Company => "COMPANY",
            Role::Member => "MEMBER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CUSTOMER" => Ok(Role::Customer),
            "COMPANY" => Ok(Role::Company),
            "MEMBER" => Ok(Role::Member),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(UnknownVariant::new("role", s)),
        }
    }
}

impl From<entity::sea_orm_active_enums::Role> for Role {
    fn from(role: entity::sea_orm_active_enums::Role) -> Self {
        use entity::sea_orm_active_enums::Role as Db;
        match role {
            Db::Customer => Role::Customer,
            Db::Company => Role::Company,
            Db::Member => Role::Member,
            Db::Admin => Role::Admin,
        }
    }
}

impl From<Role> for entity::sea_orm_active_enums::Role {
    fn from(role: Role) -> Self {
        use entity::sea_orm_active_enums::Role as Db;
        match role {
            Role::Customer => Db::Customer,
            Role::Company => Db::Company,
            Role::Member => Db::Member,
            Role::Admin => Db::Admin,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role.into(),
            created_at: entity.created_at,
        }
    }
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub role: Role,
}
