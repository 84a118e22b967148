use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, Role},
    service::{
        company::CompanyService,
        user::{UserService, DUPLICATE_EMAIL},
    },
};
use test_utils::builder::TestBuilder;

use super::migrated_database;


fn params(name: &str, email: &str, role: Role) -> CreateUserParams {
    CreateUserParams {
        name: name.to_string(),
        email: email.to_string(),
        role,
    }
}
