use crate::{
    data::company::CompanyRepository,
    model::company::{CompanyType, CreateCompanyParams},
};
use entity::sea_orm_active_enums::CompanyType as DbCompanyType;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, company::CompanyFactory},
};

mod find_system;
