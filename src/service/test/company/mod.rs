use crate::{error::AppError, service::company::CompanyService};
use test_utils::{builder::TestBuilder, factory};
