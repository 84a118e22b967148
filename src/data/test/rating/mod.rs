use crate::{data::rating::RatingRepository, model::rating::CreateRatingParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use super::day;

mod create;
