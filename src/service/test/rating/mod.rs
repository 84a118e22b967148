use crate::{
    data::rating::RatingRepository,
    error::AppError,
    model::rating::CreateRatingParams,
    service::rating::{RatingService, DUPLICATE_RATING},
};
use entity::sea_orm_active_enums::OrderStatus as DbOrderStatus;
use test_utils::{builder::TestBuilder, factory, factory::order::OrderFactory};

use super::{days_from_today, migrated_database};

mod get_ratings_by_car;

fn rating(user_id: i32, order_id: i32, car_id: i32, score: i32) -> CreateRatingParams {
    CreateRatingParams {
        user_id,
        car_id,
        order_id,
        score,
        comment: None,
    }
}

/// Creates a company car and a COMPLETED order of it for a new customer.
async fn completed_booking(
    db: &sea_orm::DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::order::Model,
        entity::car::Model,
    ),
    sea_orm::DbErr,
> {
    let (_, company, car) = factory::helpers::create_company_car(db).await?;
    let customer = factory::create_customer(db).await?;
    let (order, _) = OrderFactory::new(db, customer.id)
        .company_id(company.id)
        .status(DbOrderStatus::Completed)
        .item(car.id, days_from_today(-6), days_from_today(-4), 50.0)
        .build()
        .await?;

    Ok((customer, order, car))
}
