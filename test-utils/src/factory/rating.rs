//! Rating factory for creating test ratings.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a rating without checking order ownership or status.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Author of the rating
/// - `order_id` - Order the rated car was booked in
/// - `car_id` - Rated car
/// - `score` - Score to store
///
/// # Returns
/// - `Ok(entity::rating::Model)` - Created rating
/// - `Err(DbErr)` - Database error during insert
pub async fn create_rating(
    db: &DatabaseConnection,
    user_id: i32,
    order_id: i32,
    car_id: i32,
    score: i32,
) -> Result<entity::rating::Model, DbErr> {
    entity::rating::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        car_id: ActiveValue::Set(car_id),
        order_id: ActiveValue::Set(order_id),
        score: ActiveValue::Set(score),
        comment: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
