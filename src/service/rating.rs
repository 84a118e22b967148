use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        car::CarRepository, order::OrderRepository, order_item::OrderItemRepository,
        rating::RatingRepository, user::UserRepository,
    },
    dto::rating::RatingDto,
    error::AppError,
    model::{
        order::OrderStatus,
        rating::{CreateRatingParams, Rating, MAX_SCORE, MIN_SCORE},
    },
};

pub const DUPLICATE_RATING: &str = "This car has already been rated for this order";

pub struct RatingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rates a car the user rented in a completed order.
    ///
    /// Every check and the insert share one transaction. The unique (order, car) index
    /// rejects a racing duplicate that slips past the existence check.
    ///
    /// # Arguments
    /// - `params`: Rating author, order, car, score and optional comment
    ///
    /// # Returns
    /// - `Ok(RatingDto)`: The stored rating
    /// - `Err(AppError::NotFound)`: User, order or car missing
    /// - `Err(AppError::BadRequest)`: Score out of range, foreign or unfinished order, car
    ///   not in the order, or the pair was already rated
    pub async fn add_rating(&self, params: CreateRatingParams) -> Result<RatingDto, AppError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&params.score) {
            return Err(AppError::BadRequest(format!(
                "Score must be between {} and {}",
                MIN_SCORE, MAX_SCORE
            )));
        }

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .find_by_id(params.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let order = OrderRepository::new(&txn)
            .find_by_id(params.order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        if order.customer_id != user.id {
            return Err(AppError::BadRequest(
                "You can only rate your own orders".to_string(),
            ));
        }

        if order.status != OrderStatus::Completed {
            return Err(AppError::BadRequest(
                "You can only rate completed orders".to_string(),
            ));
        }

        if CarRepository::new(&txn)
            .find_by_id(params.car_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Car not found".to_string()));
        }

        if !OrderItemRepository::new(&txn)
            .contains_car(order.id, params.car_id)
            .await?
        {
            return Err(AppError::BadRequest(
                "Car is not part of this order".to_string(),
            ));
        }

        let ratings = RatingRepository::new(&txn);
        if ratings.exists_for(order.id, params.car_id).await? {
            return Err(AppError::BadRequest(DUPLICATE_RATING.to_string()));
        }

        let rating = ratings
            .create(CreateRatingParams {
                comment: params
                    .comment
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty()),
                ..params
            })
            .await
            .map_err(|err| AppError::on_unique_violation(err, DUPLICATE_RATING))?;

        txn.commit().await?;

        tracing::info!(
            "User {} rated car {} with {} for order {}",
            user.id,
            rating.car_id,
            rating.score,
            rating.order_id
        );

        Ok(rating_view(rating, user.name))
    }

    /// Gets a car's ratings, newest first.
    pub async fn get_ratings_by_car(&self, car_id: i32) -> Result<Vec<RatingDto>, AppError> {
        if CarRepository::new(self.db)
            .find_by_id(car_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Car not found".to_string()));
        }

        let ratings = RatingRepository::new(self.db).find_by_car(car_id).await?;
        let user_ids: Vec<i32> = ratings.iter().map(|r| r.user_id).collect();
        let names = UserRepository::new(self.db).find_names(&user_ids).await?;

        Ok(ratings
            .into_iter()
            .map(|rating| {
                let user_name = names.get(&rating.user_id).cloned().unwrap_or_default();
                rating_view(rating, user_name)
            })
            .collect())
    }
}

fn rating_view(rating: Rating, user_name: String) -> RatingDto {
    RatingDto {
        id: rating.id,
        car_id: rating.car_id,
        order_id: rating.order_id,
        user_id: rating.user_id,
        user_name,
        score: rating.score,
        comment: rating.comment,
        created_at: rating.created_at,
    }
}
