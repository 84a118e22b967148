use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::rating::{CreateRatingParams, Rating};

pub struct RatingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RatingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a rating.
    ///
    /// # Returns
    /// - `Ok(Rating)`: The created rating
    /// - `Err(DbErr)`: Database error, including a unique violation on (order, car)
    pub async fn create(&self, params: CreateRatingParams) -> Result<Rating, DbErr> {
        let rating = entity::rating::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            car_id: ActiveValue::Set(params.car_id),
            order_id: ActiveValue::Set(params.order_id),
            score: ActiveValue::Set(params.score),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Rating::from_entity(rating))
    }

    /// Checks whether the car was already rated for the order.
    pub async fn exists_for(&self, order_id: i32, car_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Rating::find()
            .filter(entity::rating::Column::OrderId.eq(order_id))
            .filter(entity::rating::Column::CarId.eq(car_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a car's ratings, newest first.
    pub async fn find_by_car(&self, car_id: i32) -> Result<Vec<Rating>, DbErr> {
        let ratings = entity::prelude::Rating::find()
            .filter(entity::rating::Column::CarId.eq(car_id))
            .order_by_desc(entity::rating::Column::CreatedAt)
            .order_by_desc(entity::rating::Column::Id)
            .all(self.db)
            .await?;

        Ok(ratings.into_iter().map(Rating::from_entity).collect())
    }

    /// Gets the ids of cars already rated for an order.
    pub async fn rated_car_ids(&self, order_id: i32) -> Result<HashSet<i32>, DbErr> {
        let car_ids: Vec<i32> = entity::prelude::Rating::find()
            .select_only()
            .column(entity::rating::Column::CarId)
            .filter(entity::rating::Column::OrderId.eq(order_id))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(car_ids.into_iter().collect())
    }

    /// Gets every score given to each of the cars.
    ///
    /// # Arguments
    /// - `car_ids`: Cars to collect scores for
    ///
    /// # Returns
    /// - `Ok(HashMap)`: Map of car id to its scores, unrated cars are absent
    /// - `Err(DbErr)`: Database error
    pub async fn scores_by_car(&self, car_ids: &[i32]) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if car_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i32)> = entity::prelude::Rating::find()
            .select_only()
            .column(entity::rating::Column::CarId)
            .column(entity::rating::Column::Score)
            .filter(entity::rating::Column::CarId.is_in(car_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut scores: HashMap<i32, Vec<i32>> = HashMap::new();
        for (car_id, score) in rows {
            scores.entry(car_id).or_default().push(score);
        }

        Ok(scores)
    }
}
