use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingDto {
    pub id: i32,
    pub car_id: i32,
    pub order_id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingRequestDto {
    pub order_id: i32,
    pub car_id: i32,
    pub score: i32,
    pub comment: Option<String>,
}

impl RatingRequestDto {
    /// Attaches the acting user to the request.
    pub fn into_params(self, user_id: i32) -> crate::model::rating::CreateRatingParams {
        crate::model::rating::CreateRatingParams {
            user_id,
            car_id: self.car_id,
            order_id: self.order_id,
            score: self.score,
            comment: self.comment,
        }
    }
}
