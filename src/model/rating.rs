use chrono::{DateTime, Utc};

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub id: i32,
    pub user_id: i32,
    pub car_id: i32,
    pub order_id: i32,
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    pub fn from_entity(entity: entity::rating::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            car_id: entity.car_id,
            order_id: entity.order_id,
            score: entity.score,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRatingParams {
    pub user_id: i32,
    pub car_id: i32,
    pub order_id: i32,
    pub score: i32,
    pub comment: Option<String>,
}

/// Mean score rounded to one decimal, or 0.0 without scores.
pub fn average_score(scores: &[i32]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let mean = scores.iter().map(|s| *s as f64).sum::<f64>() / scores.len() as f64;
    (mean * 10.0).round() / 10.0
}
