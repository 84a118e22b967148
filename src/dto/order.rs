use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::order::{BookingItemParams, OrderStatus, PlaceOrderParams};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemDto {
    pub car_id: i32,
    pub car_brand: String,
    pub car_model: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_days: i32,
    pub price: f64,
    /// Whether the customer already rated this car for this order.
    pub rated: bool,
}

/// Order view. `items` is only filled in the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub order_id: i32,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub customer_id: i32,
    pub company_id: Option<i32>,
    pub owner_id: Option<i32>,
    pub items: Vec<OrderItemDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRequestDto {
    pub car_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Booking request. Exactly one of `company_id` and `owner_id` must be set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequestDto {
    pub company_id: Option<i32>,
    pub owner_id: Option<i32>,
    pub items: Vec<OrderItemRequestDto>,
}

impl From<OrderRequestDto> for PlaceOrderParams {
    fn from(dto: OrderRequestDto) -> Self {
        Self {
            company_id: dto.company_id,
            owner_id: dto.owner_id,
            items: dto
                .items
                .into_iter()
                .map(|item| BookingItemParams {
                    car_id: item.car_id,
                    start_date: item.start_date,
                    end_date: item.end_date,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateDto {
    pub status: String,
}
