//! Booking domain models and the order status lifecycle.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::UnknownVariant;

/// Order status lifecycle.
///
/// `Placed -> Confirmed -> Completed`, plus `Placed -> Cancelled`. `Completed` and
/// `Cancelled` are terminal. `Active` is a legacy status that no transition reaches; rows
/// still holding it keep blocking their cars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Placed,
    Confirmed,
    Active,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Statuses whose items reserve their cars.
    pub const BLOCKING: [OrderStatus; 3] = [
        OrderStatus::Placed,
        OrderStatus::Confirmed,
        OrderStatus::Active,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "PLACED",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Active => "ACTIVE",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Placed, OrderStatus::Confirmed)
                | (OrderStatus::Placed, OrderStatus::Cancelled)
                | (OrderStatus::Confirmed, OrderStatus::Completed)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PLACED" => Ok(OrderStatus::Placed),
            "CONFIRMED" => Ok(OrderStatus::Confirmed),
            "ACTIVE" => Ok(OrderStatus::Active),
            "COMPLETED" => Ok(OrderStatus::Completed),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            _ => Err(UnknownVariant::new("order status", s)),
        }
    }
}

impl From<entity::sea_orm_active_enums::OrderStatus> for OrderStatus {
    fn from(value: entity::sea_orm_active_enums::OrderStatus) -> Self {
        use entity::sea_orm_active_enums::OrderStatus as Db;
        match value {
            Db::Placed => OrderStatus::Placed,
            Db::Confirmed => OrderStatus::Confirmed,
            Db::Active => OrderStatus::Active,
            Db::Completed => OrderStatus::Completed,
            Db::Cancelled => OrderStatus::Cancelled,
        }
    }
}

impl From<OrderStatus> for entity::sea_orm_active_enums::OrderStatus {
    fn from(value: OrderStatus) -> Self {
        use entity::sea_orm_active_enums::OrderStatus as Db;
        match value {
            OrderStatus::Placed => Db::Placed,
            OrderStatus::Confirmed => Db::Confirmed,
            OrderStatus::Active => Db::Active,
            OrderStatus::Completed => Db::Completed,
            OrderStatus::Cancelled => Db::Cancelled,
        }
    }
}

/// The party whose cars an order books: a company or an individual member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingParty {
    Company(i32),
    Owner(i32),
}

impl BookingParty {
    /// Resolves the party from the two optional request ids.
    ///
    /// # Returns
    /// - `Some(party)` - Exactly one id was supplied
    /// - `None` - Both or neither were supplied
    pub fn from_ids(company_id: Option<i32>, owner_id: Option<i32>) -> Option<Self> {
        match (company_id, owner_id) {
            (Some(id), None) => Some(BookingParty::Company(id)),
            (None, Some(id)) => Some(BookingParty::Owner(id)),
            _ => None,
        }
    }

    pub fn company_id(&self) -> Option<i32> {
        match self {
            BookingParty::Company(id) => Some(*id),
            BookingParty::Owner(_) => None,
        }
    }

    pub fn owner_id(&self) -> Option<i32> {
        match self {
            BookingParty::Company(_) => None,
            BookingParty::Owner(id) => Some(*id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub company_id: Option<i32>,
    pub owner_id: Option<i32>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn from_entity(entity: entity::order::Model) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            company_id: entity.company_id,
            owner_id: entity.owner_id,
            total_amount: entity.total_amount,
            status: entity.status.into(),
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub car_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_days: i32,
    pub price: f64,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            id: entity.id,
            order_id: entity.order_id,
            car_id: entity.car_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            number_of_days: entity.number_of_days,
            price: entity.price,
        }
    }
}

/// One requested car and its inclusive rental window.
#[derive(Debug, Clone)]
pub struct BookingItemParams {
    pub car_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct PlaceOrderParams {
    pub company_id: Option<i32>,
    pub owner_id: Option<i32>,
    pub items: Vec<BookingItemParams>,
}

#[derive(Debug, Clone)]
pub struct CreateOrderItemParams {
    pub order_id: i32,
    pub car_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_days: i32,
    pub price: f64,
}

/// Number of charged days for an inclusive window, never less than one.
pub fn booking_days(start: NaiveDate, end: NaiveDate) -> i32 {
    let days = (end - start).num_days() + 1;
    days.max(1) as i32
}

/// Returns the first rule a booking window violates relative to `today`, if any.
pub fn date_violation(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Option<&'static str> {
    if start > end {
        return Some("Start date must not be after end date");
    }
    if start < today {
        return Some("Start date cannot be in the past");
    }
    None
}
