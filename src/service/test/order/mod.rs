use crate::{
    error::AppError,
    model::order::{BookingItemParams, OrderStatus, PlaceOrderParams},
    service::order::OrderService,
};
use entity::sea_orm_active_enums::{OrderStatus as DbOrderStatus, Role as DbRole};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, car::CarFactory, company::CompanyFactory, order::OrderFactory, user::UserFactory},
};

use super::days_from_today;

mod get_orders;

fn item(car_id: i32, start: i64, end: i64) -> BookingItemParams {
    BookingItemParams {
        car_id,
        start_date: days_from_today(start),
        end_date: days_from_today(end),
    }
}

fn company_order(company_id: i32, items: Vec<BookingItemParams>) -> PlaceOrderParams {
    PlaceOrderParams {
        company_id: Some(company_id),
        owner_id: None,
        items,
    }
}
