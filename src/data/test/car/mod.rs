use crate::{
    data::car::CarRepository,
    model::car::{CarDetailsParams, CarSearchFilter, CarType, CreateCarParams},
};
use entity::sea_orm_active_enums::{CarType as DbCarType, OrderStatus};
use sea_orm::{DbErr, TransactionTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, car::CarFactory, company::CompanyFactory, order::OrderFactory},
};

use super::day;

mod create;
mod soft_delete;
mod update_details;

fn details() -> CarDetailsParams {
    CarDetailsParams {
        brand: "Skoda".to_string(),
        model_name: "Octavia".to_string(),
        price_per_day: 45.5,
        image_url: Some("https://img.example.com/octavia.png".to_string()),
        location: "Prague".to_string(),
        car_type: CarType::Sedan,
        seating_capacity: 5,
        description: "Estate with a large boot".to_string(),
    }
}
