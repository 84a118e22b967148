//! SeaORM entity models for the rental marketplace schema.

pub mod prelude;

pub mod car;
pub mod company;
pub mod order;
pub mod order_item;
pub mod rating;
pub mod sea_orm_active_enums;
pub mod user;
