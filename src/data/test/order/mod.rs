use crate::{
    data::{order::OrderRepository, order_item::OrderItemRepository},
    model::order::{BookingParty, CreateOrderItemParams, OrderStatus},
};
use entity::sea_orm_active_enums::OrderStatus as DbOrderStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::order::OrderFactory};

use super::day;

mod create;
mod find_by_customer;
mod transition_status;
