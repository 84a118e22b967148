use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::order::{CreateOrderItemParams, OrderItem};

pub struct OrderItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a priced line item.
    ///
    /// # Arguments
    /// - `params`: Order, car, inclusive window, day count and price
    ///
    /// # Returns
    /// - `Ok(OrderItem)`: The created item
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateOrderItemParams) -> Result<OrderItem, DbErr> {
        let item = entity::order_item::ActiveModel {
            order_id: ActiveValue::Set(params.order_id),
            car_id: ActiveValue::Set(params.car_id),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            number_of_days: ActiveValue::Set(params.number_of_days),
            price: ActiveValue::Set(params.price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(OrderItem::from_entity(item))
    }

    /// Gets an order's items in insertion order.
    pub async fn find_by_order(&self, order_id: i32) -> Result<Vec<OrderItem>, DbErr> {
        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(order_id))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(items.into_iter().map(OrderItem::from_entity).collect())
    }

    /// Checks whether the car is one of the order's items.
    pub async fn contains_car(&self, order_id: i32, car_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(order_id))
            .filter(entity::order_item::Column::CarId.eq(car_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
