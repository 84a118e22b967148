//! Booking overlap queries.
//!
//! A car is reserved for `[start, end]` when one of its order items satisfies
//! `item.start <= end AND item.end >= start` and the item's order is in a blocking status.
//! Both endpoints count as booked days.

use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QuerySelect, RelationTrait, Select,
};

use crate::model::order::OrderStatus;

pub struct AvailabilityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvailabilityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether the car is already reserved for any day of the window.
    ///
    /// Must run after the car's row lock is taken and on the same transaction that inserts
    /// the new item, otherwise two bookings can both observe a free car.
    ///
    /// # Arguments
    /// - `car_id`: Car to check
    /// - `start`: First day of the window
    /// - `end`: Last day of the window, inclusive
    ///
    /// # Returns
    /// - `Ok(true)`: An item of a PLACED, CONFIRMED or ACTIVE order overlaps the window
    /// - `Ok(false)`: The car is free for the whole window
    /// - `Err(DbErr)`: Database error
    pub async fn has_overlap(
        &self,
        car_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<bool, DbErr> {
        let count = overlapping_items(start, end)
            .filter(entity::order_item::Column::CarId.eq(car_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

/// Order items of blocking orders whose window intersects `[start, end]`.
pub(crate) fn overlapping_items(
    start: NaiveDate,
    end: NaiveDate,
) -> Select<entity::order_item::Entity> {
    let blocking = OrderStatus::BLOCKING
        .into_iter()
        .map(entity::sea_orm_active_enums::OrderStatus::from);

    entity::prelude::OrderItem::find()
        .join(JoinType::InnerJoin, entity::order_item::Relation::Order.def())
        .filter(entity::order::Column::Status.is_in(blocking))
        .filter(entity::order_item::Column::StartDate.lte(end))
        .filter(entity::order_item::Column::EndDate.gte(start))
}

/// Sub-select of car ids reserved somewhere inside `[start, end]`.
pub(crate) fn reserved_car_ids(start: NaiveDate, end: NaiveDate) -> Select<entity::order_item::Entity> {
    overlapping_items(start, end)
        .select_only()
        .column(entity::order_item::Column::CarId)
}
