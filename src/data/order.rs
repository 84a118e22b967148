use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, IntoCondition},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::order::{BookingParty, Order, OrderStatus};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an empty PLACED order with a zero total.
    ///
    /// Items are inserted afterwards against the returned id and the total is written once
    /// every item is priced.
    ///
    /// # Arguments
    /// - `customer_id`: Booking customer
    /// - `party`: Company or member whose cars are booked
    ///
    /// # Returns
    /// - `Ok(Order)`: The created order
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, customer_id: i32, party: BookingParty) -> Result<Order, DbErr> {
        let order = entity::order::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            company_id: ActiveValue::Set(party.company_id()),
            owner_id: ActiveValue::Set(party.owner_id()),
            total_amount: ActiveValue::Set(0.0),
            status: ActiveValue::Set(OrderStatus::Placed.into()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Order::from_entity(order))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let order = entity::prelude::Order::find_by_id(id).one(self.db).await?;

        Ok(order.map(Order::from_entity))
    }

    /// Writes the order total.
    pub async fn set_total(&self, id: i32, total_amount: f64) -> Result<(), DbErr> {
        entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::TotalAmount, Expr::value(total_amount))
            .filter(entity::order::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Moves an order from one status to another in a single guarded update.
    ///
    /// The update only matches while the order still holds `from`, so two racing
    /// transitions cannot both apply.
    ///
    /// # Arguments
    /// - `id`: Order to update
    /// - `from`: Status the order is expected to hold
    /// - `to`: New status
    ///
    /// # Returns
    /// - `Ok(true)`: The status changed
    /// - `Ok(false)`: The order is missing or no longer holds `from`
    /// - `Err(DbErr)`: Database error
    pub async fn transition_status(
        &self,
        id: i32,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(
                entity::order::Column::Status,
                Expr::value(entity::sea_orm_active_enums::OrderStatus::from(to)),
            )
            .filter(entity::order::Column::Id.eq(id))
            .filter(
                entity::order::Column::Status
                    .eq(entity::sea_orm_active_enums::OrderStatus::from(from)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gets a customer's orders, newest first.
    pub async fn find_by_customer(&self, customer_id: i32) -> Result<Vec<Order>, DbErr> {
        self.find_newest_first(entity::order::Column::CustomerId.eq(customer_id))
            .await
    }

    /// Gets the orders booking a company's cars, newest first.
    pub async fn find_by_company(&self, company_id: i32) -> Result<Vec<Order>, DbErr> {
        self.find_newest_first(entity::order::Column::CompanyId.eq(company_id))
            .await
    }

    /// Gets the orders booking a member's cars, newest first.
    pub async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Order>, DbErr> {
        self.find_newest_first(entity::order::Column::OwnerId.eq(owner_id))
            .await
    }

    async fn find_newest_first<F: IntoCondition>(&self, condition: F) -> Result<Vec<Order>, DbErr> {
        let orders = entity::prelude::Order::find()
            .filter(condition)
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        Ok(orders.into_iter().map(Order::from_entity).collect())
    }
}
