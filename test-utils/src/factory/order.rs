//! Order factory for creating test orders and their line items.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating orders directly in the database.
///
/// Skips every booking rule so tests can arrange any status or date combination,
/// including windows that lie in the past. Item prices use the car's daily rate
/// supplied with each item.
///
/// # Example
///
/// ```rust,ignore
/// let (order, items) = OrderFactory::new(&db, customer.id)
///     .company_id(company.id)
///     .status(OrderStatus::Completed)
///     .item(car.id, start, end, 50.0)
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    company_id: Option<i32>,
    owner_id: Option<i32>,
    status: OrderStatus,
    items: Vec<(i32, NaiveDate, NaiveDate, f64)>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory for the given customer with status `Placed` and no items.
    pub fn new(db: &'a DatabaseConnection, customer_id: i32) -> Self {
        Self {
            db,
            customer_id,
            company_id: None,
            owner_id: None,
            status: OrderStatus::Placed,
            items: Vec::new(),
        }
    }

    pub fn company_id(mut self, company_id: i32) -> Self {
        self.company_id = Some(company_id);
        self
    }

    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Adds a line item booking `car_id` from `start` to `end` inclusive.
    pub fn item(mut self, car_id: i32, start: NaiveDate, end: NaiveDate, price_per_day: f64) -> Self {
        self.items.push((car_id, start, end, price_per_day));
        self
    }

    /// Builds and inserts the order followed by its items.
    ///
    /// # Returns
    /// - `Ok((order, items))` - Created order with the total of all item prices
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(
        self,
    ) -> Result<(entity::order::Model, Vec<entity::order_item::Model>), DbErr> {
        let total: f64 = self
            .items
            .iter()
            .map(|(_, start, end, rate)| rate * days_between(*start, *end) as f64)
            .sum();

        let order = entity::order::ActiveModel {
            customer_id: ActiveValue::Set(self.customer_id),
            company_id: ActiveValue::Set(self.company_id),
            owner_id: ActiveValue::Set(self.owner_id),
            total_amount: ActiveValue::Set(total),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut items = Vec::with_capacity(self.items.len());
        for (car_id, start, end, rate) in self.items {
            let days = days_between(start, end);
            let item = entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                car_id: ActiveValue::Set(car_id),
                start_date: ActiveValue::Set(start),
                end_date: ActiveValue::Set(end),
                number_of_days: ActiveValue::Set(days),
                price: ActiveValue::Set(rate * days as f64),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            items.push(item);
        }

        Ok((order, items))
    }
}

fn days_between(start: NaiveDate, end: NaiveDate) -> i32 {
    ((end - start).num_days() + 1).max(1) as i32
}

/// Creates a placed company order booking one car for the given window.
pub async fn create_order(
    db: &DatabaseConnection,
    customer_id: i32,
    company_id: i32,
    car_id: i32,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(entity::order::Model, Vec<entity::order_item::Model>), DbErr> {
    OrderFactory::new(db, customer_id)
        .company_id(company_id)
        .item(car_id, start, end, 50.0)
        .build()
        .await
}
