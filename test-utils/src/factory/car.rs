//! Car factory for creating test car listings.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::CarType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars with customizable fields.
///
/// Cars listed by a company leave `owner_id` unset. Member cars set `owner_id` and
/// belong to the system company.
///
/// # Example
///
/// ```rust,ignore
/// let car = CarFactory::new(&db, company.id)
///     .car_type(CarType::Suv)
///     .seating_capacity(7)
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: i32,
    owner_id: Option<i32>,
    brand: String,
    model_name: String,
    price_per_day: f64,
    location: String,
    car_type: CarType,
    seating_capacity: i32,
    is_active: bool,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - brand: `"Brand {id}"`, model_name: `"Model {id}"`
    /// - price_per_day: `50.0`
    /// - location: `"Springfield"`
    /// - car_type: `CarType::Sedan`, seating_capacity: `5`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `company_id` - Company the car is listed under
    pub fn new(db: &'a DatabaseConnection, company_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            company_id,
            owner_id: None,
            brand: format!("Brand {}", id),
            model_name: format!("Model {}", id),
            price_per_day: 50.0,
            location: "Springfield".to_string(),
            car_type: CarType::Sedan,
            seating_capacity: 5,
            is_active: true,
        }
    }

    /// Marks the car as a member car owned by the given user.
    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn price_per_day(mut self, price_per_day: f64) -> Self {
        self.price_per_day = price_per_day;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn car_type(mut self, car_type: CarType) -> Self {
        self.car_type = car_type;
        self
    }

    pub fn seating_capacity(mut self, seating_capacity: i32) -> Self {
        self.seating_capacity = seating_capacity;
        self
    }

    /// Sets the soft-delete flag.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the car entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            brand: ActiveValue::Set(self.brand),
            model_name: ActiveValue::Set(self.model_name),
            price_per_day: ActiveValue::Set(self.price_per_day),
            availability: ActiveValue::Set(true),
            is_active: ActiveValue::Set(self.is_active),
            image_url: ActiveValue::Set(None),
            company_id: ActiveValue::Set(self.company_id),
            owner_id: ActiveValue::Set(self.owner_id),
            location: ActiveValue::Set(self.location),
            car_type: ActiveValue::Set(self.car_type),
            seating_capacity: ActiveValue::Set(self.seating_capacity),
            description: ActiveValue::Set("Test car description".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active company car with default values.
pub async fn create_car(
    db: &DatabaseConnection,
    company_id: i32,
) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db, company_id).build().await
}
