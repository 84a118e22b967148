use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, JoinType, QueryFilter, QueryOrder, QuerySelect, QueryTrait, RelationTrait,
};

use crate::{
    data::availability::reserved_car_ids,
    model::car::{Car, CarDetailsParams, CarSearchFilter, CreateCarParams},
};

pub struct CarRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CarRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an active car listing.
    ///
    /// # Arguments
    /// - `params`: Hosting company, optional member owner and listing fields
    ///
    /// # Returns
    /// - `Ok(Car)`: The created car with `availability` and `is_active` set
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateCarParams) -> Result<Car, DbErr> {
        let details = params.details;
        let car = entity::car::ActiveModel {
            brand: ActiveValue::Set(details.brand),
            model_name: ActiveValue::Set(details.model_name),
            price_per_day: ActiveValue::Set(details.price_per_day),
            availability: ActiveValue::Set(true),
            is_active: ActiveValue::Set(true),
            image_url: ActiveValue::Set(details.image_url),
            company_id: ActiveValue::Set(params.company_id),
            owner_id: ActiveValue::Set(params.owner_id),
            location: ActiveValue::Set(details.location),
            car_type: ActiveValue::Set(details.car_type.into()),
            seating_capacity: ActiveValue::Set(details.seating_capacity),
            description: ActiveValue::Set(details.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Car::from_entity(car))
    }

    /// Gets a car by id, including soft-deleted cars.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Car>, DbErr> {
        let car = entity::prelude::Car::find_by_id(id).one(self.db).await?;

        Ok(car.map(Car::from_entity))
    }

    /// Gets a car and holds an exclusive row lock on it until the transaction ends.
    ///
    /// Emits `SELECT ... FOR UPDATE` on PostgreSQL. SQLite has no row locks and relies on
    /// the transaction's database-level write lock instead.
    ///
    /// # Arguments
    /// - `id`: Car to lock
    ///
    /// # Returns
    /// - `Ok(Some(Car))`: The locked car
    /// - `Ok(None)`: No car with that id
    /// - `Err(DbErr)`: Database error or lock wait timeout
    pub async fn lock_for_update(&self, id: i32) -> Result<Option<Car>, DbErr> {
        tracing::debug!("Locking car {} for update", id);

        let car = entity::prelude::Car::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await?;

        Ok(car.map(Car::from_entity))
    }

    /// Replaces the editable listing fields of a car.
    ///
    /// # Returns
    /// - `Ok(Some(Car))`: The updated car
    /// - `Ok(None)`: No car with that id
    /// - `Err(DbErr)`: Database error
    pub async fn update_details(
        &self,
        id: i32,
        details: CarDetailsParams,
    ) -> Result<Option<Car>, DbErr> {
        let Some(car) = entity::prelude::Car::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = car.into_active_model();
        active.brand = ActiveValue::Set(details.brand);
        active.model_name = ActiveValue::Set(details.model_name);
        active.price_per_day = ActiveValue::Set(details.price_per_day);
        active.image_url = ActiveValue::Set(details.image_url);
        active.location = ActiveValue::Set(details.location);
        active.car_type = ActiveValue::Set(details.car_type.into());
        active.seating_capacity = ActiveValue::Set(details.seating_capacity);
        active.description = ActiveValue::Set(details.description);

        let updated = active.update(self.db).await?;

        Ok(Some(Car::from_entity(updated)))
    }

    /// Marks a car inactive. Rows are never removed so bookings and ratings keep their car.
    ///
    /// # Returns
    /// - `Ok(true)`: The car existed and is now inactive
    /// - `Ok(false)`: No car with that id
    /// - `Err(DbErr)`: Database error
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Car::update_many()
            .col_expr(entity::car::Column::IsActive, Expr::value(false))
            .filter(entity::car::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the active cars listed by a company, oldest first.
    pub async fn find_active_by_company(&self, company_id: i32) -> Result<Vec<Car>, DbErr> {
        let cars = entity::prelude::Car::find()
            .filter(entity::car::Column::CompanyId.eq(company_id))
            .filter(entity::car::Column::IsActive.eq(true))
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await?;

        Ok(cars.into_iter().map(Car::from_entity).collect())
    }

    /// Gets the active cars owned by a member, oldest first.
    pub async fn find_active_by_owner(&self, owner_id: i32) -> Result<Vec<Car>, DbErr> {
        let cars = entity::prelude::Car::find()
            .filter(entity::car::Column::OwnerId.eq(owner_id))
            .filter(entity::car::Column::IsActive.eq(true))
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await?;

        Ok(cars.into_iter().map(Car::from_entity).collect())
    }

    /// Searches publicly listed cars.
    ///
    /// A car is public when it is active and either its company is active or it is a member
    /// car. With a date window, cars reserved by a PLACED, CONFIRMED or ACTIVE order on any
    /// day of the window are excluded. Location matches case-insensitively as a substring.
    ///
    /// Takes no locks, so a car returned here may be booked before the caller places an
    /// order for it.
    ///
    /// # Arguments
    /// - `filter`: Optional window, location, car type and minimum seat count
    ///
    /// # Returns
    /// - `Ok(Vec<Car>)`: Matching cars ordered by id
    /// - `Err(DbErr)`: Database error
    pub async fn search(&self, filter: &CarSearchFilter) -> Result<Vec<Car>, DbErr> {
        let mut query = entity::prelude::Car::find()
            .join(JoinType::InnerJoin, entity::car::Relation::Company.def())
            .filter(entity::car::Column::IsActive.eq(true))
            .filter(
                Condition::any()
                    .add(entity::company::Column::IsActive.eq(true))
                    .add(entity::car::Column::OwnerId.is_not_null()),
            );

        if let Some((start, end)) = filter.window() {
            query = query.filter(
                entity::car::Column::Id.not_in_subquery(reserved_car_ids(start, end).into_query()),
            );
        }

        if let Some(location) = &filter.location {
            let location_col = Expr::col((entity::car::Entity, entity::car::Column::Location));
            query = query.filter(sea_orm::sea_query::ExprTrait::like(
                Expr::expr(Func::lower(location_col)),
                format!("%{}%", location.to_lowercase()),
            ));
        }

        if let Some(car_type) = filter.car_type {
            query = query.filter(
                entity::car::Column::CarType
                    .eq(entity::sea_orm_active_enums::CarType::from(car_type)),
            );
        }

        if let Some(min_seats) = filter.min_seats {
            query = query.filter(entity::car::Column::SeatingCapacity.gte(min_seats));
        }

        let cars = query
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await?;

        Ok(cars.into_iter().map(Car::from_entity).collect())
    }

    /// Gets cars by id, keyed by id. Soft-deleted cars are included.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, Car>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let cars = entity::prelude::Car::find()
            .filter(entity::car::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(cars
            .into_iter()
            .map(|c| (c.id, Car::from_entity(c)))
            .collect())
    }
}
