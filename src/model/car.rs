//! Car listing domain models and search parameters.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    company::{Company, CompanyType},
    UnknownVariant,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CarType {
    Sedan,
    Suv,
    Hatchback,
    Luxury,
}

impl CarType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarType::Sedan => "SEDAN",
            CarType::Suv => "SUV",
            CarType::Hatchback => "HATCHBACK",
            CarType::Luxury => "LUXURY",
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SEDAN" => Ok(CarType::Sedan),
            "SUV" => Ok(CarType::Suv),
            "HATCHBACK" => Ok(CarType::Hatchback),
            "LUXURY" => Ok(CarType::Luxury),
            _ => Err(UnknownVariant::new("car type", s)),
        }
    }
}

impl From<entity::sea_orm_active_enums::CarType> for CarType {
    fn from(value: entity::sea_orm_active_enums::CarType) -> Self {
        use entity::sea_orm_active_enums::CarType as Db;
        match value {
            Db::Sedan => CarType::Sedan,
            Db::Suv => CarType::Suv,
            Db::Hatchback => CarType::Hatchback,
            Db::Luxury => CarType::Luxury,
        }
    }
}

impl From<CarType> for entity::sea_orm_active_enums::CarType {
    fn from(value: CarType) -> Self {
        use entity::sea_orm_active_enums::CarType as Db;
        match value {
            CarType::Sedan => Db::Sedan,
            CarType::Suv => Db::Suv,
            CarType::Hatchback => Db::Hatchback,
            CarType::Luxury => Db::Luxury,
        }
    }
}

/// A car listing.
///
/// Company cars have no `owner_id`. Member cars carry the owning user and are hosted by
/// the SYSTEM company.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: i32,
    pub brand: String,
    pub model_name: String,
    pub price_per_day: f64,
    /// Legacy flag kept for display. Bookings are excluded by status, not by this flag.
    pub availability: bool,
    /// Soft-delete flag.
    pub is_active: bool,
    pub image_url: Option<String>,
    pub company_id: i32,
    pub owner_id: Option<i32>,
    pub location: String,
    pub car_type: CarType,
    pub seating_capacity: i32,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Car {
    pub fn from_entity(entity: entity::car::Model) -> Self {
        Self {
            id: entity.id,
            brand: entity.brand,
            model_name: entity.model_name,
            price_per_day: entity.price_per_day,
            availability: entity.availability,
            is_active: entity.is_active,
            image_url: entity.image_url,
            company_id: entity.company_id,
            owner_id: entity.owner_id,
            location: entity.location,
            car_type: entity.car_type.into(),
            seating_capacity: entity.seating_capacity,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    /// Whether the car is listed by an individual member rather than a company.
    pub fn is_member_car(&self) -> bool {
        self.owner_id.is_some()
    }
}

/// Editable listing fields shared by create and update.
#[derive(Debug, Clone)]
pub struct CarDetailsParams {
    pub brand: String,
    pub model_name: String,
    pub price_per_day: f64,
    pub image_url: Option<String>,
    pub location: String,
    pub car_type: CarType,
    pub seating_capacity: i32,
    pub description: String,
}

impl CarDetailsParams {
    /// Returns the first listing rule the fields violate, if any.
    pub fn violation(&self) -> Option<&'static str> {
        if self.brand.trim().is_empty() {
            return Some("Brand is required");
        }
        if self.model_name.trim().is_empty() {
            return Some("Model is required");
        }
        if self.location.trim().is_empty() {
            return Some("Location is required");
        }
        if self.description.trim().is_empty() {
            return Some("Description is required");
        }
        if !self.price_per_day.is_finite() || self.price_per_day < 0.0 {
            return Some("Price per day must not be negative");
        }
        if self.seating_capacity < 1 {
            return Some("Seating capacity must be at least 1");
        }
        None
    }
}

#[derive(Debug, Clone)]
pub struct CreateCarParams {
    pub company_id: i32,
    pub owner_id: Option<i32>,
    pub details: CarDetailsParams,
}

/// Checks the listing ownership rule for a new car.
///
/// NORMAL companies list cars without an owner. The SYSTEM company only hosts cars that
/// carry an owning member.
pub fn is_valid_ownership(company: &Company, owner_id: Option<i32>) -> bool {
    match company.company_type {
        CompanyType::Normal => owner_id.is_none(),
        CompanyType::System => owner_id.is_some(),
    }
}

/// Optional filters for the public car search.
///
/// The date window only applies when both ends are given.
#[derive(Debug, Clone, Default)]
pub struct CarSearchFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub car_type: Option<CarType>,
    pub min_seats: Option<i32>,
}

impl CarSearchFilter {
    /// The inclusive booking window to exclude, when both dates are present.
    pub fn window(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}
