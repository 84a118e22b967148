use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::{
        car::{CarDetailsParams, CarSearchFilter, CarType},
        company::CompanyType,
    },
};

/// Public view of a car listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarDto {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub price_per_day: f64,
    pub availability: bool,
    pub is_active: bool,
    pub image_url: Option<String>,
    pub company_id: i32,
    pub company_name: String,
    pub company_type: CompanyType,
    pub owner_id: Option<i32>,
    pub owner_name: Option<String>,
    pub location: String,
    pub car_type: CarType,
    pub seating_capacity: i32,
    pub description: String,
    /// Mean rating rounded to one decimal, 0.0 when unrated.
    pub average_rating: f64,
}

/// Listing fields submitted when creating or updating a car.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarRequestDto {
    pub brand: String,
    pub model: String,
    pub price_per_day: f64,
    pub image_url: Option<String>,
    pub location: String,
    pub car_type: String,
    pub seating_capacity: i32,
    pub description: String,
}

impl TryFrom<CarRequestDto> for CarDetailsParams {
    type Error = AppError;

    fn try_from(dto: CarRequestDto) -> Result<Self, Self::Error> {
        let params = CarDetailsParams {
            car_type: dto.car_type.parse::<CarType>()?,
            brand: dto.brand,
            model_name: dto.model,
            price_per_day: dto.price_per_day,
            image_url: dto.image_url.filter(|url| !url.trim().is_empty()),
            location: dto.location,
            seating_capacity: dto.seating_capacity,
            description: dto.description,
        };

        match params.violation() {
            Some(message) => Err(AppError::BadRequest(message.to_string())),
            None => Ok(params),
        }
    }
}

/// Query parameters of the public car search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarSearchQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub car_type: Option<String>,
    pub min_seats: Option<i32>,
}

impl TryFrom<CarSearchQuery> for CarSearchFilter {
    type Error = AppError;

    fn try_from(query: CarSearchQuery) -> Result<Self, Self::Error> {
        if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
            if start > end {
                return Err(AppError::BadRequest(
                    "Start date must not be after end date".to_string(),
                ));
            }
        }

        let car_type = query
            .car_type
            .filter(|value| !value.trim().is_empty())
            .map(|value| value.parse::<CarType>())
            .transpose()?;

        Ok(CarSearchFilter {
            start_date: query.start_date,
            end_date: query.end_date,
            location: query
                .location
                .map(|location| location.trim().to_string())
                .filter(|location| !location.is_empty()),
            car_type,
            min_seats: query.min_seats,
        })
    }
}
