use sea_orm::DatabaseConnection;

use crate::{
    auth::AuthGuard,
    data::{
        car::CarRepository, company::CompanyRepository, rating::RatingRepository,
        user::UserRepository,
    },
    dto::car::CarDto,
    error::AppError,
    model::{
        car::{is_valid_ownership, Car, CarDetailsParams, CarSearchFilter, CreateCarParams},
        company::Company,
        rating::average_score,
        user::Role,
    },
};

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a car under the caller's company.
    ///
    /// Allowed while the company awaits approval. Its cars stay out of public listings
    /// until it is activated.
    ///
    /// # Arguments
    /// - `user_id`: Company account adding the car
    /// - `details`: Validated listing fields
    ///
    /// # Returns
    /// - `Ok(CarDto)`: The created listing
    /// - `Err(AppError::NotFound)`: Unknown user or missing company profile
    /// - `Err(AppError::AuthErr)`: Caller is not a COMPANY account
    /// - `Err(AppError::BadRequest)`: Ownership rule violated
    pub async fn add_car(&self, user_id: i32, details: CarDetailsParams) -> Result<CarDto, AppError> {
        AuthGuard::new(self.db)
            .require(user_id, &[Role::Company])
            .await?;

        let company = self.company_of(user_id).await?;

        self.create_car(&company, None, details).await
    }

    /// Lists a member's own car under the SYSTEM company.
    ///
    /// # Returns
    /// - `Ok(CarDto)`: The created listing with `owner_id` set to the member
    /// - `Err(AppError::NotFound)`: Unknown user or no SYSTEM company
    /// - `Err(AppError::AuthErr)`: Caller is not a MEMBER account
    pub async fn add_car_for_member(
        &self,
        user_id: i32,
        details: CarDetailsParams,
    ) -> Result<CarDto, AppError> {
        AuthGuard::new(self.db)
            .require(user_id, &[Role::Member])
            .await?;

        let system = CompanyRepository::new(self.db)
            .find_system()
            .await?
            .ok_or_else(|| AppError::NotFound("System company not found".to_string()))?;

        self.create_car(&system, Some(user_id), details).await
    }

    /// Replaces the listing fields of one of the caller's company cars.
    pub async fn update_car(
        &self,
        user_id: i32,
        car_id: i32,
        details: CarDetailsParams,
    ) -> Result<CarDto, AppError> {
        AuthGuard::new(self.db)
            .require(user_id, &[Role::Company])
            .await?;

        if let Some(message) = details.violation() {
            return Err(AppError::BadRequest(message.to_string()));
        }

        let company = self.company_of(user_id).await?;
        let car = self.active_car(car_id).await?;

        if car.company_id != company.id {
            return Err(AppError::BadRequest(
                "Car does not belong to this company".to_string(),
            ));
        }

        let updated = CarRepository::new(self.db)
            .update_details(car_id, details)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        self.to_dto(updated).await
    }

    /// Soft deletes one of the caller's company cars.
    pub async fn delete_car(&self, user_id: i32, car_id: i32) -> Result<(), AppError> {
        AuthGuard::new(self.db)
            .require(user_id, &[Role::Company])
            .await?;

        let company = self.company_of(user_id).await?;
        let car = self.active_car(car_id).await?;

        if car.company_id != company.id {
            return Err(AppError::BadRequest(
                "Car does not belong to this company".to_string(),
            ));
        }

        CarRepository::new(self.db).soft_delete(car_id).await?;

        tracing::info!("Company {} deactivated car {}", company.id, car_id);

        Ok(())
    }

    /// Soft deletes one of the caller's member cars.
    pub async fn delete_car_for_member(&self, user_id: i32, car_id: i32) -> Result<(), AppError> {
        AuthGuard::new(self.db)
            .require(user_id, &[Role::Member])
            .await?;

        let car = self.active_car(car_id).await?;

        if car.owner_id != Some(user_id) {
            return Err(AppError::BadRequest("Car does not belong to you".to_string()));
        }

        CarRepository::new(self.db).soft_delete(car_id).await?;

        tracing::info!("Member {} deactivated car {}", user_id, car_id);

        Ok(())
    }

    /// Gets a company's active cars.
    pub async fn get_cars_by_company(&self, company_id: i32) -> Result<Vec<CarDto>, AppError> {
        let cars = CarRepository::new(self.db)
            .find_active_by_company(company_id)
            .await?;

        self.to_dtos(cars).await
    }

    /// Gets a member's active cars.
    pub async fn get_cars_by_owner(&self, owner_id: i32) -> Result<Vec<CarDto>, AppError> {
        let cars = CarRepository::new(self.db)
            .find_active_by_owner(owner_id)
            .await?;

        self.to_dtos(cars).await
    }

    pub async fn get_car_by_id(&self, car_id: i32) -> Result<CarDto, AppError> {
        let car = CarRepository::new(self.db)
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        self.to_dto(car).await
    }

    /// Gets every publicly listed car.
    pub async fn get_public_cars(&self) -> Result<Vec<CarDto>, AppError> {
        self.search_cars(CarSearchFilter::default()).await
    }

    /// Searches public cars, excluding cars reserved during the requested window.
    ///
    /// # Returns
    /// - `Ok(Vec<CarDto>)`: Matching cars
    /// - `Err(AppError::BadRequest)`: Window start is after its end
    pub async fn search_cars(&self, filter: CarSearchFilter) -> Result<Vec<CarDto>, AppError> {
        if let Some((start, end)) = filter.window() {
            if start > end {
                return Err(AppError::BadRequest(
                    "Start date must not be after end date".to_string(),
                ));
            }
        }

        let cars = CarRepository::new(self.db).search(&filter).await?;

        self.to_dtos(cars).await
    }

    async fn create_car(
        &self,
        company: &Company,
        owner_id: Option<i32>,
        details: CarDetailsParams,
    ) -> Result<CarDto, AppError> {
        if let Some(message) = details.violation() {
            return Err(AppError::BadRequest(message.to_string()));
        }

        if !is_valid_ownership(company, owner_id) {
            return Err(AppError::BadRequest("Invalid car ownership".to_string()));
        }

        let car = CarRepository::new(self.db)
            .create(CreateCarParams {
                company_id: company.id,
                owner_id,
                details,
            })
            .await?;

        tracing::info!("Listed car {} under company {}", car.id, company.id);

        self.to_dto(car).await
    }

    async fn company_of(&self, user_id: i32) -> Result<Company, AppError> {
        CompanyRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Company profile not found".to_string()))
    }

    async fn active_car(&self, car_id: i32) -> Result<Car, AppError> {
        CarRepository::new(self.db)
            .find_by_id(car_id)
            .await?
            .filter(|car| car.is_active)
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))
    }

    async fn to_dto(&self, car: Car) -> Result<CarDto, AppError> {
        self.to_dtos(vec![car])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError("Car view was not built".to_string()))
    }

    /// Builds car views with company, owner and rating data loaded in bulk.
    async fn to_dtos(&self, cars: Vec<Car>) -> Result<Vec<CarDto>, AppError> {
        let car_ids: Vec<i32> = cars.iter().map(|c| c.id).collect();
        let company_ids: Vec<i32> = cars.iter().map(|c| c.company_id).collect();
        let owner_ids: Vec<i32> = cars.iter().filter_map(|c| c.owner_id).collect();

        let companies = CompanyRepository::new(self.db)
            .find_by_ids(&company_ids)
            .await?;
        let owners = UserRepository::new(self.db).find_names(&owner_ids).await?;
        let scores = RatingRepository::new(self.db)
            .scores_by_car(&car_ids)
            .await?;

        cars.into_iter()
            .map(|car| {
                let company = companies.get(&car.company_id).ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Company {} of car {} is missing",
                        car.company_id, car.id
                    ))
                })?;

                Ok(CarDto {
                    id: car.id,
                    brand: car.brand,
                    model: car.model_name,
                    price_per_day: car.price_per_day,
                    availability: car.availability,
                    is_active: car.is_active,
                    image_url: car.image_url,
                    company_id: car.company_id,
                    company_name: company.company_name.clone(),
                    company_type: company.company_type,
                    owner_id: car.owner_id,
                    owner_name: car.owner_id.and_then(|id| owners.get(&id).cloned()),
                    location: car.location,
                    car_type: car.car_type,
                    seating_capacity: car.seating_capacity,
                    description: car.description,
                    average_rating: scores
                        .get(&car.id)
                        .map(|s| average_score(s))
                        .unwrap_or(0.0),
                })
            })
            .collect()
    }
}
