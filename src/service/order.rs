use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    auth::AuthGuard,
    data::{
        availability::AvailabilityRepository, car::CarRepository, company::CompanyRepository,
        order::OrderRepository, order_item::OrderItemRepository, rating::RatingRepository,
        user::UserRepository,
    },
    dto::order::{OrderDto, OrderItemDto},
    error::AppError,
    model::{
        car::Car,
        order::{
            booking_days, date_violation, BookingParty, CreateOrderItemParams, Order, OrderItem,
            OrderStatus, PlaceOrderParams,
        },
        user::Role,
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books one or more cars of a single company or member for a customer.
    ///
    /// Runs as one transaction. Every requested car is row-locked in ascending id order
    /// before any item is checked, then each item is validated, checked for overlap and
    /// inserted in request order, so a later item also conflicts with an earlier item of
    /// the same order. Any failure rolls the whole order back.
    ///
    /// # Arguments
    /// - `customer_id`: Booking customer
    /// - `params`: Company or owner id plus the requested items
    ///
    /// # Returns
    /// - `Ok(OrderDto)`: The PLACED order with its items and total
    /// - `Err(AppError::NotFound)`: Customer, company, owner or car missing
    /// - `Err(AppError::AuthErr)`: Caller is not a CUSTOMER
    /// - `Err(AppError::BadRequest)`: Party, ownership, date or availability rule violated
    pub async fn place_order(
        &self,
        customer_id: i32,
        params: PlaceOrderParams,
    ) -> Result<OrderDto, AppError> {
        let party = BookingParty::from_ids(params.company_id, params.owner_id).ok_or_else(|| {
            AppError::BadRequest("Provide exactly one of company or owner".to_string())
        })?;

        if params.items.is_empty() {
            return Err(AppError::BadRequest(
                "Order must contain at least one item".to_string(),
            ));
        }

        let today = Utc::now().date_naive();
        let txn = self.db.begin().await?;

        AuthGuard::new(&txn)
            .require(customer_id, &[Role::Customer])
            .await?;
        resolve_party(&txn, party).await?;

        let orders = OrderRepository::new(&txn);
        let order = orders.create(customer_id, party).await?;

        let mut car_ids: Vec<i32> = params.items.iter().map(|item| item.car_id).collect();
        car_ids.sort_unstable();
        car_ids.dedup();

        let car_repo = CarRepository::new(&txn);
        let mut cars: HashMap<i32, Car> = HashMap::with_capacity(car_ids.len());
        for car_id in car_ids {
            let car = car_repo
                .lock_for_update(car_id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Car {} not found", car_id)))?;
            cars.insert(car_id, car);
        }

        let availability = AvailabilityRepository::new(&txn);
        let item_repo = OrderItemRepository::new(&txn);
        let mut items = Vec::with_capacity(params.items.len());
        let mut total_amount = 0.0;

        for requested in params.items {
            let Some(car) = cars.get(&requested.car_id) else {
                return Err(AppError::InternalError(format!(
                    "Car {} was not locked",
                    requested.car_id
                )));
            };

            check_car_bookable(car, party)?;

            if let Some(message) =
                date_violation(requested.start_date, requested.end_date, today)
            {
                return Err(AppError::BadRequest(message.to_string()));
            }

            if availability
                .has_overlap(car.id, requested.start_date, requested.end_date)
                .await?
            {
                return Err(AppError::BadRequest(format!(
                    "Car {} is already booked between {} and {}",
                    car.id, requested.start_date, requested.end_date
                )));
            }

            let number_of_days = booking_days(requested.start_date, requested.end_date);
            let price = car.price_per_day * number_of_days as f64;

            let item = item_repo
                .create(CreateOrderItemParams {
                    order_id: order.id,
                    car_id: car.id,
                    start_date: requested.start_date,
                    end_date: requested.end_date,
                    number_of_days,
                    price,
                })
                .await?;

            total_amount += price;
            items.push(item);
        }

        orders.set_total(order.id, total_amount).await?;

        txn.commit().await?;

        tracing::info!(
            "Customer {} placed order {} with {} item(s) totalling {:.2}",
            customer_id,
            order.id,
            items.len(),
            total_amount
        );

        let order = Order {
            total_amount,
            ..order
        };
        let item_views = items
            .into_iter()
            .map(|item| {
                let car = cars.get(&item.car_id);
                item_view(item, car, false)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(order_view(order, item_views))
    }

    /// Cancels a PLACED order on behalf of its customer.
    ///
    /// # Returns
    /// - `Ok(OrderDto)`: The cancelled order with its items
    /// - `Err(AppError::NotFound)`: No such order
    /// - `Err(AppError::BadRequest)`: Caller is not the customer or the order is not PLACED
    pub async fn cancel_order(&self, order_id: i32, customer_id: i32) -> Result<OrderDto, AppError> {
        let orders = OrderRepository::new(self.db);
        let order = orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        if order.customer_id != customer_id {
            return Err(AppError::BadRequest(
                "You can only cancel your own orders".to_string(),
            ));
        }

        if order.status != OrderStatus::Placed {
            return Err(AppError::BadRequest(format!(
                "Only PLACED orders can be cancelled, this order is {}",
                order.status
            )));
        }

        if !orders
            .transition_status(order_id, OrderStatus::Placed, OrderStatus::Cancelled)
            .await?
        {
            return Err(AppError::BadRequest(
                "Order can no longer be cancelled".to_string(),
            ));
        }

        tracing::info!("Customer {} cancelled order {}", customer_id, order_id);

        self.get_order_by_id(order_id).await
    }

    /// Applies a status change requested by the booked company, the booked member or an
    /// admin.
    ///
    /// # Arguments
    /// - `user_id`: Acting COMPANY, MEMBER or ADMIN account
    /// - `order_id`: Order to update
    /// - `status`: Target status name, case-insensitive
    ///
    /// # Returns
    /// - `Ok(OrderDto)`: The updated order with its items
    /// - `Err(AppError::BadRequest)`: Unknown status, foreign order or illegal transition
    /// - `Err(AppError::NotFound)`: No such order, user or company profile
    pub async fn update_order_status(
        &self,
        user_id: i32,
        order_id: i32,
        status: &str,
    ) -> Result<OrderDto, AppError> {
        let next: OrderStatus = status.parse()?;

        let actor = AuthGuard::new(self.db)
            .require(user_id, &[Role::Company, Role::Member, Role::Admin])
            .await?;

        let orders = OrderRepository::new(self.db);
        let order = orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        let owns_order = match actor.role {
            Role::Admin => true,
            Role::Member => order.owner_id == Some(actor.id),
            Role::Company => {
                let company = CompanyRepository::new(self.db)
                    .find_by_user_id(actor.id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Company profile not found".to_string()))?;
                order.company_id == Some(company.id)
            }
            Role::Customer => false,
        };

        if !owns_order {
            return Err(AppError::BadRequest(
                "Order does not belong to you".to_string(),
            ));
        }

        if !order.status.can_transition_to(next) {
            return Err(AppError::BadRequest(format!(
                "Cannot change order status from {} to {}",
                order.status, next
            )));
        }

        if !orders.transition_status(order_id, order.status, next).await? {
            return Err(AppError::BadRequest(format!(
                "Order is no longer {}",
                order.status
            )));
        }

        tracing::info!(
            "User {} moved order {} from {} to {}",
            user_id,
            order_id,
            order.status,
            next
        );

        self.get_order_by_id(order_id).await
    }

    /// Gets an order with its items and the per-item rated flag.
    pub async fn get_order_by_id(&self, order_id: i32) -> Result<OrderDto, AppError> {
        let order = OrderRepository::new(self.db)
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        let items = OrderItemRepository::new(self.db)
            .find_by_order(order_id)
            .await?;
        let car_ids: Vec<i32> = items.iter().map(|item| item.car_id).collect();
        let cars = CarRepository::new(self.db).find_by_ids(&car_ids).await?;
        let rated = RatingRepository::new(self.db)
            .rated_car_ids(order_id)
            .await?;

        let item_views = items
            .into_iter()
            .map(|item| {
                let is_rated = rated.contains(&item.car_id);
                let car = cars.get(&item.car_id);
                item_view(item, car, is_rated)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(order_view(order, item_views))
    }

    /// Gets a customer's orders without items, newest first.
    pub async fn get_orders_by_customer(&self, customer_id: i32) -> Result<Vec<OrderDto>, AppError> {
        let orders = OrderRepository::new(self.db)
            .find_by_customer(customer_id)
            .await?;

        Ok(list_view(orders))
    }

    /// Gets the orders booking the caller's company cars, newest first.
    pub async fn get_orders_by_company_user(&self, user_id: i32) -> Result<Vec<OrderDto>, AppError> {
        let company = CompanyRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Company profile not found".to_string()))?;

        let orders = OrderRepository::new(self.db)
            .find_by_company(company.id)
            .await?;

        Ok(list_view(orders))
    }

    /// Gets the orders booking a member's cars, newest first.
    pub async fn get_orders_by_owner(&self, owner_id: i32) -> Result<Vec<OrderDto>, AppError> {
        let orders = OrderRepository::new(self.db)
            .find_by_owner(owner_id)
            .await?;

        Ok(list_view(orders))
    }
}

/// Checks that the booked company or member exists and can take bookings.
async fn resolve_party<C: ConnectionTrait>(db: &C, party: BookingParty) -> Result<(), AppError> {
    match party {
        BookingParty::Company(company_id) => {
            let company = CompanyRepository::new(db)
                .find_by_id(company_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Company not found".to_string()))?;

            if !company.is_active {
                return Err(AppError::BadRequest("Company is not active".to_string()));
            }
        }
        BookingParty::Owner(owner_id) => {
            let owner = UserRepository::new(db)
                .find_by_id(owner_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Owner not found".to_string()))?;

            if owner.role != Role::Member {
                return Err(AppError::BadRequest("Owner is not a member".to_string()));
            }
        }
    }

    Ok(())
}

fn check_car_bookable(car: &Car, party: BookingParty) -> Result<(), AppError> {
    match party {
        BookingParty::Company(company_id) => {
            if car.company_id != company_id || car.owner_id.is_some() {
                return Err(AppError::BadRequest(format!(
                    "Car {} does not belong to this company",
                    car.id
                )));
            }
        }
        BookingParty::Owner(owner_id) => {
            if car.owner_id != Some(owner_id) {
                return Err(AppError::BadRequest(format!(
                    "Car {} does not belong to this owner",
                    car.id
                )));
            }
        }
    }

    if !car.is_active {
        return Err(AppError::BadRequest(format!(
            "Car {} is no longer listed",
            car.id
        )));
    }

    Ok(())
}

fn item_view(item: OrderItem, car: Option<&Car>, rated: bool) -> Result<OrderItemDto, AppError> {
    let car = car.ok_or_else(|| {
        AppError::InternalError(format!(
            "Car {} of order item {} is missing",
            item.car_id, item.id
        ))
    })?;

    Ok(OrderItemDto {
        car_id: item.car_id,
        car_brand: car.brand.clone(),
        car_model: car.model_name.clone(),
        start_date: item.start_date,
        end_date: item.end_date,
        number_of_days: item.number_of_days,
        price: item.price,
        rated,
    })
}

fn order_view(order: Order, items: Vec<OrderItemDto>) -> OrderDto {
    OrderDto {
        order_id: order.id,
        total_amount: order.total_amount,
        status: order.status,
        created_at: order.created_at,
        customer_id: order.customer_id,
        company_id: order.company_id,
        owner_id: order.owner_id,
        items,
    }
}

fn list_view(orders: Vec<Order>) -> Vec<OrderDto> {
    orders
        .into_iter()
        .map(|order| order_view(order, Vec::new()))
        .collect()
}
