//! Test harness for the cargorent workspace.
//!
//! Every test gets its own in-memory SQLite database whose tables are generated from the
//! SeaORM entities, so no migrations run in tests. Factories insert rows directly and skip
//! the booking rules, which lets tests arrange past windows, terminal orders and other
//! states the services would refuse to create.
//!
//! ```rust,ignore
//! let test = TestBuilder::new().with_rental_tables().build().await?;
//! let db = test.db.as_ref().unwrap();
//!
//! let (_, company, car) = factory::helpers::create_company_car(db).await?;
//! let customer = factory::create_customer(db).await?;
//! factory::create_order(db, customer.id, company.id, car.id, start, end).await?;
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
