//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization and
//! a `create_*` convenience function for quick default creation. Factories insert rows
//! directly through the entity crate, so tests can arrange state without going through
//! the services under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let customer = factory::create_customer(&db).await?;
//! let (owner, company, car) = factory::helpers::create_company_car(&db).await?;
//!
//! let car = factory::car::CarFactory::new(&db, company.id)
//!     .price_per_day(80.0)
//!     .location("Berlin")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities with any role
//! - `company` - Create normal or system company profiles
//! - `car` - Create company or member car listings
//! - `order` - Create orders together with their line items
//! - `rating` - Create ratings for ordered cars
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod car;
pub mod company;
pub mod helpers;
pub mod order;
pub mod rating;
pub mod user;

pub use car::create_car;
pub use company::create_company;
pub use order::create_order;
pub use rating::create_rating;
pub use user::{create_customer, create_user};
