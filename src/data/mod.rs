//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one aggregate each and return domain models from
//! `crate::model`. They are generic over `ConnectionTrait` so services can run them on the
//! pool for reads or on a `DatabaseTransaction` for multi-step writes.

pub mod availability;
pub mod car;
pub mod company;
pub mod order;
pub mod order_item;
pub mod rating;
pub mod user;

#[cfg(test)]
mod test;
