//! Car rental marketplace core.
//!
//! Customers book cars listed by companies or by individual members for inclusive date
//! ranges. Bookings move through a fixed status lifecycle and completed bookings can be
//! rated once per car.
//!
//! Layers, leaf to root:
//! - `model` - domain types and operation parameters
//! - `data` - repositories over SeaORM, generic over the connection so they run inside
//!   transactions
//! - `service` - business rules, authorization and transaction boundaries
//! - `dto` - serde views handed to the transport layer

pub mod auth;
pub mod config;
pub mod data;
pub mod dto;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
