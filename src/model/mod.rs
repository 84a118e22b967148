//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entity models into these types at the data boundary so
//! services never handle entity models directly.

pub mod car;
pub mod company;
pub mod order;
pub mod rating;
pub mod user;

use thiserror::Error;

/// A string token that does not name any variant of a closed set.
///
/// Raised when parsing roles, car types or order statuses from request input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {kind} '{value}'")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
