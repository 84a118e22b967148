//! Serde views returned to the transport layer and request bodies accepted from it.

pub mod car;
pub mod order;
pub mod rating;
pub mod user;

use serde::{Deserialize, Serialize};

/// Error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}
