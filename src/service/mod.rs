//! Business logic layer.
//!
//! Services enforce roles through `AuthGuard`, validate business rules, open the
//! transactions for multi-step writes, and assemble the DTO views returned to callers.

pub mod car;
pub mod company;
pub mod order;
pub mod rating;
pub mod user;

#[cfg(test)]
mod test;
