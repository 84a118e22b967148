pub use super::car::Entity as Car;
pub use super::company::Entity as Company;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::rating::Entity as Rating;
pub use super::user::Entity as User;
