pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_company_table;
mod m20261001_000003_create_car_table;
mod m20261001_000004_create_order_table;
mod m20261001_000005_create_order_item_table;
mod m20261001_000006_create_rating_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_company_table::Migration),
            Box::new(m20261001_000003_create_car_table::Migration),
            Box::new(m20261001_000004_create_order_table::Migration),
            Box::new(m20261001_000005_create_order_item_table::Migration),
            Box::new(m20261001_000006_create_rating_table::Migration),
        ]
    }
}
