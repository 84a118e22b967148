use sea_orm_migration::{prelude::*, schema::*};

use super::{m20261001_000003_create_car_table::Car, m20261001_000004_create_order_table::Order};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderItem::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderItem::Id))
                    .col(integer(OrderItem::OrderId))
                    .col(integer(OrderItem::CarId))
                    .col(date(OrderItem::StartDate))
                    .col(date(OrderItem::EndDate))
                    .col(integer(OrderItem::NumberOfDays))
                    .col(double(OrderItem::Price))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_order_id")
                            .from(OrderItem::Table, OrderItem::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_car_id")
                            .from(OrderItem::Table, OrderItem::CarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Overlap lookups filter by car and date window
        manager
            .create_index(
                Index::create()
                    .name("idx_order_item_car_dates")
                    .table(OrderItem::Table)
                    .col(OrderItem::CarId)
                    .col(OrderItem::StartDate)
                    .col(OrderItem::EndDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_order_item_car_dates")
                    .table(OrderItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OrderItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderItem {
    #[sea_orm(iden = "order_items")]
    Table,
    Id,
    OrderId,
    CarId,
    StartDate,
    EndDate,
    NumberOfDays,
    Price,
}
