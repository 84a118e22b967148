use sea_orm_migration::{prelude::*, schema::*};

use super::{m20261001_000001_create_user_table::User, m20261001_000002_create_company_table::Company};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::Id))
                    .col(string(Car::Brand))
                    .col(string(Car::ModelName))
                    .col(double(Car::PricePerDay))
                    .col(boolean(Car::Availability).default(true))
                    .col(boolean(Car::IsActive).default(true))
                    .col(text_null(Car::ImageUrl))
                    .col(integer(Car::CompanyId))
                    .col(integer_null(Car::OwnerId))
                    .col(string(Car::Location))
                    .col(string_len(Car::CarType, 16))
                    .col(integer(Car::SeatingCapacity))
                    .col(text(Car::Description))
                    .col(
                        timestamp_with_time_zone(Car::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_company_id")
                            .from(Car::Table, Car::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_owner_id")
                            .from(Car::Table, Car::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_car_company_id")
                    .table(Car::Table)
                    .col(Car::CompanyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_car_company_id")
                    .table(Car::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Car {
    #[sea_orm(iden = "cars")]
    Table,
    Id,
    Brand,
    ModelName,
    PricePerDay,
    Availability,
    IsActive,
    ImageUrl,
    CompanyId,
    OwnerId,
    Location,
    CarType,
    SeatingCapacity,
    Description,
    CreatedAt,
}
