use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::CarType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub brand: String,
    pub model_name: String,
    #[sea_orm(column_type = "Double")]
    pub price_per_day: f64,
    /// Legacy listing flag, informational only.
    pub availability: bool,
    pub is_active: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    pub company_id: i32,
    pub owner_id: Option<i32>,
    pub location: String,
    pub car_type: CarType,
    pub seating_capacity: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Company,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Owner,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
