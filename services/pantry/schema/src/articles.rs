use sea_orm::entity::prelude::*;

/// Perishable item tracked inside one storage.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub storage_id: i32,
    pub name: String,
    pub quantity: i32,
    #[sea_orm(column_type = "Double", nullable)]
    pub price: Option<f64>,
    pub expiration_date: chrono::NaiveDate,
    pub insertion_date: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::storages::Entity",
        from = "Column::StorageId",
        to = "super::storages::Column::Id"
    )]
    Storage,
}

impl Related<super::storages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Storage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
