use sea_orm::entity::prelude::*;

/// Named inventory location. Ownership lives in `user_storages`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "storages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_storages::Entity")]
    UserStorages,
    #[sea_orm(has_many = "super::articles::Entity")]
    Articles,
}

impl Related<super::user_storages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserStorages.def()
    }
}

impl Related<super::articles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Articles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
