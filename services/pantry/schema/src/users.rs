use sea_orm::entity::prelude::*;

/// Account that can be a member of storages.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub password_hash: String,
    pub email: Option<String>,
    pub is_activated: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_storages::Entity")]
    UserStorages,
    #[sea_orm(has_many = "super::user_registrations::Entity")]
    UserRegistrations,
}

impl Related<super::user_storages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserStorages.def()
    }
}

impl Related<super::user_registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRegistrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
