use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserStorages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserStorages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserStorages::UserId).integer().not_null())
                    .col(ColumnDef::new(UserStorages::StorageId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserStorages::Table, UserStorages::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserStorages::Table, UserStorages::StorageId)
                            .to(Storages::Table, Storages::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(UserStorages::Table)
                    .col(UserStorages::UserId)
                    .col(UserStorages::StorageId)
                    .unique()
                    .name("idx_user_storages_user_id_storage_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(UserStorages::Table)
                    .col(UserStorages::StorageId)
                    .name("idx_user_storages_storage_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserStorages::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserStorages {
    Table,
    Id,
    UserId,
    StorageId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Storages {
    Table,
    Id,
}
