use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Articles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Articles::StorageId).integer().not_null())
                    .col(ColumnDef::new(Articles::Name).string().not_null())
                    .col(
                        ColumnDef::new(Articles::Quantity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Articles::Price).double().null())
                    .col(ColumnDef::new(Articles::ExpirationDate).date().not_null())
                    .col(
                        ColumnDef::new(Articles::InsertionDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // No cascade: a storage holding articles must not be deletable.
                    .foreign_key(
                        ForeignKey::create()
                            .from(Articles::Table, Articles::StorageId)
                            .to(Storages::Table, Storages::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Articles::Table)
                    .col(Articles::StorageId)
                    .col(Articles::ExpirationDate)
                    .name("idx_articles_storage_id_expiration_date")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Articles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Articles {
    Table,
    Id,
    StorageId,
    Name,
    Quantity,
    Price,
    ExpirationDate,
    InsertionDate,
}

#[derive(Iden)]
enum Storages {
    Table,
    Id,
}
