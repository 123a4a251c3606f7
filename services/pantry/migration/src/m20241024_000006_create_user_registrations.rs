use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserRegistrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserRegistrations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserRegistrations::Token)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(UserRegistrations::UserId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserRegistrations::Table, UserRegistrations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(UserRegistrations::Table)
                    .col(UserRegistrations::UserId)
                    .name("idx_user_registrations_user_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserRegistrations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserRegistrations {
    Table,
    Id,
    Token,
    UserId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
