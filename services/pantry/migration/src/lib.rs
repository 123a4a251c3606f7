pub use sea_orm_migration::prelude::*;

mod m20241024_000001_create_users;
mod m20241024_000002_create_storages;
mod m20241024_000003_create_user_storages;
mod m20241024_000004_create_articles;
mod m20241024_000005_create_barcode_cache;
mod m20241024_000006_create_user_registrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241024_000001_create_users::Migration),
            Box::new(m20241024_000002_create_storages::Migration),
            Box::new(m20241024_000003_create_user_storages::Migration),
            Box::new(m20241024_000004_create_articles::Migration),
            Box::new(m20241024_000005_create_barcode_cache::Migration),
            Box::new(m20241024_000006_create_user_registrations::Migration),
        ]
    }
}
