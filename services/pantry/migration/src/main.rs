use sea_orm_migration::prelude::*;

use beforeyougo_pantry_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
