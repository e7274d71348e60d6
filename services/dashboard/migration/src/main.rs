use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(rekolo_dashboard_migration::Migrator).await;
}
