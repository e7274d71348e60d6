use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Collections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Collections::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Collections::CollectorId).uuid().not_null())
                    .col(ColumnDef::new(Collections::CustomerId).uuid())
                    .col(ColumnDef::new(Collections::CustomerName).string())
                    .col(ColumnDef::new(Collections::PickupAddress).string())
                    .col(
                        ColumnDef::new(Collections::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Collections::TotalWeightKg)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Collections::TotalValue)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Collections::CreatedBy).uuid())
                    .col(ColumnDef::new(Collections::ActualTime).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Collections::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Collections::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_collections_collector_created")
                    .table(Collections::Table)
                    .col(Collections::CollectorId)
                    .col(Collections::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_collections_status")
                    .table(Collections::Table)
                    .col(Collections::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Collections::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Collections {
    Table,
    Id,
    CollectorId,
    CustomerId,
    CustomerName,
    PickupAddress,
    Status,
    TotalWeightKg,
    TotalValue,
    CreatedBy,
    ActualTime,
    CreatedAt,
    UpdatedAt,
}
