use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CategoryResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CategoryResults::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CategoryResults::WalletAddress)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CategoryResults::PuzzleDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CategoryResults::Mistakes)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CategoryResults::Won).boolean().not_null())
                    .col(
                        ColumnDef::new(CategoryResults::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CategoryResults::UpdatedAt)
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
                    .name("idx_category_results_wallet_date")
                    .table(CategoryResults::Table)
                    .col(CategoryResults::WalletAddress)
                    .col(CategoryResults::PuzzleDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CategoryResults::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CategoryResults {
    Table,
    Id,
    WalletAddress,
    PuzzleDate,
    Mistakes,
    Won,
    CreatedAt,
    UpdatedAt,
}
