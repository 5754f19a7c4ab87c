use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WordResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WordResults::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WordResults::WalletAddress)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WordResults::GameDate).date().not_null())
                    .col(ColumnDef::new(WordResults::TargetWord).string().not_null())
                    .col(ColumnDef::new(WordResults::Guesses).integer().not_null())
                    .col(ColumnDef::new(WordResults::Won).boolean().not_null())
                    .col(
                        ColumnDef::new(WordResults::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(WordResults::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per wallet per day; the results sink upserts on this key.
        manager
            .create_index(
                Index::create()
                    .name("idx_word_results_wallet_date")
                    .table(WordResults::Table)
                    .col(WordResults::WalletAddress)
                    .col(WordResults::GameDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WordResults::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WordResults {
    Table,
    Id,
    WalletAddress,
    GameDate,
    TargetWord,
    Guesses,
    Won,
    CreatedAt,
    UpdatedAt,
}
