use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(pk_auto(Games::Id))
                    .col(string_len(Games::Name, 200))
                    .col(string_len(Games::Genre, 100))
                    .col(string_len(Games::AgeRating, 10))
                    .col(big_integer(Games::PriceCents))
                    .col(string_len(Games::Description, 1000))
                    .col(string_len(Games::Author, 200))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Games {
    Table,
    Id,
    Name,
    Genre,
    AgeRating,
    PriceCents,
    Description,
    Author,
}
