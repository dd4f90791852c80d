//! Create review table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Review::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Review::ReviewText).text().not_null())
                    .col(ColumnDef::new(Review::Rating).integer().not_null())
                    .col(ColumnDef::new(Review::BookId).big_integer().not_null())
                    .col(ColumnDef::new(Review::ReviewerId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_book")
                            .from(Review::Table, Review::BookId)
                            .to(Book::Table, Book::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_reviewer")
                            .from(Review::Table, Review::ReviewerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: book_id (for listing a book's reviews)
        manager
            .create_index(
                Index::create()
                    .name("idx_review_book_id")
                    .table(Review::Table)
                    .col(Review::BookId)
                    .to_owned(),
            )
            .await?;

        // Index: reviewer_id
        manager
            .create_index(
                Index::create()
                    .name("idx_review_reviewer_id")
                    .table(Review::Table)
                    .col(Review::ReviewerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Review {
    Table,
    Id,
    #[iden = "review"]
    ReviewText,
    Rating,
    BookId,
    ReviewerId,
}

#[derive(Iden)]
enum Book {
    Table,
    Id,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
