//! Create book table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Book::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Book::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Book::Author).string_len(100).not_null())
                    .col(ColumnDef::new(Book::Genre).string_len(100).not_null())
                    .col(ColumnDef::new(Book::Description).text().not_null())
                    .col(
                        ColumnDef::new(Book::PostedOn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Book::BookCover).string_len(1024).not_null())
                    .col(ColumnDef::new(Book::Price).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(Book::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Book::PostedById).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_owner")
                            .from(Book::Table, Book::OwnerId)
                            .to(UserProfile::Table, UserProfile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_posted_by")
                            .from(Book::Table, Book::PostedById)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: owner_id (for listing a seller's books)
        manager
            .create_index(
                Index::create()
                    .name("idx_book_owner_id")
                    .table(Book::Table)
                    .col(Book::OwnerId)
                    .to_owned(),
            )
            .await?;

        // Index: posted_by_id
        manager
            .create_index(
                Index::create()
                    .name("idx_book_posted_by_id")
                    .table(Book::Table)
                    .col(Book::PostedById)
                    .to_owned(),
            )
            .await?;

        // Index: genre (for catalog browsing)
        manager
            .create_index(
                Index::create()
                    .name("idx_book_genre")
                    .table(Book::Table)
                    .col(Book::Genre)
                    .to_owned(),
            )
            .await?;

        // Index: posted_on (for pagination)
        manager
            .create_index(
                Index::create()
                    .name("idx_book_posted_on")
                    .table(Book::Table)
                    .col(Book::PostedOn)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Book {
    Table,
    Id,
    Title,
    Author,
    Genre,
    Description,
    PostedOn,
    BookCover,
    Price,
    OwnerId,
    PostedById,
}

#[derive(Iden)]
enum UserProfile {
    Table,
    Id,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
