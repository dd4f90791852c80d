//! Create book like table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookLike::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BookLike::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BookLike::BookId).big_integer().not_null())
                    .col(ColumnDef::new(BookLike::UserId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_like_book")
                            .from(BookLike::Table, BookLike::BookId)
                            .to(Book::Table, Book::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_like_user")
                            .from(BookLike::Table, BookLike::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: (user_id, book_id) - prevent duplicate likes
        manager
            .create_index(
                Index::create()
                    .name("idx_book_like_user_book")
                    .table(BookLike::Table)
                    .col(BookLike::UserId)
                    .col(BookLike::BookId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index: book_id (for like counts)
        manager
            .create_index(
                Index::create()
                    .name("idx_book_like_book_id")
                    .table(BookLike::Table)
                    .col(BookLike::BookId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookLike::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum BookLike {
    Table,
    Id,
    BookId,
    UserId,
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
