//! Create comment table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comment::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Comment::CommentText).text().not_null())
                    .col(
                        ColumnDef::new(Comment::CommentedOn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Comment::BookId).big_integer().not_null())
                    .col(ColumnDef::new(Comment::CommenterId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_book")
                            .from(Comment::Table, Comment::BookId)
                            .to(Book::Table, Book::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_commenter")
                            .from(Comment::Table, Comment::CommenterId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: book_id (for listing a book's comments)
        manager
            .create_index(
                Index::create()
                    .name("idx_comment_book_id")
                    .table(Comment::Table)
                    .col(Comment::BookId)
                    .to_owned(),
            )
            .await?;

        // Index: commenter_id
        manager
            .create_index(
                Index::create()
                    .name("idx_comment_commenter_id")
                    .table(Comment::Table)
                    .col(Comment::CommenterId)
                    .to_owned(),
            )
            .await?;

        // Index: commented_on (for pagination)
        manager
            .create_index(
                Index::create()
                    .name("idx_comment_commented_on")
                    .table(Comment::Table)
                    .col(Comment::CommentedOn)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Comment {
    Table,
    Id,
    #[iden = "comment"]
    CommentText,
    CommentedOn,
    BookId,
    CommenterId,
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
