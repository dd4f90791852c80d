//! Create follow table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Follow::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Follow::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Follow::FollowedOn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Follow::FollowedUserId).big_integer().not_null())
                    .col(ColumnDef::new(Follow::UserId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follow_followed_user")
                            .from(Follow::Table, Follow::FollowedUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follow_user")
                            .from(Follow::Table, Follow::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: (user_id, followed_user_id) - prevent duplicate follows
        manager
            .create_index(
                Index::create()
                    .name("idx_follow_user_followed_user")
                    .table(Follow::Table)
                    .col(Follow::UserId)
                    .col(Follow::FollowedUserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index: followed_user_id (for listing followers)
        manager
            .create_index(
                Index::create()
                    .name("idx_follow_followed_user_id")
                    .table(Follow::Table)
                    .col(Follow::FollowedUserId)
                    .to_owned(),
            )
            .await?;

        // Index: followed_on (for pagination)
        manager
            .create_index(
                Index::create()
                    .name("idx_follow_followed_on")
                    .table(Follow::Table)
                    .col(Follow::FollowedOn)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Follow::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Follow {
    Table,
    Id,
    FollowedOn,
    FollowedUserId,
    UserId,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
