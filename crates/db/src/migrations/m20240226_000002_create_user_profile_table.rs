//! Create user profile table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfile::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProfile::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserProfile::UserId).big_integer().not_null())
                    .col(ColumnDef::new(UserProfile::Email).string_len(254))
                    .col(ColumnDef::new(UserProfile::FirstName).string_len(150))
                    .col(ColumnDef::new(UserProfile::LastName).string_len(150))
                    .col(
                        ColumnDef::new(UserProfile::ProfilePicture)
                            .string_len(1024)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_profile_user")
                            .from(UserProfile::Table, UserProfile::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: user_id (1:1 with user)
        manager
            .create_index(
                Index::create()
                    .name("idx_user_profile_user_id")
                    .table(UserProfile::Table)
                    .col(UserProfile::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProfile::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserProfile {
    Table,
    Id,
    UserId,
    Email,
    FirstName,
    LastName,
    ProfilePicture,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
