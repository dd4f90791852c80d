//! Migration to make `user_profile.profile_picture` optional.
//!
//! A profile picture is uploaded after registration, so the column
//! must accept rows without one.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(UserProfile::Table)
                    .modify_column(
                        ColumnDef::new(UserProfile::ProfilePicture)
                            .string_len(1024)
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(UserProfile::Table)
                    .modify_column(
                        ColumnDef::new(UserProfile::ProfilePicture)
                            .string_len(1024)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum UserProfile {
    Table,
    ProfilePicture,
}
