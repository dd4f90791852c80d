//! Database migrations.
//!
//! Schema migrations for the database.

#![allow(missing_docs)]

use sea_orm_migration::prelude::*;

mod m20240226_000001_create_user_table;
mod m20240226_000002_create_user_profile_table;
mod m20240226_000003_alter_profile_picture_nullable;
mod m20240226_000004_create_book_table;
mod m20240226_000005_create_cart_tables;
mod m20240226_000006_create_comment_table;
mod m20240226_000007_create_follow_table;
mod m20240226_000008_create_book_like_table;
mod m20240226_000009_create_notification_table;
mod m20240226_000010_create_order_tables;
mod m20240226_000011_create_review_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240226_000001_create_user_table::Migration),
            Box::new(m20240226_000002_create_user_profile_table::Migration),
            Box::new(m20240226_000003_alter_profile_picture_nullable::Migration),
            Box::new(m20240226_000004_create_book_table::Migration),
            Box::new(m20240226_000005_create_cart_tables::Migration),
            Box::new(m20240226_000006_create_comment_table::Migration),
            Box::new(m20240226_000007_create_follow_table::Migration),
            Box::new(m20240226_000008_create_book_like_table::Migration),
            Box::new(m20240226_000009_create_notification_table::Migration),
            Box::new(m20240226_000010_create_order_tables::Migration),
            Box::new(m20240226_000011_create_review_table::Migration),
        ]
    }
}
