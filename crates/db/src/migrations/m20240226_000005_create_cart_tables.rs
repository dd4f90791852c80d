//! Create cart and cart item tables migration.
//!
//! The cart <-> book many-to-many goes through `cart_item`,
//! which carries the quantity per book.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cart::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cart::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cart::UserId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_user")
                            .from(Cart::Table, Cart::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: user_id (for finding a user's cart)
        manager
            .create_index(
                Index::create()
                    .name("idx_cart_user_id")
                    .table(Cart::Table)
                    .col(Cart::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CartItem::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CartItem::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CartItem::Quantity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(CartItem::BookId).big_integer().not_null())
                    .col(ColumnDef::new(CartItem::CartId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_book")
                            .from(CartItem::Table, CartItem::BookId)
                            .to(Book::Table, Book::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_cart")
                            .from(CartItem::Table, CartItem::CartId)
                            .to(Cart::Table, Cart::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: cart_id (for listing a cart's items)
        manager
            .create_index(
                Index::create()
                    .name("idx_cart_item_cart_id")
                    .table(CartItem::Table)
                    .col(CartItem::CartId)
                    .to_owned(),
            )
            .await?;

        // Index: book_id
        manager
            .create_index(
                Index::create()
                    .name("idx_cart_item_book_id")
                    .table(CartItem::Table)
                    .col(CartItem::BookId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CartItem::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Cart::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Cart {
    Table,
    Id,
    UserId,
}

#[derive(Iden)]
enum CartItem {
    Table,
    Id,
    Quantity,
    BookId,
    CartId,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}

#[derive(Iden)]
enum Book {
    Table,
    Id,
}
