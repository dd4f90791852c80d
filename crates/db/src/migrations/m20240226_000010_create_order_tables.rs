//! Create order and order item tables migration.
//!
//! The order <-> book many-to-many goes through `order_item`,
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
                    .table(Order::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Order::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Order::OrderedOn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Order::Total).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(Order::UserId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_user")
                            .from(Order::Table, Order::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: user_id (for listing a user's orders)
        manager
            .create_index(
                Index::create()
                    .name("idx_order_user_id")
                    .table(Order::Table)
                    .col(Order::UserId)
                    .to_owned(),
            )
            .await?;

        // Index: ordered_on (for pagination)
        manager
            .create_index(
                Index::create()
                    .name("idx_order_ordered_on")
                    .table(Order::Table)
                    .col(Order::OrderedOn)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrderItem::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderItem::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OrderItem::Quantity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(OrderItem::BookId).big_integer().not_null())
                    .col(ColumnDef::new(OrderItem::OrderId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_book")
                            .from(OrderItem::Table, OrderItem::BookId)
                            .to(Book::Table, Book::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_order")
                            .from(OrderItem::Table, OrderItem::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: order_id (for listing an order's items)
        manager
            .create_index(
                Index::create()
                    .name("idx_order_item_order_id")
                    .table(OrderItem::Table)
                    .col(OrderItem::OrderId)
                    .to_owned(),
            )
            .await?;

        // Index: book_id
        manager
            .create_index(
                Index::create()
                    .name("idx_order_item_book_id")
                    .table(OrderItem::Table)
                    .col(OrderItem::BookId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderItem::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Order {
    Table,
    Id,
    OrderedOn,
    Total,
    UserId,
}

#[derive(Iden)]
enum OrderItem {
    Table,
    Id,
    Quantity,
    BookId,
    OrderId,
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
