//! Cart repository.

use std::sync::Arc;

use crate::entities::{book, cart, cart_item, Cart, CartItem};
use bookery_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

/// Cart repository for database operations.
///
/// Cart items are managed through this repository rather than their own;
/// an item row never outlives its cart.
#[derive(Clone)]
pub struct CartRepository {
    db: Arc<DatabaseConnection>,
}

impl CartRepository {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a cart by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<cart::Model>> {
        Cart::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a cart by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i64) -> AppResult<cart::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cart {id} not found")))
    }

    /// Find a user's cart (most recent if several exist).
    pub async fn find_by_user(&self, user_id: i64) -> AppResult<Option<cart::Model>> {
        Cart::find()
            .filter(cart::Column::UserId.eq(user_id))
            .order_by_desc(cart::Column::Id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a user's cart, creating one if none exists.
    pub async fn get_or_create_for_user(&self, user_id: i64) -> AppResult<cart::Model> {
        if let Some(existing) = self.find_by_user(user_id).await? {
            return Ok(existing);
        }

        let model = cart::ActiveModel {
            user_id: Set(user_id),
            ..Default::default()
        };

        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a cart and its items (items go with the cascade).
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        Cart::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Add a book to a cart, bumping the quantity if it is already there.
    pub async fn add_item(
        &self,
        cart_id: i64,
        book_id: i64,
        quantity: i32,
    ) -> AppResult<cart_item::Model> {
        let existing = self.find_item(cart_id, book_id).await?;

        if let Some(item) = existing {
            let new_quantity = item.quantity + quantity;
            let mut active: cart_item::ActiveModel = item.into();
            active.quantity = Set(new_quantity);
            return active
                .update(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()));
        }

        let model = cart_item::ActiveModel {
            cart_id: Set(cart_id),
            book_id: Set(book_id),
            quantity: Set(quantity),
            ..Default::default()
        };

        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Set the quantity of a book in a cart.
    pub async fn update_item_quantity(
        &self,
        cart_id: i64,
        book_id: i64,
        quantity: i32,
    ) -> AppResult<cart_item::Model> {
        let item = self
            .find_item(cart_id, book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {book_id} not in cart {cart_id}")))?;

        let mut active: cart_item::ActiveModel = item.into();
        active.quantity = Set(quantity);
        active
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Remove a book from a cart.
    pub async fn remove_item(&self, cart_id: i64, book_id: i64) -> AppResult<()> {
        CartItem::delete_many()
            .filter(cart_item::Column::CartId.eq(cart_id))
            .filter(cart_item::Column::BookId.eq(book_id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Remove every item from a cart.
    pub async fn clear(&self, cart_id: i64) -> AppResult<()> {
        CartItem::delete_many()
            .filter(cart_item::Column::CartId.eq(cart_id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Find a single cart item by cart and book.
    pub async fn find_item(
        &self,
        cart_id: i64,
        book_id: i64,
    ) -> AppResult<Option<cart_item::Model>> {
        CartItem::find()
            .filter(cart_item::Column::CartId.eq(cart_id))
            .filter(cart_item::Column::BookId.eq(book_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get the items in a cart.
    pub async fn find_items(&self, cart_id: i64) -> AppResult<Vec<cart_item::Model>> {
        CartItem::find()
            .filter(cart_item::Column::CartId.eq(cart_id))
            .order_by_asc(cart_item::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get the items in a cart together with their books.
    pub async fn find_items_with_books(
        &self,
        cart_id: i64,
    ) -> AppResult<Vec<(cart_item::Model, Option<book::Model>)>> {
        CartItem::find()
            .filter(cart_item::Column::CartId.eq(cart_id))
            .order_by_asc(cart_item::Column::Id)
            .find_also_related(crate::entities::Book)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count the items in a cart.
    pub async fn count_items(&self, cart_id: i64) -> AppResult<u64> {
        CartItem::find()
            .filter(cart_item::Column::CartId.eq(cart_id))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
