//! Review repository.

use std::sync::Arc;

use crate::entities::{review, Review};
use bookery_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Review repository for database operations.
#[derive(Clone)]
pub struct ReviewRepository {
    db: Arc<DatabaseConnection>,
}

impl ReviewRepository {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a review by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<review::Model>> {
        Review::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a review by book and reviewer.
    pub async fn find_by_pair(
        &self,
        book_id: i64,
        reviewer_id: i64,
    ) -> AppResult<Option<review::Model>> {
        Review::find()
            .filter(review::Column::BookId.eq(book_id))
            .filter(review::Column::ReviewerId.eq(reviewer_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new review.
    pub async fn create(&self, model: review::ActiveModel) -> AppResult<review::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a review.
    pub async fn update(&self, model: review::ActiveModel) -> AppResult<review::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a review.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        Review::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Get reviews of a book (paginated).
    pub async fn find_by_book(
        &self,
        book_id: i64,
        limit: u64,
        until_id: Option<i64>,
    ) -> AppResult<Vec<review::Model>> {
        let mut query = Review::find()
            .filter(review::Column::BookId.eq(book_id))
            .order_by_desc(review::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(review::Column::Id.lt(id));
        }

        query
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get reviews written by a user.
    pub async fn find_by_reviewer(&self, reviewer_id: i64) -> AppResult<Vec<review::Model>> {
        Review::find()
            .filter(review::Column::ReviewerId.eq(reviewer_id))
            .order_by_desc(review::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count reviews of a book.
    pub async fn count_by_book(&self, book_id: i64) -> AppResult<u64> {
        Review::find()
            .filter(review::Column::BookId.eq(book_id))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
