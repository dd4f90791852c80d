//! Comment repository.

use std::sync::Arc;

use crate::entities::{comment, Comment};
use bookery_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Comment repository for database operations.
#[derive(Clone)]
pub struct CommentRepository {
    db: Arc<DatabaseConnection>,
}

impl CommentRepository {
    /// Create a new comment repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a comment by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<comment::Model>> {
        Comment::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new comment.
    pub async fn create(&self, model: comment::ActiveModel) -> AppResult<comment::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a comment.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        Comment::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Get comments on a book (paginated).
    pub async fn find_by_book(
        &self,
        book_id: i64,
        limit: u64,
        until_id: Option<i64>,
    ) -> AppResult<Vec<comment::Model>> {
        let mut query = Comment::find()
            .filter(comment::Column::BookId.eq(book_id))
            .order_by_desc(comment::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(comment::Column::Id.lt(id));
        }

        query
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get comments written by a user.
    pub async fn find_by_commenter(&self, commenter_id: i64) -> AppResult<Vec<comment::Model>> {
        Comment::find()
            .filter(comment::Column::CommenterId.eq(commenter_id))
            .order_by_desc(comment::Column::CommentedOn)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count comments on a book.
    pub async fn count_by_book(&self, book_id: i64) -> AppResult<u64> {
        Comment::find()
            .filter(comment::Column::BookId.eq(book_id))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
