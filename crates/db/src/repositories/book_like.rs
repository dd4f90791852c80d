//! Book like repository.

use std::sync::Arc;

use crate::entities::{book_like, BookLike};
use bookery_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

/// Book like repository for database operations.
#[derive(Clone)]
pub struct BookLikeRepository {
    db: Arc<DatabaseConnection>,
}

impl BookLikeRepository {
    /// Create a new book like repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a like by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<book_like::Model>> {
        BookLike::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a like by user and book.
    pub async fn find_by_user_and_book(
        &self,
        user_id: i64,
        book_id: i64,
    ) -> AppResult<Option<book_like::Model>> {
        BookLike::find()
            .filter(book_like::Column::UserId.eq(user_id))
            .filter(book_like::Column::BookId.eq(book_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Check if a user has liked a book.
    pub async fn has_liked(&self, user_id: i64, book_id: i64) -> AppResult<bool> {
        Ok(self.find_by_user_and_book(user_id, book_id).await?.is_some())
    }

    /// Create a new like.
    pub async fn create(&self, model: book_like::ActiveModel) -> AppResult<book_like::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Remove a user's like from a book.
    pub async fn delete_by_user_and_book(&self, user_id: i64, book_id: i64) -> AppResult<()> {
        BookLike::delete_many()
            .filter(book_like::Column::UserId.eq(user_id))
            .filter(book_like::Column::BookId.eq(book_id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Get likes on a book.
    pub async fn find_by_book(&self, book_id: i64) -> AppResult<Vec<book_like::Model>> {
        BookLike::find()
            .filter(book_like::Column::BookId.eq(book_id))
            .order_by_desc(book_like::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count likes on a book.
    pub async fn count_by_book(&self, book_id: i64) -> AppResult<u64> {
        BookLike::find()
            .filter(book_like::Column::BookId.eq(book_id))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count likes given by a user.
    pub async fn count_by_user(&self, user_id: i64) -> AppResult<u64> {
        BookLike::find()
            .filter(book_like::Column::UserId.eq(user_id))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn create_test_like(id: i64, user_id: i64, book_id: i64) -> book_like::Model {
        book_like::Model {
            id,
            book_id,
            user_id,
        }
    }

    #[tokio::test]
    async fn test_has_liked_true() {
        let like = create_test_like(1, 10, 5);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[like.clone()]])
                .into_connection(),
        );

        let repo = BookLikeRepository::new(db);
        let result = repo.has_liked(10, 5).await.unwrap();

        assert!(result);
    }

    #[tokio::test]
    async fn test_has_liked_false() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<book_like::Model>::new()])
                .into_connection(),
        );

        let repo = BookLikeRepository::new(db);
        let result = repo.has_liked(10, 6).await.unwrap();

        assert!(!result);
    }

    #[tokio::test]
    async fn test_find_by_book() {
        let likes = vec![create_test_like(2, 11, 5), create_test_like(1, 10, 5)];

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([likes.clone()])
                .into_connection(),
        );

        let repo = BookLikeRepository::new(db);
        let result = repo.find_by_book(5).await.unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_by_user_and_book() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        let repo = BookLikeRepository::new(db);
        let result = repo.delete_by_user_and_book(10, 5).await;

        assert!(result.is_ok());
    }
}
