//! Book repository.

use std::sync::Arc;

use crate::entities::{book, Book};
use bookery_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Book repository for database operations.
#[derive(Clone)]
pub struct BookRepository {
    db: Arc<DatabaseConnection>,
}

impl BookRepository {
    /// Create a new book repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a book by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<book::Model>> {
        Book::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a book by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i64) -> AppResult<book::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::BookNotFound(id.to_string()))
    }

    /// Create a new book listing.
    pub async fn create(&self, model: book::ActiveModel) -> AppResult<book::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a book listing.
    pub async fn update(&self, model: book::ActiveModel) -> AppResult<book::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a book listing.
    ///
    /// Cart items, order items, comments, likes, and reviews referencing
    /// the book are removed by the cascade.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        Book::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Get recently posted books (paginated).
    pub async fn find_recent(&self, limit: u64, until_id: Option<i64>) -> AppResult<Vec<book::Model>> {
        let mut query = Book::find().order_by_desc(book::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(book::Column::Id.lt(id));
        }

        query
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get books in a genre (paginated).
    pub async fn find_by_genre(
        &self,
        genre: &str,
        limit: u64,
        until_id: Option<i64>,
    ) -> AppResult<Vec<book::Model>> {
        let mut query = Book::find()
            .filter(book::Column::Genre.eq(genre))
            .order_by_desc(book::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(book::Column::Id.lt(id));
        }

        query
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get books listed by a profile.
    pub async fn find_by_owner(&self, owner_id: i64) -> AppResult<Vec<book::Model>> {
        Book::find()
            .filter(book::Column::OwnerId.eq(owner_id))
            .order_by_desc(book::Column::PostedOn)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Search books by title substring.
    pub async fn search_by_title(&self, query: &str, limit: u64) -> AppResult<Vec<book::Model>> {
        Book::find()
            .filter(book::Column::Title.contains(query))
            .order_by_desc(book::Column::Id)
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count all books.
    pub async fn count(&self) -> AppResult<u64> {
        Book::find()
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::prelude::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_book(id: i64, title: &str, genre: &str) -> book::Model {
        book::Model {
            id,
            title: title.to_string(),
            author: "Ursula K. Le Guin".to_string(),
            genre: genre.to_string(),
            description: "A classic.".to_string(),
            posted_on: Utc::now().into(),
            book_cover: "covers/dispossessed.jpg".to_string(),
            price: Decimal::new(1999, 2),
            owner_id: 1,
            posted_by_id: 1,
        }
    }

    #[tokio::test]
    async fn test_find_by_id_found() {
        let book = create_test_book(1, "The Dispossessed", "sci-fi");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[book.clone()]])
                .into_connection(),
        );

        let repo = BookRepository::new(db);
        let result = repo.find_by_id(1).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.title, "The Dispossessed");
        assert_eq!(found.price, Decimal::new(1999, 2));
    }

    #[tokio::test]
    async fn test_get_by_id_not_found_is_error() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<book::Model>::new()])
                .into_connection(),
        );

        let repo = BookRepository::new(db);
        let result = repo.get_by_id(404).await;

        assert!(matches!(result, Err(AppError::BookNotFound(_))));
    }

    #[tokio::test]
    async fn test_find_by_genre() {
        let books = vec![
            create_test_book(2, "The Left Hand of Darkness", "sci-fi"),
            create_test_book(1, "The Dispossessed", "sci-fi"),
        ];

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([books.clone()])
                .into_connection(),
        );

        let repo = BookRepository::new(db);
        let result = repo.find_by_genre("sci-fi", 10, None).await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, 2);
    }

    #[tokio::test]
    async fn test_find_by_owner_empty() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<book::Model>::new()])
                .into_connection(),
        );

        let repo = BookRepository::new(db);
        let result = repo.find_by_owner(7).await.unwrap();

        assert!(result.is_empty());
    }
}
