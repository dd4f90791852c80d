//! Follow repository.

use std::sync::Arc;

use crate::entities::{follow, Follow};
use bookery_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Follow repository for database operations.
#[derive(Clone)]
pub struct FollowRepository {
    db: Arc<DatabaseConnection>,
}

impl FollowRepository {
    /// Create a new follow repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a follow relationship by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<follow::Model>> {
        Follow::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a follow relationship by follower and followed user.
    pub async fn find_by_pair(
        &self,
        user_id: i64,
        followed_user_id: i64,
    ) -> AppResult<Option<follow::Model>> {
        Follow::find()
            .filter(follow::Column::UserId.eq(user_id))
            .filter(follow::Column::FollowedUserId.eq(followed_user_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Check if a user is following another user.
    pub async fn is_following(&self, user_id: i64, followed_user_id: i64) -> AppResult<bool> {
        Ok(self.find_by_pair(user_id, followed_user_id).await?.is_some())
    }

    /// Create a new follow relationship.
    pub async fn create(&self, model: follow::ActiveModel) -> AppResult<follow::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a follow relationship by pair.
    pub async fn delete_by_pair(&self, user_id: i64, followed_user_id: i64) -> AppResult<()> {
        let follow = self.find_by_pair(user_id, followed_user_id).await?;
        if let Some(f) = follow {
            f.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }

    /// Get users that a user is following (paginated).
    pub async fn find_following(
        &self,
        user_id: i64,
        limit: u64,
        until_id: Option<i64>,
    ) -> AppResult<Vec<follow::Model>> {
        let mut query = Follow::find()
            .filter(follow::Column::UserId.eq(user_id))
            .order_by_desc(follow::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(follow::Column::Id.lt(id));
        }

        query
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get users that are following a user (paginated).
    pub async fn find_followers(
        &self,
        followed_user_id: i64,
        limit: u64,
        until_id: Option<i64>,
    ) -> AppResult<Vec<follow::Model>> {
        let mut query = Follow::find()
            .filter(follow::Column::FollowedUserId.eq(followed_user_id))
            .order_by_desc(follow::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(follow::Column::Id.lt(id));
        }

        query
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count followers of a user.
    pub async fn count_followers(&self, followed_user_id: i64) -> AppResult<u64> {
        Follow::find()
            .filter(follow::Column::FollowedUserId.eq(followed_user_id))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count users a user is following.
    pub async fn count_following(&self, user_id: i64) -> AppResult<u64> {
        Follow::find()
            .filter(follow::Column::UserId.eq(user_id))
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
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_follow(id: i64, user_id: i64, followed_user_id: i64) -> follow::Model {
        follow::Model {
            id,
            followed_on: Utc::now().into(),
            followed_user_id,
            user_id,
        }
    }

    #[tokio::test]
    async fn test_is_following_true() {
        let follow = create_test_follow(1, 10, 20);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[follow.clone()]])
                .into_connection(),
        );

        let repo = FollowRepository::new(db);
        let result = repo.is_following(10, 20).await.unwrap();

        assert!(result);
    }

    #[tokio::test]
    async fn test_is_following_false() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<follow::Model>::new()])
                .into_connection(),
        );

        let repo = FollowRepository::new(db);
        let result = repo.is_following(10, 21).await.unwrap();

        assert!(!result);
    }

    #[tokio::test]
    async fn test_find_followers() {
        let follows = vec![create_test_follow(2, 11, 20), create_test_follow(1, 10, 20)];

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([follows.clone()])
                .into_connection(),
        );

        let repo = FollowRepository::new(db);
        let result = repo.find_followers(20, 10, None).await.unwrap();

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|f| f.followed_user_id == 20));
    }

    #[tokio::test]
    async fn test_find_following_empty() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<follow::Model>::new()])
                .into_connection(),
        );

        let repo = FollowRepository::new(db);
        let result = repo.find_following(10, 10, None).await.unwrap();

        assert!(result.is_empty());
    }
}
