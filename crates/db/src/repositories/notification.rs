//! Notification repository.

use std::sync::Arc;

use crate::entities::{notification, Notification};
use bookery_common::{AppError, AppResult};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

/// Notification repository for database operations.
#[derive(Clone)]
pub struct NotificationRepository {
    db: Arc<DatabaseConnection>,
}

impl NotificationRepository {
    /// Create a new notification repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a notification by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<notification::Model>> {
        Notification::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new notification.
    pub async fn create(&self, model: notification::ActiveModel) -> AppResult<notification::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a user's notifications (paginated).
    pub async fn find_by_user(
        &self,
        user_id: i64,
        limit: u64,
        until_id: Option<i64>,
    ) -> AppResult<Vec<notification::Model>> {
        let mut query = Notification::find()
            .filter(notification::Column::UserId.eq(user_id))
            .order_by_desc(notification::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(notification::Column::Id.lt(id));
        }

        query
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a user's unread notifications.
    pub async fn find_unread(&self, user_id: i64) -> AppResult<Vec<notification::Model>> {
        Notification::find()
            .filter(notification::Column::UserId.eq(user_id))
            .filter(notification::Column::IsRead.eq(false))
            .order_by_desc(notification::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count a user's unread notifications.
    pub async fn count_unread(&self, user_id: i64) -> AppResult<u64> {
        Notification::find()
            .filter(notification::Column::UserId.eq(user_id))
            .filter(notification::Column::IsRead.eq(false))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Mark a notification as read.
    pub async fn mark_as_read(&self, id: i64) -> AppResult<()> {
        let notification = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notification {id} not found")))?;

        if notification.is_read {
            return Ok(());
        }

        let mut active: notification::ActiveModel = notification.into();
        active.is_read = Set(true);
        active
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Mark all of a user's notifications as read. Returns how many changed.
    pub async fn mark_all_as_read(&self, user_id: i64) -> AppResult<u64> {
        let result = Notification::update_many()
            .col_expr(notification::Column::IsRead, Expr::value(true))
            .filter(notification::Column::UserId.eq(user_id))
            .filter(notification::Column::IsRead.eq(false))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }

    /// Delete a notification.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        Notification::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn create_test_notification(id: i64, user_id: i64, is_read: bool) -> notification::Model {
        notification::Model {
            id,
            message: "alice started following you".to_string(),
            is_read,
            created_on: Utc::now().into(),
            user_id,
        }
    }

    #[tokio::test]
    async fn test_find_unread() {
        let notifications = vec![
            create_test_notification(2, 1, false),
            create_test_notification(1, 1, false),
        ];

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([notifications.clone()])
                .into_connection(),
        );

        let repo = NotificationRepository::new(db);
        let result = repo.find_unread(1).await.unwrap();

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|n| !n.is_read));
    }

    #[tokio::test]
    async fn test_mark_as_read_already_read_is_noop() {
        let notification = create_test_notification(1, 1, true);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[notification.clone()]])
                .into_connection(),
        );

        let repo = NotificationRepository::new(db);
        let result = repo.mark_as_read(1).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_mark_as_read_missing_is_error() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<notification::Model>::new()])
                .into_connection(),
        );

        let repo = NotificationRepository::new(db);
        let result = repo.mark_as_read(99).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_mark_all_as_read_reports_rows() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 3,
                }])
                .into_connection(),
        );

        let repo = NotificationRepository::new(db);
        let result = repo.mark_all_as_read(1).await.unwrap();

        assert_eq!(result, 3);
    }
}
