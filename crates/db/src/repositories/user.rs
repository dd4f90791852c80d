//! User repository.

use std::sync::Arc;

use crate::entities::{user, User};
use bookery_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

/// User repository for database operations.
#[derive(Clone)]
pub struct UserRepository {
    db: Arc<DatabaseConnection>,
}

impl UserRepository {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<user::Model>> {
        User::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a user by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i64) -> AppResult<user::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::UserNotFound(id.to_string()))
    }

    /// Find a user by username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<user::Model>> {
        User::find()
            .filter(user::Column::Username.eq(username))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new user.
    pub async fn create(&self, model: user::ActiveModel) -> AppResult<user::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a user.
    pub async fn update(&self, model: user::ActiveModel) -> AppResult<user::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Record a successful login.
    pub async fn update_last_login(&self, id: i64) -> AppResult<()> {
        let user = self.get_by_id(id).await?;
        let mut active: user::ActiveModel = user.into();
        active.last_login = Set(Some(chrono::Utc::now().into()));
        active
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Get active users (paginated).
    pub async fn find_active_users(&self, limit: u64, offset: u64) -> AppResult<Vec<user::Model>> {
        User::find()
            .filter(user::Column::IsActive.eq(true))
            .order_by_asc(user::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count all users.
    pub async fn count(&self) -> AppResult<u64> {
        User::find()
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Hash a password for storage.
    pub fn hash_password(password: &str) -> AppResult<String> {
        use argon2::{
            password_hash::{rand_core::OsRng, SaltString},
            Argon2, PasswordHasher,
        };

        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))
    }

    /// Verify credentials (returns the user if the password matches).
    pub async fn verify_password(
        &self,
        username: &str,
        password: &str,
    ) -> AppResult<Option<user::Model>> {
        use argon2::{Argon2, PasswordHash, PasswordVerifier};

        let user = self.find_by_username(username).await?;

        match user {
            Some(u) => {
                let parsed_hash = PasswordHash::new(&u.password_hash)
                    .map_err(|e| AppError::Internal(format!("Invalid password hash: {e}")))?;

                if Argon2::default()
                    .verify_password(password.as_bytes(), &parsed_hash)
                    .is_ok()
                {
                    Ok(Some(u))
                } else {
                    Ok(None)
                }
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_user(id: i64, username: &str, password_hash: &str) -> user::Model {
        user::Model {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            is_active: true,
            is_staff: false,
            last_login: None,
            joined_on: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_found() {
        let user = create_test_user(1, "alice", "hash");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[user.clone()]])
                .into_connection(),
        );

        let repo = UserRepository::new(db);
        let result = repo.find_by_id(1).await.unwrap();

        assert!(result.is_some());
        assert_eq!(result.unwrap().username, "alice");
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<user::Model>::new()])
                .into_connection(),
        );

        let repo = UserRepository::new(db);
        let result = repo.find_by_id(42).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_not_found_is_error() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<user::Model>::new()])
                .into_connection(),
        );

        let repo = UserRepository::new(db);
        let result = repo.get_by_id(42).await;

        assert!(matches!(result, Err(AppError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_verify_password_accepts_correct_password() {
        let hash = UserRepository::hash_password("correct horse").unwrap();
        let user = create_test_user(1, "alice", &hash);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[user.clone()]])
                .into_connection(),
        );

        let repo = UserRepository::new(db);
        let result = repo.verify_password("alice", "correct horse").await.unwrap();

        assert!(result.is_some());
    }

    #[tokio::test]
    async fn test_verify_password_rejects_wrong_password() {
        let hash = UserRepository::hash_password("correct horse").unwrap();
        let user = create_test_user(1, "alice", &hash);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[user.clone()]])
                .into_connection(),
        );

        let repo = UserRepository::new(db);
        let result = repo.verify_password("alice", "wrong").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_verify_password_unknown_user() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<user::Model>::new()])
                .into_connection(),
        );

        let repo = UserRepository::new(db);
        let result = repo.verify_password("nobody", "anything").await.unwrap();

        assert!(result.is_none());
    }
}
