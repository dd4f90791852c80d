//! User profile repository.

use std::sync::Arc;

use crate::entities::{user_profile, UserProfile};
use bookery_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

/// User profile repository for database operations.
#[derive(Clone)]
pub struct UserProfileRepository {
    db: Arc<DatabaseConnection>,
}

impl UserProfileRepository {
    /// Create a new user profile repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a profile by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<user_profile::Model>> {
        UserProfile::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a profile by its owning user.
    pub async fn find_by_user_id(&self, user_id: i64) -> AppResult<Option<user_profile::Model>> {
        UserProfile::find()
            .filter(user_profile::Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a profile by its owning user, returning an error if not found.
    pub async fn get_by_user_id(&self, user_id: i64) -> AppResult<user_profile::Model> {
        self.find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile for user {user_id} not found")))
    }

    /// Create a new profile.
    pub async fn create(&self, model: user_profile::ActiveModel) -> AppResult<user_profile::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a profile.
    pub async fn update(&self, model: user_profile::ActiveModel) -> AppResult<user_profile::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Set or clear the profile picture path.
    pub async fn update_profile_picture(
        &self,
        user_id: i64,
        path: Option<String>,
    ) -> AppResult<user_profile::Model> {
        let profile = self.get_by_user_id(user_id).await?;
        let mut active: user_profile::ActiveModel = profile.into();
        active.profile_picture = Set(path);
        active
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
