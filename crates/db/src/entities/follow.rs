//! Follow entity (follow relationships between users).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "follow")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub followed_on: DateTimeWithTimeZone,

    /// The user being followed
    pub followed_user_id: i64,

    /// The user who is following
    pub user_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::FollowedUserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    FollowedUser,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Follower,
}

impl ActiveModelBehavior for ActiveModel {}
