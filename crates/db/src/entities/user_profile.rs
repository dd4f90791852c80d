//! User profile entity (display data attached 1:1 to a user).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Owning user (1:1 relationship)
    #[sea_orm(unique)]
    pub user_id: i64,

    #[sea_orm(nullable)]
    pub email: Option<String>,

    #[sea_orm(nullable)]
    pub first_name: Option<String>,

    #[sea_orm(nullable)]
    pub last_name: Option<String>,

    /// Storage path of the uploaded profile picture
    #[sea_orm(nullable)]
    pub profile_picture: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    /// Books listed for sale by this profile
    #[sea_orm(has_many = "super::book::Entity")]
    Books,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Books.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
