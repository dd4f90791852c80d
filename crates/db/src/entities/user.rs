//! User entity (authentication account).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(unique)]
    pub username: String,

    /// Password hash (Argon2)
    pub password_hash: String,

    /// Inactive accounts cannot sign in
    #[sea_orm(default_value = true)]
    pub is_active: bool,

    /// Staff accounts can manage the catalog
    #[sea_orm(default_value = false)]
    pub is_staff: bool,

    #[sea_orm(nullable)]
    pub last_login: Option<DateTimeWithTimeZone>,

    pub joined_on: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::user_profile::Entity")]
    Profile,

    #[sea_orm(has_many = "super::book::Entity")]
    Books,

    #[sea_orm(has_many = "super::cart::Entity")]
    Carts,

    #[sea_orm(has_many = "super::order::Entity")]
    Orders,

    #[sea_orm(has_many = "super::notification::Entity")]
    Notifications,
}

impl Related<super::user_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Books.def()
    }
}

impl Related<super::cart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Carts.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notifications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
