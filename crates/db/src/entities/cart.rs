//! Cart entity (a user's open shopping cart).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cart")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub user_id: i64,
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

    #[sea_orm(has_many = "super::cart_item::Entity")]
    Items,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::cart_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

/// Cart <-> Book many-to-many, mediated by `cart_item`.
impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        super::cart_item::Relation::Book.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::cart_item::Relation::Cart.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
