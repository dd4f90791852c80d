//! Order entity (a completed checkout).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub ordered_on: DateTimeWithTimeZone,

    /// Total charged at checkout
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total: Decimal,

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

    #[sea_orm(has_many = "super::order_item::Entity")]
    Items,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

/// Order <-> Book many-to-many, mediated by `order_item`.
impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        super::order_item::Relation::Book.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::order_item::Relation::Order.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
